//! L5X document loader
//!
//! Parses an RSLogix 5000 export into the owned [`Document`] model. The
//! borrowed XML tree is dropped as soon as the model is built; downstream
//! stages never touch XML.
//!
//! Element paths handled:
//! `RSLogix5000Content/Controller/Tags/Tag/Comments/Comment[@Operand]` and
//! `.../Programs/Program/Routines/Routine/RLLContent/Rung{Comment,Text}`.

use roxmltree::Node;
use std::path::Path;

use super::models::{Document, Program, Routine, Rung, Tag};
use crate::error::{Error, Result};

/// Load a document from a file on disk
pub fn load_file(path: &Path) -> Result<Document> {
    tracing::info!("Loading L5X file: {:?}", path);
    let contents = std::fs::read_to_string(path)?;
    parse_str(&contents)
}

/// Parse a document from L5X source text
pub fn parse_str(xml: &str) -> Result<Document> {
    let tree = roxmltree::Document::parse(xml)
        .map_err(|e| Error::document_format(format!("XML parse failed: {}", e)))?;

    let root = tree.root_element();
    if !root.has_tag_name("RSLogix5000Content") {
        return Err(Error::document_format(format!(
            "expected RSLogix5000Content root element, found {}",
            root.tag_name().name()
        )));
    }

    let controller = child_element(root, "Controller").ok_or_else(|| {
        Error::document_format("missing Controller element under RSLogix5000Content")
    })?;

    let controller_name = controller
        .attribute("Name")
        .unwrap_or_default()
        .to_string();

    let tags = match child_element(controller, "Tags") {
        Some(tags_elem) => child_elements(tags_elem, "Tag").map(parse_tag).collect(),
        None => Vec::new(),
    };

    let programs = match child_element(controller, "Programs") {
        Some(programs_elem) => child_elements(programs_elem, "Program")
            .map(parse_program)
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    tracing::debug!(
        "Loaded controller {:?}: {} tags, {} programs",
        controller_name,
        tags.len(),
        programs.len()
    );

    Ok(Document {
        controller_name,
        tags,
        programs,
    })
}

fn parse_tag(node: Node) -> Tag {
    let mut tag = Tag::new(
        node.attribute("Name").unwrap_or_default(),
        node.attribute("DataType").unwrap_or_default(),
    );

    if let Some(comments) = child_element(node, "Comments") {
        for comment in child_elements(comments, "Comment") {
            if let (Some(operand), Some(text)) = (comment.attribute("Operand"), element_text(comment))
            {
                tag.comments.insert(operand.to_ascii_uppercase(), text);
            }
        }
    }

    tag
}

fn parse_program(node: Node) -> Result<Program> {
    let name = node.attribute("Name").unwrap_or_default().to_string();

    let routines = match child_element(node, "Routines") {
        Some(routines_elem) => child_elements(routines_elem, "Routine")
            .filter(is_rll_routine)
            .map(parse_routine)
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    Ok(Program { name, routines })
}

fn is_rll_routine(node: &Node) -> bool {
    // Routines without a Type attribute are treated as ladder logic
    node.attribute("Type").is_none_or(|t| t == "RLL")
}

fn parse_routine(node: Node) -> Result<Routine> {
    let name = node.attribute("Name").unwrap_or_default().to_string();

    let rungs = match child_element(node, "RLLContent") {
        Some(rll) => child_elements(rll, "Rung")
            .enumerate()
            .map(|(i, rung)| parse_rung(rung, i))
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    Ok(Routine { name, rungs })
}

fn parse_rung(node: Node, position: usize) -> Result<Rung> {
    let number = match node.attribute("Number") {
        Some(raw) => raw.parse::<usize>().map_err(|_| {
            Error::document_format(format!("rung Number attribute is not an integer: {:?}", raw))
        })?,
        None => position,
    };

    let comment = child_element(node, "Comment").and_then(element_text);
    let text = child_element(node, "Text")
        .and_then(element_text)
        .unwrap_or_default();

    Ok(Rung::new(number, comment, text))
}

// roxmltree helpers

fn child_element<'a>(node: Node<'a, 'a>, name: &str) -> Option<Node<'a, 'a>> {
    node.children()
        .find(|n| n.is_element() && n.has_tag_name(name))
}

fn child_elements<'a>(node: Node<'a, 'a>, name: &'a str) -> impl Iterator<Item = Node<'a, 'a>> {
    node.children()
        .filter(move |n| n.is_element() && n.has_tag_name(name))
}

/// Concatenated text content of an element (CDATA included)
fn element_text(node: Node) -> Option<String> {
    let text: String = node
        .children()
        .filter_map(|n| n.text())
        .collect::<Vec<_>>()
        .concat();
    if text.is_empty() { None } else { Some(text) }
}
