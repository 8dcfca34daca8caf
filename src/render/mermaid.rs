//! Mermaid diagram emission
//!
//! Output is deterministic: node lines sorted ascending by identifier,
//! edge lines sorted by (source, target). Repeated runs over the same
//! graph produce byte-identical text.

use super::DiagramFlavor;
use crate::state_machine::{State, StateGraph};

/// Options controlling diagram emission
#[derive(Debug, Clone)]
pub struct DiagramOptions {
    pub flavor: DiagramFlavor,

    /// Layout direction (TB, LR, ...)
    pub direction: String,

    /// Maximum label length in characters; longer labels are truncated
    pub max_label_len: usize,

    /// Diagram title, shown in the Mermaid front matter
    pub title: String,
}

/// Render the graph as Mermaid source text
pub fn render(graph: &StateGraph, options: &DiagramOptions) -> String {
    match options.flavor {
        DiagramFlavor::Flowchart => render_flowchart(graph, options),
        DiagramFlavor::StateDiagram => render_state_diagram(graph, options),
    }
}

fn render_flowchart(graph: &StateGraph, options: &DiagramOptions) -> String {
    let mut lines = front_matter(&options.title, "elk");
    lines.push(format!("flowchart {}", options.direction));
    lines.push(String::new());

    for state in graph.states() {
        lines.push(format!(
            "    S{}[{}]",
            state.id,
            node_label(state, options.max_label_len)
        ));
    }

    lines.push(String::new());

    for from in graph.state_ids() {
        for to in graph.targets_of(from) {
            // Transitions into a dead-end state get the emphasized arrow
            let arrow = if graph.is_terminal(to) { "==>" } else { "-->" };
            lines.push(format!("    S{} {} S{}", from, arrow, to));
        }
    }

    lines.join("\n")
}

fn render_state_diagram(graph: &StateGraph, options: &DiagramOptions) -> String {
    let mut lines = front_matter(&options.title, "dagre");
    lines.push("stateDiagram-v2".to_string());
    lines.push(format!("    direction {}", options.direction));
    lines.push(String::new());

    for state in graph.states() {
        lines.push(format!(
            "    S{} : {}",
            state.id,
            node_label(state, options.max_label_len)
        ));
    }

    lines.push(String::new());

    for from in graph.state_ids() {
        for to in graph.targets_of(from) {
            lines.push(format!("    S{} --> S{}", from, to));
        }
    }

    lines.join("\n")
}

fn front_matter(title: &str, layout: &str) -> Vec<String> {
    vec![
        "---".to_string(),
        format!("title: {}", sanitize_label(title, usize::MAX)),
        "config:".to_string(),
        format!("  layout: {}", layout),
        "---".to_string(),
        String::new(),
    ]
}

/// Label text for a node: the synthetic `State {id}` when no metadata
/// resolved, `State {id}: {name}` otherwise
fn node_label(state: &State, max_len: usize) -> String {
    if state.has_fallback_name() {
        state.name.clone()
    } else {
        format!(
            "State {}: {}",
            state.id,
            sanitize_label(&state.name, max_len)
        )
    }
}

/// Make a name safe for Mermaid label positions: newlines become " - ",
/// characters significant to the diagram grammar are substituted, and the
/// result is truncated to `max_len` characters.
fn sanitize_label(name: &str, max_len: usize) -> String {
    name.replace('\n', " - ")
        .chars()
        .map(|c| match c {
            '[' | ']' | '(' | ')' | '{' | '}' => '~',
            '"' => '\'',
            other => other,
        })
        .take(max_len)
        .collect()
}

/// Wrap Mermaid source in the output markdown document
pub fn wrap_markdown(mermaid: &str) -> String {
    format!("# State Logic Diagram\n\n```mermaid\n{}\n```\n", mermaid)
}
