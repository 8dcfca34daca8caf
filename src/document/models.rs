//! Core data models for L5X projects
//!
//! This module defines the data structures representing an RSLogix 5000
//! controller export: controller-scoped tags with their per-operand
//! comments, and programs with their ladder-logic routines and rungs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::Result;

/// A loaded L5X project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Controller name from the export
    pub controller_name: String,

    /// Controller-scoped tags
    pub tags: Vec<Tag>,

    /// Programs with their routines
    pub programs: Vec<Program>,
}

/// A controller-scoped tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name (e.g. "_A28_PH")
    pub name: String,

    /// Declared data type (e.g. "StateLogic")
    pub data_type: String,

    /// Comments keyed by operand, uppercased (e.g. ".ST[0].5")
    pub comments: HashMap<String, String>,
}

/// A program containing ladder-logic routines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub name: String,
    pub routines: Vec<Routine>,
}

/// A ladder-logic (RLL) routine: an ordered rung listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Routine {
    pub name: String,
    pub rungs: Vec<Rung>,
}

/// One rung of ladder logic
///
/// Order within the routine is load-bearing: section boundaries are
/// positional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rung {
    /// Positional number within the routine
    pub number: usize,

    /// Optional rung comment
    pub comment: Option<String>,

    /// Instruction text body
    pub text: String,
}

impl Document {
    /// Load a document from an L5X file on disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        super::loader::load_file(path.as_ref())
    }

    /// Parse a document from L5X source text
    pub fn parse_str(xml: &str) -> Result<Self> {
        super::loader::parse_str(xml)
    }

    /// Look up a controller tag by name
    pub fn tag(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name == name)
    }
}

impl Tag {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            comments: HashMap::new(),
        }
    }

    /// Comment text attached to the given operand, if any.
    ///
    /// RSLogix emits operands in inconsistent case, so the lookup is
    /// case-insensitive.
    pub fn comment(&self, operand: &str) -> Option<&str> {
        self.comments
            .get(&operand.to_ascii_uppercase())
            .map(String::as_str)
    }

    /// Description of one bit of the source-state array (operand `.ST[0].{bit}`)
    pub fn state_bit_description(&self, bit: u32) -> Option<&str> {
        self.comment(&format!(".ST[0].{}", bit))
    }
}

impl Rung {
    pub fn new(number: usize, comment: Option<String>, text: impl Into<String>) -> Self {
        Self {
            number,
            comment,
            text: text.into(),
        }
    }

    /// Whether this rung's comment contains the given marker substring
    /// (case-sensitive, per the section convention)
    pub fn comment_contains(&self, marker: &str) -> bool {
        self.comment.as_deref().is_some_and(|c| c.contains(marker))
    }
}
