//! Render module - Mermaid diagram emission

use clap::ValueEnum;

use crate::error::{Error, Result};

pub mod mermaid;

pub use mermaid::{DiagramOptions, render, wrap_markdown};

/// Mermaid diagram flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiagramFlavor {
    /// `flowchart` syntax with bracketed node labels
    Flowchart,
    /// `stateDiagram-v2` syntax
    StateDiagram,
}

impl DiagramFlavor {
    /// Parse the flavor from its configuration spelling
    pub fn from_config(value: &str) -> Result<Self> {
        match value {
            "flowchart" => Ok(Self::Flowchart),
            "state-diagram" => Ok(Self::StateDiagram),
            other => Err(Error::Config(format!(
                "unknown diagram flavor {:?} (expected \"flowchart\" or \"state-diagram\")",
                other
            ))),
        }
    }
}
