//! CLI module
//!
//! This module defines the command-line interface using clap and implements
//! the command execution logic.

use crate::render::DiagramFlavor;
use crate::{Config, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;
pub mod output;

/// L5X State Machine Visualizer CLI
#[derive(Parser, Debug)]
#[command(name = "l5x-state-viz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a Mermaid state diagram from an L5X export
    Diagram {
        /// Path to input .L5X file
        input: PathBuf,

        /// Output markdown file (default: <input>_state_diagram.md)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// State tag name (auto-detected when omitted)
        #[arg(short, long)]
        tag: Option<String>,

        /// Diagram flavor (overrides config)
        #[arg(long, value_enum)]
        flavor: Option<DiagramFlavor>,

        /// Diagram title (default: the routine name)
        #[arg(long)]
        title: Option<String>,
    },

    /// Extract the state machine and print a summary without writing a diagram
    Inspect {
        /// Path to input .L5X file
        input: PathBuf,

        /// State tag name (auto-detected when omitted)
        #[arg(short, long)]
        tag: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: SummaryFormat,
    },

    /// List controller tags to help choose an explicit --tag
    Tags {
        /// Path to input .L5X file
        input: PathBuf,
    },
}

/// Summary output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// JSON output
    Json,
    /// Plain text table
    Table,
}

/// Execute the CLI command
pub fn execute(args: Cli, config: Config) -> Result<()> {
    match args.command {
        Commands::Diagram { .. } => commands::diagram::execute(args, config),
        Commands::Inspect { .. } => commands::inspect::execute(args, config),
        Commands::Tags { input } => commands::tags::execute(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "l5x-state-viz",
            "diagram",
            "plant.L5X",
            "--tag",
            "_A28_PH",
            "--flavor",
            "flowchart",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_rejects_unknown_flavor() {
        let cli = Cli::try_parse_from(["l5x-state-viz", "diagram", "plant.L5X", "--flavor", "png"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_inspect_default_format() {
        let cli = Cli::try_parse_from(["l5x-state-viz", "inspect", "plant.L5X"]).unwrap();
        match cli.command {
            Commands::Inspect { format, .. } => assert_eq!(format, SummaryFormat::Table),
            _ => panic!("expected inspect command"),
        }
    }
}
