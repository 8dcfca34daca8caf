//! CLI command implementations
//!
//! This module contains the implementation for each CLI command.

use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::{Config, Result, cli::Cli};

/// Default output path: `<input stem>_state_diagram.md` next to the input
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}_state_diagram.md", stem))
}

/// Diagram command implementation
pub mod diagram {
    use super::*;
    use crate::cli::Commands;
    use crate::render::{self, DiagramFlavor, DiagramOptions};
    use crate::state_machine::extract_state_machine;

    /// Execute the diagram command
    pub fn execute(args: Cli, config: Config) -> Result<()> {
        let (input, output, tag, flavor, title) = match args.command {
            Commands::Diagram {
                input,
                output,
                tag,
                flavor,
                title,
            } => (input, output, tag, flavor, title),
            _ => unreachable!("diagram::execute called with wrong command"),
        };

        let doc = Document::from_file(&input)?;

        tracing::info!("Extracting state transitions...");
        let extraction = extract_state_machine(&doc, tag.as_deref(), &config.extraction)?;

        let flavor = match flavor {
            Some(flavor) => flavor,
            None => DiagramFlavor::from_config(&config.diagram.flavor)?,
        };
        let options = DiagramOptions {
            flavor,
            direction: config.diagram.direction.clone(),
            max_label_len: config.diagram.max_label_len,
            title: title.unwrap_or_else(|| extraction.routine_name.clone()),
        };

        tracing::info!("Generating Mermaid diagram...");
        let mermaid = render::render(&extraction.graph, &options);

        let output_path = output.unwrap_or_else(|| default_output_path(&input));
        std::fs::write(&output_path, render::wrap_markdown(&mermaid))?;

        let stats = extraction.graph.stats();
        println!("Diagram saved to: {}", output_path.display());
        println!(
            "States found: {:?}",
            extraction.graph.state_ids().collect::<Vec<_>>()
        );
        println!("Total transitions: {}", stats.total_transitions);

        Ok(())
    }
}

/// Inspect command implementation
pub mod inspect {
    use super::*;
    use crate::cli::{Commands, SummaryFormat};
    use crate::state_machine::{analyzer, extract_state_machine};

    /// Execute the inspect command
    pub fn execute(args: Cli, config: Config) -> Result<()> {
        let (input, tag, format) = match args.command {
            Commands::Inspect { input, tag, format } => (input, tag, format),
            _ => unreachable!("inspect::execute called with wrong command"),
        };

        let doc = Document::from_file(&input)?;
        let extraction = extract_state_machine(&doc, tag.as_deref(), &config.extraction)?;
        let report = analyzer::detect_pattern(&extraction.graph);

        match format {
            SummaryFormat::Json => {
                crate::cli::output::output_json(&mut std::io::stdout(), &extraction, &report)?;
            }
            SummaryFormat::Table => {
                crate::cli::output::output_table(&mut std::io::stdout(), &extraction, &report)?;
            }
        }

        Ok(())
    }
}

/// Tags command implementation
pub mod tags {
    use super::*;

    /// Execute the tags command
    pub fn execute(input: PathBuf) -> Result<()> {
        let doc = Document::from_file(&input)?;

        if doc.tags.is_empty() {
            println!("No controller tags found in {}", input.display());
            return Ok(());
        }

        println!("Controller tags in {}:", input.display());
        println!("{:-<60}", "");
        println!("{:<32} {:<20} {:>6}", "Name", "DataType", "Bits");
        println!("{:-<60}", "");
        for tag in &doc.tags {
            println!(
                "{:<32} {:<20} {:>6}",
                tag.name,
                tag.data_type,
                tag.comments.len()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let path = default_output_path(Path::new("/exports/plant.L5X"));
        assert_eq!(path, PathBuf::from("/exports/plant_state_diagram.md"));
    }

    #[test]
    fn test_default_output_path_no_extension() {
        let path = default_output_path(Path::new("plant"));
        assert_eq!(path, PathBuf::from("plant_state_diagram.md"));
    }
}
