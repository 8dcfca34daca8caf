//! State machine module - Build and analyze state transition graphs

use crate::config::ExtractionConfig;
use crate::document::Document;
use crate::{Result, extract, naming};

pub mod analyzer;
pub mod graph;
pub mod state;
pub mod transition;

// Re-export key types
pub use graph::{GraphStats, StateGraph};
pub use state::{State, StateId};
pub use transition::Transition;

/// The result of one extraction run over a document
#[derive(Debug)]
pub struct Extraction {
    /// Program owning the state routine
    pub program_name: String,

    /// Routine containing the state-logic section; used as diagram title
    pub routine_name: String,

    /// Rung index of the section start marker within the routine
    pub marker_index: usize,

    /// The assembled graph with resolved state names
    pub graph: StateGraph,
}

/// Run the extraction pipeline over a loaded document.
///
/// Locates the state-logic section, scans it for transition contributions,
/// resolves the state tag (auto-detecting when `tag_name` is `None`),
/// assembles the graph, and resolves display names. All fatal conditions
/// (`SectionNotFound`, `TagResolution`) surface here; per-rung anomalies
/// never do.
pub fn extract_state_machine(
    doc: &Document,
    tag_name: Option<&str>,
    config: &ExtractionConfig,
) -> Result<Extraction> {
    let section = extract::locate_section(doc, &config.start_marker)?;

    let tag_name = match tag_name {
        Some(name) => {
            if doc.tag(name).is_none() {
                tracing::warn!(
                    "Tag {:?} not found among controller tags; state names will fall back",
                    name
                );
            }
            name
        }
        None => naming::detect_state_tag(doc, config)?,
    };
    tracing::info!("Using state tag: {}", tag_name);

    let contributions = extract::scan_section(&section.routine.rungs, section.marker_index, config);
    if contributions.is_empty() {
        tracing::warn!("No state transitions found in the section");
    } else {
        tracing::info!("Found {} transition rungs", contributions.len());
    }

    let mut graph = StateGraph::from_contributions(&contributions, tag_name);
    graph.apply_names(|id| naming::resolve_name(doc, tag_name, id));

    let stats = graph.stats();
    tracing::info!(
        "Assembled graph: {} states, {} transitions",
        stats.total_states,
        stats.total_transitions
    );

    Ok(Extraction {
        program_name: section.program_name.to_string(),
        routine_name: section.routine.name.to_string(),
        marker_index: section.marker_index,
        graph,
    })
}
