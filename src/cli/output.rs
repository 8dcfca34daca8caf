//! Output formatting module
//!
//! This module handles formatting extraction summaries for the inspect
//! command's output formats.

use crate::Result;
use crate::state_machine::Extraction;
use crate::state_machine::analyzer::AnalysisReport;
use serde_json::json;

/// Output an extraction summary as JSON
pub fn output_json(
    w: &mut impl std::io::Write,
    extraction: &Extraction,
    report: &AnalysisReport,
) -> Result<()> {
    let graph = &extraction.graph;

    let output = json!({
        "program": extraction.program_name,
        "routine": extraction.routine_name,
        "marker_index": extraction.marker_index,
        "tag": graph.tag_name,
        "summary": graph.stats(),
        "pattern": {
            "name": report.pattern.display_name(),
            "branching_factor": report.branching_factor,
            "has_cycles": report.has_cycles,
        },
        "states": graph.states().map(|s| {
            json!({
                "id": s.id,
                "name": s.name,
                "targets": graph.targets_of(s.id),
            })
        }).collect::<Vec<_>>(),
    });

    serde_json::to_writer_pretty(&mut *w, &output)?;
    writeln!(w)?; // Add trailing newline
    Ok(())
}

/// Output an extraction summary as a text table
pub fn output_table(
    w: &mut impl std::io::Write,
    extraction: &Extraction,
    report: &AnalysisReport,
) -> Result<()> {
    let graph = &extraction.graph;
    let stats = graph.stats();

    writeln!(w, "L5X State Machine - Extraction Results")?;
    writeln!(w, "{}", "=".repeat(72))?;
    writeln!(w)?;

    writeln!(w, "Source:")?;
    writeln!(w, "  Program:        {}", extraction.program_name)?;
    writeln!(w, "  Routine:        {}", extraction.routine_name)?;
    writeln!(w, "  Marker at rung: {}", extraction.marker_index)?;
    writeln!(w, "  State tag:      {}", graph.tag_name)?;
    writeln!(w)?;

    writeln!(w, "Summary:")?;
    writeln!(w, "  States:          {}", stats.total_states)?;
    writeln!(w, "  Transitions:     {}", stats.total_transitions)?;
    writeln!(w, "  Terminal states: {}", stats.terminal_states)?;
    writeln!(
        w,
        "  Pattern:         {} (branching factor {:.2})",
        report.pattern.display_name(),
        report.branching_factor
    )?;
    writeln!(w)?;

    if stats.total_states > 0 {
        writeln!(w, "States:")?;
        writeln!(w, "{:-<72}", "")?;
        writeln!(w, "{:<6} {:<40} {:<24}", "ID", "Name", "Targets")?;
        writeln!(w, "{:-<72}", "")?;

        for state in graph.states() {
            let name = state.name.replace('\n', " - ");
            let name_short = if name.len() > 38 {
                format!("{}...", &name[..35])
            } else {
                name
            };

            let targets = graph
                .targets_of(state.id)
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(", ");

            writeln!(w, "{:<6} {:<40} {:<24}", state.id, name_short, targets)?;
        }
        writeln!(w)?;
    }

    Ok(())
}
