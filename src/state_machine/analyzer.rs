//! State machine pattern analyzer
//!
//! Analyzes the extracted graph to classify the shape of the sequence:
//! a straight-line phase sequence, a branching one, or one with cycles
//! (rework loops, repeated cycles).

use super::StateGraph;
use petgraph::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum MachinePattern {
    /// A -> B -> C -> D
    Linear,

    /// A -> B
    ///   -> C
    Branching,

    /// A -> B -> A
    Cyclic,

    /// Mixed or unrecognized
    Unknown,
}

impl MachinePattern {
    pub fn display_name(&self) -> &'static str {
        match self {
            MachinePattern::Linear => "Linear",
            MachinePattern::Branching => "Branching",
            MachinePattern::Cyclic => "Cyclic",
            MachinePattern::Unknown => "Complex/Unknown",
        }
    }
}

/// Analysis report containing pattern and metrics
#[derive(Debug, Clone, serde::Serialize)]
pub struct AnalysisReport {
    pub pattern: MachinePattern,
    pub branching_factor: f64,
    pub has_cycles: bool,
}

/// Detect the pattern of a state graph
pub fn detect_pattern(graph: &StateGraph) -> AnalysisReport {
    let node_count = graph.graph.node_count();

    if node_count == 0 {
        return AnalysisReport {
            pattern: MachinePattern::Unknown,
            branching_factor: 0.0,
            has_cycles: false,
        };
    }

    let has_cycles = petgraph::algo::is_cyclic_directed(&graph.graph);

    let total_out_degree: usize = graph
        .graph
        .node_indices()
        .map(|idx| graph.graph.edges_directed(idx, Direction::Outgoing).count())
        .sum();

    let branching_factor = total_out_degree as f64 / node_count as f64;

    let pattern = if has_cycles {
        MachinePattern::Cyclic
    } else {
        let max_out = graph
            .graph
            .node_indices()
            .map(|idx| graph.graph.edges_directed(idx, Direction::Outgoing).count())
            .max()
            .unwrap_or(0);

        if max_out <= 1 {
            MachinePattern::Linear
        } else {
            MachinePattern::Branching
        }
    };

    AnalysisReport {
        pattern,
        branching_factor,
        has_cycles,
    }
}
