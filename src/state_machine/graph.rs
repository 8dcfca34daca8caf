//! State graph assembly

use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use std::collections::BTreeMap;

use crate::extract::RungTransition;
use crate::state_machine::{State, StateId, Transition};

/// A directed graph of state transitions extracted from one routine's
/// state-logic section.
///
/// Nodes represent state bits of a single tag namespace, edges the latched
/// next-state transitions. Edges form a set: recording the same (from, to)
/// pair twice leaves one edge. The identifier index is ordered so that
/// every traversal used for rendering is deterministic regardless of rung
/// encounter order.
#[derive(Debug)]
pub struct StateGraph {
    /// The underlying graph structure
    pub graph: StableGraph<State, Transition>,

    /// Ordered lookup table mapping state identifiers to graph indices
    pub state_index: BTreeMap<StateId, NodeIndex>,

    /// Name of the tag whose bits define this identifier namespace
    pub tag_name: String,
}

impl StateGraph {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            graph: StableGraph::new(),
            state_index: BTreeMap::new(),
            tag_name: tag_name.into(),
        }
    }

    /// Assemble a graph from per-rung contributions.
    ///
    /// Contributions with the same source are merged by set union; a
    /// contribution with no targets still registers its source node.
    pub fn from_contributions(
        contributions: &[RungTransition],
        tag_name: impl Into<String>,
    ) -> Self {
        let mut graph = Self::new(tag_name);
        for contribution in contributions {
            graph.record(contribution);
        }
        graph
    }

    /// Get the node for a state, inserting it if unseen
    pub fn ensure_state(&mut self, id: StateId) -> NodeIndex {
        if let Some(&idx) = self.state_index.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(State::new(id));
        self.state_index.insert(id, idx);
        idx
    }

    /// Record one rung's contribution
    pub fn record(&mut self, contribution: &RungTransition) {
        let from_idx = self.ensure_state(contribution.source);
        for &target in &contribution.targets {
            let to_idx = self.ensure_state(target);
            if !self.graph.contains_edge(from_idx, to_idx) {
                self.graph
                    .add_edge(from_idx, to_idx, Transition::new(contribution.source, target));
            }
        }
    }

    /// Resolve display names for every node through the given lookup
    pub fn apply_names(&mut self, mut resolve: impl FnMut(StateId) -> String) {
        for (&id, &idx) in &self.state_index {
            if let Some(state) = self.graph.node_weight_mut(idx) {
                state.name = resolve(id);
            }
        }
    }

    /// Get a state by its identifier
    pub fn get_state(&self, id: StateId) -> Option<&State> {
        self.state_index
            .get(&id)
            .and_then(|&idx| self.graph.node_weight(idx))
    }

    /// All state identifiers, ascending
    pub fn state_ids(&self) -> impl Iterator<Item = StateId> + '_ {
        self.state_index.keys().copied()
    }

    /// All states, ascending by identifier
    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.state_index
            .values()
            .filter_map(|&idx| self.graph.node_weight(idx))
    }

    /// Outbound target identifiers of a state, ascending
    pub fn targets_of(&self, id: StateId) -> Vec<StateId> {
        let Some(&idx) = self.state_index.get(&id) else {
            return Vec::new();
        };
        let mut targets: Vec<StateId> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .filter_map(|n| self.graph.node_weight(n))
            .map(|s| s.id)
            .collect();
        targets.sort_unstable();
        targets
    }

    /// Whether a state has no outbound transitions
    pub fn is_terminal(&self, id: StateId) -> bool {
        self.targets_of(id).is_empty()
    }

    /// All edges sorted ascending by (from, to)
    pub fn sorted_edges(&self) -> Vec<Transition> {
        let mut edges: Vec<Transition> = self.graph.edge_weights().copied().collect();
        edges.sort_unstable();
        edges
    }

    /// Find all terminal states (no outgoing edges), ascending
    pub fn find_terminal_states(&self) -> Vec<StateId> {
        self.state_ids()
            .filter(|&id| self.is_terminal(id))
            .collect()
    }

    /// Get graph statistics
    pub fn stats(&self) -> GraphStats {
        let source_states = self
            .state_ids()
            .filter(|&id| !self.is_terminal(id))
            .count();
        GraphStats {
            total_states: self.graph.node_count(),
            total_transitions: self.graph.edge_count(),
            source_states,
            terminal_states: self.find_terminal_states().len(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct GraphStats {
    pub total_states: usize,
    pub total_transitions: usize,
    pub source_states: usize,
    pub terminal_states: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contribution(source: StateId, targets: &[StateId]) -> RungTransition {
        RungTransition {
            source,
            targets: targets.to_vec(),
        }
    }

    #[test]
    fn test_empty_graph() {
        let graph = StateGraph::new("_A28_PH");
        assert_eq!(graph.graph.node_count(), 0);
        assert_eq!(graph.graph.edge_count(), 0);
    }

    #[test]
    fn test_two_sources_sharing_one_target() {
        let graph = StateGraph::from_contributions(
            &[contribution(1, &[5]), contribution(6, &[5])],
            "_A28_PH",
        );

        assert_eq!(graph.state_ids().collect::<Vec<_>>(), vec![1, 5, 6]);
        assert_eq!(graph.targets_of(1), vec![5]);
        assert_eq!(graph.targets_of(6), vec![5]);
        assert_eq!(graph.targets_of(5), Vec::<StateId>::new());
    }

    #[test]
    fn test_merge_unions_targets_across_rungs() {
        let graph = StateGraph::from_contributions(
            &[contribution(5, &[14, 15]), contribution(5, &[10, 12])],
            "_A28_PH",
        );

        assert_eq!(graph.targets_of(5), vec![10, 12, 14, 15]);
        assert_eq!(graph.graph.edge_count(), 4);
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let graph = StateGraph::from_contributions(
            &[contribution(1, &[5, 5]), contribution(1, &[5])],
            "_A28_PH",
        );

        assert_eq!(graph.graph.edge_count(), 1);
        assert_eq!(graph.targets_of(1), vec![5]);
    }

    #[test]
    fn test_target_only_state_is_a_node() {
        let graph = StateGraph::from_contributions(&[contribution(1, &[9])], "_A28_PH");

        assert!(graph.get_state(9).is_some());
        assert!(graph.is_terminal(9));
        assert_eq!(graph.find_terminal_states(), vec![9]);
    }

    #[test]
    fn test_source_without_targets_is_a_node() {
        let graph = StateGraph::from_contributions(&[contribution(3, &[])], "_A28_PH");
        assert!(graph.get_state(3).is_some());
        assert_eq!(graph.graph.edge_count(), 0);
    }

    #[test]
    fn test_self_loops_preserved() {
        let graph = StateGraph::from_contributions(&[contribution(2, &[2])], "_A28_PH");
        assert_eq!(graph.targets_of(2), vec![2]);
        assert!(!graph.is_terminal(2));
    }

    #[test]
    fn test_assembly_is_order_independent() {
        let forward = StateGraph::from_contributions(
            &[
                contribution(1, &[5]),
                contribution(5, &[14, 15]),
                contribution(6, &[5]),
            ],
            "_A28_PH",
        );
        let permuted = StateGraph::from_contributions(
            &[
                contribution(6, &[5]),
                contribution(5, &[15, 14]),
                contribution(1, &[5]),
            ],
            "_A28_PH",
        );

        assert_eq!(
            forward.state_ids().collect::<Vec<_>>(),
            permuted.state_ids().collect::<Vec<_>>()
        );
        assert_eq!(forward.sorted_edges(), permuted.sorted_edges());
    }

    #[test]
    fn test_apply_names() {
        let mut graph = StateGraph::from_contributions(&[contribution(1, &[5])], "_A28_PH");
        graph.apply_names(|id| if id == 1 { "Idle".to_string() } else { format!("State {}", id) });

        assert_eq!(graph.get_state(1).unwrap().name, "Idle");
        assert_eq!(graph.get_state(5).unwrap().name, "State 5");
    }

    #[test]
    fn test_graph_stats() {
        let graph = StateGraph::from_contributions(
            &[contribution(1, &[5]), contribution(6, &[5])],
            "_A28_PH",
        );

        let stats = graph.stats();
        assert_eq!(stats.total_states, 3);
        assert_eq!(stats.total_transitions, 2);
        assert_eq!(stats.source_states, 2);
        assert_eq!(stats.terminal_states, 1);
    }
}
