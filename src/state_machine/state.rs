//! State representation

use serde::{Deserialize, Serialize};

/// A state identifier: the bit index within one state-machine tag's
/// source-state array. Only meaningful paired with its owning tag.
pub type StateId = u32;

/// A state in the state machine (represents one state bit)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub id: StateId,
    pub name: String,
}

impl State {
    /// Create a state with the synthetic fallback name
    pub fn new(id: StateId) -> Self {
        Self {
            id,
            name: fallback_name(id),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Whether this state still carries the synthetic fallback name
    pub fn has_fallback_name(&self) -> bool {
        self.name == fallback_name(self.id)
    }
}

/// The synthetic label used when no metadata resolves for a state
pub fn fallback_name(id: StateId) -> String {
    format!("State {}", id)
}
