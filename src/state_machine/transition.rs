//! Transition representation

use crate::state_machine::StateId;
use serde::{Deserialize, Serialize};

/// A directed transition between two states
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Transition {
    pub from: StateId,
    pub to: StateId,
}

impl Transition {
    pub fn new(from: StateId, to: StateId) -> Self {
        Self { from, to }
    }
}
