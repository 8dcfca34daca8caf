//! Extraction module - Locating and parsing the state-logic section
//!
//! Two stages: [`instruction`] parses a single rung's instruction text,
//! [`section`] finds the marked section and drives the scan over it.

pub mod instruction;
pub mod section;

pub use instruction::{RungKind, RungTransition, classify_rung, state_number};
pub use section::{StateSection, locate_section, scan_section};
