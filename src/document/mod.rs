//! Document module - The in-memory L5X project model and its loader
//!
//! An L5X export is parsed once into an owned, read-only tree; the rest of
//! the pipeline only ever borrows it. Loading failures surface as
//! `Error::DocumentFormat` before any extraction runs.

pub mod loader;
pub mod models;

pub use models::{Document, Program, Routine, Rung, Tag};
