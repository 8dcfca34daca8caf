//! L5X State Machine Visualizer
//!
//! Extracts state machine logic from RSLogix 5000 L5X exports and renders
//! Mermaid flowchart diagrams.
//!
//! This library provides functionality for:
//! - Loading L5X exports into an in-memory document model
//! - Locating the STATE LOGIC section within a routine's rung listing
//! - Parsing rung instruction text into state transitions
//! - Resolving state names from tag bit descriptions
//! - Assembling a deduplicated transition graph and emitting Mermaid source

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod naming;
pub mod render;
pub mod state_machine;

pub use config::Config;
pub use error::{Error, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging with the given log level
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "l5x-state-viz");
    }
}
