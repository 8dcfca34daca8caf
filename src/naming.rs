//! State name resolution and state-tag auto-detection
//!
//! Display names live in the bit-level comments of the state tag's `ST[0]`
//! array. The lookup is injected as a trait so the resolver is testable
//! against synthetic fixtures without a real document.

use crate::config::ExtractionConfig;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::state_machine::{StateId, state::fallback_name};

/// Read-only lookup of bit-level descriptions for a state tag
pub trait BitDescriptions {
    /// Description text attached to the given bit of the tag's
    /// source-state array, if any
    fn bit_description(&self, tag_name: &str, bit: StateId) -> Option<String>;
}

impl BitDescriptions for Document {
    fn bit_description(&self, tag_name: &str, bit: StateId) -> Option<String> {
        self.tag(tag_name)?
            .state_bit_description(bit)
            .map(str::to_string)
    }
}

/// Resolve the display name for a state.
///
/// Convention: the first description line restates "State {n}" and is
/// discarded; the remaining lines, trimmed, are the name. Absent or
/// single-line metadata falls back to the synthetic `State {n}` label.
/// This never fails; missing metadata is an expected case.
pub fn resolve_name(lookup: &impl BitDescriptions, tag_name: &str, id: StateId) -> String {
    match lookup.bit_description(tag_name, id) {
        Some(description) => parse_description(&description, id),
        None => fallback_name(id),
    }
}

fn parse_description(description: &str, id: StateId) -> String {
    let trimmed = description.trim();
    let mut lines = trimmed.lines();
    lines.next();

    let name = lines.collect::<Vec<_>>().join("\n").trim().to_string();
    if name.is_empty() { fallback_name(id) } else { name }
}

/// Auto-detect the state-machine tag for a document.
///
/// A controller tag is a candidate when its data type matches the expected
/// state-machine type or its name carries the phase-tag suffix. Exactly one
/// candidate must remain; zero or several require the caller to pass an
/// explicit tag name.
pub fn detect_state_tag<'a>(doc: &'a Document, config: &ExtractionConfig) -> Result<&'a str> {
    let candidates: Vec<&str> = doc
        .tags
        .iter()
        .filter(|t| {
            t.data_type == config.state_tag_type || t.name.ends_with(&config.state_tag_suffix)
        })
        .map(|t| t.name.as_str())
        .collect();

    match candidates.as_slice() {
        [single] => {
            tracing::info!("Auto-detected state tag: {}", single);
            Ok(single)
        }
        [] => Err(Error::tag_resolution(format!(
            "no controller tag of type {:?} or with name suffix {:?} found; specify the tag name explicitly",
            config.state_tag_type, config.state_tag_suffix
        ))),
        many => Err(Error::tag_resolution(format!(
            "ambiguous candidates: {}; specify the tag name explicitly",
            many.join(", ")
        ))),
    }
}
