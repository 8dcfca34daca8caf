//! State-logic section location and scanning
//!
//! The section locator finds the first rung whose comment contains the
//! start marker, searching every RLL routine of every program in order.
//! The scan then walks rungs from the marker plus the configured skip
//! count, collecting transition contributions until the end marker or the
//! end of the listing.

use crate::config::ExtractionConfig;
use crate::document::{Document, Routine, Rung};
use crate::error::{Error, Result};
use crate::extract::instruction::{RungKind, RungTransition, classify_rung};

/// The located state-logic section within a document
#[derive(Debug, Clone, Copy)]
pub struct StateSection<'a> {
    /// Program owning the routine
    pub program_name: &'a str,

    /// Routine whose rung listing contains the section
    pub routine: &'a Routine,

    /// Index of the marker rung within the routine
    pub marker_index: usize,
}

/// Find the index of the first rung whose comment contains the marker
pub fn find_marker(rungs: &[Rung], marker: &str) -> Option<usize> {
    rungs.iter().position(|r| r.comment_contains(marker))
}

/// Locate the state-logic section anywhere in the document.
///
/// Routines are searched in document order; the first routine containing
/// the marker wins. No match anywhere is a hard stop.
pub fn locate_section<'a>(doc: &'a Document, marker: &str) -> Result<StateSection<'a>> {
    for program in &doc.programs {
        for routine in &program.routines {
            if let Some(marker_index) = find_marker(&routine.rungs, marker) {
                tracing::info!(
                    "Found {:?} in program {:?}, routine {:?} at rung index {}",
                    marker,
                    program.name,
                    routine.name,
                    marker_index
                );
                return Ok(StateSection {
                    program_name: &program.name,
                    routine,
                    marker_index,
                });
            }
        }
    }

    Err(Error::section_not_found(marker))
}

/// Scan the section for transition contributions.
///
/// Rungs before `marker_index + skip_rungs` are never read; a rung whose
/// comment contains the end marker stops the scan. Unrecognized rungs are
/// skipped without failing the run.
pub fn scan_section(
    rungs: &[Rung],
    marker_index: usize,
    config: &ExtractionConfig,
) -> Vec<RungTransition> {
    let start = marker_index.saturating_add(config.skip_rungs);
    let mut contributions = Vec::new();

    for rung in rungs.iter().skip(start) {
        if rung.comment_contains(&config.end_marker) {
            tracing::debug!(
                "End marker {:?} at rung {}, stopping scan",
                config.end_marker,
                rung.number
            );
            break;
        }

        match classify_rung(&rung.text) {
            RungKind::Transition(contribution) => {
                tracing::debug!(
                    "Rung {}: state {} -> {:?}",
                    rung.number,
                    contribution.source,
                    contribution.targets
                );
                contributions.push(contribution);
            }
            RungKind::NoOp => {}
            RungKind::Unrecognized => {
                tracing::debug!("Rung {}: unrecognized instruction text, skipped", rung.number);
            }
        }
    }

    contributions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Program;

    fn rung(number: usize, comment: Option<&str>, text: &str) -> Rung {
        Rung::new(number, comment.map(String::from), text)
    }

    fn section_rungs() -> Vec<Rung> {
        vec![
            rung(0, None, "XIC(Start_PB)OTE(Motor);"),
            rung(1, Some("***** STATE LOGIC *****"), "NOP();"),
            rung(2, None, "OTU(S3_State_Logic);"),
            rung(3, None, "XIC(T.ST[0].1)OTL(T.NST[0].5);"),
            rung(4, None, "NOP();"),
            rung(5, None, "XIC(T.ST[0].6)OTL(T.NST[0].5);"),
            rung(6, Some("***** FAULT HANDLING *****"), "NOP();"),
            rung(7, None, "XIC(T.ST[0].9)OTL(T.NST[0].10);"),
        ]
    }

    #[test]
    fn test_find_marker() {
        let rungs = section_rungs();
        assert_eq!(find_marker(&rungs, "STATE LOGIC"), Some(1));
        assert_eq!(find_marker(&rungs, "NO SUCH MARKER"), None);
    }

    #[test]
    fn test_scan_skips_marker_and_reset_rungs() {
        let rungs = section_rungs();
        let contributions = scan_section(&rungs, 1, &ExtractionConfig::default());

        // Rung 2 is inside the skip window; rung 7 is past the end marker
        assert_eq!(contributions.len(), 2);
        assert_eq!(contributions[0].source, 1);
        assert_eq!(contributions[0].targets, vec![5]);
        assert_eq!(contributions[1].source, 6);
        assert_eq!(contributions[1].targets, vec![5]);
    }

    #[test]
    fn test_scan_stops_at_end_marker() {
        let rungs = section_rungs();
        let contributions = scan_section(&rungs, 1, &ExtractionConfig::default());
        assert!(contributions.iter().all(|c| c.source != 9));
    }

    #[test]
    fn test_scan_runs_to_end_of_listing_without_end_marker() {
        let mut rungs = section_rungs();
        rungs[6].comment = None;
        let contributions = scan_section(&rungs, 1, &ExtractionConfig::default());
        assert_eq!(contributions.len(), 3);
        assert_eq!(contributions[2].source, 9);
    }

    #[test]
    fn test_scan_with_custom_skip_count() {
        let rungs = section_rungs();
        let config = ExtractionConfig {
            skip_rungs: 0,
            ..Default::default()
        };
        // With no skip, the marker rung itself (NOP) and the reset rung
        // (unrecognized) are scanned but contribute nothing
        let contributions = scan_section(&rungs, 1, &config);
        assert_eq!(contributions.len(), 2);
    }

    #[test]
    fn test_scan_skip_window_past_end_is_empty() {
        let rungs = section_rungs();
        let contributions = scan_section(&rungs, 7, &ExtractionConfig::default());
        assert!(contributions.is_empty());
    }

    #[test]
    fn test_locate_section_across_programs() {
        let doc = Document {
            controller_name: "PLC01".to_string(),
            tags: vec![],
            programs: vec![
                Program {
                    name: "First".to_string(),
                    routines: vec![Routine {
                        name: "NoStates".to_string(),
                        rungs: vec![rung(0, None, "NOP();")],
                    }],
                },
                Program {
                    name: "Second".to_string(),
                    routines: vec![Routine {
                        name: "StateRoutine".to_string(),
                        rungs: section_rungs(),
                    }],
                },
            ],
        };

        let section = locate_section(&doc, "STATE LOGIC").unwrap();
        assert_eq!(section.program_name, "Second");
        assert_eq!(section.routine.name, "StateRoutine");
        assert_eq!(section.marker_index, 1);
    }

    #[test]
    fn test_locate_section_not_found() {
        let doc = Document {
            controller_name: "PLC01".to_string(),
            tags: vec![],
            programs: vec![],
        };

        let err = locate_section(&doc, "STATE LOGIC").unwrap_err();
        assert!(err.is_section_not_found());
    }
}
