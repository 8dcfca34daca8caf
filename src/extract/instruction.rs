//! Rung instruction parsing
//!
//! The state-machine idiom encodes transitions in instruction text:
//! a rung whose logic starts with `XIC(<tag>.ST[0].<n>)` tests state `n`,
//! and every `OTL(<tag>.NST[0].<m>)` later in the same rung latches `m` as
//! a next state. Anything else is a no-op or irrelevant logic.
//!
//! Parsing is partial on purpose: a rung that does not match the grammar
//! contributes nothing and never fails the run.

use regex::Regex;
use std::sync::LazyLock;

use crate::state_machine::StateId;

/// Leading test-state instruction; must be first for the rung to qualify
static XIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^XIC\(([^)]+)\)").unwrap());

/// Set-state instructions, matched anywhere in the rung text
static OTL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"OTL\(([^)]+)\)").unwrap());

/// Trailing literal bit index of a dotted tag path
static BIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.(\d+)$").unwrap());

/// The transition content of one state-transition rung
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RungTransition {
    /// Source state, from the leading test-state operand
    pub source: StateId,

    /// Target states, from every set-state operand; may be empty, may
    /// contain duplicates (the graph assembler unions them away)
    pub targets: Vec<StateId>,
}

/// Classification of a rung's instruction text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RungKind {
    /// A state-transition rung with its extracted content
    Transition(RungTransition),

    /// Empty text or a bare `NOP()` rung
    NoOp,

    /// Text that matches no known instruction grammar; skipped silently
    Unrecognized,
}

/// Extract the state number from a tag reference.
///
/// `_A28_PH.ST[0].1` resolves to 1, `_A28_PH.NST[0].14` to 14. Returns
/// `None` when the operand does not end in a literal bit index.
pub fn state_number(operand: &str) -> Option<StateId> {
    BIT_RE
        .captures(operand)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Classify a rung's instruction text.
///
/// The leading instruction decides: a test-state instruction whose operand
/// carries a bit index makes this a transition rung; targets are collected
/// from every set-state instruction in the remaining text.
pub fn classify_rung(text: &str) -> RungKind {
    let logic = text.trim();

    if logic.is_empty() || logic.starts_with("NOP()") {
        return RungKind::NoOp;
    }

    let Some(source) = XIC_RE
        .captures(logic)
        .and_then(|caps| caps.get(1))
        .and_then(|m| state_number(m.as_str()))
    else {
        return RungKind::Unrecognized;
    };

    let targets = OTL_RE
        .captures_iter(logic)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| state_number(m.as_str()))
        .collect();

    RungKind::Transition(RungTransition { source, targets })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_number() {
        assert_eq!(state_number("_A28_PH.ST[0].1"), Some(1));
        assert_eq!(state_number("_A28_PH.NST[0].14"), Some(14));
        assert_eq!(state_number("_A28_PH.ST[0]"), None);
        assert_eq!(state_number("Run_PB"), None);
        assert_eq!(state_number(""), None);
    }

    #[test]
    fn test_classify_transition_rung() {
        let kind = classify_rung("XIC(_A28_PH.ST[0].1)XIC(Start_PB)OTL(_A28_PH.NST[0].5);");
        assert_eq!(
            kind,
            RungKind::Transition(RungTransition {
                source: 1,
                targets: vec![5],
            })
        );
    }

    #[test]
    fn test_classify_multiple_targets() {
        let kind = classify_rung(
            "XIC(_A28_PH.ST[0].5)[XIC(A)OTL(_A28_PH.NST[0].14),XIC(B)OTL(_A28_PH.NST[0].15)];",
        );
        assert_eq!(
            kind,
            RungKind::Transition(RungTransition {
                source: 5,
                targets: vec![14, 15],
            })
        );
    }

    #[test]
    fn test_classify_transition_without_targets() {
        // A known source with no set-state instruction still registers the node
        let kind = classify_rung("XIC(_A28_PH.ST[0].3)OTE(Pump_Run);");
        assert_eq!(
            kind,
            RungKind::Transition(RungTransition {
                source: 3,
                targets: vec![],
            })
        );
    }

    #[test]
    fn test_classify_noop() {
        assert_eq!(classify_rung("NOP();"), RungKind::NoOp);
        assert_eq!(classify_rung(""), RungKind::NoOp);
        assert_eq!(classify_rung("   \n  "), RungKind::NoOp);
    }

    #[test]
    fn test_classify_unrecognized() {
        // XIC not first: does not qualify as a transition rung
        assert_eq!(
            classify_rung("XIO(Stop_PB)XIC(_A28_PH.ST[0].1)OTL(_A28_PH.NST[0].5);"),
            RungKind::Unrecognized
        );
        // Leading XIC whose operand has no trailing bit index
        assert_eq!(
            classify_rung("XIC(Start_PB)OTE(Motor_Run);"),
            RungKind::Unrecognized
        );
        assert_eq!(classify_rung("OTE(Lamp);"), RungKind::Unrecognized);
    }

    #[test]
    fn test_classify_trims_whitespace() {
        let kind = classify_rung("\n  XIC(_A28_PH.ST[0].6)OTL(_A28_PH.NST[0].5);  \n");
        assert_eq!(
            kind,
            RungKind::Transition(RungTransition {
                source: 6,
                targets: vec![5],
            })
        );
    }

    #[test]
    fn test_target_without_bit_index_is_dropped() {
        let kind = classify_rung("XIC(_A28_PH.ST[0].1)OTL(Alarm_Horn)OTL(_A28_PH.NST[0].2);");
        assert_eq!(
            kind,
            RungKind::Transition(RungTransition {
                source: 1,
                targets: vec![2],
            })
        );
    }

    #[test]
    fn test_duplicate_targets_kept_for_assembler() {
        let kind = classify_rung("XIC(T.ST[0].1)OTL(T.NST[0].5)OTL(T.NST[0].5);");
        assert_eq!(
            kind,
            RungKind::Transition(RungTransition {
                source: 1,
                targets: vec![5, 5],
            })
        );
    }
}
