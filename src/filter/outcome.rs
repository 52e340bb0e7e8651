//! Per-document filter outcomes.

use serde::{Deserialize, Serialize};

/// Reason attached to a passing document.
pub const PASS_REASON: &str = "found (polymer, property, value) triple";

/// Reason attached to a document with no qualifying sentence.
pub const FAIL_REASON: &str = "no matching (polymer, property, value) triples";

/// Pass/fail decision for one document, with a human-readable reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOutcome {
    /// Whether the document contains at least one qualifying sentence.
    pub passed: bool,
    /// Why the document passed or failed.
    pub reason: String,
}

impl FilterOutcome {
    /// Outcome for a document with a qualifying sentence.
    pub fn pass() -> Self {
        FilterOutcome {
            passed: true,
            reason: PASS_REASON.to_string(),
        }
    }

    /// Outcome for a document with no qualifying sentence.
    pub fn fail() -> Self {
        FilterOutcome {
            passed: false,
            reason: FAIL_REASON.to_string(),
        }
    }

    /// Outcome for a document whose structured parse failed.
    pub fn parse_error<S: Into<String>>(message: S) -> Self {
        FilterOutcome {
            passed: false,
            reason: format!("parse error: {}", message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_reasons() {
        assert!(FilterOutcome::pass().passed);
        assert_eq!(FilterOutcome::pass().reason, PASS_REASON);

        assert!(!FilterOutcome::fail().passed);
        assert_eq!(FilterOutcome::fail().reason, FAIL_REASON);

        let outcome = FilterOutcome::parse_error("unexpected end of file");
        assert!(!outcome.passed);
        assert_eq!(outcome.reason, "parse error: unexpected end of file");
    }
}
