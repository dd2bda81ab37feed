//! Verdicts and sentinel candidates

use serde::{Deserialize, Serialize};

/// Candidate text reported by the model-calling side when a call failed
pub const ERROR_SENTINEL: &str = "error";

/// Whether a candidate is one of the reserved non-answers: the error
/// token, the empty string, or no value at all.
pub fn is_sentinel(candidate: Option<&str>) -> bool {
    match candidate {
        None => true,
        Some(c) => c.is_empty() || c == ERROR_SENTINEL,
    }
}

/// Outcome of comparing a candidate answer with a reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub matched: bool,
    /// The two compared forms, rendered as `` `left` <=> `right` ``
    pub diagnostic: String,
}

impl Verdict {
    /// Exact comparison of two already-normalized strings
    pub fn compare(left: &str, right: &str) -> Self {
        Self {
            matched: left == right,
            diagnostic: render(left, right),
        }
    }

    /// A non-match that still records both sides
    pub fn mismatch(left: &str, right: &str) -> Self {
        Self {
            matched: false,
            diagnostic: render(left, right),
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mark = if self.matched { "match" } else { "mismatch" };
        write!(f, "{}: {}", mark, self.diagnostic)
    }
}

fn render(left: &str, right: &str) -> String {
    format!("`{}` <=> `{}`", left, right)
}
