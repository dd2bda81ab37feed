//! Model responses collected by an external runner
//!
//! One JSON object per line: `{"index": 3, "response": "... \\boxed{B}"}`.
//! A `null` or missing `response` marks a call that produced nothing.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::items::LoadError;

/// Raw model output for one item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    pub index: usize,
    #[serde(default)]
    pub response: Option<String>,
}

/// Load responses from a JSON Lines file
pub fn load_responses_from_file(path: impl AsRef<Path>) -> Result<Vec<ModelResponse>, LoadError> {
    let content = std::fs::read_to_string(path)?;
    load_responses_from_str(&content)
}

/// Load responses from JSON Lines text. Blank lines are skipped.
pub fn load_responses_from_str(content: &str) -> Result<Vec<ModelResponse>, LoadError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(lineno, line)| {
            serde_json::from_str(line)
                .map_err(|e| LoadError::Parse(format!("line {}: {}", lineno + 1, e)))
        })
        .collect()
}
