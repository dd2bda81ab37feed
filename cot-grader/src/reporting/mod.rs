//! Per-item grading output

pub mod responses;

pub use responses::{load_responses_from_file, load_responses_from_str, ModelResponse};

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::adapters::AnswerAdapter;
use crate::error::GradeError;
use crate::items::BenchmarkFamily;

/// Verdict for one item, ready to be written out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradedItem {
    pub dataset: String,
    pub family: BenchmarkFamily,
    pub index: usize,
    pub reference: String,
    pub candidate: Option<String>,
    pub matched: bool,
    pub diagnostic: String,
    pub graded_at: DateTime<Utc>,
}

impl GradedItem {
    /// Grade one response against the item's stored answer
    pub fn grade(
        adapter: &dyn AnswerAdapter,
        dataset: &str,
        response: &ModelResponse,
    ) -> Result<Self, GradeError> {
        let reference = adapter.reference_answer(response.index)?;
        let verdict = adapter.verdict(response.response.as_deref(), &reference, response.index)?;

        Ok(Self {
            dataset: dataset.to_string(),
            family: adapter.family(),
            index: response.index,
            reference,
            candidate: response.response.clone(),
            matched: verdict.matched,
            diagnostic: verdict.diagnostic,
            graded_at: Utc::now(),
        })
    }
}

/// Grade every response, stopping at the first structural error
pub fn grade_all(
    adapter: &dyn AnswerAdapter,
    dataset: &str,
    responses: &[ModelResponse],
) -> Result<Vec<GradedItem>, GradeError> {
    responses
        .iter()
        .map(|r| GradedItem::grade(adapter, dataset, r))
        .collect()
}

/// Write graded items as JSON Lines
pub fn write_graded_jsonl(items: &[GradedItem], path: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
    for item in items {
        let line = serde_json::to_string(item)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        writeln!(file, "{}", line)?;
    }
    file.flush()
}

/// Print one line per graded item
pub fn print_console_verdicts(items: &[GradedItem]) {
    println!("{:-<60}", "");
    for item in items {
        let mark = if item.matched { "PASS" } else { "FAIL" };
        println!("  [{}] {} #{} {}", mark, item.dataset, item.index, item.diagnostic);
    }
    println!("{:-<60}", "");
}
