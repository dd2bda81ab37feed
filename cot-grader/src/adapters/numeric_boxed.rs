//! Math word problems with boxed numeric answers (GSM8K style)

use crate::analysis::{fold, last_boxed_span, strip_thousands, Verdict};
use crate::error::GradeError;
use crate::items::{BenchmarkFamily, ItemList};

use super::traits::AnswerAdapter;

const PROMPT_PREFIX: &str = "Return your final response within \\boxed{}. ";

/// Grades the last `\boxed{...}` value of a reasoning trace, or the whole
/// trimmed candidate when nothing is boxed.
#[derive(Debug, Clone)]
pub struct NumericBoxedAdapter {
    items: ItemList,
}

impl NumericBoxedAdapter {
    pub fn new(items: ItemList) -> Self {
        Self { items }
    }
}

impl AnswerAdapter for NumericBoxedAdapter {
    fn family(&self) -> BenchmarkFamily {
        BenchmarkFamily::NumericBoxed
    }

    fn items(&self) -> &ItemList {
        &self.items
    }

    fn prompt_prefix(&self) -> &'static str {
        PROMPT_PREFIX
    }

    fn compare(&self, candidate: &str, reference: &str, _index: usize) -> Result<Verdict, GradeError> {
        let answer = last_boxed_span(candidate).unwrap_or(candidate);
        let left = strip_thousands(&fold(answer));
        let right = strip_thousands(&fold(reference));
        Ok(Verdict::compare(&left, &right))
    }
}
