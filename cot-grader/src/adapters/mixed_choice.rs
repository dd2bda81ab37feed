//! Free-text reasoning tasks with optional structured choices (BBH style)

use crate::analysis::{compare_choice, fold, Verdict};
use crate::error::GradeError;
use crate::items::{BenchmarkFamily, ItemList, QuestionRecord};

use super::traits::AnswerAdapter;

const PROMPT_PREFIX: &str = "Return your final response within \\boxed{}. If options are provided, please select the correct one. ";

/// Grades free-text answers, switching to choice grading for records whose
/// metadata carries a `structured` block.
#[derive(Debug, Clone)]
pub struct MixedChoiceAdapter {
    items: ItemList,
}

impl MixedChoiceAdapter {
    pub fn new(items: ItemList) -> Self {
        Self { items }
    }
}

impl AnswerAdapter for MixedChoiceAdapter {
    fn family(&self) -> BenchmarkFamily {
        BenchmarkFamily::MixedChoice
    }

    fn items(&self) -> &ItemList {
        &self.items
    }

    fn prompt_prefix(&self) -> &'static str {
        PROMPT_PREFIX
    }

    /// Whether item `index` has a structured-choice block
    fn is_multiple_choice(&self, index: usize) -> Result<bool, GradeError> {
        self.items
            .with_record(index, QuestionRecord::structured_choices)
            .map(|choices| choices.is_some())
    }

    fn compare(&self, candidate: &str, reference: &str, index: usize) -> Result<Verdict, GradeError> {
        self.items.with_record(index, |record| match record.structured_choices()? {
            // Letter range follows the item's own option count.
            Some(choices) => compare_choice(candidate, reference, choices.len(), || Ok(choices)),
            None => Ok(Verdict::compare(&fold(candidate), &fold(reference))),
        })
    }
}
