//! Graduate-level science multiple choice (GPQA style)

use crate::analysis::Verdict;
use crate::error::GradeError;
use crate::items::{BenchmarkFamily, ItemList};

use super::letter_choice::compare_four_way;
use super::traits::AnswerAdapter;

const PROMPT_PREFIX: &str = "Given a question, please select the option that best answers it. Return your final response within \\boxed{}. ";

/// Same rule as the letter-choice family; answers may be stored as
/// non-string scalars and are coerced to text.
#[derive(Debug, Clone)]
pub struct ScienceChoiceAdapter {
    items: ItemList,
}

impl ScienceChoiceAdapter {
    pub fn new(items: ItemList) -> Self {
        Self { items }
    }
}

impl AnswerAdapter for ScienceChoiceAdapter {
    fn family(&self) -> BenchmarkFamily {
        BenchmarkFamily::ScienceChoice
    }

    fn items(&self) -> &ItemList {
        &self.items
    }

    fn prompt_prefix(&self) -> &'static str {
        PROMPT_PREFIX
    }

    fn compare(&self, candidate: &str, reference: &str, index: usize) -> Result<Verdict, GradeError> {
        compare_four_way(&self.items, candidate, reference, index)
    }
}
