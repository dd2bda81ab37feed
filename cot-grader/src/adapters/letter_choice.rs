//! Four-way exam questions (MMLU style)

use crate::analysis::{compare_choice, Verdict};
use crate::error::GradeError;
use crate::items::{BenchmarkFamily, ItemList};

use super::traits::{AnswerAdapter, FOUR_WAY_OPTIONS};

const PROMPT_PREFIX: &str = "Please select the option that best answers the question. Return your final response within \\boxed{}.\nHere are the Question:\n";

/// Grades letter answers against a top-level `choices_list`.
///
/// Only `a`..`d` are recognized as letter answers, whatever the length of
/// the record's choice list.
#[derive(Debug, Clone)]
pub struct LetterChoiceAdapter {
    items: ItemList,
}

impl LetterChoiceAdapter {
    pub fn new(items: ItemList) -> Self {
        Self { items }
    }
}

/// Four-way choice grading against the record's top-level `choices_list`
pub(crate) fn compare_four_way(
    items: &ItemList,
    candidate: &str,
    reference: &str,
    index: usize,
) -> Result<Verdict, GradeError> {
    items.with_record(index, |record| {
        compare_choice(candidate, reference, FOUR_WAY_OPTIONS, || record.choices_list())
    })
}

impl AnswerAdapter for LetterChoiceAdapter {
    fn family(&self) -> BenchmarkFamily {
        BenchmarkFamily::LetterChoice
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;
    use crate::items::load_items_from_str;

    fn adapter() -> LetterChoiceAdapter {
        let items = load_items_from_str(
            r#"{
                "elementary_mathematics": [
                    {"question": "What is 2 + 3?\nA. 4\nB. 5\nC. 10\nD. 6", "answer": "B",
                     "choices_list": ["4", "five", "10", "6"], "domain": "math"},
                    {"question": "Pick the vowel.", "answer": "A",
                     "choices_list": ["e", "x", "y", "z"]}
                ],
                "broken": [
                    {"question": "No choices here", "answer": "C"}
                ]
            }"#,
        )
        .unwrap();
        LetterChoiceAdapter::new(items)
    }

    #[test]
    fn test_prompt() {
        let prompt = adapter().prompt(0).unwrap();
        assert!(prompt.starts_with("Please select the option that best answers the question."));
        assert!(prompt.contains("Here are the Question:\nWhat is 2 + 3?"));
    }

    #[test]
    fn test_letter_answer_any_case() {
        let a = adapter();
        assert!(a.verdict(Some("B"), "b", 0).unwrap().matched);
        assert!(!a.verdict(Some("b"), "A", 1).unwrap().matched);
        // Letter answers never look at the record.
        assert!(a.verdict(Some("C"), "C", 2).unwrap().matched);
    }

    #[test]
    fn test_full_text_answer() {
        let a = adapter();
        let v = a.verdict(Some("b. five"), "B", 0).unwrap();
        assert!(v.matched);
        assert_eq!(v.diagnostic, "`b. five` <=> `b. five`");

        let v = a.verdict(Some("B. 4"), "B", 0).unwrap();
        assert!(!v.matched);
    }

    #[test]
    fn test_other_option_separators() {
        let a = adapter();
        for candidate in ["B) five", "B: five", "B five"] {
            let v = a.verdict(Some(candidate), "B", 0).unwrap();
            assert!(v.matched, "{}: {}", candidate, v.diagnostic);
        }
        assert!(!a.verdict(Some("B) 4"), "B", 0).unwrap().matched);
    }

    #[test]
    fn test_letter_answer_needs_valid_index() {
        assert_eq!(
            adapter().verdict(Some("B"), "B", 9).unwrap_err(),
            GradeError::IndexOutOfRange { index: 9, len: 3 }
        );
    }

    #[test]
    fn test_fifth_letter_is_not_a_letter_answer() {
        let err = adapter().verdict(Some("E"), "E", 0).unwrap_err();
        assert_eq!(
            err,
            GradeError::record(0, RecordError::ChoiceOutOfRange { letter: 'E', len: 4 })
        );
    }

    #[test]
    fn test_missing_choices_is_structural() {
        let err = adapter().verdict(Some("five"), "C", 2).unwrap_err();
        assert_eq!(
            err,
            GradeError::record(2, RecordError::MissingField("choices_list".to_string()))
        );
    }

    #[test]
    fn test_sentinels() {
        let a = adapter();
        for candidate in [Some("error"), Some(""), None] {
            let v = a.verdict(candidate, "B", 0).unwrap();
            assert!(!v.matched);
        }
        assert_eq!(a.verdict(Some("error"), "B", 0).unwrap().diagnostic, "`error` <=> `B`");
        assert_eq!(a.verdict(None, "B", 0).unwrap().diagnostic, "`` <=> `B`");
    }
}
