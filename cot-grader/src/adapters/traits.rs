//! Adapter trait shared by every benchmark family

use crate::analysis::{is_sentinel, Verdict};
use crate::error::GradeError;
use crate::items::{BenchmarkFamily, ItemList, QuestionRecord};

/// Output-format instructions sent as the system message for every family.
///
/// Downstream parsers depend on this exact text.
pub const SYSTEM_PROMPT: &str = "Below is a question. Please think through it step by step, and then provide the final answer. If options are provided, please select the correct one.\n## Output format:\nUse “<THOUGHT>...</THOUGHT>” to outline your reasoning process, and enclose the final answer in ‘\\boxed{}‘.\n\n## Example 1:\nQuestion:\nWhat is 2 + 3?\nOutput:\n<THOUGHT>First, I recognize that this is a simple addition problem. Adding 2 and 3 together gives 5.</THOUGHT>\nTherefore, the final answer is \\boxed{5}.\n\n## Example 2:\nQuestion:\nWhat is 2 + 3?\nA. 4\nB. 5\nC. 10\n\nOutput:\n<THOUGHT>First, I recognize that this is a simple addition problem. Adding 2 and 3 together gives 5.</THOUGHT>\nTherefore, the final answer is \\boxed{B}.";

/// Number of options the four-way exam families assume
pub const FOUR_WAY_OPTIONS: usize = 4;

/// Prompt building and answer grading for one benchmark family
pub trait AnswerAdapter: Send + Sync {
    /// Family this adapter grades
    fn family(&self) -> BenchmarkFamily;

    /// Items the adapter was built from
    fn items(&self) -> &ItemList;

    /// Instruction text placed before the question
    fn prompt_prefix(&self) -> &'static str;

    /// Family-specific comparison of a non-sentinel candidate
    fn compare(&self, candidate: &str, reference: &str, index: usize)
        -> Result<Verdict, GradeError>;

    fn len(&self) -> usize {
        self.items().len()
    }

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// User prompt for item `index`
    fn prompt(&self, index: usize) -> Result<String, GradeError> {
        let question = self
            .items()
            .with_record(index, |r| r.question().map(str::to_string))?;
        Ok(format!("{}{}", self.prompt_prefix(), question))
    }

    fn system_prompt(&self) -> &'static str {
        SYSTEM_PROMPT
    }

    /// Whether item `index` is graded as multiple-choice
    fn is_multiple_choice(&self, index: usize) -> Result<bool, GradeError> {
        self.items().record(index)?;
        Ok(self.family().always_multiple_choice())
    }

    /// Canonical answer of item `index`, as text
    fn reference_answer(&self, index: usize) -> Result<String, GradeError> {
        self.items().with_record(index, QuestionRecord::answer_text)
    }

    /// Grade a candidate answer.
    ///
    /// Sentinel candidates never match and are reported unnormalized. A
    /// wrong answer is `Ok` with `matched == false`; `Err` is reserved for
    /// bad indices and malformed records.
    fn verdict(
        &self,
        candidate: Option<&str>,
        reference: &str,
        index: usize,
    ) -> Result<Verdict, GradeError> {
        let candidate = match candidate {
            Some(c) if !is_sentinel(Some(c)) => c,
            other => {
                tracing::debug!(index, family = %self.family(), "sentinel candidate");
                return Ok(Verdict::mismatch(other.unwrap_or(""), reference));
            }
        };

        let verdict = self.compare(candidate, reference, index)?;
        tracing::debug!(
            index,
            family = %self.family(),
            matched = verdict.matched,
            "{}",
            verdict.diagnostic
        );
        Ok(verdict)
    }
}
