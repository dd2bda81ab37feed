//! Answer-equivalence grading for chain-of-thought benchmarks
//!
//! This crate grades free-text model answers against the ground truth of
//! several question-answering benchmarks, each with its own comparison
//! policy:
//!
//! - Letter choice: four-way exams where `B` and `B. five` are both accepted
//! - Mixed choice: free-text answers, with per-item structured choices
//! - Numeric boxed: the last `\boxed{...}` value of a reasoning trace
//! - Science choice: letter choice with loosely typed answers
//!
//! Calling the model is left to the caller; adapters only build prompts and
//! judge what comes back.
//!
//! # Example
//!
//! ```no_run
//! use cot_grader::{
//!     adapters::create_adapter,
//!     items::{load_items_from_file, BenchmarkFamily},
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let items = load_items_from_file("data/gsm8k.json")?;
//!     let adapter = create_adapter(BenchmarkFamily::NumericBoxed, items);
//!
//!     let _prompt = adapter.prompt(0)?;
//!     // ... send `adapter.system_prompt()` and the prompt to a model
//!     let response = "<THOUGHT>...</THOUGHT> Therefore, the final answer is \\boxed{18}.";
//!
//!     let reference = adapter.reference_answer(0)?;
//!     let verdict = adapter.verdict(Some(response), &reference, 0)?;
//!     println!("{}", verdict);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod analysis;
pub mod config;
pub mod error;
pub mod items;
pub mod reporting;

pub use config::Config;
pub use error::{GradeError, RecordError};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::adapters::{create_adapter, Adapter, AnswerAdapter, SYSTEM_PROMPT};
    pub use crate::analysis::{Verdict, ERROR_SENTINEL};
    pub use crate::config::{Config, DatasetConfig};
    pub use crate::error::{GradeError, RecordError};
    pub use crate::items::{
        load_items_from_file, load_items_from_str, BenchmarkFamily, ItemList, LoadError,
        QuestionRecord,
    };
    pub use crate::reporting::{grade_all, GradedItem, ModelResponse};
}
