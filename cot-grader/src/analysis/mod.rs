//! Answer normalization and comparison

pub mod boxed;
pub mod normalize;
pub mod verdict;

pub use boxed::{boxed_spans, last_boxed_span};
pub use normalize::{
    answer_letter_offset, bare_letter, compare_choice, fold, full_text_verdict, letter_verdict,
    strip_thousands,
};
pub use verdict::{is_sentinel, Verdict, ERROR_SENTINEL};
