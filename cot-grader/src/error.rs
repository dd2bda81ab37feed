//! Structural errors raised while reading question records

/// A record is missing a field, or a field has the wrong shape
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("missing field `{0}`")]
    MissingField(String),

    #[error("field `{field}` must be {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },

    #[error("answer `{0}` is not a single uppercase option letter")]
    InvalidAnswerLetter(String),

    #[error("answer letter `{letter}` is past the last of {len} choices")]
    ChoiceOutOfRange { letter: char, len: usize },
}

impl RecordError {
    pub(crate) fn invalid(field: impl Into<String>, expected: &'static str) -> Self {
        RecordError::InvalidField {
            field: field.into(),
            expected,
        }
    }
}

/// Errors returned by adapter operations
///
/// None of these describe a wrong answer: a candidate that does not match is
/// an `Ok` verdict. These signal bad indices or malformed datasets and are
/// left for the caller to handle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GradeError {
    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("item {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: RecordError,
    },
}

impl GradeError {
    pub fn record(index: usize, source: RecordError) -> Self {
        GradeError::Record { index, source }
    }
}
