//! Benchmark adapters

pub mod letter_choice;
pub mod mixed_choice;
pub mod numeric_boxed;
pub mod science_choice;
pub mod traits;

pub use letter_choice::LetterChoiceAdapter;
pub use mixed_choice::MixedChoiceAdapter;
pub use numeric_boxed::NumericBoxedAdapter;
pub use science_choice::ScienceChoiceAdapter;
pub use traits::{AnswerAdapter, FOUR_WAY_OPTIONS, SYSTEM_PROMPT};

use std::sync::Arc;

use crate::items::{BenchmarkFamily, ItemList};

/// Enum to hold any adapter type
#[derive(Debug, Clone)]
pub enum Adapter {
    LetterChoice(LetterChoiceAdapter),
    MixedChoice(MixedChoiceAdapter),
    NumericBoxed(NumericBoxedAdapter),
    ScienceChoice(ScienceChoiceAdapter),
}

impl Adapter {
    /// Build the adapter for a family over an already-loaded item list
    pub fn new(family: BenchmarkFamily, items: ItemList) -> Self {
        match family {
            BenchmarkFamily::LetterChoice => Adapter::LetterChoice(LetterChoiceAdapter::new(items)),
            BenchmarkFamily::MixedChoice => Adapter::MixedChoice(MixedChoiceAdapter::new(items)),
            BenchmarkFamily::NumericBoxed => Adapter::NumericBoxed(NumericBoxedAdapter::new(items)),
            BenchmarkFamily::ScienceChoice => {
                Adapter::ScienceChoice(ScienceChoiceAdapter::new(items))
            }
        }
    }

    /// Get the adapter as a trait object
    pub fn as_adapter(&self) -> &dyn AnswerAdapter {
        match self {
            Adapter::LetterChoice(a) => a,
            Adapter::MixedChoice(a) => a,
            Adapter::NumericBoxed(a) => a,
            Adapter::ScienceChoice(a) => a,
        }
    }
}

/// Create a shareable adapter for a family
pub fn create_adapter(family: BenchmarkFamily, items: ItemList) -> Arc<dyn AnswerAdapter> {
    match family {
        BenchmarkFamily::LetterChoice => Arc::new(LetterChoiceAdapter::new(items)),
        BenchmarkFamily::MixedChoice => Arc::new(MixedChoiceAdapter::new(items)),
        BenchmarkFamily::NumericBoxed => Arc::new(NumericBoxedAdapter::new(items)),
        BenchmarkFamily::ScienceChoice => Arc::new(ScienceChoiceAdapter::new(items)),
    }
}
