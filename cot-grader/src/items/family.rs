//! Benchmark family definitions

use serde::{Deserialize, Serialize};

/// Comparison policy a dataset is graded with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkFamily {
    /// Four-option exam questions (MMLU style)
    LetterChoice,
    /// Free-text answers with optional structured choices (BBH style)
    MixedChoice,
    /// Word problems with a boxed numeric answer (GSM8K style)
    NumericBoxed,
    /// Graduate-level science multiple choice (GPQA style)
    ScienceChoice,
}

impl BenchmarkFamily {
    pub fn all() -> Vec<BenchmarkFamily> {
        vec![
            BenchmarkFamily::LetterChoice,
            BenchmarkFamily::MixedChoice,
            BenchmarkFamily::NumericBoxed,
            BenchmarkFamily::ScienceChoice,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BenchmarkFamily::LetterChoice => "letter_choice",
            BenchmarkFamily::MixedChoice => "mixed_choice",
            BenchmarkFamily::NumericBoxed => "numeric_boxed",
            BenchmarkFamily::ScienceChoice => "science_choice",
        }
    }

    /// Whether every item of this family is multiple-choice.
    ///
    /// Mixed-choice datasets decide per record.
    pub fn always_multiple_choice(&self) -> bool {
        matches!(
            self,
            BenchmarkFamily::LetterChoice | BenchmarkFamily::ScienceChoice
        )
    }
}

impl std::str::FromStr for BenchmarkFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "letter_choice" | "letter-choice" | "mmlu" => Ok(BenchmarkFamily::LetterChoice),
            "mixed_choice" | "mixed-choice" | "bbh" => Ok(BenchmarkFamily::MixedChoice),
            "numeric_boxed" | "numeric-boxed" | "gsm8k" => Ok(BenchmarkFamily::NumericBoxed),
            "science_choice" | "science-choice" | "gpqa" => Ok(BenchmarkFamily::ScienceChoice),
            _ => Err(format!("Unknown benchmark family: {}", s)),
        }
    }
}

impl std::fmt::Display for BenchmarkFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
