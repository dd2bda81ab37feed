//! Surface-form normalization shared by the comparison policies

use serde_json::Value;

use super::verdict::Verdict;
use crate::error::RecordError;
use crate::items::scalar_text;

/// Lowercase and trim
pub fn fold(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

/// Drop thousands separators (`1,234` -> `1234`)
pub fn strip_thousands(text: &str) -> String {
    text.replace(',', "")
}

/// Zero-based option index of a reference letter (`"C"` -> 2)
pub fn answer_letter_offset(reference: &str) -> Result<usize, RecordError> {
    let mut chars = reference.chars();
    match (chars.next(), chars.next()) {
        (Some(c @ 'A'..='Z'), None) => Ok((c as u8 - b'A') as usize),
        _ => Err(RecordError::InvalidAnswerLetter(reference.to_string())),
    }
}

/// The lowercased option letter when the candidate is a letter-only answer.
///
/// The first character must be one of the first `option_count` letters, and
/// anything after it may only be whitespace or closing punctuation, so `B`,
/// `b.` and `B)` qualify while `B. five` does not.
pub fn bare_letter(candidate: &str, option_count: usize) -> Option<char> {
    let mut chars = candidate.chars();
    let first = chars.next()?.to_ascii_lowercase();
    if !first.is_ascii_lowercase() || (first as u8 - b'a') as usize >= option_count {
        return None;
    }

    let rest = chars.as_str().trim();
    if rest.chars().all(|c| matches!(c, '.' | ')' | ':')) {
        Some(first)
    } else {
        None
    }
}

/// Letter-to-letter comparison for a letter-only candidate
pub fn letter_verdict(letter: char, reference: &str) -> Verdict {
    Verdict::compare(&letter.to_string(), &reference.to_lowercase())
}

/// Folded candidate with a leading `B)`, `B:` or `B ` option label
/// rewritten to the `b. ` form.
fn canonical_choice_text(candidate: &str) -> String {
    let folded = fold(candidate);
    let mut chars = folded.chars();
    if let (Some(letter @ 'a'..='z'), Some(sep)) = (chars.next(), chars.next()) {
        if matches!(sep, '.' | ')' | ':') || sep.is_whitespace() {
            let text = chars.as_str().trim_start();
            if !text.is_empty() {
                return format!("{}. {}", letter, text);
            }
        }
    }
    folded
}

/// Compare a candidate with the full `"{letter}. {choice text}"` form
/// rebuilt from the reference letter and `choices`.
pub fn full_text_verdict(
    candidate: &str,
    reference: &str,
    choices: &[Value],
) -> Result<Verdict, RecordError> {
    let offset = answer_letter_offset(reference)?;
    let choice = choices.get(offset).ok_or(RecordError::ChoiceOutOfRange {
        letter: (b'A' + offset as u8) as char,
        len: choices.len(),
    })?;
    let complete = format!("{}. {}", reference, scalar_text(choice, "choices")?);

    Ok(Verdict::compare(
        &canonical_choice_text(candidate),
        &fold(&complete),
    ))
}

/// Letter-or-full-text grading of a multiple-choice answer.
///
/// `choices` is only resolved when the candidate is not a bare letter, so a
/// letter answer never reads the record's option texts.
pub fn compare_choice<'a>(
    candidate: &str,
    reference: &str,
    option_count: usize,
    choices: impl FnOnce() -> Result<&'a [Value], RecordError>,
) -> Result<Verdict, RecordError> {
    match bare_letter(candidate, option_count) {
        Some(letter) => Ok(letter_verdict(letter, reference)),
        None => full_text_verdict(candidate, reference, choices()?),
    }
}
