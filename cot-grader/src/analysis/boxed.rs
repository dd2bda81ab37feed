//! `\boxed{...}` span extraction

use std::sync::OnceLock;

use regex::Regex;

fn boxed_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Non-greedy, single line: `\boxed{\frac{1}{2}}` yields `\frac{1`.
    PATTERN.get_or_init(|| Regex::new(r"\\boxed\{(.*?)\}").expect("boxed pattern compiles"))
}

/// Contents of every boxed span in `text`, left to right.
///
/// The iterator is lazy; call again to restart the scan.
pub fn boxed_spans(text: &str) -> impl Iterator<Item = &str> + '_ {
    boxed_pattern()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The final boxed span, which reasoning traces use for the committed answer
pub fn last_boxed_span(text: &str) -> Option<&str> {
    boxed_spans(text).last()
}
