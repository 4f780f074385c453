//! Extractive summarization.
//!
//! Deterministic, position-based summaries: the leading sentence units of
//! the body text, bounded in both sentence count and character length. No
//! scoring or ranking - order of appearance is the only signal, which is
//! the right tradeoff for news ledes.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Fixed message returned when there is nothing to summarize.
pub const EMPTY_SUMMARY_MESSAGE: &str = "요약할 내용이 없습니다.";

/// Marker appended when the summary is truncated.
pub const ELLIPSIS: &str = "...";

/// Default number of sentence units in a summary.
pub const DEFAULT_SENTENCE_COUNT: usize = 3;

/// Default character cap before truncation.
pub const DEFAULT_MAX_CHARS: usize = 300;

/// A sentence unit: a maximal run of characters terminated by one or more
/// of `.`, `!`, `?`.
static SENTENCE_UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("SENTENCE_UNIT regex"));

/// Summarize body text with the default bounds.
///
/// # Example
///
/// ```rust
/// use newsbrief::summary::summarize;
///
/// let body = "First sentence. Second sentence. Third sentence. Fourth.";
/// assert_eq!(
///     summarize(body),
///     "First sentence. Second sentence. Third sentence.",
/// );
/// ```
#[must_use]
pub fn summarize(text: &str) -> String {
    summarize_with(text, DEFAULT_SENTENCE_COUNT, DEFAULT_MAX_CHARS)
}

/// Summarize body text with explicit bounds.
///
/// Empty input returns the fixed sentinel message. Input with no sentence
/// terminator anywhere is treated as a single sentence unit. The excerpt is
/// truncated to exactly `max_chars` characters (plus an ellipsis marker)
/// when it runs over; counting is in `char`s so the cut always lands on a
/// character boundary.
#[must_use]
pub fn summarize_with(text: &str, max_sentences: usize, max_chars: usize) -> String {
    if text.is_empty() {
        return EMPTY_SUMMARY_MESSAGE.to_string();
    }

    let units: Vec<&str> = SENTENCE_UNIT
        .find_iter(text)
        .take(max_sentences)
        .map(|m| m.as_str().trim())
        .collect();

    let excerpt = if units.is_empty() {
        // No terminator anywhere: the whole input is one sentence
        text.trim().to_string()
    } else {
        units.join(" ")
    };

    if excerpt.chars().count() > max_chars {
        let truncated: String = excerpt.chars().take(max_chars).collect();
        format!("{truncated}{ELLIPSIS}")
    } else {
        excerpt
    }
}
