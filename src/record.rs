//! Result types for extraction output.
//!
//! This module defines the structured output from article extraction. A
//! record is built once per invocation and is immutable afterwards; the
//! presentation layer owns its lifetime from there.

use serde::{Deserialize, Serialize};

/// Structured article record produced by extraction.
///
/// Missing title or byline is represented as `None`, never as an error:
/// the engine runs against untrusted third-party markup and always produces
/// a well-formed record, however degenerate the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Trimmed text of the winning title candidate.
    pub title: Option<String>,

    /// Trimmed text of the winning byline candidate.
    pub byline: Option<String>,

    /// Accepted paragraph texts, single-space joined. Empty when the page
    /// has no usable paragraphs at all.
    pub body_text: String,

    /// Bounded-length extractive summary of `body_text`.
    pub summary: String,
}
