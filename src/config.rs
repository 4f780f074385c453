//! Configuration for the extraction engine.
//!
//! The `Config` struct consolidates the extraction profiles observed in the
//! wild into one configurable engine: marker sets for the applicability
//! check, paragraph-group acceptance thresholds, noise-filter tuning, and
//! summary bounds.

use crate::applicability::DEFAULT_URL_MARKERS;

/// Configuration for article extraction and summarization.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the lenient profile, or `Config::strict()` for the stricter one.
///
/// # Example
///
/// ```rust
/// use newsbrief::Config;
///
/// // Use defaults
/// let config = Config::default();
///
/// // Customize specific fields
/// let config = Config {
///     min_paragraph_len: 30,
///     reject_reporter_bylines: false,
///     ..Config::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Marker substrings identifying supported article URLs.
    ///
    /// Matching is case-sensitive substring containment anywhere in the URL.
    /// An empty set deactivates the engine on every page (fail-closed).
    ///
    /// Default: path segments such as `/article/`, `/news/`, `/view/`.
    pub url_markers: Vec<String>,

    /// Minimum number of non-empty paragraphs a scoped body query must yield
    /// to be accepted.
    ///
    /// Queries yielding fewer fall through to the next tier; when every
    /// scoped tier falls through, the generic all-paragraphs query is used
    /// regardless of its size.
    ///
    /// Default: `1`
    pub min_paragraph_count: usize,

    /// Minimum character count for a paragraph to survive the noise filter.
    ///
    /// Rejects short fragments such as captions and UI labels.
    ///
    /// Default: `20`
    pub min_paragraph_len: usize,

    /// Minimum character count of the filtered body text.
    ///
    /// Below this, the filter result is discarded and the leading unfiltered
    /// paragraphs are used instead, so filtering can never produce a
    /// degenerate result when raw text is available.
    ///
    /// Default: `80`
    pub min_body_len: usize,

    /// Number of leading unfiltered paragraphs taken when the filtered body
    /// falls below `min_body_len`.
    ///
    /// Default: `5`
    pub fallback_paragraph_count: usize,

    /// Maximum number of sentence units in the summary.
    ///
    /// Default: `3`
    pub summary_sentence_count: usize,

    /// Maximum summary length in characters before truncation.
    ///
    /// Truncated summaries carry a trailing ellipsis marker on top of this.
    ///
    /// Default: `300`
    pub summary_max_chars: usize,

    /// Reject paragraphs that are embedded reporter-credit lines.
    ///
    /// The source profiles disagree on this rule, so it is a toggle rather
    /// than a fixed behavior.
    ///
    /// Default: `true`
    pub reject_reporter_bylines: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url_markers: DEFAULT_URL_MARKERS.iter().map(ToString::to_string).collect(),
            min_paragraph_count: 1,
            min_paragraph_len: 20,
            min_body_len: 80,
            fallback_paragraph_count: 5,
            summary_sentence_count: 3,
            summary_max_chars: 300,
            reject_reporter_bylines: true,
        }
    }
}

impl Config {
    /// Strict profile: a scoped paragraph group must hold more than five
    /// paragraphs to be trusted, and the filtered body must be longer before
    /// the unfiltered fallback is skipped.
    ///
    /// Use this on portals where near-empty containers (photo captions,
    /// teaser boxes) routinely match the scoped queries.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            min_paragraph_count: 6,
            min_body_len: 200,
            ..Self::default()
        }
    }
}
