//! # newsbrief
//!
//! News article extraction and summarization engine for in-page reader
//! panels.
//!
//! This library locates the title, body paragraphs, and reporter byline of
//! a news-article page whose markup conventions are unknown in advance,
//! strips extraction noise (copyright notices, datelines, wire-service
//! credits), and derives a short extractive summary. It also normalizes a
//! pair of externally supplied bias weights into the percentage pair a
//! two-sided ratio bar needs.
//!
//! ## Quick Start
//!
//! ```rust
//! use newsbrief::{extract, is_supported_article_url, DEFAULT_URL_MARKERS};
//!
//! let url = "https://news.example.com/article/20250114";
//! assert!(is_supported_article_url(url, DEFAULT_URL_MARKERS));
//!
//! let html = r#"<html><body><article>
//! <h1>기준금리 동결</h1>
//! <p>한국은행이 기준금리를 현 수준에서 동결하기로 결정했다고 밝혔다.</p>
//! <p>시장에서는 이번 결정이 예상된 수순이었다는 평가가 지배적이다.</p>
//! </article></body></html>"#;
//!
//! let record = extract(html);
//! assert_eq!(record.title.as_deref(), Some("기준금리 동결"));
//! println!("{}", record.summary);
//! ```
//!
//! ## Design
//!
//! - **Selector cascades**: every field is resolved through an ordered list
//!   of named query descriptors, first success wins, ending in generic
//!   fallbacks - coverage over precision, because real news markup varies
//!   wildly.
//! - **Noise filtering**: candidate paragraphs pass a declarative list of
//!   named rejection rules; when filtering would leave a degenerate result,
//!   the leading unfiltered paragraphs are used instead.
//! - **Silent degradation**: extraction never raises. Missing fields are
//!   `None`, an empty body is a valid terminal state, and summarizing an
//!   empty body yields a fixed sentinel message.

mod config;
mod error;
mod extract;
mod record;

/// Applicability check for article URLs.
pub mod applicability;

/// Bias weight validation and ratio normalization.
pub mod bias;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Noise filter rules for candidate body paragraphs.
pub mod filter;

/// Selector infrastructure and the per-field query cascades.
pub mod selector;

/// Extractive summarization.
pub mod summary;

// Public API - re-exports
pub use applicability::{is_supported_article_url, DEFAULT_URL_MARKERS};
pub use bias::{BiasRatio, BiasWeights};
pub use config::Config;
pub use error::{Error, Result};
pub use extract::extract_from_document;
pub use record::ArticleRecord;
pub use summary::{summarize, EMPTY_SUMMARY_MESSAGE};

/// Extracts an article record from an HTML document using the default
/// configuration.
///
/// Extraction never fails: missing title or byline come back as `None` and
/// a page without paragraphs yields an empty body with the summary
/// sentinel. Callers should gate this behind [`is_supported_article_url`]
/// so the engine only runs on pages that look like articles.
///
/// # Example
///
/// ```rust
/// use newsbrief::extract;
///
/// let record = extract("<html><body><p></p></body></html>");
/// assert!(record.title.is_none());
/// assert_eq!(record.body_text, "");
/// ```
#[must_use]
pub fn extract(html: &str) -> ArticleRecord {
    extract_with_config(html, &Config::default())
}

/// Extracts an article record from an HTML document with a custom
/// configuration.
///
/// # Example
///
/// ```rust
/// use newsbrief::{extract_with_config, Config};
///
/// let config = Config::strict();
/// let record = extract_with_config("<p>too small to trust</p>", &config);
/// assert!(!record.body_text.is_empty());
/// ```
#[must_use]
pub fn extract_with_config(html: &str, config: &Config) -> ArticleRecord {
    let document = dom::parse(html);
    extract_from_document(&document, config)
}
