//! Selector Infrastructure
//!
//! News sites vary wildly in markup, so every extracted field is located
//! through an ordered cascade of query descriptors evaluated strictly in
//! order, first success wins. The cascades are plain data rather than code
//! order, which keeps selection priority enumerable, testable, and
//! configurable.

use std::sync::LazyLock;

use regex::Regex;

use crate::dom::{self, Document, Selection};

pub mod content; // Body paragraph-group cascade
pub mod meta;    // Title and byline cascades

/// Source-markup whitespace (indentation, wrapped lines) is collapsed so
/// extracted text reads the way the page renders it.
#[allow(clippy::expect_used)]
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE regex"));

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").to_string()
}

/// A single named query in a selector cascade.
///
/// The name identifies the tier in tests and diagnostics; the query is a
/// CSS selector evaluated against the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDescriptor {
    /// Stable tier identifier.
    pub name: &'static str,

    /// CSS query for this tier.
    pub query: &'static str,
}

/// Resolve a single-node field through a cascade.
///
/// Each descriptor contributes only its first matching node; a tier whose
/// first node has empty trimmed text fails and the cascade moves on. Later
/// descriptors are never consulted once one succeeds.
///
/// # Example
///
/// ```rust
/// use newsbrief::dom;
/// use newsbrief::selector::{self, QueryDescriptor};
///
/// const CASCADE: &[QueryDescriptor] = &[
///     QueryDescriptor { name: "headline", query: ".headline" },
///     QueryDescriptor { name: "h1", query: "h1" },
/// ];
///
/// let doc = dom::parse("<h1>Fallback title</h1>");
/// assert_eq!(
///     selector::first_text(&doc, CASCADE),
///     Some("Fallback title".to_string()),
/// );
/// ```
#[must_use]
pub fn first_text(doc: &Document, cascade: &[QueryDescriptor]) -> Option<String> {
    for descriptor in cascade {
        if let Some(node) = doc.select(descriptor.query).nodes().first() {
            let sel = Selection::from(*node);
            let text = collapse_whitespace(&dom::text_content(&sel));
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// Collect the trimmed, non-empty texts of every node a paragraph-group
/// descriptor matches, in document order.
///
/// Whitespace-only paragraphs are dropped here so that group-size
/// thresholds count usable paragraphs, not markup artifacts.
#[must_use]
pub fn paragraph_texts(doc: &Document, descriptor: &QueryDescriptor) -> Vec<String> {
    doc.select(descriptor.query)
        .nodes()
        .iter()
        .map(|node| {
            let sel = Selection::from(*node);
            collapse_whitespace(&dom::text_content(&sel))
        })
        .filter(|text| !text.is_empty())
        .collect()
}
