//! Core article extraction algorithm.
//!
//! Resolves title, byline, and body through their selector cascades, applies
//! the paragraph noise filter, and assembles the final record. Extraction
//! never fails: the engine runs against untrusted, highly variable
//! third-party markup, so every degenerate input shape degrades to an
//! empty-valued field instead of an error.

use crate::config::Config;
use crate::dom::Document;
use crate::filter::{self, FilterRule};
use crate::record::ArticleRecord;
use crate::selector::{self, content, meta};
use crate::summary;

/// Extract an article record from a parsed document.
#[must_use]
pub fn extract_from_document(doc: &Document, config: &Config) -> ArticleRecord {
    let title = selector::first_text(doc, meta::TITLE_QUERIES);
    let byline = selector::first_text(doc, meta::BYLINE_QUERIES);
    let body_text = resolve_body(doc, config);
    let summary = summary::summarize_with(
        &body_text,
        config.summary_sentence_count,
        config.summary_max_chars,
    );

    ArticleRecord { title, byline, body_text, summary }
}

/// Resolve the body text through the paragraph-group cascade.
///
/// The accepted group is noise-filtered; if filtering leaves less than the
/// configured minimum, the leading unfiltered paragraphs are used instead.
/// A page with paragraphs therefore always yields a non-empty body, at the
/// cost of possibly carrying noise.
fn resolve_body(doc: &Document, config: &Config) -> String {
    let paragraphs = select_paragraph_group(doc, config);
    if paragraphs.is_empty() {
        return String::new();
    }

    let rules = active_rules(config);
    let filtered: Vec<&str> = paragraphs
        .iter()
        .map(String::as_str)
        .filter(|text| survives(text, &rules, config.min_paragraph_len))
        .collect();
    let body = filtered.join(" ");

    if !body.is_empty() && body.chars().count() >= config.min_body_len {
        return body;
    }

    paragraphs
        .iter()
        .take(config.fallback_paragraph_count)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Evaluate the paragraph-group cascade, first usable group wins.
///
/// A scoped tier is usable when it yields at least `min_paragraph_count`
/// non-empty paragraphs. When no tier qualifies, the generic all-paragraphs
/// query is taken regardless of its size.
fn select_paragraph_group(doc: &Document, config: &Config) -> Vec<String> {
    let cascade = content::BODY_QUERIES
        .iter()
        .chain(std::iter::once(&content::GENERIC_PARAGRAPHS));

    for descriptor in cascade {
        let texts = selector::paragraph_texts(doc, descriptor);
        if texts.len() >= config.min_paragraph_count {
            return texts;
        }
    }

    selector::paragraph_texts(doc, &content::GENERIC_PARAGRAPHS)
}

fn active_rules(config: &Config) -> Vec<&'static FilterRule> {
    filter::NOISE_RULES
        .iter()
        .filter(|rule| {
            config.reject_reporter_bylines || rule.name != filter::EMBEDDED_BYLINE_RULE
        })
        .collect()
}

fn survives(text: &str, rules: &[&FilterRule], min_len: usize) -> bool {
    text.chars().count() >= min_len && !rules.iter().any(|rule| rule.rejects(text))
}
