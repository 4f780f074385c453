//! Body Content Selector Cascade
//!
//! Paragraph-group queries in priority order. Scoped containers are always
//! preferred over the unstructured fallback: a plausible article container,
//! even a small one, beats sweeping up every paragraph on the page.

use crate::selector::QueryDescriptor;

/// Scoped paragraph-group queries, most specific first.
pub static BODY_QUERIES: &[QueryDescriptor] = &[
    QueryDescriptor { name: "article-element", query: "article p" },
    QueryDescriptor { name: "article-content-class", query: ".article-content p" },
    QueryDescriptor { name: "news-content-class", query: ".news-content p" },
    QueryDescriptor { name: "article-body-class", query: ".article-body p" },
    QueryDescriptor { name: "content-class", query: ".content p" },
    QueryDescriptor { name: "story-content-class", query: ".story-content p" },
    QueryDescriptor { name: "news-article-class", query: ".news_article p" },
    QueryDescriptor { name: "text-class", query: ".text p" },
    QueryDescriptor { name: "news-text-class", query: ".news_text p" },
    QueryDescriptor { name: "article-text-class", query: ".article_text p" },
];

/// Unconditional last resort: every paragraph in the document.
///
/// Used both as the cascade's final tier and as the unconditional fallback
/// when no scoped tier reaches the configured group-size threshold.
pub static GENERIC_PARAGRAPHS: QueryDescriptor =
    QueryDescriptor { name: "all-paragraphs", query: "p" };
