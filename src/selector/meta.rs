//! Metadata Selector Cascades
//!
//! Cascades for the single-node fields: title and byline. Both follow the
//! same first-success-wins rule; the byline tiers come from the class and
//! attribute conventions news CMSes actually use for reporter credit.

use crate::selector::QueryDescriptor;

/// Title cascade.
///
/// The first level-1 heading is the baseline; headline-class and
/// `itemprop` conventions are tried first because pages occasionally use
/// `h1` for the site masthead instead of the article title.
pub static TITLE_QUERIES: &[QueryDescriptor] = &[
    QueryDescriptor { name: "itemprop-headline", query: "[itemprop='headline']" },
    QueryDescriptor { name: "article-title-class", query: ".article-title" },
    QueryDescriptor { name: "news-title-class", query: ".news-title" },
    QueryDescriptor { name: "h1", query: "h1" },
    QueryDescriptor { name: "h2", query: "h2" },
];

/// Byline cascade (in priority order).
pub static BYLINE_QUERIES: &[QueryDescriptor] = &[
    QueryDescriptor { name: "reporter-class", query: "[class*='reporter']" },
    QueryDescriptor { name: "byline-class", query: ".byline" },
    QueryDescriptor { name: "author-class", query: ".author" },
    QueryDescriptor { name: "writer-class", query: ".writer" },
    QueryDescriptor { name: "journalist-class", query: ".journalist" },
    QueryDescriptor { name: "reporter-name-class", query: ".reporter-name" },
    QueryDescriptor { name: "name-class", query: ".name" },
    QueryDescriptor { name: "writer-name-class", query: ".writer-name" },
];
