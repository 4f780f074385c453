//! Noise filter rules for candidate body paragraphs.
//!
//! All patterns are compiled once at startup using `LazyLock`. Each rule is
//! a named predicate over a single paragraph's text; rules are immutable,
//! statically configured, and order-independent - a paragraph survives only
//! if no rule matches it. Naming every rule keeps filter coverage enumerable
//! and unit-testable per rule.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Embedded reporter credits: Korean `기자`/`특파원` credit forms and
/// leading English "By ..." lines.
static EMBEDDED_BYLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[가-힣]{2,4}\s*(?:기자|특파원)|(?i:^\s*by\s+\S)")
        .expect("EMBEDDED_BYLINE regex")
});

/// Copyright and redistribution-prohibited notices.
static COPYRIGHT_NOTICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)copyright|all rights reserved|무단\s*전재|재배포\s*금지")
        .expect("COPYRIGHT_NOTICE regex")
});

/// Copyright marks in any of their common spellings.
static COPYRIGHT_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[ⓒ©]|\(c\)").expect("COPYRIGHT_SYMBOL regex"));

/// Explicit source attributions (`source:` / `출처:`).
static SOURCE_ATTRIBUTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:source|출처)\s*[:：]").expect("SOURCE_ATTRIBUTION regex")
});

/// Date stamps: four-digit year followed by punctuation-separated month/day.
static DATE_STAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{4}\s*[.\-/]\s*\d{1,2}\s*[.\-/]\s*\d{1,2}").expect("DATE_STAMP regex")
});

/// Wire-service credit lines. Latin names take word boundaries so that
/// e.g. "JAPAN" does not trip the "AP" alternative.
static WIRE_SERVICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"연합뉴스|뉴시스|뉴스1|\b(?:Yonhap|Reuters|AFP|AP)\b").expect("WIRE_SERVICE regex")
});

/// Rule name for the reporter-credit filter, which is configurable
/// (see `Config::reject_reporter_bylines`).
pub const EMBEDDED_BYLINE_RULE: &str = "embedded-byline";

/// A named predicate rejecting boilerplate paragraph text.
#[derive(Debug)]
pub struct FilterRule {
    /// Stable rule identifier.
    pub name: &'static str,

    /// Human-readable description of what the rule rejects.
    pub description: &'static str,

    pattern: &'static LazyLock<Regex>,
}

impl FilterRule {
    /// Returns true if this rule rejects the paragraph text.
    #[must_use]
    pub fn rejects(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Noise rules applied to every candidate paragraph.
pub static NOISE_RULES: &[FilterRule] = &[
    FilterRule {
        name: EMBEDDED_BYLINE_RULE,
        description: "reporter credit lines embedded in body text",
        pattern: &EMBEDDED_BYLINE,
    },
    FilterRule {
        name: "copyright-notice",
        description: "copyright and redistribution-prohibited notices",
        pattern: &COPYRIGHT_NOTICE,
    },
    FilterRule {
        name: "copyright-symbol",
        description: "copyright marks",
        pattern: &COPYRIGHT_SYMBOL,
    },
    FilterRule {
        name: "source-attribution",
        description: "explicit source attributions",
        pattern: &SOURCE_ATTRIBUTION,
    },
    FilterRule {
        name: "date-stamp",
        description: "year-first date stamps",
        pattern: &DATE_STAMP,
    },
    FilterRule {
        name: "wire-service",
        description: "wire-service credit lines",
        pattern: &WIRE_SERVICE,
    },
];
