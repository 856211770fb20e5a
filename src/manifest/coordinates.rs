//! Coordinate extraction from free-form manifest text
//!
//! Matches `group:name:version` triples wherever they appear. Each token is a
//! maximal run of characters outside the delimiter set
//! `" $ , ; ( ) [ ] { } '`, which lets triples sit inside quoted strings,
//! call arguments or blocks without parsing any particular build grammar.

use crate::domain::Coordinate;
use regex::Regex;
use std::sync::LazyLock;

static COORDINATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^"$,;()\[\]{}']+):([^"$,;()\[\]{}']+):([^"$,;()\[\]{}']+)"#).unwrap()
});

/// Extract all coordinate triples from `text`, in order of appearance.
///
/// Tokens are taken verbatim: no trimming, whitespace-only tokens are kept.
pub fn extract_coordinates(text: &str) -> Vec<Coordinate> {
    COORDINATE_RE
        .captures_iter(text)
        .map(|caps| Coordinate::new(&caps[1], &caps[2], &caps[3]))
        .collect()
}
