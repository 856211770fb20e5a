//! Classification and deduplication of checked dependencies
//!
//! This module provides:
//! - The classifier deciding whether a dependency is outdated, unresolved
//!   or up to date
//! - Stable structural deduplication of result sets

mod dedup;

pub use dedup::dedup;

use crate::domain::{Classification, Coordinate, Dependency};

/// Classify a coordinate against the latest version the registry reported.
///
/// A missing latest version is compared as the empty string, so a failed
/// lookup lands in `Unresolved` unless the declared version is also empty.
pub fn classify(coordinate: Coordinate, latest: Option<&str>) -> Classification {
    let latest = latest.unwrap_or("");
    let same = eq_ignore_case(&coordinate.version, latest);
    let dependency = Dependency::new(coordinate, Some(latest.to_string()));

    if !latest.is_empty() && !same {
        Classification::Resolved(dependency)
    } else if !same {
        Classification::Unresolved(dependency)
    } else {
        Classification::UpToDate(dependency)
    }
}

/// Unicode-aware case-insensitive comparison
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
