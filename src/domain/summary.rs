//! Per-invocation result accumulator
//!
//! Collects classified dependencies for one `check` run and applies
//! deduplication to the resolved set once the scan is complete.

use super::{Classification, Dependency};
use crate::check::dedup;
use serde::Serialize;
use std::path::PathBuf;

/// A registry lookup that failed in keep-going mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupFailure {
    /// `group:name` of the dependency
    pub package: String,
    /// Error message
    pub message: String,
}

/// Results of checking a single manifest
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckSummary {
    /// Manifest that was scanned
    pub file: PathBuf,
    /// Number of coordinates extracted from the manifest
    pub scanned: usize,
    /// Outdated dependencies, extraction order
    pub resolved: Vec<Dependency>,
    /// Dependencies whose latest version could not be confirmed
    pub unresolved: Vec<Dependency>,
    /// Dependencies already at the latest version
    pub up_to_date: Vec<Dependency>,
    /// Lookups that failed but did not abort the run
    pub failures: Vec<LookupFailure>,
}

impl CheckSummary {
    /// Creates an empty summary for the given manifest
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    /// Routes a classification into the matching set
    pub fn add(&mut self, classification: Classification) {
        match classification {
            Classification::Resolved(dep) => self.resolved.push(dep),
            Classification::Unresolved(dep) => self.unresolved.push(dep),
            Classification::UpToDate(dep) => self.up_to_date.push(dep),
        }
    }

    /// Records a failed lookup
    pub fn add_failure(&mut self, package: impl Into<String>, message: impl Into<String>) {
        self.failures.push(LookupFailure {
            package: package.into(),
            message: message.into(),
        });
    }

    /// Collapses duplicate resolved entries, keeping first occurrences.
    /// The unresolved set is left as-is.
    pub fn finalize(mut self) -> Self {
        self.resolved = dedup(self.resolved);
        self
    }

    /// Returns true if any dependency is outdated
    pub fn has_updates(&self) -> bool {
        !self.resolved.is_empty()
    }

    /// Returns true if any lookup failed
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
