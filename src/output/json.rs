//! JSON output formatter for machine processing

use crate::check::eq_ignore_case;
use crate::domain::{CheckSummary, Dependency, LookupFailure};
use crate::output::{OutputFormatter, Verbosity, VersionChangeType};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Manifest that was scanned
    file: String,
    /// Number of coordinates found
    scanned: usize,
    /// Outdated dependencies
    resolved: Vec<JsonDependency<'a>>,
    /// Dependencies that could not be checked
    unresolved: Vec<JsonDependency<'a>>,
    /// Up-to-date dependencies (verbose only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    up_to_date: Vec<JsonDependency<'a>>,
    /// Lookup failures in keep-going mode
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    errors: &'a [LookupFailure],
}

/// JSON representation of a dependency
#[derive(Serialize)]
struct JsonDependency<'a> {
    group: &'a str,
    name: &'a str,
    current_version: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    latest_version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    change: Option<&'static str>,
}

impl<'a> JsonDependency<'a> {
    fn from_dependency(dep: &'a Dependency) -> Self {
        let change = dep.latest_version().and_then(|latest| {
            if eq_ignore_case(dep.current_version(), latest) {
                None
            } else {
                Some(VersionChangeType::from_versions(dep.current_version(), latest).label())
            }
        });

        Self {
            group: dep.group(),
            name: dep.name(),
            current_version: dep.current_version(),
            latest_version: dep.latest_version(),
            change,
        }
    }
}

fn convert(deps: &[Dependency]) -> Vec<JsonDependency<'_>> {
    deps.iter().map(JsonDependency::from_dependency).collect()
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, summary: &CheckSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let up_to_date = if self.verbosity == Verbosity::Verbose {
            convert(&summary.up_to_date)
        } else {
            Vec::new()
        };

        let output = JsonOutput {
            file: summary.file.display().to_string(),
            scanned: summary.scanned,
            resolved: convert(&summary.resolved),
            unresolved: convert(&summary.unresolved),
            up_to_date,
            errors: &summary.failures,
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
