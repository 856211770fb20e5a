//! Text output formatter for human-readable display
//!
//! This module provides:
//! - The outdated dependency listing with version change type indication
//! - The "up to date" message when nothing is outdated
//! - The unresolved dependency listing
//! - Up-to-date and failed lookups in verbose mode

use crate::domain::{CheckSummary, Dependency};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Semantic version change type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChangeType {
    /// Major version change (breaking)
    Major,
    /// Minor version change (features)
    Minor,
    /// Patch version change (fixes)
    Patch,
    /// Unknown or unparseable
    Unknown,
}

impl VersionChangeType {
    /// Determine the change type between two versions
    pub fn from_versions(old: &str, new: &str) -> Self {
        let parse = |v: &str| -> Option<(u64, u64, u64)> {
            let v = v.strip_prefix('v').unwrap_or(v);
            // Split by . and - to handle qualifiers like -jre or .RELEASE
            let parts: Vec<&str> = v.split(['.', '-']).collect();
            match parts.as_slice() {
                [major] => Some((major.parse().ok()?, 0, 0)),
                [major, minor] => Some((major.parse().ok()?, minor.parse().ok()?, 0)),
                [major, minor, rest @ ..] => Some((
                    major.parse().ok()?,
                    minor.parse().ok()?,
                    rest.first().and_then(|p| p.parse().ok()).unwrap_or(0),
                )),
                [] => None,
            }
        };

        match (parse(old), parse(new)) {
            (Some((old_major, old_minor, _)), Some((new_major, new_minor, _))) => {
                if new_major != old_major {
                    VersionChangeType::Major
                } else if new_minor != old_minor {
                    VersionChangeType::Minor
                } else {
                    VersionChangeType::Patch
                }
            }
            _ => VersionChangeType::Unknown,
        }
    }

    /// Get the display label with color
    pub fn colored_label(&self) -> String {
        match self {
            VersionChangeType::Major => "major".red().bold().to_string(),
            VersionChangeType::Minor => "minor".yellow().to_string(),
            VersionChangeType::Patch => "patch".green().to_string(),
            VersionChangeType::Unknown => "?".dimmed().to_string(),
        }
    }

    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            VersionChangeType::Major => "major",
            VersionChangeType::Minor => "minor",
            VersionChangeType::Patch => "patch",
            VersionChangeType::Unknown => "?",
        }
    }
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn heading(&self, text: &str, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer)?;
        if self.color {
            writeln!(writer, "{}", text.bold())?;
        } else {
            writeln!(writer, "{}", text)?;
        }
        writeln!(writer)
    }

    /// Format an outdated dependency line
    fn format_resolved_line(&self, dep: &Dependency, writer: &mut dyn Write) -> std::io::Result<()> {
        let latest = dep.latest_version().unwrap_or_default();
        let change_type = VersionChangeType::from_versions(dep.current_version(), latest);

        if self.color {
            writeln!(
                writer,
                "group: {} name: {} version: {} {} {} [{}]",
                dep.group(),
                dep.name().bold(),
                dep.current_version().dimmed(),
                "-->".dimmed(),
                latest.bright_white().bold(),
                change_type.colored_label()
            )
        } else {
            writeln!(
                writer,
                "group: {} name: {} version: {} --> {} [{}]",
                dep.group(),
                dep.name(),
                dep.current_version(),
                latest,
                change_type.label()
            )
        }
    }

    /// Format a line without a latest version
    fn format_plain_line(&self, dep: &Dependency, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.color {
            writeln!(
                writer,
                "group: {} name: {} version: {}",
                dep.group(),
                dep.name().bold(),
                dep.current_version().dimmed()
            )
        } else {
            writeln!(
                writer,
                "group: {} name: {} version: {}",
                dep.group(),
                dep.name(),
                dep.current_version()
            )
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &CheckSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        if summary.has_updates() {
            let count = summary.resolved.len();
            let header = format!("Vleas found {} dependency update(s):", count);
            self.heading(&header, writer)?;
            for dep in &summary.resolved {
                self.format_resolved_line(dep, writer)?;
            }
        } else {
            // No line break here; the next heading supplies it
            let message = "Great! Your project is up to date :)";
            if self.color {
                write!(writer, "\n{}", message.green())?;
            } else {
                write!(writer, "\n{}", message)?;
            }
        }

        if !summary.unresolved.is_empty() {
            self.heading(
                "The following dependencies have not been able to check:",
                writer,
            )?;
            for dep in &summary.unresolved {
                self.format_plain_line(dep, writer)?;
            }
        }

        if self.verbosity == Verbosity::Verbose {
            if !summary.up_to_date.is_empty() {
                self.heading("Up to date:", writer)?;
                for dep in &summary.up_to_date {
                    self.format_plain_line(dep, writer)?;
                }
            }

            if summary.has_failures() {
                self.heading("Lookup failures:", writer)?;
                for failure in &summary.failures {
                    writeln!(writer, "{}: {}", failure.package, failure.message)?;
                }
            }

            writeln!(writer)?;
            writeln!(
                writer,
                "Scanned {} coordinate(s) in {}",
                summary.scanned,
                summary.file.display()
            )?;
        } else if !summary.has_updates() && summary.unresolved.is_empty() {
            writeln!(writer)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Classification, Coordinate};

    fn dep(name: &str, current: &str, latest: Option<&str>) -> Dependency {
        Dependency::new(
            Coordinate::new("org.foo", name, current),
            latest.map(str::to_string),
        )
    }

    fn render(summary: &CheckSummary, verbosity: Verbosity) -> String {
        let formatter = TextFormatter::with_color(verbosity, false);
        let mut out = Vec::new();
        formatter.format(summary, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_version_change_type() {
        assert_eq!(
            VersionChangeType::from_versions("1.0.0", "2.0.0"),
            VersionChangeType::Major
        );
        assert_eq!(
            VersionChangeType::from_versions("1.0.0", "1.2.0"),
            VersionChangeType::Minor
        );
        assert_eq!(
            VersionChangeType::from_versions("1.0.0", "1.0.1"),
            VersionChangeType::Patch
        );
        assert_eq!(
            VersionChangeType::from_versions("31.1-jre", "32.1.3-jre"),
            VersionChangeType::Major
        );
        assert_eq!(
            VersionChangeType::from_versions("5.3.0.RELEASE", "5.3.1.RELEASE"),
            VersionChangeType::Patch
        );
        assert_eq!(
            VersionChangeType::from_versions("abc", "1.0"),
            VersionChangeType::Unknown
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(VersionChangeType::Major.label(), "major");
        assert_eq!(VersionChangeType::Unknown.label(), "?");
    }

    #[test]
    fn test_format_resolved() {
        let mut summary = CheckSummary::new("build.gradle");
        summary.add(Classification::Resolved(dep("bar", "1.0.0", Some("1.2.0"))));

        let out = render(&summary, Verbosity::Normal);
        assert!(out.contains("Vleas found 1 dependency update(s):"));
        assert!(out.contains("group: org.foo name: bar version: 1.0.0 --> 1.2.0 [minor]"));
        assert!(!out.contains("up to date"));
        assert!(!out.contains("have not been able to check"));
    }

    #[test]
    fn test_format_up_to_date() {
        let mut summary = CheckSummary::new("build.gradle");
        summary.add(Classification::UpToDate(dep("bar", "1.2.0", Some("1.2.0"))));

        let out = render(&summary, Verbosity::Normal);
        assert_eq!(out, "\nGreat! Your project is up to date :)\n");
    }

    #[test]
    fn test_format_unresolved_after_up_to_date() {
        let mut summary = CheckSummary::new("build.gradle");
        summary.add(Classification::Unresolved(dep("gone", "1.0", None)));

        let out = render(&summary, Verbosity::Normal);
        let up_to_date = out.find("Great! Your project is up to date :)").unwrap();
        let unresolved = out
            .find("The following dependencies have not been able to check:")
            .unwrap();
        assert!(up_to_date < unresolved);
        assert!(out.contains("group: org.foo name: gone version: 1.0\n"));
        assert!(!out.contains("-->"));
    }

    #[test]
    fn test_format_unresolved_layout() {
        let mut summary = CheckSummary::new("build.gradle");
        summary.add(Classification::Unresolved(dep("gone", "1.0", None)));

        let out = render(&summary, Verbosity::Normal);
        assert_eq!(
            out,
            "\nGreat! Your project is up to date :)\n\
             The following dependencies have not been able to check:\n\n\
             group: org.foo name: gone version: 1.0\n"
        );
    }

    #[test]
    fn test_format_resolved_order() {
        let mut summary = CheckSummary::new("build.gradle");
        summary.add(Classification::Resolved(dep("b", "1.0", Some("2.0"))));
        summary.add(Classification::Resolved(dep("a", "1.0", Some("2.0"))));

        let out = render(&summary, Verbosity::Normal);
        assert!(out.find("name: b").unwrap() < out.find("name: a").unwrap());
    }

    #[test]
    fn test_format_verbose_sections() {
        let mut summary = CheckSummary::new("build.gradle");
        summary.scanned = 2;
        summary.add(Classification::UpToDate(dep("same", "1.0", Some("1.0"))));
        summary.add(Classification::Unresolved(dep("broken", "1.0", None)));
        summary.add_failure("org.foo:broken", "connection refused");

        let normal = render(&summary, Verbosity::Normal);
        assert!(!normal.contains("Up to date:"));
        assert!(!normal.contains("Lookup failures:"));

        let verbose = render(&summary, Verbosity::Verbose);
        assert!(verbose.contains("Up to date:"));
        assert!(verbose.contains("group: org.foo name: same version: 1.0"));
        assert!(verbose.contains("Lookup failures:"));
        assert!(verbose.contains("org.foo:broken: connection refused"));
        assert!(verbose.contains("Scanned 2 coordinate(s) in build.gradle"));
    }

    #[test]
    fn test_format_deterministic() {
        let mut summary = CheckSummary::new("build.gradle");
        summary.add(Classification::Resolved(dep("bar", "1.0.0", Some("1.2.0"))));
        summary.add(Classification::Unresolved(dep("gone", "1.0", None)));

        assert_eq!(
            render(&summary, Verbosity::Normal),
            render(&summary, Verbosity::Normal)
        );
    }
}
