//! Coordinate and dependency value types

use std::fmt;

/// A `group:name:version` triple as found in manifest text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Namespace identifier (e.g., `org.apache.commons`)
    pub group: String,
    /// Artifact identifier
    pub name: String,
    /// Version exactly as written in the manifest
    pub version: String,
}

impl Coordinate {
    /// Creates a new coordinate
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Returns the `group:name` key used when talking to the registry
    pub fn package(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

/// A coordinate paired with the latest version the registry reported.
///
/// Equality and hashing cover all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dependency {
    group: String,
    name: String,
    current_version: String,
    latest_version: Option<String>,
}

impl Dependency {
    /// Creates a new dependency. An empty latest version is stored as unknown.
    pub fn new(coordinate: Coordinate, latest_version: Option<String>) -> Self {
        Self {
            group: coordinate.group,
            name: coordinate.name,
            current_version: coordinate.version,
            latest_version: latest_version.filter(|v| !v.is_empty()),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current_version(&self) -> &str {
        &self.current_version
    }

    /// Latest version reported by the registry, if any
    pub fn latest_version(&self) -> Option<&str> {
        self.latest_version.as_deref()
    }
}
