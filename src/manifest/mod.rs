//! Manifest file access and coordinate extraction
//!
//! This module provides:
//! - Reading the manifest file into memory
//! - Extraction of `group:name:version` coordinates from its text

mod coordinates;

pub use coordinates::extract_coordinates;

use crate::error::ManifestError;
use std::path::Path;

/// Default manifest looked up when `--file` is not given
pub const DEFAULT_MANIFEST: &str = "build.gradle";

/// Read the whole manifest into memory.
///
/// No format validation is done here; anything that is not a coordinate is
/// ignored later by the extractor.
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ManifestError::not_found(path)
        } else {
            ManifestError::read_error(path, e)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_manifest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("build.gradle");
        fs::write(&path, "implementation 'org.foo:bar:1.0.0'\n").unwrap();

        let content = read_manifest(&path).unwrap();
        assert_eq!(extract_coordinates(&content).len(), 1);
    }

    #[test]
    fn test_read_manifest_missing() {
        let dir = TempDir::new().unwrap();
        let result = read_manifest(&dir.path().join("missing.gradle"));
        assert!(matches!(result, Err(ManifestError::NotFound { .. })));
    }

    #[test]
    fn test_read_manifest_directory() {
        let dir = TempDir::new().unwrap();
        let result = read_manifest(dir.path());
        assert!(result.is_err());
    }
}
