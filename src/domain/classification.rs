//! Classification result for a single dependency

use super::Dependency;

/// Outcome of comparing a declared version with the registry's latest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A different latest version is known
    Resolved(Dependency),
    /// The registry could not confirm the declared version
    Unresolved(Dependency),
    /// Declared version matches the latest one
    UpToDate(Dependency),
}
