//! Registry adapters for fetching the latest published version
//!
//! This module provides:
//! - HTTP client shared foundation with optional retries
//! - Maven Central search adapter

mod client;
mod maven_central;

pub use client::HttpClient;
pub use maven_central::{MavenCentralAdapter, MAVEN_CENTRAL_URL};

use crate::error::RegistryError;
use async_trait::async_trait;

/// Trait for registry adapters.
///
/// `Ok(None)` means the registry answered but knows no latest version for
/// the artifact. `Err` is reserved for transport and decoding failures.
#[async_trait]
pub trait Registry: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Fetch the latest version of `group:name`
    async fn fetch_latest(&self, group: &str, name: &str) -> Result<Option<String>, RegistryError>;
}
