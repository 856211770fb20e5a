//! Maven Central Search API adapter
//!
//! Fetches the latest published version of an artifact from Maven Central.
//! API endpoint: https://search.maven.org/solrsearch/select
//!
//! Query format: q=g:"{groupId}" AND a:"{artifactId}"&rows=1&wt=json
//! Value consumed: response.docs[0].latestVersion

use crate::error::{ConfigError, RegistryError};
use crate::registry::{HttpClient, Registry};
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Maven Central base URL
pub const MAVEN_CENTRAL_URL: &str = "https://search.maven.org";

/// Search path below the base URL
const SEARCH_PATH: &str = "solrsearch/select";

/// Maven Central adapter
pub struct MavenCentralAdapter {
    client: HttpClient,
    endpoint: Url,
}

/// Maven Central search response.
///
/// Only `response.docs[0].latestVersion` is read. Any other shape (missing
/// keys, `null` documents, non-string versions) means no version is known.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct MavenSearchResponse(Value);

impl MavenSearchResponse {
    /// Latest version of the first document, if any
    fn into_latest_version(self) -> Option<String> {
        self.0
            .pointer("/response/docs/0/latestVersion")
            .and_then(Value::as_str)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }
}

impl MavenCentralAdapter {
    /// Create an adapter for a Maven Central compatible search service
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Result<Self, ConfigError> {
        let base = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&base)
            .and_then(|url| url.join(SEARCH_PATH))
            .map_err(|e| ConfigError::invalid_value("registry_url", format!("{}: {}", base_url, e)))?;

        Ok(Self { client, endpoint })
    }

    /// Build search URL for an exact group/artifact match
    fn build_url(&self, group: &str, name: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", &format!("g:\"{}\" AND a:\"{}\"", group, name))
            .append_pair("rows", "1")
            .append_pair("wt", "json");
        url
    }
}

#[async_trait]
impl Registry for MavenCentralAdapter {
    fn registry_name(&self) -> &'static str {
        "Maven Central"
    }

    async fn fetch_latest(&self, group: &str, name: &str) -> Result<Option<String>, RegistryError> {
        let url = self.build_url(group, name);
        let package = format!("{}:{}", group, name);
        debug!(%url, "querying registry");

        let response: MavenSearchResponse = self
            .client
            .get_json(&url, &package, self.registry_name())
            .await?;

        Ok(response.into_latest_version())
    }
}
