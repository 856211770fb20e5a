//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Optional timeout and a fixed User-Agent
//! - Opt-in exponential backoff retries (none by default)
//! - Mapping of transport and status failures to `RegistryError`

use crate::error::RegistryError;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::debug;

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("vleas/", env!("CARGO_PKG_VERSION"));

/// Base delay for exponential backoff (in milliseconds)
const BASE_DELAY_MS: u64 = 100;

/// HTTP client wrapper with retry logic
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    max_retries: u32,
}

impl HttpClient {
    /// Create a new HTTP client with transport defaults and no retries
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(None, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with the default User-Agent and an optional timeout
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, RegistryError> {
        Self::with_config(timeout, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Option<Duration>, user_agent: &str) -> Result<Self, RegistryError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| RegistryError::ClientBuild {
            message: e.to_string(),
        })?;

        Ok(Self {
            client,
            max_retries: 0,
        })
    }

    /// Set the maximum number of retries
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Perform a GET request with error context.
    ///
    /// Transport errors and `429 Too Many Requests` are retried when retries
    /// are configured. Any other non-success status fails immediately.
    pub async fn get_with_context(
        &self,
        url: &Url,
        package: &str,
        registry: &str,
    ) -> Result<reqwest::Response, RegistryError> {
        let mut last_error = None;
        let mut delay = BASE_DELAY_MS;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                debug!(package, attempt, delay_ms = delay, "retrying registry request");
                tokio::time::sleep(Duration::from_millis(delay)).await;
                delay *= 2;
            }

            match self.client.get(url.clone()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status == StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(RegistryError::http_status(
                            package,
                            registry,
                            status.as_u16(),
                        ));
                        continue;
                    }

                    if !status.is_success() {
                        return Err(RegistryError::http_status(
                            package,
                            registry,
                            status.as_u16(),
                        ));
                    }

                    return Ok(response);
                }
                Err(e) => {
                    last_error = Some(if e.is_timeout() {
                        RegistryError::timeout(package, registry)
                    } else {
                        RegistryError::network_error(package, registry, e.to_string())
                    });
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| RegistryError::network_error(package, registry, "unknown error")))
    }

    /// Perform a GET request and parse the JSON body
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &Url,
        package: &str,
        registry: &str,
    ) -> Result<T, RegistryError> {
        let response = self.get_with_context(url, package, registry).await?;

        response.json::<T>().await.map_err(|e| {
            RegistryError::invalid_response(
                package,
                registry,
                format!("failed to parse JSON: {}", e),
            )
        })
    }
}
