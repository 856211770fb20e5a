//! Check orchestrator for coordinating the whole pipeline
//!
//! This module provides:
//! - Workflow coordination: read → extract → fetch → classify → dedup
//! - Parallel registry queries bounded by a semaphore, merged back in
//!   extraction order
//! - Strict (abort on first failure) and keep-going failure handling

use crate::check::classify;
use crate::config::Settings;
use crate::domain::{CheckSummary, Coordinate};
use crate::error::{AppError, CommandError, RegistryError};
use crate::manifest::{extract_coordinates, read_manifest};
use crate::progress::Progress;
use crate::registry::{HttpClient, MavenCentralAdapter, Registry};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

type Lookup = JoinHandle<Result<Option<String>, RegistryError>>;

/// Orchestrator for the check workflow
pub struct Orchestrator {
    /// Registry used for latest-version lookups
    registry: Arc<dyn Registry>,
    /// Maximum concurrent lookups
    jobs: usize,
    /// Whether lookup failures become unresolved entries
    keep_going: bool,
    /// Whether to draw progress on stderr
    show_progress: bool,
}

impl Orchestrator {
    /// Create an orchestrator talking to the configured Maven Central endpoint
    pub fn new(settings: &Settings) -> Result<Self, AppError> {
        let client = HttpClient::with_timeout(settings.timeout)?.with_max_retries(settings.retries);
        let adapter = MavenCentralAdapter::with_base_url(client, &settings.registry_url)?;

        Ok(Self::with_registry(
            Arc::new(adapter),
            settings.jobs,
            settings.keep_going,
        ))
    }

    /// Create an orchestrator with a custom registry (for testing)
    pub fn with_registry(registry: Arc<dyn Registry>, jobs: usize, keep_going: bool) -> Self {
        Self {
            registry,
            jobs: jobs.max(1),
            keep_going,
            show_progress: false,
        }
    }

    /// Enable or disable progress display
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Run the check workflow on a manifest file
    pub async fn check(&self, path: &Path) -> Result<CheckSummary, AppError> {
        let content = read_manifest(path)?;
        let summary = self.check_text(path, &content).await?;
        Ok(summary)
    }

    /// Run the check workflow on manifest text already in memory
    pub async fn check_text(
        &self,
        file: impl Into<PathBuf>,
        content: &str,
    ) -> Result<CheckSummary, RegistryError> {
        let file = file.into();
        let coordinates = extract_coordinates(content);
        info!(
            file = %file.display(),
            count = coordinates.len(),
            "extracted coordinates"
        );

        let mut summary = CheckSummary::new(file);
        summary.scanned = coordinates.len();

        let mut progress = Progress::new(self.show_progress);
        progress.start(coordinates.len() as u64, "Checking dependencies");

        let lookups = self.spawn_lookups(&coordinates);
        let mut pending = coordinates.into_iter().zip(lookups);
        let mut failure = None;

        for (coordinate, lookup) in pending.by_ref() {
            progress.set_message(&format!("Checking {}", coordinate.package()));

            let outcome = match lookup.await {
                Ok(outcome) => outcome,
                Err(e) => Err(RegistryError::network_error(
                    coordinate.package(),
                    self.registry.registry_name(),
                    format!("lookup task failed: {}", e),
                )),
            };

            match outcome {
                Ok(latest) => {
                    debug!(
                        coordinate = %coordinate,
                        latest = latest.as_deref().unwrap_or(""),
                        "lookup finished"
                    );
                    summary.add(classify(coordinate, latest.as_deref()));
                }
                Err(e) if self.keep_going => {
                    warn!(package = %coordinate.package(), error = %e, "lookup failed");
                    summary.add_failure(coordinate.package(), e.to_string());
                    summary.add(classify(coordinate, None));
                }
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
            progress.inc();
        }
        progress.finish_and_clear();

        if let Some(e) = failure {
            for (_, lookup) in pending {
                lookup.abort();
            }
            return Err(e);
        }

        Ok(summary.finalize())
    }

    /// Start one lookup task per coordinate; at most `jobs` run at once
    fn spawn_lookups(&self, coordinates: &[Coordinate]) -> Vec<Lookup> {
        let semaphore = Arc::new(Semaphore::new(self.jobs));

        coordinates
            .iter()
            .map(|coordinate| {
                let registry = Arc::clone(&self.registry);
                let semaphore = Arc::clone(&semaphore);
                let group = coordinate.group.clone();
                let name = coordinate.name.clone();

                tokio::spawn(async move {
                    let _permit = semaphore.acquire_owned().await.ok();
                    registry.fetch_latest(&group, &name).await
                })
            })
            .collect()
    }
}

/// Rewriting manifests is not implemented; this always fails.
pub fn update(path: &Path) -> Result<(), CommandError> {
    debug!(file = %path.display(), "update requested");
    Err(CommandError::unsupported(
        "update",
        format!("{} was left unchanged", path.display()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Registry stub answering from a fixed table
    struct StubRegistry {
        latest: HashMap<String, String>,
        failing: Vec<String>,
        calls: AtomicUsize,
    }

    impl StubRegistry {
        fn new() -> Self {
            Self {
                latest: HashMap::new(),
                failing: Vec::new(),
                calls: AtomicUsize::new(0),
            }
        }

        fn with_latest(mut self, package: &str, version: &str) -> Self {
            self.latest.insert(package.to_string(), version.to_string());
            self
        }

        fn with_failure(mut self, package: &str) -> Self {
            self.failing.push(package.to_string());
            self
        }
    }

    #[async_trait]
    impl Registry for StubRegistry {
        fn registry_name(&self) -> &'static str {
            "stub"
        }

        async fn fetch_latest(
            &self,
            group: &str,
            name: &str,
        ) -> Result<Option<String>, RegistryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let package = format!("{}:{}", group, name);
            if self.failing.contains(&package) {
                return Err(RegistryError::network_error(
                    package,
                    "stub",
                    "connection refused",
                ));
            }
            Ok(self.latest.get(&package).cloned())
        }
    }

    fn orchestrator(registry: StubRegistry, keep_going: bool) -> Orchestrator {
        Orchestrator::with_registry(Arc::new(registry), 4, keep_going)
    }

    #[tokio::test]
    async fn test_check_text_outdated() {
        let registry = StubRegistry::new().with_latest("org.foo:bar", "1.2.0");
        let summary = orchestrator(registry, false)
            .check_text("build.gradle", "implementation 'org.foo:bar:1.0.0'")
            .await
            .unwrap();

        assert_eq!(summary.scanned, 1);
        assert_eq!(summary.resolved.len(), 1);
        assert_eq!(summary.resolved[0].latest_version(), Some("1.2.0"));
        assert!(summary.unresolved.is_empty());
    }

    #[tokio::test]
    async fn test_check_text_preserves_extraction_order() {
        let mut registry = StubRegistry::new();
        let mut text = String::new();
        for i in 0..20 {
            registry = registry.with_latest(&format!("g:a{}", i), "9.9");
            text.push_str(&format!("'g:a{}:1.0'\n", i));
        }

        let summary = orchestrator(registry, false)
            .check_text("build.gradle", &text)
            .await
            .unwrap();

        let names: Vec<_> = summary.resolved.iter().map(|d| d.name().to_string()).collect();
        let expected: Vec<_> = (0..20).map(|i| format!("a{}", i)).collect();
        assert_eq!(names, expected);
    }

    #[tokio::test]
    async fn test_check_text_dedups_resolved_only() {
        let registry = StubRegistry::new().with_latest("org.foo:bar", "2.0");
        let text = "'org.foo:bar:1.0' 'org.foo:gone:1.0' 'org.foo:bar:1.0' 'org.foo:gone:1.0'";

        let summary = orchestrator(registry, false)
            .check_text("build.gradle", text)
            .await
            .unwrap();

        assert_eq!(summary.scanned, 4);
        assert_eq!(summary.resolved.len(), 1);
        assert_eq!(summary.unresolved.len(), 2);
    }

    #[tokio::test]
    async fn test_check_text_strict_failure_aborts() {
        let registry = StubRegistry::new()
            .with_latest("org.foo:bar", "2.0")
            .with_failure("org.foo:broken");
        let text = "'org.foo:bar:1.0' 'org.foo:broken:1.0'";

        let result = orchestrator(registry, false)
            .check_text("build.gradle", text)
            .await;

        assert!(matches!(result, Err(RegistryError::NetworkError { .. })));
    }

    #[tokio::test]
    async fn test_check_text_keep_going_records_failure() {
        let registry = StubRegistry::new()
            .with_latest("org.foo:bar", "2.0")
            .with_failure("org.foo:broken");
        let text = "'org.foo:bar:1.0' 'org.foo:broken:1.0'";

        let summary = orchestrator(registry, true)
            .check_text("build.gradle", text)
            .await
            .unwrap();

        assert_eq!(summary.resolved.len(), 1);
        assert_eq!(summary.unresolved.len(), 1);
        assert_eq!(summary.unresolved[0].name(), "broken");
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].package, "org.foo:broken");
    }

    #[tokio::test]
    async fn test_check_text_without_coordinates() {
        let registry = Arc::new(StubRegistry::new());
        let orchestrator = Orchestrator::with_registry(registry.clone(), 4, false);

        let summary = orchestrator
            .check_text("build.gradle", "plugins { id 'java' }")
            .await
            .unwrap();

        assert_eq!(summary.scanned, 0);
        assert!(summary.resolved.is_empty());
        assert!(summary.unresolved.is_empty());
        assert_eq!(registry.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_check_missing_file() {
        let orchestrator = orchestrator(StubRegistry::new(), false);
        let result = orchestrator
            .check(Path::new("/nonexistent/build.gradle"))
            .await;
        assert!(matches!(result, Err(AppError::Manifest(_))));
    }

    #[test]
    fn test_with_registry_clamps_jobs() {
        let orchestrator = Orchestrator::with_registry(Arc::new(StubRegistry::new()), 0, false);
        assert_eq!(orchestrator.jobs, 1);
    }

    #[test]
    fn test_new_from_settings() {
        let orchestrator = Orchestrator::new(&Settings::default()).unwrap();
        assert_eq!(orchestrator.registry.registry_name(), "Maven Central");
        assert_eq!(orchestrator.jobs, 10);
        assert!(!orchestrator.keep_going);
    }

    #[test]
    fn test_new_rejects_bad_registry_url() {
        let settings = Settings {
            registry_url: "not a url".to_string(),
            ..Settings::default()
        };
        assert!(matches!(
            Orchestrator::new(&settings),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_update_is_unsupported() {
        let result = update(Path::new("build.gradle"));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("not supported"));
        assert!(err.to_string().contains("build.gradle"));
    }
}
