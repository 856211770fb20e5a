//! CLI argument parsing module for vleas

use crate::manifest::DEFAULT_MANIFEST;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

/// Parse duration string in format: N (seconds), Ns, Nms, Nm (minutes)
fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    let (num_str, millis_per_unit) = if let Some(n) = s.strip_suffix("ms") {
        (n, 1)
    } else if let Some(n) = s.strip_suffix('s') {
        (n, 1_000)
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 60 * 1_000)
    } else {
        (s, 1_000)
    };

    let num: u64 = num_str
        .parse()
        .map_err(|_| format!("invalid number in duration: {}", num_str))?;

    if num == 0 {
        return Err("duration must be greater than zero".to_string());
    }

    let millis = num
        .checked_mul(millis_per_unit)
        .ok_or_else(|| format!("duration too large: {}", s))?;

    Ok(Duration::from_millis(millis))
}

/// Checks a build manifest for outdated dependencies
#[derive(Parser, Debug, Clone)]
#[command(
    name = "vleas",
    version,
    about = "be always up to date, extremely fast ;)",
    long_about = "Vleas scans a build manifest for group:name:version coordinates and \
                  reports which of them have a newer release on Maven Central."
)]
pub struct CliArgs {
    /// Load deps from FILE
    #[arg(short, long, global = true, value_name = "FILE", default_value = DEFAULT_MANIFEST)]
    pub file: PathBuf,

    /// Config file (default: vleas.toml next to the manifest, if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // Registry options
    /// Base URL of a Maven Central compatible search service
    #[arg(long, global = true, value_name = "URL")]
    pub registry_url: Option<String>,

    /// Maximum number of concurrent registry lookups
    #[arg(short, long, global = true, value_name = "N")]
    pub jobs: Option<usize>,

    /// Per-request timeout (e.g., 30, 30s, 500ms, 2m)
    #[arg(long, global = true, value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    /// Retry failed registry requests this many times
    #[arg(long, global = true, value_name = "N")]
    pub retries: Option<u32>,

    /// Report failed lookups as unresolved instead of aborting
    #[arg(long, global = true)]
    pub keep_going: bool,

    // Output options
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Enable quiet mode - only the report and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// check for new deps
    #[command(visible_alias = "c")]
    Check,

    /// update all deps to latest version (not supported yet)
    #[command(visible_alias = "u")]
    Update,
}

impl CliArgs {
    /// Whether colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").is_none()
    }

    /// Whether progress feedback should be drawn
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json
    }
}
