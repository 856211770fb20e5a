//! Diagnostic logging setup
//!
//! Diagnostics go to stderr through `tracing`, leaving stdout to the report.
//! `RUST_LOG` takes precedence over the level derived from CLI flags.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Log level implied by the verbosity flags
pub fn level_for(verbose: bool, quiet: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::WARN
    }
}

/// Install the global subscriber. Calling this more than once is harmless.
pub fn init(verbose: bool, quiet: bool) {
    let level = level_for(verbose, quiet);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vleas={}", level.as_str().to_lowercase())));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(false, false), Level::WARN);
        assert_eq!(level_for(true, false), Level::DEBUG);
        assert_eq!(level_for(false, true), Level::ERROR);
    }

    #[test]
    fn test_init_twice() {
        init(false, true);
        init(true, false);
    }
}
