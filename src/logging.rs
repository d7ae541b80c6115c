//! Diagnostic logging setup.
//!
//! User-facing progress goes through [`crate::ui::Reporter`]; `tracing` output
//! is for diagnosing resolution and fallback decisions and always goes to
//! stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "GIT_WORKFLOWS_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "git_workflows=debug"
    } else {
        "git_workflows=warn"
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
