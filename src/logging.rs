//! Tracing setup for the `leftover` binary
//!
//! Logs go to stderr so they never mix with report or session output.
//! The filter comes from `LEFTOVER_LOG`, then `RUST_LOG`, then the default.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "LEFTOVER_LOG";

static TRACING_INIT: Once = Once::new();

/// Filter used when neither environment variable is set
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "leftover_cli=debug"
    } else {
        "leftover_cli=warn"
    }
}

/// Install the global subscriber. Later calls do nothing.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "leftover_cli=warn");
        assert_eq!(default_directive(true), "leftover_cli=debug");
    }
}
