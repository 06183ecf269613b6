//! tracing subscriber setup shared by the three binaries.
//!
//! Events go to stderr so stdout stays reserved for command output. `RUST_LOG`
//! overrides the per-binary default level.

use tracing_subscriber::{fmt, EnvFilter};

/// Default for the server: request-level events are useful.
pub const SERVER_LEVEL: &str = "info";

/// Default for the command-line tools: stay quiet unless something is off.
pub const CLI_LEVEL: &str = "warn";

pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A second init (tests, embedding) is not an error worth surfacing.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
