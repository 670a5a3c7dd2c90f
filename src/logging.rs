use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`).
pub const LOG_ENV: &str = "PARTY_SUPPLY_LOG";

/// Install the stderr subscriber. Defaults to `warn` when the variable is unset.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
