use a_reply_domain::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Builds the event filter: `RUST_LOG` when it is set and parses, otherwise the
/// configured level.
pub fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Installs a global fmt subscriber.
///
/// Returns `false` when a global subscriber is already installed; the existing one
/// is kept, so calling this more than once is harmless.
pub fn init_logging(config: &LoggingConfig) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config))
        .with_target(false)
        .try_init()
        .is_ok()
}
