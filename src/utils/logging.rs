//! Logger setup.

use env_logger::{Builder, Env};

/// Filter used when neither `RUST_LOG` nor the config names one.
pub const DEFAULT_FILTER: &str = "warn";

/// Returns the filter to start the logger with.
pub fn resolve_filter(configured: &str) -> &str {
    let configured = configured.trim();
    if configured.is_empty() {
        DEFAULT_FILTER
    } else {
        configured
    }
}

/// Installs `env_logger`. `RUST_LOG` wins over the configured level.
/// Calling it twice is harmless.
pub fn init(configured: &str) {
    let env = Env::default().default_filter_or(resolve_filter(configured));
    let _ = Builder::from_env(env).format_timestamp_millis().try_init();
}
