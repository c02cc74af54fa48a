//! Logging utilities
//!
//! Provides simple logging initialization that:
//! - Respects RUST_LOG environment variable
//! - Allows configuration via config file
//! - Respects NO_COLOR
//!
//! # Usage
//! ```rust,no_run
//! use autoimport::utils::init_logging;
//!
//! init_logging(None); // Uses RUST_LOG or defaults to "info"
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::utils::env::env_opt;

/// Default filter when neither RUST_LOG nor a config filter is set
pub const DEFAULT_FILTER: &str = "info";

/// Pick the effective filter directive
///
/// RUST_LOG always takes precedence, then the config filter, then "info".
fn resolve_filter(rust_log: Option<String>, filter: Option<&str>) -> String {
    rust_log
        .or_else(|| filter.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

fn env_filter(filter: Option<&str>) -> EnvFilter {
    EnvFilter::new(resolve_filter(env_opt("RUST_LOG"), filter))
}

/// Initialize logging
///
/// # Arguments
/// * `filter` - Optional log filter from config (e.g., "info", "autoimport=debug").
///              If None, uses RUST_LOG environment variable or defaults to "info"
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(filter: Option<&str>) {
    // Human-readable, to stderr, with targets
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(env_opt("NO_COLOR").is_none()),
        )
        .with(env_filter(filter))
        .try_init();
}

/// Initialize logging with JSON output (for log aggregation)
#[cfg(feature = "json-logging")]
pub fn init_json_logging(filter: Option<&str>) {
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_current_span(true)
                .with_span_list(true),
        )
        .with(env_filter(filter))
        .try_init();
}

/// Initialize logging from an optional [`LoggingConfig`]
pub fn init_logging_from_config(config: Option<&LoggingConfig>) {
    let filter = config.and_then(|c| c.filter.as_deref());

    if config.map(|c| c.json_format).unwrap_or(false) {
        #[cfg(feature = "json-logging")]
        {
            init_json_logging(filter);
        }
        #[cfg(not(feature = "json-logging"))]
        {
            // Fall back to regular logging if json-logging feature not enabled
            init_logging(filter);
        }
    } else {
        init_logging(filter);
    }
}
