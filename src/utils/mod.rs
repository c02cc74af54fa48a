//! Utility modules for logging, environment access and error handling

pub mod env;
pub mod error;
pub mod lock;
pub mod logging;

// Re-export commonly used items
pub use env::{env_bool, env_opt};
pub use error::{log_error, result_to_option};
pub use lock::{with_read_lock, with_write_lock};
pub use logging::{init_logging, init_logging_from_config};
#[cfg(feature = "json-logging")]
pub use logging::init_json_logging;
