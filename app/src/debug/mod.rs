//! # Logging Infrastructure
//!
//! Structured logging via `tracing`, configured from the environment.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use delivery_app::debug;
//!
//! // Initialize at startup and keep the guard alive
//! let _guard = debug::init();
//!
//! tracing::info!(endpoint = "/api/auth/login", duration_ms = 234, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default: `delivery_app=info,warn`)
//! - `DELIVERY_LOG_DIR`: Directory for a daily-rotated `delivery-app.log`
//! - `NO_COLOR`: Disable ANSI colours on stderr

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init as init_logger;

use tracing_appender::non_blocking::WorkerGuard;

/// Initialize logging from the environment.
pub fn init() -> Option<WorkerGuard> {
    init_logger(&LogConfig::from_env())
}
