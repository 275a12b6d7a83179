//! Logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{LogConfig, DEFAULT_LOG_FILTER};

const LOG_FILE_NAME: &str = "delivery-app.log";

/// Initialize the logging system
///
/// Sets up:
/// - Human-readable output on stderr
/// - Optional daily-rotated file in `log_dir`, written without blocking
/// - Panic hook that records panics through `tracing`
///
/// Keep the returned guard alive for as long as the program runs; dropping it
/// flushes and stops the file writer.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|e| {
        eprintln!("Warning: invalid log filter {:?} ({}), using default", config.log_level, e);
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });

    // Source locations on stderr only when debugging
    let verbose = config.is_debug_enabled();
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(verbose)
        .with_line_number(verbose)
        .with_ansi(config.ansi);

    let mut guard = None;
    let file_layer = match &config.log_dir {
        Some(dir) => match fs::create_dir_all(dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
                let (writer, worker_guard) = tracing_appender::non_blocking(appender);
                guard = Some(worker_guard);
                Some(
                    fmt::layer()
                        .with_writer(writer)
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_ansi(false),
                )
            }
            Err(e) => {
                eprintln!("Warning: Failed to create log directory {}: {}", dir.display(), e);
                None
            }
        },
        None => None,
    };

    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
    {
        eprintln!("Warning: logging already initialized: {}", e);
        return guard;
    }

    tracing::info!(
        log_level = %config.log_level,
        log_dir = ?config.log_dir,
        "Logging initialized"
    );

    setup_panic_hook();
    guard
}

/// Set up panic hook to log panics with their location
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(location = %location, message = %message, "Application panic");

        default_panic(panic_info);
    }));
}
