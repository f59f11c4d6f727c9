//! File-based logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::LogConfig;

pub const LOG_FILE_PREFIX: &str = "swap-history.log";

/// Initialize the logging system.
///
/// Sets up:
/// - Daily rotating log file in [`LogConfig::log_dir`], written non-blocking
/// - An optional stdout layer
/// - A panic hook that records panics before the default handler runs
///
/// Keep the returned guard alive for as long as logs should be flushed. `None` when
/// the log directory could not be created; logging then goes to stdout only.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("swap_history=info,warn"));

    let stdout_layer = config.log_to_stdout.then(|| fmt::layer().with_target(false).compact());

    let guard = match fs::create_dir_all(&config.log_dir) {
        Ok(()) => {
            let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .with(stdout_layer)
                .init();
            Some(guard)
        }
        Err(e) => {
            eprintln!("Warning: Failed to create log directory {}: {}", config.log_dir.display(), e);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_target(false).compact())
                .init();
            None
        }
    };

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        stdout = config.log_to_stdout,
        "Logging initialized"
    );

    setup_panic_hook();
    guard
}

/// Log panics with location and message, then defer to the default hook
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(location = %location, message = %message, "Application panic");

        default_panic(panic_info);
    }));
}
