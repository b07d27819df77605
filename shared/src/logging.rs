//! Shared logging utilities for consistent, request-scoped tracing

use crate::types::RequestId;
use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Filter directive used when `RUST_LOG` is not set
pub fn default_filter(log_level: &str) -> String {
    format!("generator={log_level},shared={log_level},reqwest=warn,hyper=warn")
}

/// Initialize the stderr tracing subscriber.
///
/// `RUST_LOG` takes precedence over `log_level` when present.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let base_level = log_level.unwrap_or("info");
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(base_level)));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for request-aware info logging
#[macro_export]
macro_rules! request_info {
    ($request_id:expr, $($arg:tt)*) => {
        tracing::info!(
            request = %$request_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for request-aware warning logging
#[macro_export]
macro_rules! request_warn {
    ($request_id:expr, $($arg:tt)*) => {
        tracing::warn!(
            request = %$request_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for request-aware error logging
#[macro_export]
macro_rules! request_error {
    ($request_id:expr, $($arg:tt)*) => {
        tracing::error!(
            request = %$request_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for request-aware debug logging
#[macro_export]
macro_rules! request_debug {
    ($request_id:expr, $($arg:tt)*) => {
        tracing::debug!(
            request = %$request_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(details: &str) {
    info!(timestamp = format_timestamp(), "🚀 Starting {}", details);
}

/// Contextual logging helper for error conditions
pub fn log_error(request_id: &RequestId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        request = %request_id,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(request_id: &RequestId, message: &str) {
    info!(
        request = %request_id,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
