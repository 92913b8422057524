//! Shared logging utilities for consistent tracing output
//!
//! Diagnostics go to stderr so the human-readable report on stdout stays clean.

use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Level used when none is given on the command line
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Build the filter directive string for a base level
pub fn filter_directives(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or(DEFAULT_LOG_LEVEL);
    format!("probe={base_level},shared={base_level},reqwest=warn")
}

/// Initialize tracing subscriber with an optional log level
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = filter_directives(log_level);

    // A second init (e.g. from tests) must not panic
    let _ = fmt()
        .with_env_filter(EnvFilter::new(&env_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Contextual logging helper for startup messages
pub fn log_startup(operation: &str, details: &str) {
    info!(
        operation = %operation,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(operation: &str, context: &str, error: &dyn std::fmt::Display) {
    error!(
        operation = %operation,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(operation: &str, message: &str) {
    info!(
        operation = %operation,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
