//! Logging Infrastructure
//!
//! Structured logging via `tracing-subscriber`. The filter comes from
//! `RUST_LOG`; `LOG_FORMAT=json` switches to JSON lines for log shippers.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "lunch_server=info,tower_http=info";

/// Initialize the global logger
pub fn init_logger() {
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    init_logger_with(None, json);
}

/// Initialize the global logger with an explicit fallback filter and format
pub fn init_logger_with(default_filter: Option<&str>, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.unwrap_or(DEFAULT_FILTER).into());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
