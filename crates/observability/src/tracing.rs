//! Tracing/logging initialization.
//!
//! One JSON line per event on stdout, with the enclosing span's fields
//! attached so request and repository context show up next to the message.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info,tower_http=info,sqlx=warn";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    let json = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(false)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter(directives.as_deref()))
        .with(json)
        .try_init();
}

/// `directives` wins when it parses; otherwise fall back to `DEFAULT_FILTER`.
fn filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
