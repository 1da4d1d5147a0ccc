//! Tracing initialization and configuration.
//!
//! Both initializers share one guard: the first call in a process installs
//! the global subscriber and every later call, of either kind, is a no-op.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults;

static INIT: Once = Once::new();

/// Initialize the lexgraph tracing/logging system.
///
/// Reads `LEXGRAPH_LOG` for per-crate log levels.
/// Format: `LEXGRAPH_LOG=lexgraph_graph=debug,lexgraph_expand=info`
///
/// Falls back to `lexgraph=info` if `LEXGRAPH_LOG` is not set or is invalid.
///
/// Returns `true` only if this call installed the subscriber.
pub fn init_tracing() -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(defaults::LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(defaults::DEFAULT_LOG_FILTER));

        installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init()
            .is_ok();
    });
    installed
}

/// Initialize tracing with JSON output and a custom filter string
/// (for batch jobs whose logs are shipped elsewhere).
///
/// Returns `false`, leaving the existing subscriber in place, when tracing
/// was already initialized by either function.
pub fn init_tracing_with_filter(filter: &str) -> bool {
    let filter = EnvFilter::new(filter);

    let mut installed = false;
    INIT.call_once(|| {
        installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .is_ok();
    });
    installed
}
