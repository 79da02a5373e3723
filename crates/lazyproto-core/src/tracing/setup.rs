//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "LAZYPROTO_LOG";

/// Filter used when `LAZYPROTO_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "lazyproto=warn";

/// Initialize the lazyproto tracing/logging system.
///
/// Reads `LAZYPROTO_LOG` for per-module log levels.
/// Format: `LAZYPROTO_LOG=lazyproto_analysis::scanner=debug,lazyproto=info`
///
/// Logs go to stderr; stdout carries the run report only.
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
