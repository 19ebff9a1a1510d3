//! Tracing setup for the desktop binary.
//!
//! `RUST_LOG` selects the filter (default `trade_value_calculator=info`);
//! `LOG_FORMAT=pretty` switches from compact single-line output to the
//! multi-line pretty printer.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing_subscriber::{fmt as ts_fmt, prelude::*, EnvFilter};

static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);

pub const DEFAULT_LOG_LEVEL: &str = "trade_value_calculator=info";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level_filter: String,
    pub use_pretty_format: bool,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            level_filter: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            use_pretty_format: env::var("LOG_FORMAT")
                .map(|format| format.eq_ignore_ascii_case("pretty"))
                .unwrap_or(false),
        }
    }
}

pub fn init_logging() {
    init_logging_with_config(LoggingConfig::from_env());
}

pub fn init_logging_with_config(config: LoggingConfig) {
    if LOGGING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    let env_filter = EnvFilter::try_new(&config.level_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    if config.use_pretty_format {
        tracing_subscriber::registry()
            .with(ts_fmt::layer().pretty().with_target(true))
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(ts_fmt::layer().compact().with_target(false))
            .with(env_filter)
            .init();
    }
}
