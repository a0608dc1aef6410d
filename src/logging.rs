//! Tracing subscriber setup
//!
//! Logs go to stderr so rendered tables on stdout stay clean.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Default filter directive for the configured level
pub fn default_directive(config: &LoggingConfig) -> String {
    format!("covid_dashboard={0},covid_cli={0}", config.level)
}

/// Initialize the global subscriber
///
/// `RUST_LOG` takes precedence over the configured level. `format = "json"`
/// selects structured output, anything else the human-readable layer.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
