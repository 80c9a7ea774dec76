//! Logging bootstrap for the demo binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the embedding application.

use std::io;

use tracing::Level;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Result, WidgetError};

/// Logging configuration options
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to output
    pub level: Level,
    /// Show target/module name
    pub show_target: bool,
    /// Enable colored output
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            show_target: false,
            color: true,
        }
    }
}

impl LoggingConfig {
    /// Build a config from a level name such as `"debug"` or `"warn"`.
    pub fn from_level_name(name: &str) -> Result<Self> {
        let level = name
            .trim()
            .parse::<Level>()
            .map_err(|_| WidgetError::Config(format!("Unknown log level '{name}'")))?;

        Ok(Self {
            level,
            show_target: level >= Level::DEBUG,
            ..Self::default()
        })
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured level.
///
/// # Errors
/// Returns [`WidgetError::Config`] when a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ph_widgets={}", config.level)));

    let fmt_layer = fmt::layer()
        .with_target(config.show_target)
        .with_level(true)
        .with_ansi(config.color)
        .with_writer(io::stderr);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| WidgetError::Config(format!("Failed to initialize logging: {e}")))
}
