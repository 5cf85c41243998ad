//! Structured logging with tracing
//!
//! Installs the global subscriber for applications embedding the header
//! registry. Binding and resolution decisions are logged under the
//! `rch_application` and `rch_providers` targets, which can be given their own
//! level with `logging.registry_level`.

use std::ffi::OsStr;
use std::path::Path;

use rch_domain::error::{Error, Result};
use tracing::{Level, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

// Re-export LoggingConfig for convenience
pub use crate::config::LoggingConfig;
use crate::constants::{LOG_FILE_STEM, LOG_FILTER_ENV_VAR, REGISTRY_LOG_TARGETS};
use crate::error_ext::ErrorContext;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize logging with the provided configuration
///
/// `RCH_LOG`, when set, replaces the configured directives. Fails if a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_env(LOG_FILTER_ENV_VAR) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter_directives(config)?)
            .config_context("Invalid log filter directives")?,
    };

    Registry::default()
        .with(output_layers(config))
        .with(filter)
        .try_init()
        .map_err(|e| Error::configuration_with_source("Failed to install logging", e))?;

    info!(
        level = %config.level,
        registry_level = config.registry_level.as_deref().unwrap_or("inherit"),
        json = config.json_format,
        "Logging initialized"
    );
    Ok(())
}

/// Filter directives for `config`: the global level, then one directive per
/// registry target when `registry_level` is set
pub fn filter_directives(config: &LoggingConfig) -> Result<String> {
    let mut directives = vec![level_directive(&config.level)?];
    if let Some(registry_level) = &config.registry_level {
        let level = level_directive(registry_level)?;
        directives.extend(
            REGISTRY_LOG_TARGETS
                .iter()
                .map(|target| format!("{target}={level}")),
        );
    }
    Ok(directives.join(","))
}

fn level_directive(level: &str) -> Result<String> {
    parse_log_level(level).map(|level| level.as_str().to_ascii_lowercase())
}

fn output_layers(config: &LoggingConfig) -> Vec<BoxedLayer> {
    let mut layers: Vec<BoxedLayer> = Vec::with_capacity(2);

    let stdout = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);
    layers.push(if config.json_format {
        stdout.json().boxed()
    } else {
        stdout.boxed()
    });

    if let Some(path) = &config.file_output {
        let appender = tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| Path::new(".")),
            path.file_stem().unwrap_or_else(|| OsStr::new(LOG_FILE_STEM)),
        );
        let file = fmt::layer()
            .with_writer(appender)
            .with_ansi(false)
            .with_target(true);
        layers.push(if config.json_format {
            file.json().boxed()
        } else {
            file.boxed()
        });
    }

    layers
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Report where the configuration came from
pub fn log_config_loaded(config_path: &Path, found: bool) {
    if found {
        info!(path = %config_path.display(), "Header registry configuration loaded");
    } else {
        warn!(path = %config_path.display(), "Header registry configuration file not found");
    }
}
