//! Logging system configuration and initialization
//!
//! - `RUST_LOG` wins over the configured level when set
//! - HTTP stack internals are capped at `warn` unless TRACE is requested
//! - Console and/or daily rolling file output, plain or JSON
//! - Timestamps in Argentina time (UTC-3), the store region we target

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Result, anyhow};
use chrono::{FixedOffset, Utc};
use once_cell::sync::Lazy;
use tracing::{debug, info};
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub use crate::infrastructure::config::LoggingConfig;

const LOG_FILE_NAME: &str = "steam-price-card.log";

/// Dependencies whose logs are noise below TRACE
const QUIET_TARGETS: [&str; 4] = ["reqwest", "hyper", "hyper_util", "h2"];

// Keeps the file writer alive for the life of the process
static LOG_GUARDS: Lazy<Mutex<Vec<WorkerGuard>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Time formatter for Argentina Time (UTC-3)
struct ArtTimeFormatter;

impl FormatTime for ArtTimeFormatter {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        let offset = FixedOffset::west_opt(3 * 3600).ok_or(std::fmt::Error)?;
        let now = Utc::now().with_timezone(&offset);
        write!(w, "{}", now.format("%Y-%m-%d %H:%M:%S%.3f %:z"))
    }
}

/// Get the log directory relative to the executable location
pub fn get_log_directory() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(std::path::Path::to_path_buf))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    exe_dir.join("logs")
}

/// Build the filter directive string for a configuration.
fn filter_directives(config: &LoggingConfig) -> String {
    let mut directives = vec![config.level.clone()];

    if !config.level.eq_ignore_ascii_case("trace") {
        directives.extend(QUIET_TARGETS.iter().map(|target| format!("{target}=warn")));
    }

    let mut modules: Vec<_> = config.module_filters.iter().collect();
    modules.sort();
    directives.extend(modules.into_iter().map(|(module, level)| format!("{module}={level}")));

    directives.join(",")
}

/// Initialize logging with custom configuration.
///
/// A second call leaves the first subscriber in place and returns `Ok`.
pub fn init_logging_with_config(config: &LoggingConfig) -> Result<()> {
    if !config.console_output && !config.file_output {
        return Err(anyhow!("No logging output configured"));
    }

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter_directives(config))
            .map_err(|e| anyhow!("Invalid log filter '{}': {}", config.level, e))?,
    };

    let console_layer = config.console_output.then(|| {
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_timer(ArtTimeFormatter)
            .with_target(false);
        if config.json_format {
            layer.json().boxed()
        } else {
            layer.boxed()
        }
    });

    let mut log_dir = None;
    let file_layer = if config.file_output {
        let dir = config.log_dir.clone().unwrap_or_else(get_log_directory);
        std::fs::create_dir_all(&dir)
            .map_err(|e| anyhow!("Failed to create log directory {:?}: {}", dir, e))?;

        let (writer, guard) = non_blocking(rolling::daily(&dir, LOG_FILE_NAME));
        if let Ok(mut guards) = LOG_GUARDS.lock() {
            guards.push(guard);
        }
        log_dir = Some(dir);

        let layer = fmt::layer()
            .with_writer(writer)
            .with_timer(ArtTimeFormatter)
            .with_ansi(false);
        Some(if config.json_format {
            layer.json().with_target(true).with_line_number(true).boxed()
        } else {
            layer.with_target(false).boxed()
        })
    } else {
        None
    };

    let installed = Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();

    if let Err(e) = installed {
        debug!("Logging already initialized: {}", e);
        return Ok(());
    }

    info!("Logging system initialized (level: {})", config.level);
    if let Some(dir) = log_dir {
        info!("Log directory: {:?}", dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(config.console_output);
        assert!(!config.file_output);
    }

    #[test]
    fn test_filter_quiets_http_stack() {
        let directives = filter_directives(&LoggingConfig::default());
        assert!(directives.starts_with("info,"));
        assert!(directives.contains("reqwest=warn"));
        assert!(directives.contains("hyper=warn"));
    }

    #[test]
    fn test_trace_keeps_http_stack() {
        let config = LoggingConfig {
            level: "trace".to_string(),
            module_filters: HashMap::from([("scraper".to_string(), "info".to_string())]),
            ..LoggingConfig::default()
        };
        assert_eq!(filter_directives(&config), "trace,scraper=info");
    }

    #[test]
    fn test_no_output_is_rejected() {
        let config = LoggingConfig {
            console_output: false,
            file_output: false,
            ..LoggingConfig::default()
        };
        assert!(init_logging_with_config(&config).is_err());
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            file_output: true,
            log_dir: Some(dir.path().to_path_buf()),
            ..LoggingConfig::default()
        };

        assert!(init_logging_with_config(&config).is_ok());
        assert!(init_logging_with_config(&config).is_ok());
        assert!(dir.path().exists());
    }

    #[test]
    fn test_log_directory_is_named_logs() {
        assert!(get_log_directory().to_string_lossy().ends_with("logs"));
    }
}
