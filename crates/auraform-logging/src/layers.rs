// ABOUTME: Layer constructors for the different logging output formats
// ABOUTME: Provides stderr console, rolling file and JSON layers plus the env filter

use anyhow::{Context, Result};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, format::FmtSpan},
};

use crate::config::{FileConfig, LoggingConfig, OutputConfig};

pub type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Create a console output layer writing to stderr.
///
/// Stdout is reserved for command output.
pub fn create_console_layer(config: &OutputConfig) -> Option<BoxedLayer> {
    if !config.console || config.json {
        return None;
    }

    let layer = if config.pretty_console {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .with_span_events(FmtSpan::CLOSE)
            .pretty()
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .compact()
            .boxed()
    };

    Some(layer)
}

/// Create a file output layer with daily rotation.
///
/// The returned guard flushes the background writer when dropped.
pub fn create_file_layer(config: &FileConfig) -> Result<(BoxedLayer, WorkerGuard)> {
    let directory = config
        .path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));

    fs::create_dir_all(directory).context(format!(
        "Failed to create log directory: {}",
        directory.display()
    ))?;

    let file_name = config
        .path
        .file_name()
        .and_then(|n| n.to_str())
        .context("Invalid log file path")?;

    let file_appender = rolling::daily(directory, file_name);
    let (non_blocking_writer, guard) = non_blocking(file_appender);

    let layer = fmt::layer()
        .with_writer(non_blocking_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .boxed();

    Ok((layer, guard))
}

/// Create a JSON output layer on stderr for structured logging.
pub fn create_json_layer(config: &OutputConfig) -> Option<BoxedLayer> {
    if !config.json {
        return None;
    }

    let layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .boxed();

    Some(layer)
}

/// Create an environment filter from the logging configuration.
pub fn create_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let mut filter = EnvFilter::new(format!("{}", config.level.0));

    // Add module-specific filters
    for (module, level) in &config.module_levels {
        filter = filter.add_directive(
            format!("{}={}", module, level.0)
                .parse()
                .context(format!("Invalid filter directive for module '{module}'"))?,
        );
    }

    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;
    use tempfile::tempdir;
    use tracing::Level;

    #[test]
    fn test_create_console_layer() {
        let config = OutputConfig {
            console: true,
            pretty_console: true,
            ..Default::default()
        };
        assert!(create_console_layer(&config).is_some());

        let config = OutputConfig {
            console: false,
            ..Default::default()
        };
        assert!(create_console_layer(&config).is_none());
    }

    #[test]
    fn test_json_replaces_console_layer() {
        let config = OutputConfig {
            console: true,
            json: true,
            ..Default::default()
        };
        assert!(create_console_layer(&config).is_none());
        assert!(create_json_layer(&config).is_some());

        let config = OutputConfig::default();
        assert!(create_json_layer(&config).is_none());
    }

    #[test]
    fn test_create_file_layer() {
        let temp_dir = tempdir().unwrap();
        let config = FileConfig {
            path: temp_dir.path().join("logs").join("test.log"),
        };

        let result = create_file_layer(&config);
        assert!(result.is_ok());
        assert!(temp_dir.path().join("logs").is_dir());
    }

    #[test]
    fn test_create_env_filter() {
        let mut config = LoggingConfig {
            level: LogLevel(Level::DEBUG),
            ..Default::default()
        };
        config
            .module_levels
            .insert("auraform_core".to_string(), LogLevel(Level::TRACE));

        assert!(create_env_filter(&config).is_ok());
    }
}
