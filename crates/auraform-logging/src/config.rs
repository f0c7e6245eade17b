// ABOUTME: Configuration structures and environment variable parsing for logging
// ABOUTME: Handles log levels, output targets, verbosity flags and the log file path

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use tracing::Level;

/// Wrapper for tracing::Level that implements Serialize/Deserialize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub Level);

impl Serialize for LogLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let level_str = match self.0 {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        serializer.serialize_str(level_str)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<LogLevel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let level = parse_log_level(&s).map_err(serde::de::Error::custom)?;
        Ok(LogLevel(level))
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        LogLevel(level)
    }
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        log_level.0
    }
}

/// Main configuration structure for the logging system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Global log level (trace, debug, info, warn, error)
    pub level: LogLevel,

    /// Per-module log level overrides
    pub module_levels: HashMap<String, LogLevel>,

    /// Output configuration
    pub output: OutputConfig,

    /// File logging configuration
    pub file: FileConfig,
}

/// Configuration for different output targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Enable console output (stderr)
    pub console: bool,

    /// Enable file output
    pub file: bool,

    /// Enable JSON structured output on stderr
    pub json: bool,

    /// Pretty-print console output (vs compact)
    pub pretty_console: bool,
}

/// Configuration for file logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Path to log file (defaults to ~/.config/auraform/auraform.log)
    pub path: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(Level::WARN),
            module_levels: HashMap::new(),
            output: OutputConfig::default(),
            file: FileConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            console: true,
            file: false,
            json: false,
            pretty_console: false,
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            path: default_log_file_path(),
        }
    }
}

impl LoggingConfig {
    /// Apply environment variable overrides to this configuration.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| env::var(key).ok())
    }

    /// Apply overrides using an arbitrary variable lookup.
    ///
    /// `AURAFORM_LOG` wins over `RUST_LOG`; the remaining switches only need to be present.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level_str) = lookup("AURAFORM_LOG") {
            self.level =
                LogLevel(parse_log_level(&level_str).context("Invalid AURAFORM_LOG level")?);
        } else if let Some(level_str) = lookup("RUST_LOG") {
            // Parse RUST_LOG format (e.g., "debug" or "auraform_core=debug,info")
            self.parse_rust_log(&level_str)?;
        }

        if lookup("AURAFORM_LOG_JSON").is_some() {
            self.output.json = true;
        }

        if lookup("AURAFORM_LOG_NO_CONSOLE").is_some() {
            self.output.console = false;
        }

        if lookup("AURAFORM_LOG_NO_FILE").is_some() {
            self.output.file = false;
        }

        Ok(())
    }

    /// Raise the global level by a number of `-v` flags.
    ///
    /// Zero keeps the configured level; the result is never quieter than configured.
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        let requested = match verbosity {
            0 => return self,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        // tracing orders levels by verbosity: TRACE > DEBUG > INFO
        if requested > self.level.0 {
            self.level = LogLevel(requested);
        }
        self
    }

    /// Enable file output at the given path.
    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.output.file = true;
        self.file.path = path;
        self
    }

    /// Parse RUST_LOG format environment variable.
    fn parse_rust_log(&mut self, rust_log: &str) -> Result<()> {
        for directive in rust_log.split(',') {
            let directive = directive.trim();
            if directive.is_empty() {
                continue;
            }

            if let Some((module, level_str)) = directive.split_once('=') {
                let level = parse_log_level(level_str).context(format!(
                    "Invalid log level '{level_str}' for module '{module}'"
                ))?;
                self.module_levels
                    .insert(module.to_string(), LogLevel(level));
            } else {
                self.level = LogLevel(
                    parse_log_level(directive)
                        .context(format!("Invalid global log level '{directive}'"))?,
                );
            }
        }
        Ok(())
    }
}

/// Get the default log file path: ~/.config/auraform/auraform.log
fn default_log_file_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("auraform").join("auraform.log")
    } else {
        // Fallback to current directory if config dir not available
        PathBuf::from("auraform.log")
    }
}

/// Parse a log level string (case-insensitive).
pub fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.trim().to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!(
            "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
            level_str
        ),
    }
}
