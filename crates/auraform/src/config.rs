// ABOUTME: Configuration file support for the auraform binary
// ABOUTME: Loads auraform.toml and sanitizes values before token derivation

use anyhow::Context;
use auraform_logging::{LoggingConfig, info, warn};
use auraform_types::{DEFAULT_INTENSITY, Elevation, TokenOptions};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Name of the configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "auraform.toml";

/// Largest configured intensity accepted without sanitizing
pub const MAX_CONFIG_INTENSITY: i32 = 100;

/// How a token set is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON object with camelCase keys
    #[default]
    Json,
    /// CSS custom properties and box-shadow rules
    Css,
    /// Aligned key/value lines
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Json => "json",
            OutputFormat::Css => "css",
            OutputFormat::Text => "text",
        };
        f.write_str(s)
    }
}

/// Output section of auraform.toml
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub elevation: Elevation,
}

/// Complete auraform.toml contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuraformConfig {
    /// Default token derivation options
    pub tokens: TokenOptions,

    pub output: OutputSettings,

    /// Logging settings, overridden by environment and flags
    pub logging: LoggingConfig,
}

impl AuraformConfig {
    /// Load from an explicit path, or from the default location when `None`.
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load_from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load and parse a specific configuration file
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validate the token settings
    pub fn validate(&self) -> Result<(), String> {
        let intensity = self.tokens.intensity;
        if !(0..=MAX_CONFIG_INTENSITY).contains(&intensity) {
            return Err(format!(
                "Token intensity {intensity} is outside 0..={MAX_CONFIG_INTENSITY}"
            ));
        }

        Ok(())
    }

    /// Get a sanitized version of the config with valid values
    pub fn sanitized(&self) -> Self {
        let mut config = self.clone();

        if let Err(reason) = self.validate() {
            warn!(
                original_intensity = self.tokens.intensity,
                default_intensity = DEFAULT_INTENSITY,
                reason = %reason,
                "Invalid configured intensity, using default"
            );
            config.tokens.intensity = DEFAULT_INTENSITY;
        } else {
            info!(
                intensity = config.tokens.intensity,
                mode = %config.tokens.mode,
                format = %config.output.format,
                elevation = %config.output.elevation,
                "Configuration validation passed"
            );
        }

        config
    }
}

/// `<config_dir>/auraform/auraform.toml`, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("auraform").join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use auraform_logging::Level;
    use auraform_types::{HIGH_CONTRAST_BOOST, ModeSetting};
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tracing_mock::{expect, subscriber};

    #[test]
    fn test_full_config_parsing() {
        let config = AuraformConfig::parse(
            r#"
            [tokens]
            intensity = 25
            mode = "dark"
            high_contrast = true

            [output]
            format = "css"
            elevation = "high"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.tokens.intensity, 25);
        assert_eq!(config.tokens.mode, ModeSetting::Dark);
        assert!(config.tokens.high_contrast);
        assert_eq!(config.output.format, OutputFormat::Css);
        assert_eq!(config.output.elevation, Elevation::High);
        assert_eq!(config.logging.level.0, Level::DEBUG);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = AuraformConfig::parse("[tokens]\nmode = \"light\"\n").unwrap();
        assert_eq!(config.tokens.intensity, DEFAULT_INTENSITY);
        assert_eq!(config.tokens.mode, ModeSetting::Light);
        assert!(!config.tokens.high_contrast);
        assert_eq!(config.output, OutputSettings::default());
        assert_eq!(config.logging.level.0, Level::WARN);
    }

    #[test]
    fn test_empty_config() {
        let config = AuraformConfig::parse("").unwrap();
        assert_eq!(config.tokens, TokenOptions::default());
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.elevation, Elevation::Medium);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(AuraformConfig::parse("[tokens]\nmode = \"dim\"\n").is_err());
        assert!(AuraformConfig::parse("[output]\nformat = \"yaml\"\n").is_err());
        assert!(AuraformConfig::parse("[output]\nelevation = \"huge\"\n").is_err());
    }

    #[test]
    fn test_intensity_validation() {
        let mut config = AuraformConfig::default();
        assert!(config.validate().is_ok());

        config.tokens.intensity = 100;
        assert!(config.validate().is_ok());

        config.tokens.intensity = 101;
        assert!(config.validate().is_err());

        config.tokens.intensity = -1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_intensity_sanitization() {
        let mut config = AuraformConfig::default();
        config.tokens.intensity = 250;
        config.tokens.mode = ModeSetting::Dark;

        let sanitized = config.sanitized();
        assert_eq!(sanitized.tokens.intensity, DEFAULT_INTENSITY);
        assert_eq!(sanitized.tokens.mode, ModeSetting::Dark);

        config.tokens.intensity = 40;
        assert_eq!(config.sanitized().tokens.intensity, 40);
    }

    #[test]
    fn test_sanitize_warns_with_original_intensity() {
        let mut config = AuraformConfig::default();
        config.tokens.intensity = 250;

        let (subscriber, handle) = subscriber::mock()
            .event(
                expect::event().at_level(Level::WARN).with_fields(
                    expect::msg("Invalid configured intensity, using default")
                        .and(expect::field("original_intensity").with_value(&250i64))
                        .and(expect::field("default_intensity").with_value(&15i64)),
                ),
            )
            .only()
            .run_with_handle();

        let sanitized = tracing::subscriber::with_default(subscriber, || config.sanitized());

        handle.assert_finished();
        assert_eq!(sanitized.tokens.intensity, DEFAULT_INTENSITY);
    }

    #[test]
    fn test_high_contrast_at_zero_intensity_is_valid() {
        let mut config = AuraformConfig::default();
        config.tokens.intensity = 0;
        config.tokens.high_contrast = true;

        // The boost still applies, so no warning is expected
        let (subscriber, handle) = subscriber::mock()
            .event(
                expect::event().at_level(Level::INFO).with_fields(
                    expect::msg("Configuration validation passed")
                        .and(expect::field("intensity").with_value(&0i64)),
                ),
            )
            .only()
            .run_with_handle();

        let sanitized = tracing::subscriber::with_default(subscriber, || config.sanitized());

        handle.assert_finished();
        assert!(sanitized.validate().is_ok());
        assert_eq!(sanitized.tokens.effective_intensity(), HIGH_CONTRAST_BOOST);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[tokens]\nintensity = 30\n\n[output]\nformat = \"text\"").unwrap();

        let config = AuraformConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.tokens.intensity, 30);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join(CONFIG_FILE_NAME);

        let err = AuraformConfig::load(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_reports_parse_errors_with_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[tokens\nintensity = ").unwrap();

        let err = AuraformConfig::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_default_config_path() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("auraform/auraform.toml"));
        }
    }
}
