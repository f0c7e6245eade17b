// ABOUTME: Token derivation inputs and outputs
// ABOUTME: TokenOptions configures a derivation, TokenSet is the flat result map

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default lightness shift in percentage points
pub const DEFAULT_INTENSITY: i32 = 15;

/// Extra intensity applied when high contrast is requested
pub const HIGH_CONTRAST_BOOST: i32 = 5;

/// Outline value used when no compensating border is needed
pub const OUTLINE_NONE: &str = "none";

/// Resolved color mode of a token set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, ColorMode::Dark)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested color mode; `Auto` picks from the base color lightness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeSetting {
    #[default]
    Auto,
    Light,
    Dark,
}

impl fmt::Display for ModeSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ModeSetting::Auto => "auto",
            ModeSetting::Light => "light",
            ModeSetting::Dark => "dark",
        };
        f.write_str(s)
    }
}

impl FromStr for ModeSetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ModeSetting::Auto),
            "light" => Ok(ModeSetting::Light),
            "dark" => Ok(ModeSetting::Dark),
            _ => Err(format!("Invalid mode: {s}. Must be one of: light, dark, auto")),
        }
    }
}

impl From<ColorMode> for ModeSetting {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => ModeSetting::Light,
            ColorMode::Dark => ModeSetting::Dark,
        }
    }
}

/// Options for a single token derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenOptions {
    /// Lightness shift in percentage points applied to both shadows
    pub intensity: i32,
    /// Requested color mode
    pub mode: ModeSetting,
    /// Raise the intensity for users who asked for increased contrast
    pub high_contrast: bool,
}

impl Default for TokenOptions {
    fn default() -> Self {
        Self {
            intensity: DEFAULT_INTENSITY,
            mode: ModeSetting::Auto,
            high_contrast: false,
        }
    }
}

impl TokenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_intensity(mut self, intensity: i32) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn with_mode(mut self, mode: ModeSetting) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_high_contrast(mut self, high_contrast: bool) -> Self {
        self.high_contrast = high_contrast;
        self
    }

    /// Intensity after the high contrast boost
    pub fn effective_intensity(&self) -> i32 {
        if self.high_contrast {
            self.intensity.saturating_add(HIGH_CONTRAST_BOOST)
        } else {
            self.intensity
        }
    }
}

/// Neumorphic design tokens generated from a base color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSet {
    /// Resolved color mode
    pub mode: ColorMode,
    /// The original background color, exactly as given
    pub background: String,
    /// Lighter shadow color (highlight) as hex
    pub light_shadow: String,
    /// Darker shadow color as hex
    pub dark_shadow: String,
    /// Border to apply when shadow contrast is insufficient, or "none"
    pub outline: String,
    pub text_color: String,
    pub text_secondary: String,
    pub border_subtle: String,
}

impl TokenSet {
    /// Whether the accessibility border was injected
    pub fn has_outline(&self) -> bool {
        self.outline != OUTLINE_NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tokens() -> TokenSet {
        TokenSet {
            mode: ColorMode::Light,
            background: "#E0E0E0".to_string(),
            light_shadow: "#ffffff".to_string(),
            dark_shadow: "#c1b3b3".to_string(),
            outline: OUTLINE_NONE.to_string(),
            text_color: "#333333".to_string(),
            text_secondary: "#666666".to_string(),
            border_subtle: "rgba(0,0,0,0.12)".to_string(),
        }
    }

    #[test]
    fn test_token_options_defaults() {
        let options = TokenOptions::default();
        assert_eq!(options.intensity, 15);
        assert_eq!(options.mode, ModeSetting::Auto);
        assert!(!options.high_contrast);
        assert_eq!(options.effective_intensity(), 15);
    }

    #[test]
    fn test_high_contrast_boost() {
        let options = TokenOptions::new()
            .with_intensity(20)
            .with_high_contrast(true);
        assert_eq!(options.effective_intensity(), 25);
    }

    #[test]
    fn test_mode_setting_parsing() {
        assert_eq!("Dark".parse::<ModeSetting>(), Ok(ModeSetting::Dark));
        assert_eq!("auto".parse::<ModeSetting>(), Ok(ModeSetting::Auto));
        assert!("dim".parse::<ModeSetting>().is_err());
        assert_eq!(ModeSetting::from(ColorMode::Light), ModeSetting::Light);
    }

    #[test]
    fn test_color_mode_is_dark() {
        assert!(ColorMode::Dark.is_dark());
        assert!(!ColorMode::Light.is_dark());
        assert_eq!(ColorMode::Dark.to_string(), "dark");
    }

    #[test]
    fn test_token_set_uses_camel_case_keys() {
        let value = serde_json::to_value(sample_tokens()).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "background",
                "borderSubtle",
                "darkShadow",
                "lightShadow",
                "mode",
                "outline",
                "textColor",
                "textSecondary",
            ]
        );
        assert_eq!(object["mode"], "light");
        assert_eq!(object["background"], "#E0E0E0");
    }

    #[test]
    fn test_has_outline() {
        let mut tokens = sample_tokens();
        assert!(!tokens.has_outline());
        tokens.outline = "1px solid rgba(0, 0, 0, 0.1)".to_string();
        assert!(tokens.has_outline());
    }

    #[test]
    fn test_token_options_partial_toml() {
        let options: TokenOptions = toml::from_str("mode = \"dark\"").unwrap();
        assert_eq!(options.mode, ModeSetting::Dark);
        assert_eq!(options.intensity, DEFAULT_INTENSITY);
    }
}
