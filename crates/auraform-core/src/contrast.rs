// ABOUTME: WCAG relative luminance and contrast ratio calculations
// ABOUTME: Provides the shadow visibility threshold used by the token guardrail

use auraform_types::RgbColor;

use crate::color::hex_to_rgb;
use crate::error::Result;

/// Minimum contrast ratio for neumorphic shadow visibility
pub const MIN_SHADOW_CONTRAST: f64 = 3.0;

/// WCAG contrast ratios for accessibility compliance
#[derive(Debug)]
pub struct ContrastRatios;

impl ContrastRatios {
    pub const AAA_NORMAL: f64 = 7.0;
    pub const AA_NORMAL: f64 = 4.5;
    pub const AA_LARGE: f64 = 3.0;
}

/// Pass/fail result of a ratio against the WCAG text thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WcagCompliance {
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
}

/// Linearize one sRGB channel in [0, 1]
fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate the relative luminance of an RGB color.
///
/// Based on the WCAG 2.0 definition; the result is in [0, 1] for in-range channels.
pub fn relative_luminance(rgb: RgbColor) -> f64 {
    let [r, g, b] = rgb
        .channels()
        .map(|c| srgb_to_linear(f64::from(c) / 255.0));

    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio between two RGB colors, in [1, 21]
pub fn contrast_ratio_rgb(color1: RgbColor, color2: RgbColor) -> f64 {
    let lum1 = relative_luminance(color1);
    let lum2 = relative_luminance(color2);

    let lighter = lum1.max(lum2);
    let darker = lum1.min(lum2);

    (lighter + 0.05) / (darker + 0.05)
}

/// Calculate the contrast ratio between two hex colors.
///
/// Returns a value between 1 (no contrast) and 21 (black on white). The
/// argument order does not matter.
///
/// # Errors
///
/// Returns [`crate::ColorError::InvalidFormat`] if either color is not valid hex.
pub fn contrast_ratio(color1: &str, color2: &str) -> Result<f64> {
    Ok(contrast_ratio_rgb(hex_to_rgb(color1)?, hex_to_rgb(color2)?))
}

/// Whether a ratio meets a minimum threshold
pub fn meets_minimum(ratio: f64, threshold: f64) -> bool {
    ratio >= threshold
}

/// Evaluate a ratio against the WCAG text thresholds
pub fn wcag_compliance(ratio: f64) -> WcagCompliance {
    WcagCompliance {
        aa_normal: meets_minimum(ratio, ContrastRatios::AA_NORMAL),
        aa_large: meets_minimum(ratio, ContrastRatios::AA_LARGE),
        aaa_normal: meets_minimum(ratio, ContrastRatios::AAA_NORMAL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_black() {
        assert_eq!(relative_luminance(RgbColor::new(0, 0, 0)), 0.0);
    }

    #[test]
    fn test_luminance_white() {
        assert!((relative_luminance(RgbColor::new(255, 255, 255)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_luminance_pure_red() {
        let lum = relative_luminance(RgbColor::new(255, 0, 0));
        assert!((lum - 0.2126).abs() < 1e-4);
    }

    #[test]
    fn test_luminance_uses_linear_segment_for_dark_channels() {
        // 10 / 255 is below the 0.03928 knee
        let lum = relative_luminance(RgbColor::new(10, 10, 10));
        assert!((lum - (10.0 / 255.0) / 12.92).abs() < 1e-12);
    }

    #[test]
    fn test_contrast_black_white() {
        let ratio = contrast_ratio("#000000", "#ffffff").unwrap();
        assert!((ratio - 21.0).abs() < 0.01);
    }

    #[test]
    fn test_contrast_same_color() {
        let ratio = contrast_ratio("#e0e0e0", "#E0E0E0").unwrap();
        assert!((ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_contrast_commutative() {
        let r1 = contrast_ratio("#4a90d9", "#e0e0e0").unwrap();
        let r2 = contrast_ratio("#e0e0e0", "#4a90d9").unwrap();
        assert_eq!(r1, r2);
    }

    #[test]
    fn test_contrast_propagates_invalid_input() {
        let err = contrast_ratio("#ffffff", "nope").unwrap_err();
        assert_eq!(err.input(), "nope");
    }

    #[test]
    fn test_wcag_compliance() {
        let full = wcag_compliance(21.0);
        assert!(full.aa_normal && full.aa_large && full.aaa_normal);

        let large_only = wcag_compliance(3.2);
        assert!(large_only.aa_large);
        assert!(!large_only.aa_normal);
        assert!(!large_only.aaa_normal);

        assert!(meets_minimum(MIN_SHADOW_CONTRAST, MIN_SHADOW_CONTRAST));
        assert!(!meets_minimum(2.99, MIN_SHADOW_CONTRAST));
    }
}
