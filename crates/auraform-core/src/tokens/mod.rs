// ABOUTME: Neumorphic design token derivation from a single base color
// ABOUTME: Builds shadow pairs, applies the contrast guardrail and picks semantic colors

use auraform_logging::{debug, trace};
use auraform_types::{ColorMode, HslColor, ModeSetting, OUTLINE_NONE, TokenOptions, TokenSet};

use crate::color::{clamp, hex_to_hsl, hsl_to_hex};
use crate::contrast::{MIN_SHADOW_CONTRAST, contrast_ratio};
use crate::error::Result;


/// Lightness below which `auto` resolves to dark mode
const DARK_MODE_LIGHTNESS: i32 = 50;

/// Saturation removed from the highlight
const LIGHT_SHADOW_DESATURATION: i32 = 5;

/// Saturation added to the shadow
const DARK_SHADOW_SATURATION: i32 = 10;

/// Border injected on light surfaces when the highlight is too faint
pub const LIGHT_OUTLINE: &str = "1px solid rgba(0, 0, 0, 0.1)";

/// Border injected on dark surfaces when the highlight is too faint
pub const DARK_OUTLINE: &str = "1px solid rgba(255, 255, 255, 0.1)";

/// Highlight and shadow colors derived from one base color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadowPair {
    pub light: HslColor,
    pub dark: HslColor,
}

/// Text and border colors for a resolved mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticColors {
    pub text_color: &'static str,
    pub text_secondary: &'static str,
    pub border_subtle: &'static str,
}

impl SemanticColors {
    pub const fn for_mode(mode: ColorMode) -> Self {
        if mode.is_dark() {
            Self {
                text_color: "#f0f0f0",
                text_secondary: "#a0a0a0",
                border_subtle: "rgba(255,255,255,0.12)",
            }
        } else {
            Self {
                text_color: "#333333",
                text_secondary: "#666666",
                border_subtle: "rgba(0,0,0,0.12)",
            }
        }
    }
}

/// Resolve the requested mode against the base lightness (0-100).
///
/// `Auto` picks dark only when the base is strictly darker than 50%.
pub fn resolve_mode(setting: ModeSetting, base_lightness: i32) -> ColorMode {
    match setting {
        ModeSetting::Light => ColorMode::Light,
        ModeSetting::Dark => ColorMode::Dark,
        ModeSetting::Auto if base_lightness < DARK_MODE_LIGHTNESS => ColorMode::Dark,
        ModeSetting::Auto => ColorMode::Light,
    }
}

/// Derive the highlight and shadow colors for a base color.
///
/// Both keep the base hue. The highlight is lighter and slightly desaturated,
/// the shadow darker and slightly more saturated; all components are clamped to 0-100.
pub fn derive_shadow_pair(base: HslColor, intensity: i32) -> ShadowPair {
    let light = HslColor::new(
        base.h,
        clamp(base.s.saturating_sub(LIGHT_SHADOW_DESATURATION), 0, 100),
        clamp(base.l.saturating_add(intensity), 0, 100),
    );

    let dark = HslColor::new(
        base.h,
        clamp(base.s.saturating_add(DARK_SHADOW_SATURATION), 0, 100),
        clamp(base.l.saturating_sub(intensity), 0, 100),
    );

    ShadowPair { light, dark }
}

/// Outline for a resolved mode given the highlight/background contrast
pub fn outline_for(mode: ColorMode, shadow_contrast: f64) -> &'static str {
    if shadow_contrast >= MIN_SHADOW_CONTRAST {
        return OUTLINE_NONE;
    }
    match mode {
        ColorMode::Light => LIGHT_OUTLINE,
        ColorMode::Dark => DARK_OUTLINE,
    }
}

/// Generate neumorphic design tokens from a base color.
///
/// The returned `background` is the input string exactly as given. When the
/// highlight does not reach [`MIN_SHADOW_CONTRAST`] against the background, a
/// faint border is added so the surface edge stays visible.
///
/// # Errors
///
/// Returns [`crate::ColorError::InvalidFormat`] if `base_color` is not valid hex.
pub fn get_neumorphic_tokens(base_color: &str, options: &TokenOptions) -> Result<TokenSet> {
    let intensity = options.effective_intensity();
    let base = hex_to_hsl(base_color)?;
    let mode = resolve_mode(options.mode, base.l);

    trace!(
        base_color,
        h = base.h,
        s = base.s,
        l = base.l,
        requested_mode = %options.mode,
        resolved_mode = %mode,
        "Resolved token mode"
    );

    let shadows = derive_shadow_pair(base, intensity);
    let light_shadow = hsl_to_hex(shadows.light);
    let dark_shadow = hsl_to_hex(shadows.dark);

    let shadow_contrast = contrast_ratio(&light_shadow, base_color)?;
    let outline = outline_for(mode, shadow_contrast);

    if outline != OUTLINE_NONE {
        debug!(
            base_color,
            light_shadow = %light_shadow,
            contrast = shadow_contrast,
            threshold = MIN_SHADOW_CONTRAST,
            "Shadow contrast below minimum, injecting outline"
        );
    }

    let semantic = SemanticColors::for_mode(mode);

    Ok(TokenSet {
        mode,
        background: base_color.to_string(),
        light_shadow,
        dark_shadow,
        outline: outline.to_string(),
        text_color: semantic.text_color.to_string(),
        text_secondary: semantic.text_secondary.to_string(),
        border_subtle: semantic.border_subtle.to_string(),
    })
}
