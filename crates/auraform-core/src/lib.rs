// ABOUTME: Color math pipeline for neumorphic design tokens
// ABOUTME: Conversion, WCAG contrast, token derivation and shadow composition

pub mod color;
pub mod contrast;
pub mod error;
pub mod shadow;
pub mod tokens;

pub use auraform_types::{
    ColorMode, Elevation, HslColor, ModeSetting, RgbColor, ShadowConfig, TokenOptions, TokenSet,
};

pub use color::{
    clamp, hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, normalize_hex, rgb_to_hex, rgb_to_hsl,
};
pub use contrast::{
    ContrastRatios, MIN_SHADOW_CONTRAST, WcagCompliance, contrast_ratio, contrast_ratio_rgb,
    meets_minimum, relative_luminance, wcag_compliance,
};
pub use error::{ColorError, Result};
pub use shadow::{box_shadow, css_block, css_variables, pressed_shadow};
pub use tokens::{
    SemanticColors, ShadowPair, derive_shadow_pair, get_neumorphic_tokens, resolve_mode,
};
