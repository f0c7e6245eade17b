// ABOUTME: Pure data types with no cross-crate dependencies
// ABOUTME: Foundation layer for all other auraform crates

pub mod color_model;
pub mod elevation;
pub mod token_types;

// Re-export commonly used types
pub use color_model::{HslColor, RgbColor};
pub use elevation::{Elevation, ShadowConfig};
pub use token_types::{
    ColorMode, DEFAULT_INTENSITY, HIGH_CONTRAST_BOOST, ModeSetting, OUTLINE_NONE, TokenOptions,
    TokenSet,
};
