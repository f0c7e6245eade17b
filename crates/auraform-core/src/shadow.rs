// ABOUTME: Shadow composition and CSS custom property output for token sets
// ABOUTME: Turns a TokenSet and elevation into box-shadow strings and variable maps

use auraform_types::{Elevation, TokenSet};

/// Scale applied to distance and blur while a surface is pressed, in tenths
const PRESSED_SCALE_TENTHS: u32 = 6;

/// `box-shadow` value for a surface at the given elevation.
///
/// The dark shadow falls to the bottom right and the highlight to the top
/// left. Inset surfaces use the same geometry with both parts inset.
pub fn box_shadow(tokens: &TokenSet, elevation: Elevation, inset: bool) -> String {
    let config = elevation.shadow_config();
    compose(tokens, config.distance, config.blur, inset)
}

/// `box-shadow` value for a raised surface while pressed.
///
/// Always inset, with distance and blur scaled to 60% and rounded up.
pub fn pressed_shadow(tokens: &TokenSet, elevation: Elevation) -> String {
    let config = elevation.shadow_config();
    compose(
        tokens,
        scale_up(config.distance),
        scale_up(config.blur),
        true,
    )
}

fn scale_up(value: u32) -> u32 {
    (value * PRESSED_SCALE_TENTHS).div_ceil(10)
}

fn compose(tokens: &TokenSet, distance: u32, blur: u32, inset: bool) -> String {
    let prefix = if inset { "inset " } else { "" };
    format!(
        "{prefix}{distance}px {distance}px {blur}px {dark}, {prefix}-{distance}px -{distance}px {blur}px {light}",
        dark = tokens.dark_shadow,
        light = tokens.light_shadow,
    )
}

/// CSS custom properties for a token set, in a stable order
pub fn css_variables(tokens: &TokenSet) -> Vec<(&'static str, String)> {
    vec![
        ("--af-bg", tokens.background.clone()),
        ("--af-light-shadow", tokens.light_shadow.clone()),
        ("--af-dark-shadow", tokens.dark_shadow.clone()),
        ("--af-border", tokens.outline.clone()),
        ("--af-text", tokens.text_color.clone()),
        ("--af-text-secondary", tokens.text_secondary.clone()),
        ("--af-border-subtle", tokens.border_subtle.clone()),
    ]
}

/// Render the custom properties as a CSS rule for `selector`
pub fn css_block(tokens: &TokenSet, selector: &str) -> String {
    let declarations: String = css_variables(tokens)
        .into_iter()
        .map(|(name, value)| format!("  {name}: {value};\n"))
        .collect();
    format!("{selector} {{\n{declarations}}}\n")
}
