// ABOUTME: Rendering of token sets, contrast reports and conversions for stdout
// ABOUTME: Formats are json, css and aligned text

use auraform_core::{
    ContrastRatios, box_shadow, css_block, pressed_shadow, rgb_to_hex, rgb_to_hsl,
    wcag_compliance,
};
use auraform_types::{Elevation, RgbColor, TokenSet};

use crate::config::OutputFormat;

/// Selector the custom properties are declared on
pub const ROOT_SELECTOR: &str = ":root";

/// Class name used for the example surface rules
pub const SURFACE_CLASS: &str = ".af-surface";

/// Render a token set in the requested format
pub fn render_tokens(
    tokens: &TokenSet,
    format: OutputFormat,
    elevation: Elevation,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(tokens)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Css => Ok(render_css(tokens, elevation)),
        OutputFormat::Text => Ok(render_text(tokens)),
    }
}

fn render_css(tokens: &TokenSet, elevation: Elevation) -> String {
    format!(
        "{variables}\n{SURFACE_CLASS} {{\n  background: var(--af-bg);\n  border: var(--af-border);\n  box-shadow: {raised};\n}}\n\n{SURFACE_CLASS}:active {{\n  box-shadow: {pressed};\n}}\n",
        variables = css_block(tokens, ROOT_SELECTOR),
        raised = box_shadow(tokens, elevation, false),
        pressed = pressed_shadow(tokens, elevation),
    )
}

fn render_text(tokens: &TokenSet) -> String {
    let rows = [
        ("mode", tokens.mode.as_str()),
        ("background", tokens.background.as_str()),
        ("lightShadow", tokens.light_shadow.as_str()),
        ("darkShadow", tokens.dark_shadow.as_str()),
        ("outline", tokens.outline.as_str()),
        ("textColor", tokens.text_color.as_str()),
        ("textSecondary", tokens.text_secondary.as_str()),
        ("borderSubtle", tokens.border_subtle.as_str()),
    ];

    rows.iter()
        .map(|(name, value)| format!("{name:<14} {value}\n"))
        .collect()
}

/// Contrast ratio with WCAG pass/fail lines
pub fn render_contrast(ratio: f64) -> String {
    let compliance = wcag_compliance(ratio);
    let verdict = |passed: bool| if passed { "pass" } else { "fail" };

    format!(
        "Contrast ratio: {ratio:.2}:1\n\
         AA normal text ({aa}:1): {aa_normal}\n\
         AA large text ({large}:1): {aa_large}\n\
         AAA normal text ({aaa}:1): {aaa_normal}\n",
        aa = ContrastRatios::AA_NORMAL,
        large = ContrastRatios::AA_LARGE,
        aaa = ContrastRatios::AAA_NORMAL,
        aa_normal = verdict(compliance.aa_normal),
        aa_large = verdict(compliance.aa_large),
        aaa_normal = verdict(compliance.aaa_normal),
    )
}

/// A parsed color as hex, RGB and HSL
pub fn render_conversion(rgb: RgbColor) -> String {
    format!("{}\n{}\n{}\n", rgb_to_hex(rgb), rgb, rgb_to_hsl(rgb))
}
