// ABOUTME: Executes parsed subcommands against the color pipeline
// ABOUTME: Returns the text to print so commands can be tested without a terminal

use anyhow::{Context, Result};
use auraform_core::{contrast_ratio, get_neumorphic_tokens, hex_to_rgb};
use auraform_logging::{debug, info, instrument};

use crate::cli::{Command, TokensArgs};
use crate::config::AuraformConfig;
use crate::output::{render_contrast, render_conversion, render_tokens};

/// Run a subcommand with the loaded configuration
pub fn run(command: &Command, config: &AuraformConfig) -> Result<String> {
    match command {
        Command::Tokens(args) => run_tokens(args, config),
        Command::Contrast { color1, color2 } => run_contrast(color1, color2),
        Command::Convert { color } => run_convert(color),
    }
}

#[instrument(skip(config), fields(color = %args.color))]
fn run_tokens(args: &TokensArgs, config: &AuraformConfig) -> Result<String> {
    let options = args.token_options(config.tokens);
    let format = args.format.unwrap_or(config.output.format);
    let elevation = args.elevation.unwrap_or(config.output.elevation);

    debug!(
        intensity = options.intensity,
        mode = %options.mode,
        high_contrast = options.high_contrast,
        %format,
        %elevation,
        "Deriving tokens"
    );

    let tokens = get_neumorphic_tokens(&args.color, &options)
        .with_context(|| format!("Failed to derive tokens for '{}'", args.color))?;

    info!(
        mode = %tokens.mode,
        light_shadow = %tokens.light_shadow,
        dark_shadow = %tokens.dark_shadow,
        outline = tokens.has_outline(),
        "Derived tokens"
    );

    render_tokens(&tokens, format, elevation)
}

fn run_contrast(color1: &str, color2: &str) -> Result<String> {
    let ratio = contrast_ratio(color1, color2)
        .with_context(|| format!("Failed to compare '{color1}' and '{color2}'"))?;
    debug!(color1, color2, ratio, "Computed contrast ratio");
    Ok(render_contrast(ratio))
}

fn run_convert(color: &str) -> Result<String> {
    let rgb = hex_to_rgb(color).with_context(|| format!("Failed to convert '{color}'"))?;
    Ok(render_conversion(rgb))
}
