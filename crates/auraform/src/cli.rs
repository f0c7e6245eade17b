// ABOUTME: Command-line argument definitions for the auraform binary
// ABOUTME: Flags given here override values loaded from auraform.toml

use auraform_types::{Elevation, ModeSetting, TokenOptions};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "auraform",
    version,
    about = "Derive neumorphic design tokens from a base color"
)]
pub struct Args {
    /// Configuration file to use instead of the default auraform.toml
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (up to three times)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Derive the token set for a base color
    Tokens(TokensArgs),

    /// Report the WCAG contrast ratio between two colors
    Contrast {
        color1: String,
        color2: String,
    },

    /// Show a color as hex, RGB and HSL
    Convert { color: String },
}

#[derive(Debug, clap::Args)]
pub struct TokensArgs {
    /// Base background color, e.g. "#e0e0e0" or "ccc"
    pub color: String,

    /// Lightness shift in percentage points
    #[arg(short, long, allow_negative_numbers = true)]
    pub intensity: Option<i32>,

    /// Color mode: light, dark or auto
    #[arg(short, long)]
    pub mode: Option<ModeSetting>,

    /// Boost the intensity for increased contrast
    #[arg(long)]
    pub high_contrast: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Elevation used for the CSS box-shadow output
    #[arg(short, long)]
    pub elevation: Option<Elevation>,
}

impl TokensArgs {
    /// Apply command-line overrides on top of configured options
    pub fn token_options(&self, configured: TokenOptions) -> TokenOptions {
        let mut options = configured;
        if let Some(intensity) = self.intensity {
            options.intensity = intensity;
        }
        if let Some(mode) = self.mode {
            options.mode = mode;
        }
        if self.high_contrast {
            options.high_contrast = true;
        }
        options
    }
}
