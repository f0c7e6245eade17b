// ABOUTME: Library side of the auraform binary
// ABOUTME: Exposes argument parsing, configuration and rendering for tests

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;

pub use cli::{Args, Command, TokensArgs};
pub use commands::run;
pub use config::{AuraformConfig, OutputFormat, OutputSettings};
