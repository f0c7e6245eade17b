// ABOUTME: Entry point for the auraform command-line tool
// ABOUTME: Loads configuration, sets up logging and prints the command output

use std::panic;

use anyhow::{Context, Result};
use auraform::{Args, AuraformConfig, run};
use auraform_logging::{LoggingConfig, LoggingGuard, debug, init_logging_with_config};
use clap::Parser;

fn setup_logging(args: &Args, configured: &LoggingConfig) -> Result<LoggingGuard> {
    let mut config = configured.clone();
    config
        .apply_env_overrides()
        .context("Failed to apply logging environment overrides")?;

    let mut config = config.with_verbosity(args.verbose);
    if let Some(path) = &args.log_file {
        config = config.with_log_file(path.clone());
    }

    init_logging_with_config(config).context("Failed to initialize auraform logging")
}

fn install_panic_handler() {
    panic::set_hook(Box::new(|info| {
        let payload = info.payload();
        let location = info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));

        let panic_message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Box<dyn Any>".to_string()
        };

        auraform_logging::error!(
            panic_message = %panic_message,
            location = ?location,
            "Auraform panicked"
        );
        eprintln!("auraform panicked: {panic_message}");
    }));
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = AuraformConfig::load(args.config.as_deref())?;
    let _guard = setup_logging(&args, &config.logging)?;
    install_panic_handler();

    let config = config.sanitized();
    debug!(command = ?args.command, "Running command");
    let output = run(&args.command, &config)?;
    print!("{output}");

    Ok(())
}
