// ABOUTME: Tracing subscriber initialization and layer composition
// ABOUTME: Combines console, file, and JSON layers with filtering for complete logging setup

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::LoggingConfig;
use crate::layers::{
    BoxedLayer, create_console_layer, create_env_filter, create_file_layer, create_json_layer,
};

/// Keeps the background log writer alive.
///
/// Dropping it flushes any buffered file output.
#[derive(Debug)]
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Build a subscriber for the configuration without installing it.
pub fn build_subscriber(
    config: &LoggingConfig,
) -> Result<(impl Subscriber + Send + Sync + 'static, LoggingGuard)> {
    use tracing_subscriber::prelude::*;

    let env_filter = create_env_filter(config).context("Failed to create environment filter")?;

    let mut layers: Vec<BoxedLayer> = Vec::new();
    layers.extend(create_console_layer(&config.output));
    layers.extend(create_json_layer(&config.output));

    let file_guard = if config.output.file {
        let (layer, guard) = create_file_layer(&config.file).context(format!(
            "Failed to set up file logging at {}",
            config.file.path.display()
        ))?;
        layers.push(layer);
        Some(guard)
    } else {
        None
    };

    let subscriber = tracing_subscriber::registry().with(layers).with(env_filter);

    Ok((
        subscriber,
        LoggingGuard {
            _file_guard: file_guard,
        },
    ))
}

/// Initialize the global tracing subscriber with the given configuration.
pub fn init_subscriber(config: LoggingConfig) -> Result<LoggingGuard> {
    use tracing_subscriber::util::SubscriberInitExt;

    let (subscriber, guard) = build_subscriber(&config)?;
    subscriber
        .try_init()
        .context("Failed to install global tracing subscriber")?;

    tracing::info!(
        log_level = %config.level.0,
        console_output = config.output.console,
        file_output = config.output.file,
        json_output = config.output.json,
        file_path = %config.file.path.display(),
        "Auraform logging initialized"
    );

    Ok(guard)
}
