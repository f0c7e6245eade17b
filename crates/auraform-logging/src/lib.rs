// ABOUTME: Public API for auraform logging infrastructure using tokio-tracing
// ABOUTME: Provides centralized configuration and initialization for structured logging

pub mod config;
pub mod layers;
pub mod subscriber;

// Re-export tracing macros for convenience
pub use tracing::{Level, Span, debug, error, info, instrument, span, trace, warn};

// Re-export configuration types
pub use config::{LogLevel, LoggingConfig};

// Re-export initialization functions
pub use subscriber::{LoggingGuard, build_subscriber, init_subscriber};

use anyhow::Result;

/// Initialize logging with custom configuration.
pub fn init_logging_with_config(config: LoggingConfig) -> Result<LoggingGuard> {
    init_subscriber(config)
}
