// ABOUTME: Error type for color parsing
// ABOUTME: Malformed hex input is the only failure the color pipeline can produce

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColorError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid hex color: {input}")]
    InvalidFormat { input: String },
}

impl ColorError {
    /// Create an invalid format error for the original input
    pub fn invalid_format<S: Into<String>>(input: S) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }

    /// The input that failed to parse
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidFormat { input } => input,
        }
    }
}
