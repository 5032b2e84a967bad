use thiserror::Error;

/// Custom error types for suggestline
///
/// Only the binary rim can fail hard (terminal setup, config parsing).
/// Everything inside the widget degrades to "no suggestions shown".
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
