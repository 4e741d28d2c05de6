// Error types for lingo-relay
// Author: kelexine (https://github.com/kelexine)

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Failed to serialize request: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request cancelled")]
    Cancelled,

    #[error("response status: {0}")]
    HttpStatus(u16),

    #[error("Response parsing error: {0}")]
    Decode(#[source] serde_json::Error),

    /// Application-level error reported by the service inside a 200 envelope.
    /// Displays the service message verbatim.
    #[error("{0}")]
    Service(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TranslateError {
    /// True for network-level failures, cancellation included.
    pub fn is_transport(&self) -> bool {
        matches!(self, TranslateError::Transport(_) | TranslateError::Cancelled)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, TranslateError::Transport(e) if e.is_timeout())
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            TranslateError::HttpStatus(code) => Some(*code),
            _ => None,
        }
    }

    /// Short label used for the `outcome` metric dimension.
    pub fn kind(&self) -> &'static str {
        match self {
            TranslateError::Serialization(_) => "serialization",
            TranslateError::Transport(_) => "transport",
            TranslateError::Cancelled => "cancelled",
            TranslateError::HttpStatus(_) => "http_status",
            TranslateError::Decode(_) => "decode",
            TranslateError::Service(_) => "service",
            TranslateError::Config(_) => "config",
            TranslateError::Internal(_) => "internal",
        }
    }
}

pub type Result<T> = std::result::Result<T, TranslateError>;
