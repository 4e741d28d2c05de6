//! Structured logging utilities.
//!
//! The library only emits `tracing` events. Applications that want those
//! events printed can install a subscriber through [`init`], which mirrors
//! what a binary would set up for itself.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::{Result, TranslateError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// Supports two output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// `RUST_LOG` takes precedence over the configured level. Fails if a global
/// subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let installed = match config.format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        _ => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
    };

    installed.map_err(|e| TranslateError::Internal(format!("Failed to install subscriber: {}", e)))
}

/// Shortens text for log lines, appending an ellipsis and the original
/// character count when anything was cut.
///
/// Cuts on character boundaries, never inside a multi-byte sequence.
pub fn preview(input: &str, max_chars: usize) -> String {
    let total = input.chars().count();
    if total <= max_chars {
        return input.to_string();
    }

    let head: String = input.chars().take(max_chars).collect();
    format!("{}… ({} chars)", head, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_installs_global_subscriber_once() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: "json".to_string(),
        };
        assert!(init(&config).is_ok());
        assert!(matches!(init(&config), Err(TranslateError::Internal(_))));
    }

    #[test]
    fn test_preview_short_input_unchanged() {
        assert_eq!(preview("Hello", 10), "Hello");
        assert_eq!(preview("", 10), "");
    }

    #[test]
    fn test_preview_truncates_long_input() {
        let output = preview("abcdefghij", 4);
        assert_eq!(output, "abcd… (10 chars)");
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let output = preview("こんにちは世界", 3);
        assert!(output.starts_with("こんに"));
        assert!(output.contains("(7 chars)"));
    }
}
