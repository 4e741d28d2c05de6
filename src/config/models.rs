//! Configuration data structures for the lingo-relay client.
//!
//! Everything here is a plain value handed to [`crate::translate::Translator`]
//! at construction time. Nothing is read from disk or the environment.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Serialize};

/// The root configuration object for a translator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// HTTP client settings (timeout, user agent).
    #[serde(default)]
    pub client: ClientConfig,

    /// Interchangeable translation endpoints; one is picked per call.
    /// Default: the public LibreTranslate mirrors.
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<String>,

    /// Settings consumed by [`crate::utils::logging::init`].
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the outbound HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Upper bound on a whole request, from connect to last body byte.
    /// Default: `5`
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Value of the `User-Agent` header.
    /// Default: `lingo-relay/<crate version>`
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl TranslatorConfig {
    /// Default settings pointed at a caller-supplied endpoint list.
    pub fn with_endpoints<I, S>(endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            endpoints: endpoints.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.client.timeout_seconds = seconds;
        self
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            endpoints: default_endpoints(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Helper functions for serde defaults and shared constants
pub const DEFAULT_ENDPOINTS: &[&str] = &[
    "https://translate.argosopentech.com/translate",
    "https://libretranslate.de/translate",
    "https://translate.mentality.rip/translate",
    "https://trans.zillyhuhn.com/translate",
];

fn default_endpoints() -> Vec<String> {
    DEFAULT_ENDPOINTS.iter().map(|s| s.to_string()).collect()
}

fn default_timeout() -> u64 {
    5
}

fn default_user_agent() -> String {
    format!("lingo-relay/{}", env!("CARGO_PKG_VERSION"))
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
