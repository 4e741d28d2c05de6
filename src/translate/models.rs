// Wire models for LibreTranslate-compatible services
// Author: kelexine (https://github.com/kelexine)

use crate::error::{Result, TranslateError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content-type hint telling the service whether markup must be preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Text,
    Html,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Html => "html",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /translate`.
///
/// Field order is fixed by declaration order, so identical inputs always
/// serialize to identical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationRequest {
    q: String,
    source: String,
    target: String,
    format: Format,
}

impl TranslationRequest {
    /// Language codes are passed through untouched; the service is the
    /// authority on which ones it accepts.
    pub fn new(
        text: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        format: Format,
    ) -> Self {
        Self {
            q: text.into(),
            source: source.into(),
            target: target.into(),
            format,
        }
    }

    pub fn text(&self) -> &str {
        &self.q
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Compact JSON body.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(TranslateError::Serialization)
    }
}

/// Decoded reply. A non-empty `error` wins over `translated_text`, even when
/// the service sent both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TranslationResponse {
    #[serde(rename = "translatedText", default)]
    pub translated_text: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

impl TranslationResponse {
    /// Turns the envelope into the call result. A missing translation is
    /// treated as an empty one.
    pub fn into_result(self) -> Result<String> {
        match self.error {
            Some(message) if !message.is_empty() => Err(TranslateError::Service(message)),
            _ => Ok(self.translated_text.unwrap_or_default()),
        }
    }
}
