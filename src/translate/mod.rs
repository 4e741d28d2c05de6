// Translation requester module
// Author: kelexine (https://github.com/kelexine)
//
// Free functions in this module go through a lazily built, process-wide
// translator using the default configuration and public endpoints.

mod client;
mod models;
mod pool;

pub use client::Translator;
pub use models::{Format, TranslationRequest, TranslationResponse};
pub use pool::{EndpointPool, RandomSource, SeededRandom};

use crate::config::TranslatorConfig;
use crate::error::Result;
use once_cell::sync::OnceCell;
use tokio_util::sync::CancellationToken;

static DEFAULT_TRANSLATOR: OnceCell<Translator> = OnceCell::new();

/// The shared translator behind the free functions, built on first use.
pub fn default_translator() -> Result<&'static Translator> {
    DEFAULT_TRANSLATOR.get_or_try_init(|| Translator::new(&TranslatorConfig::default()))
}

pub async fn text(source: &str, target: &str, text: &str) -> Result<String> {
    default_translator()?.translate_text(source, target, text).await
}

pub async fn html(source: &str, target: &str, html: &str) -> Result<String> {
    default_translator()?.translate_html(source, target, html).await
}

pub async fn text_with_cancel(
    cancel: &CancellationToken,
    source: &str,
    target: &str,
    text: &str,
) -> Result<String> {
    default_translator()?
        .translate_text_with_cancel(cancel, source, target, text)
        .await
}

pub async fn html_with_cancel(
    cancel: &CancellationToken,
    source: &str,
    target: &str,
    html: &str,
) -> Result<String> {
    default_translator()?
        .translate_html_with_cancel(cancel, source, target, html)
        .await
}
