// Translation client: one request to one randomly chosen endpoint
// Author: kelexine (https://github.com/kelexine)

use super::models::{Format, TranslationRequest, TranslationResponse};
use super::pool::{EndpointPool, RandomSource, SeededRandom};
use crate::config::TranslatorConfig;
use crate::error::{Result, TranslateError};
use crate::metrics;
use crate::utils::logging::preview;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Client for LibreTranslate-compatible services.
///
/// Every call builds a fresh request, draws one endpoint from the pool and
/// returns whatever that single endpoint answered. Failures are returned as-is;
/// retrying (and thereby drawing a new endpoint) is left to the caller.
///
/// Cheap to share: wrap in an `Arc` or hold a `&'static` and call from any task.
#[derive(Debug)]
pub struct Translator {
    http_client: Client,
    pool: EndpointPool,
    random: Arc<dyn RandomSource>,
}

impl Translator {
    /// Create a translator that selects endpoints with the process-wide
    /// [`SeededRandom`].
    pub fn new(config: &TranslatorConfig) -> Result<Self> {
        Self::with_random_source(config, SeededRandom::shared())
    }

    /// Create a translator with a caller-supplied selection source.
    pub fn with_random_source(
        config: &TranslatorConfig,
        random: Arc<dyn RandomSource>,
    ) -> Result<Self> {
        config.validate()?;

        // The client timeout covers connect, send and the full body read
        let http_client = Client::builder()
            .timeout(config.client.timeout())
            .user_agent(config.client.user_agent.as_str())
            .use_rustls_tls()
            .build()
            .map_err(|e| TranslateError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        let pool = EndpointPool::new(config.endpoints.iter().cloned())?;

        debug!(
            "Created translator with {} endpoints, timeout {}s",
            pool.len(),
            config.client.timeout_seconds
        );

        Ok(Self {
            http_client,
            pool,
            random,
        })
    }

    pub fn endpoints(&self) -> &EndpointPool {
        &self.pool
    }

    pub async fn translate_text(&self, source: &str, target: &str, text: &str) -> Result<String> {
        let request = TranslationRequest::new(text, source, target, Format::Text);
        self.translate(&request, None).await
    }

    pub async fn translate_html(&self, source: &str, target: &str, html: &str) -> Result<String> {
        let request = TranslationRequest::new(html, source, target, Format::Html);
        self.translate(&request, None).await
    }

    /// Like [`Translator::translate_text`], aborting as soon as `cancel` fires.
    pub async fn translate_text_with_cancel(
        &self,
        cancel: &CancellationToken,
        source: &str,
        target: &str,
        text: &str,
    ) -> Result<String> {
        let request = TranslationRequest::new(text, source, target, Format::Text);
        self.translate(&request, Some(cancel)).await
    }

    /// Like [`Translator::translate_html`], aborting as soon as `cancel` fires.
    pub async fn translate_html_with_cancel(
        &self,
        cancel: &CancellationToken,
        source: &str,
        target: &str,
        html: &str,
    ) -> Result<String> {
        let request = TranslationRequest::new(html, source, target, Format::Html);
        self.translate(&request, Some(cancel)).await
    }

    /// Send `request` to one endpoint and return the translated content.
    ///
    /// Without a token the call is bounded only by the configured timeout.
    /// With one, whichever of the token or the response comes first wins; an
    /// already-cancelled token fails before anything is sent.
    pub async fn translate(
        &self,
        request: &TranslationRequest,
        cancel: Option<&CancellationToken>,
    ) -> Result<String> {
        let body = request.to_json()?;

        let endpoint = self.pool.choose(self.random.as_ref());
        debug!(
            "Translating {} {} -> {} via {}",
            request.format(),
            request.source(),
            request.target(),
            endpoint
        );
        trace!("Payload: {}", preview(request.text(), 200));

        let start = Instant::now();

        let result = match cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(TranslateError::Cancelled),
                    result = self.send(endpoint, body) => result,
                }
            }
            None => self.send(endpoint, body).await,
        };

        let elapsed = start.elapsed();
        metrics::record_translation(
            endpoint,
            request.format().as_str(),
            &result,
            elapsed.as_secs_f64(),
        );

        match &result {
            Ok(translated) => debug!(
                "Translation via {} succeeded in {:?} ({} chars)",
                endpoint,
                elapsed,
                translated.chars().count()
            ),
            Err(e) => debug!("Translation via {} failed in {:?}: {}", endpoint, elapsed, e),
        }

        result
    }

    async fn send(&self, endpoint: &str, body: Vec<u8>) -> Result<String> {
        let response = self
            .http_client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            // Non-200 bodies are never parsed
            return Err(TranslateError::HttpStatus(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let decoded: TranslationResponse =
            serde_json::from_slice(&bytes).map_err(TranslateError::Decode)?;

        decoded.into_result()
    }
}
