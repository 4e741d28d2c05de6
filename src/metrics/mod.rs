// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{gather_metrics, REGISTRY, TRANSLATION_DURATION, TRANSLATION_REQUESTS};

use crate::error::TranslateError;

/// Helper to record the outcome of one translation call
pub fn record_translation<T>(
    endpoint: &str,
    format: &str,
    result: &Result<T, TranslateError>,
    duration_secs: f64,
) {
    let outcome = match result {
        Ok(_) => "success",
        Err(e) => e.kind(),
    };

    TRANSLATION_REQUESTS
        .with_label_values(&[endpoint, format, outcome])
        .inc();

    TRANSLATION_DURATION
        .with_label_values(&[endpoint])
        .observe(duration_secs);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_translation_labels_outcome() {
        let endpoint = "http://record.test/translate";
        let ok: Result<String, TranslateError> = Ok("hola".to_string());
        let failed: Result<String, TranslateError> = Err(TranslateError::HttpStatus(503));

        record_translation(endpoint, "text", &ok, 0.1);
        record_translation(endpoint, "html", &failed, 0.3);

        let success = TRANSLATION_REQUESTS.with_label_values(&[endpoint, "text", "success"]);
        let status = TRANSLATION_REQUESTS.with_label_values(&[endpoint, "html", "http_status"]);
        assert_eq!(success.get(), 1.0);
        assert_eq!(status.get(), 1.0);
    }
}
