// Prometheus metrics registry and collectors
// Author: kelexine (https://github.com/kelexine)

use crate::error::{Result, TranslateError};
use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec_with_registry, register_histogram_vec_with_registry, CounterVec,
    Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // TRANSLATION REQUEST METRICS
    // ============================================================================

    /// Total translation requests by endpoint, format and outcome
    pub static ref TRANSLATION_REQUESTS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("translation_requests_total", "Total translation requests"),
        &["endpoint", "format", "outcome"], // outcome: success or an error kind
        REGISTRY
    ).expect("translation_requests_total registers once");

    /// Translation request duration, measured from send to decoded response
    pub static ref TRANSLATION_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        HistogramOpts::new("translation_request_duration_seconds", "Translation request duration in seconds")
            .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
        &["endpoint"],
        REGISTRY
    ).expect("translation_request_duration_seconds registers once");
}

/// Gather all metrics and return as Prometheus text format
pub fn gather_metrics() -> Result<String> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TranslateError::Internal(format!("Failed to encode metrics: {}", e)))?;
    String::from_utf8(buffer)
        .map_err(|e| TranslateError::Internal(format!("Metrics are not UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_registration() {
        TRANSLATION_REQUESTS
            .with_label_values(&["http://registry.test/translate", "text", "success"])
            .inc();
        TRANSLATION_DURATION
            .with_label_values(&["http://registry.test/translate"])
            .observe(0.2);

        let metrics = gather_metrics().unwrap();
        assert!(metrics.contains("translation_requests_total"));
        assert!(metrics.contains("translation_request_duration_seconds"));
    }
}
