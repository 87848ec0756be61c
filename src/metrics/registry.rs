use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, register_int_gauge, HistogramVec,
    IntCounterVec, IntGauge,
};

lazy_static! {
    // HTTP Metrics
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "http_requests_total",
        "Total HTTP requests",
        &["method", "path", "status"]
    )
    .unwrap();

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    )
    .unwrap();

    // Translation Metrics
    pub static ref TRANSLATION_LOOKUPS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "translation_lookups_total",
        "Classified errors rendered, by whether the class had a label",
        &["outcome"]  // outcome: translated, untranslated
    )
    .unwrap();

    pub static ref TRANSLATION_ENTRIES: IntGauge = register_int_gauge!(
        "translation_entries",
        "Number of error classes in the loaded translation table"
    )
    .unwrap();

    pub static ref TRANSLATION_RELOADS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "translation_reloads_total",
        "Translation table reloads",
        &["result"]  // result: success, failure
    )
    .unwrap();
}

/// Initialize all metrics (called on startup)
pub fn init_metrics() {
    // Force lazy_static initialization
    lazy_static::initialize(&HTTP_REQUESTS_TOTAL);
    lazy_static::initialize(&HTTP_REQUEST_DURATION_SECONDS);
    lazy_static::initialize(&TRANSLATION_LOOKUPS_TOTAL);
    lazy_static::initialize(&TRANSLATION_ENTRIES);
    lazy_static::initialize(&TRANSLATION_RELOADS_TOTAL);
}
