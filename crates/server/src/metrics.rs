use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder};
use service::genes::GeneError;

// Prometheus metrics (default registry)
pub static GENES_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "genes_api_gene_created_total",
        "Total genes created"
    )
    .expect("register gene_created_total")
});

pub static GENE_REJECTIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "genes_api_gene_conflicts_total",
        "Gene requests rejected by a business rule",
        &["kind"]
    )
    .expect("register gene_conflicts_total")
});

pub static GENES_DELETED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "genes_api_gene_deleted_total",
        "Total genes deleted"
    )
    .expect("register gene_deleted_total")
});

pub static STORE_ERRORS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "genes_api_store_errors_total",
        "Total store failures surfaced as 500"
    )
    .expect("register store_errors_total")
});

/// Count a failed gene operation under its error kind.
pub fn record_gene_error(e: &GeneError) {
    let kind = match e {
        GeneError::TranscriptAlreadyExists => "transcript_exists",
        GeneError::GeneNameAlreadyExists => "name_exists",
        GeneError::Store(_) => {
            STORE_ERRORS_TOTAL.inc();
            return;
        }
    };
    GENE_REJECTIONS_TOTAL.with_label_values(&[kind]).inc();
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
