//! Prometheus metrics for money order authorization.
//!
//! All metrics follow the naming convention: `mo_<metric>_<unit>`
//!
//! ## Metric Types
//!
//! - **Counter**: Monotonically increasing value (e.g., orders_executed_total)
//! - **Histogram**: Distribution of values (e.g., execute_duration_seconds)

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Counter, CounterVec, Encoder, Histogram, HistogramOpts, Opts, Registry,
    TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // ORDER LIFECYCLE
    // =========================================================================

    /// Orders that reached `Executed`
    pub static ref ORDERS_EXECUTED: Counter = Counter::new(
        "mo_orders_executed_total",
        "Total number of money orders executed"
    ).expect("metric creation failed");

    /// Orders that reached `Cancelled`
    pub static ref ORDERS_CANCELLED: Counter = Counter::new(
        "mo_orders_cancelled_total",
        "Total number of money orders cancelled"
    ).expect("metric creation failed");

    /// Rejected execute/cancel calls
    pub static ref ORDER_REJECTIONS: CounterVec = CounterVec::new(
        Opts::new("mo_order_rejections_total", "Rejected order operations by reason"),
        &["reason"]  // reason: insufficient_funds/not_owner/invalid_signature/already_executed/ledger
    ).expect("metric creation failed");

    /// Sum of executed amounts
    pub static ref TRANSFERRED_AMOUNT: Counter = Counter::new(
        "mo_transferred_amount_total",
        "Total amount transferred by executed orders"
    ).expect("metric creation failed");

    /// Execute duration
    pub static ref EXECUTE_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "mo_order_execute_duration_seconds",
            "Time spent authorizing and executing an order"
        ).buckets(exponential_buckets(0.00001, 2.0, 15).unwrap_or_default())
    ).expect("metric creation failed");

    // =========================================================================
    // SIGNATURE METRICS
    // =========================================================================

    /// Total signature verifications
    pub static ref SIGNATURE_VERIFICATIONS: CounterVec = CounterVec::new(
        Opts::new("mo_signature_verifications_total", "Total signature verifications"),
        &["mode", "result"]  // mode: account/public_key, result: valid/invalid
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Calling it more than once is harmless.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(ORDERS_EXECUTED.clone()),
        Box::new(ORDERS_CANCELLED.clone()),
        Box::new(ORDER_REJECTIONS.clone()),
        Box::new(TRANSFERRED_AMOUNT.clone()),
        Box::new(EXECUTE_DURATION.clone()),
        Box::new(SIGNATURE_VERIFICATIONS.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Record one signature verification outcome.
pub fn record_verification(mode: &str, valid: bool) {
    let result = if valid { "valid" } else { "invalid" };
    SIGNATURE_VERIFICATIONS
        .with_label_values(&[mode, result])
        .inc();
}

/// Record a rejected order operation.
pub fn record_rejection(reason: &str) {
    ORDER_REJECTIONS.with_label_values(&[reason]).inc();
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        self.histogram.observe(duration);
    }
}

/// Start timing for a histogram. Observation happens on drop.
#[macro_export]
macro_rules! time_histogram {
    ($histogram:expr) => {
        $crate::metrics::HistogramTimer::new(&$histogram)
    };
}
