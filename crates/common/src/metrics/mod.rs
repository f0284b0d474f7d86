//! Metrics and observability utilities
//!
//! Records recommendation activity through the `metrics` facade with
//! standardized naming conventions. Nothing is exported unless the host
//! application installs a recorder.

use metrics::{
    counter, describe_counter, describe_histogram, histogram, Unit,
};
use std::time::Instant;

/// Metrics prefix for all ScholarRec metrics
pub const METRICS_PREFIX: &str = "scholarrec";

/// Histogram buckets for prediction latency (in seconds)
pub const LATENCY_BUCKETS: &[f64] = &[
    0.0005, // 0.5ms
    0.001,  // 1ms
    0.005,  // 5ms
    0.010,  // 10ms
    0.025,  // 25ms
    0.050,  // 50ms
    0.100,  // 100ms
    0.250,  // 250ms
    1.000,  // 1s
];

/// Register all metric descriptions
pub fn register_metrics() {
    describe_counter!(
        format!("{}_recommendations_total", METRICS_PREFIX),
        Unit::Count,
        "Total number of recommendation requests by strategy"
    );

    describe_histogram!(
        format!("{}_recommendation_duration_seconds", METRICS_PREFIX),
        Unit::Seconds,
        "Recommendation latency in seconds"
    );

    describe_counter!(
        format!("{}_recommended_articles_total", METRICS_PREFIX),
        Unit::Count,
        "Total articles returned"
    );

    describe_counter!(
        format!("{}_empty_results_total", METRICS_PREFIX),
        Unit::Count,
        "Recommendations that produced no articles"
    );

    describe_counter!(
        format!("{}_backfill_articles_total", METRICS_PREFIX),
        Unit::Count,
        "Articles appended by the text-only backfill pass"
    );

    describe_counter!(
        format!("{}_classifier_calls_total", METRICS_PREFIX),
        Unit::Count,
        "Topic classifier invocations"
    );

    tracing::info!("Metrics registered");
}

/// Helper to time a single recommendation
pub struct RecommendationTimer {
    start: Instant,
    strategy: &'static str,
}

impl RecommendationTimer {
    /// Start tracking a recommendation
    pub fn start(strategy: &'static str) -> Self {
        Self {
            start: Instant::now(),
            strategy,
        }
    }

    /// Record completion with the number of articles returned
    pub fn finish(self, result_count: usize) {
        let duration = self.start.elapsed().as_secs_f64();

        counter!(
            format!("{}_recommendations_total", METRICS_PREFIX),
            "strategy" => self.strategy
        )
        .increment(1);

        histogram!(
            format!("{}_recommendation_duration_seconds", METRICS_PREFIX),
            "strategy" => self.strategy
        )
        .record(duration);

        counter!(
            format!("{}_recommended_articles_total", METRICS_PREFIX),
            "strategy" => self.strategy
        )
        .increment(result_count as u64);

        if result_count == 0 {
            counter!(
                format!("{}_empty_results_total", METRICS_PREFIX),
                "strategy" => self.strategy
            )
            .increment(1);
        }
    }
}

/// Helper to record backfill rows
pub fn record_backfill(rows: usize) {
    counter!(format!("{}_backfill_articles_total", METRICS_PREFIX)).increment(rows as u64);
}

/// Helper to record classifier calls
pub fn record_classification(success: bool) {
    let status = if success { "success" } else { "error" };

    counter!(
        format!("{}_classifier_calls_total", METRICS_PREFIX),
        "status" => status
    )
    .increment(1);
}
