//! Prometheus metrics for the API server.

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "camlens_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "camlens_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "camlens_http_requests_in_flight";

    // Analysis metrics
    pub const ANALYSES_TOTAL: &str = "camlens_analyses_total";
    pub const SHOTS_ANALYZED_TOTAL: &str = "camlens_shots_analyzed_total";
    pub const ANALYSIS_DURATION_SECONDS: &str = "camlens_analysis_duration_seconds";
    pub const NARRATIVE_DURATION_SECONDS: &str = "camlens_narrative_duration_seconds";
}

/// Path label shared by every request that matched no route.
pub const UNMATCHED_PATH: &str = "unmatched";

/// Route template for the request, so the path label stays bounded.
pub fn metric_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_PATH.to_string())
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a completed shot analysis.
pub fn record_analysis(shot_count: usize, duration_secs: f64) {
    counter!(names::ANALYSES_TOTAL).increment(1);
    counter!(names::SHOTS_ANALYZED_TOTAL).increment(shot_count as u64);
    histogram!(names::ANALYSIS_DURATION_SECONDS).record(duration_secs);
}

/// Record director insight generation time.
pub fn record_narrative_duration(duration_secs: f64) {
    histogram!(names::NARRATIVE_DURATION_SECONDS).record(duration_secs);
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = metric_path(&request);
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);

    let response = next.run(request).await;

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    record_http_request(&method, &path, status, duration);

    response
}
