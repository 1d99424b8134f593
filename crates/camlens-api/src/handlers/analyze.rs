//! Camera analysis handler.

use std::sync::Arc;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use camlens_analysis::ShotSegmenter;
use camlens_annotations::{parse_annotations, AnnotationError};
use camlens_director::generate_insights_or_placeholder;
use camlens_models::ShotReport;
use serde::Serialize;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::metrics::{record_analysis, record_narrative_duration};
use crate::state::AppState;

/// Response for `POST /api/analyze-camera`.
#[derive(Debug, Serialize)]
pub struct AnalyzeCameraResponse {
    pub success: bool,
    pub shots: Vec<ShotReport>,
}

/// Analyze an annotation result and attach director insights to each shot.
///
/// The body is the annotation service's JSON, either the full response or a
/// single video result.
pub async fn analyze_camera(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<AnalyzeCameraResponse>> {
    if body.is_empty() {
        return Err(ApiError::bad_request("No annotation data provided"));
    }

    let value: serde_json::Value =
        serde_json::from_slice(&body).map_err(AnnotationError::from)?;
    let annotations = parse_annotations(value)?;

    let start = Instant::now();
    let config = Arc::clone(&state.analysis);
    let analyses = tokio::task::spawn_blocking(move || {
        ShotSegmenter::new(&config).analyze(&annotations)
    })
    .await
    .map_err(|e| ApiError::internal(format!("Analysis task failed: {}", e)))?;
    record_analysis(analyses.len(), start.elapsed().as_secs_f64());

    let narrative_start = Instant::now();
    let insights = generate_insights_or_placeholder(
        state.narrator.as_ref(),
        &analyses,
        state.narrative_timeout,
    )
    .await;
    record_narrative_duration(narrative_start.elapsed().as_secs_f64());

    let shots: Vec<ShotReport> = analyses
        .into_iter()
        .zip(insights)
        .map(|(analysis, insight)| ShotReport::new(analysis, insight))
        .collect();

    info!(
        shots = shots.len(),
        narrator = state.narrator.name(),
        "Camera analysis complete"
    );

    Ok(Json(AnalyzeCameraResponse {
        success: true,
        shots,
    }))
}
