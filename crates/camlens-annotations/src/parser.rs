//! Conversion of raw annotation results into validated models.
//!
//! Missing data stays missing: an absent time offset drops the frame or
//! shot, and a box lacking any coordinate becomes "no box". Absent values
//! are never coerced to zero.

use camlens_models::{BoundingBox, EntityKind, EntityTrack, Frame, Shot, TimeOffset, VideoAnnotations};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{AnnotationError, AnnotationResult};
use crate::raw::{RawResponse, RawSegment, RawTimestampedObject, RawVideoResult};

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Labels assigned to person and face tracks.
pub const PERSON_LABEL: &str = "person";
pub const FACE_LABEL: &str = "face";

/// Parse an annotation document from a JSON string.
pub fn parse_annotations_str(json: &str) -> AnnotationResult<VideoAnnotations> {
    let value: Value = serde_json::from_str(json)?;
    parse_annotations(value)
}

/// Parse an annotation document.
///
/// Accepts either the full service response (`{"annotationResults": [...]}`,
/// of which the first result is used) or a bare per-video result.
pub fn parse_annotations(value: Value) -> AnnotationResult<VideoAnnotations> {
    let Value::Object(map) = value else {
        return Err(AnnotationError::invalid_document(
            "expected a JSON object at the top level",
        ));
    };

    let result = if map.contains_key("annotationResults") {
        let response: RawResponse = serde_json::from_value(Value::Object(map))?;
        response
            .annotation_results
            .into_iter()
            .next()
            .ok_or(AnnotationError::MissingResults)?
    } else {
        serde_json::from_value(Value::Object(map))?
    };

    Ok(convert_result(result))
}

/// Convert one raw result, dropping anything that cannot be placed in time.
pub fn convert_result(raw: RawVideoResult) -> VideoAnnotations {
    let shots = convert_shots(&raw.shot_annotations);
    let segment = raw.segment.as_ref().and_then(convert_segment);

    let mut tracks = Vec::new();
    let mut dropped = 0usize;

    for object in &raw.object_annotations {
        let label = object
            .entity
            .as_ref()
            .and_then(|e| e.description.clone())
            .unwrap_or_default();
        match build_track(
            EntityKind::Object,
            label,
            confidence_of(object.confidence.as_ref()).unwrap_or(0.0),
            &object.frames,
        ) {
            Some(track) => tracks.push(track),
            None => dropped += 1,
        }
    }

    for (kind, label, annotations) in [
        (EntityKind::Person, PERSON_LABEL, &raw.person_detection_annotations),
        (EntityKind::Face, FACE_LABEL, &raw.face_detection_annotations),
    ] {
        for track in annotations.iter().flat_map(|a| a.tracks.iter()) {
            match build_track(
                kind,
                label,
                confidence_of(track.confidence.as_ref()).unwrap_or(0.0),
                &track.timestamped_objects,
            ) {
                Some(track) => tracks.push(track),
                None => dropped += 1,
            }
        }
    }

    if dropped > 0 {
        warn!(dropped, "Dropped tracks without any timed frames");
    }

    debug!(
        shots = shots.len(),
        tracks = tracks.len(),
        has_segment = segment.is_some(),
        "Parsed annotation result"
    );

    VideoAnnotations::new(shots, tracks, segment)
}

/// Valid shots sorted by start time.
fn convert_shots(raw: &[RawSegment]) -> Vec<Shot> {
    let mut shots: Vec<Shot> = raw
        .iter()
        .filter_map(|s| {
            let shot = convert_segment(s);
            if shot.is_none() {
                warn!(
                    start = ?s.start_time_offset,
                    end = ?s.end_time_offset,
                    "Dropping shot with missing or inverted time offsets"
                );
            }
            shot
        })
        .collect();
    shots.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
    shots
}

fn convert_segment(raw: &RawSegment) -> Option<Shot> {
    let start = parse_time_offset(raw.start_time_offset.as_ref()?)?;
    let end = parse_time_offset(raw.end_time_offset.as_ref()?)?;
    Shot::new(start.as_secs(), end.as_secs())
}

fn build_track(
    kind: EntityKind,
    label: impl Into<String>,
    confidence: f64,
    raw_frames: &[RawTimestampedObject],
) -> Option<EntityTrack> {
    let frames: Vec<Frame> = raw_frames
        .iter()
        .filter_map(|f| {
            let time = parse_time_offset(f.time_offset.as_ref()?)?;
            let bounding_box = f
                .normalized_bounding_box
                .as_ref()
                .and_then(parse_bounding_box);
            Some(Frame::new(
                time,
                bounding_box,
                confidence_of(f.confidence.as_ref()).unwrap_or(confidence),
            ))
        })
        .collect();

    EntityTrack::new(kind, label, confidence, frames)
}

/// Parse a protobuf duration.
///
/// Accepted encodings:
/// - `{"seconds": 12, "nanos": 500000000}` (seconds may be a number, a
///   numeric string, or a `{low, high}` 64-bit pair)
/// - `"12.5s"` (protobuf-JSON canonical form)
/// - a plain number of seconds
///
/// Inside a present duration object an unset `seconds` or `nanos` is zero,
/// as in protobuf. A negative or unparsable value yields `None`.
pub fn parse_time_offset(value: &Value) -> Option<TimeOffset> {
    match value {
        Value::Number(n) => TimeOffset::from_secs(n.as_f64()?),
        Value::String(s) => parse_duration_str(s),
        Value::Object(map) => parse_duration_parts(map),
        _ => None,
    }
}

fn parse_duration_parts(map: &Map<String, Value>) -> Option<TimeOffset> {
    let seconds = match present(map.get("seconds")) {
        Some(v) => number_like(v)?,
        None => 0.0,
    };
    let nanos = match present(map.get("nanos")) {
        Some(v) => number_like(v)?,
        None => 0.0,
    };

    TimeOffset::from_parts(seconds, nanos)
}

fn parse_duration_str(s: &str) -> Option<TimeOffset> {
    let trimmed = s.trim();
    let digits = trimmed.strip_suffix('s').unwrap_or(trimmed);
    TimeOffset::from_secs(digits.trim().parse().ok()?)
}

/// Numeric value from a number, a numeric string, or a `{low, high}` pair.
fn number_like(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse().ok()?,
        Value::Object(map) => {
            let low = map.get("low")?.as_i64()?;
            let high = map.get("high")?.as_i64()?;
            (high as f64) * TWO_POW_32 + (low as u32) as f64
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Confidence score. Non-finite encodings such as `"NaN"` count as absent.
fn confidence_of(value: Option<&Value>) -> Option<f64> {
    present(value).and_then(number_like)
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Parse a normalized bounding box.
///
/// All four coordinates must be present and finite; coordinates are clamped
/// to [0, 1]. Inverted boxes are returned as-is and reported degenerate by
/// the geometry helpers.
pub fn parse_bounding_box(value: &Value) -> Option<BoundingBox> {
    let map = value.as_object()?;
    let coord = |name: &str| {
        present(map.get(name))
            .and_then(number_like)
            .map(|v| v.clamp(0.0, 1.0))
    };

    Some(BoundingBox::new(
        coord("left")?,
        coord("top")?,
        coord("right")?,
        coord("bottom")?,
    ))
}
