//! Wire types for the annotation service's JSON results.
//!
//! Field names follow protobuf-JSON camelCase. Every field is optional and
//! `null` is accepted wherever a list is expected. Durations and boxes are
//! kept as raw JSON values because the service encodes them several ways.
//!
//! List elements are decoded one at a time: an element of the wrong shape is
//! skipped with a warning instead of failing the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// Top-level response holding one result per annotated video.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResponse {
    #[serde(default, deserialize_with = "lenient_list")]
    pub annotation_results: Vec<RawVideoResult>,
}

/// Annotation result for a single video.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVideoResult {
    #[serde(default, deserialize_with = "lenient_option")]
    pub segment: Option<RawSegment>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub shot_annotations: Vec<RawSegment>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub object_annotations: Vec<RawObjectAnnotation>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub person_detection_annotations: Vec<RawDetectionAnnotation>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub face_detection_annotations: Vec<RawDetectionAnnotation>,
}

/// Time span given as a pair of durations.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSegment {
    #[serde(default)]
    pub start_time_offset: Option<Value>,
    #[serde(default)]
    pub end_time_offset: Option<Value>,
}

/// Tracked object with its per-frame boxes.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawObjectAnnotation {
    #[serde(default, deserialize_with = "lenient_option")]
    pub entity: Option<RawEntity>,
    #[serde(default)]
    pub confidence: Option<Value>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub frames: Vec<RawTimestampedObject>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntity {
    #[serde(default)]
    pub description: Option<String>,
}

/// Person or face detection: a group of tracks.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDetectionAnnotation {
    #[serde(default, deserialize_with = "lenient_list")]
    pub tracks: Vec<RawTrack>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTrack {
    #[serde(default)]
    pub confidence: Option<Value>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub timestamped_objects: Vec<RawTimestampedObject>,
}

/// One detection: a time offset and a normalized box.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTimestampedObject {
    #[serde(default)]
    pub time_offset: Option<Value>,
    #[serde(default)]
    pub normalized_bounding_box: Option<Value>,
    #[serde(default)]
    pub confidence: Option<Value>,
}

/// Decode a list element by element. `null` or a non-list is empty.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            warn!(found = json_kind(&other), "Expected a list, ignoring field");
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!(error = %e, "Skipping malformed annotation entry");
                None
            }
        })
        .collect())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decode an optional nested object, treating a malformed one as absent.
fn lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => match serde_json::from_value(value) {
            Ok(parsed) => Ok(Some(parsed)),
            Err(e) => {
                warn!(error = %e, "Ignoring malformed annotation field");
                Ok(None)
            }
        },
    }
}
