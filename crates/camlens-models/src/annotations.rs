//! Validated annotation input.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::shot::Shot;
use crate::track::EntityTrack;

/// Annotation results for one video, after parsing and validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoAnnotations {
    /// Detected shots, ordered by start time. May be empty.
    pub shots: Vec<Shot>,
    /// Object, person and face tracks in discovery order.
    pub tracks: Vec<EntityTrack>,
    /// Full analyzed segment, when the service reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<Shot>,
}

impl VideoAnnotations {
    pub fn new(shots: Vec<Shot>, tracks: Vec<EntityTrack>, segment: Option<Shot>) -> Self {
        Self {
            shots,
            tracks,
            segment,
        }
    }

    /// Span covered by all tracks, if there are any.
    pub fn track_extent(&self) -> Option<Shot> {
        let start = self
            .tracks
            .iter()
            .map(|t| t.time_segment.start)
            .reduce(f64::min)?;
        let end = self
            .tracks
            .iter()
            .map(|t| t.time_segment.end)
            .reduce(f64::max)?;
        Shot::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoundingBox, EntityKind, Frame, TimeOffset};

    fn track(start: f64, end: f64) -> EntityTrack {
        let frames = [start, end]
            .iter()
            .map(|t| {
                Frame::new(
                    TimeOffset::from_secs(*t).unwrap(),
                    Some(BoundingBox::new(0.1, 0.1, 0.2, 0.2)),
                    0.9,
                )
            })
            .collect();
        EntityTrack::new(EntityKind::Object, "cup", 0.9, frames).unwrap()
    }

    #[test]
    fn test_track_extent() {
        let annotations = VideoAnnotations::new(vec![], vec![track(3.0, 8.0), track(1.5, 4.0)], None);
        assert_eq!(annotations.track_extent(), Shot::new(1.5, 8.0));
    }

    #[test]
    fn test_track_extent_empty() {
        assert!(VideoAnnotations::default().track_extent().is_none());
    }
}
