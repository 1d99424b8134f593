//! Entity track models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;
use crate::time::TimeOffset;

/// What kind of entity a track follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Object,
    Person,
    Face,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Object => "object",
            EntityKind::Person => "person",
            EntityKind::Face => "face",
        }
    }
}

/// A single detection of an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// When the detection was made.
    pub time_offset: TimeOffset,
    /// Detected box; `None` when the detector reported no usable geometry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    /// Detection confidence (0-1).
    #[serde(default)]
    pub confidence: f64,
}

impl Frame {
    pub fn new(time_offset: TimeOffset, bounding_box: Option<BoundingBox>, confidence: f64) -> Self {
        Self {
            time_offset,
            bounding_box,
            confidence,
        }
    }

    /// Frame time in seconds.
    #[inline]
    pub fn time(&self) -> f64 {
        self.time_offset.as_secs()
    }
}

/// Temporal extent of a track, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TimeSegment {
    pub start: f64,
    pub end: f64,
}

/// A tracked object, person or face with a stable identity across frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntityTrack {
    pub kind: EntityKind,
    /// Entity description (e.g. "car"); "person"/"face" for those kinds.
    pub label: String,
    /// Track-level confidence (0-1).
    pub confidence: f64,
    /// Frames sorted by time.
    pub frames: Vec<Frame>,
    /// Min/max frame time.
    pub time_segment: TimeSegment,
}

impl EntityTrack {
    /// Build a track from frames in any order.
    ///
    /// Frames are sorted by time and the time segment is derived from them.
    /// Returns `None` when there are no frames, since the track cannot be
    /// placed on the timeline.
    pub fn new(
        kind: EntityKind,
        label: impl Into<String>,
        confidence: f64,
        mut frames: Vec<Frame>,
    ) -> Option<Self> {
        if frames.is_empty() {
            return None;
        }
        frames.sort_by(|a, b| a.time().total_cmp(&b.time()));

        let time_segment = TimeSegment {
            start: frames.first()?.time(),
            end: frames.last()?.time(),
        };

        Some(Self {
            kind,
            label: label.into(),
            confidence,
            frames,
            time_segment,
        })
    }

    /// Iterate over the boxes this track actually has.
    pub fn boxes(&self) -> impl Iterator<Item = &BoundingBox> {
        self.frames.iter().filter_map(|f| f.bounding_box.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(t: f64) -> Frame {
        Frame::new(
            TimeOffset::from_secs(t).unwrap(),
            Some(BoundingBox::new(0.1, 0.1, 0.2, 0.2)),
            0.9,
        )
    }

    #[test]
    fn test_track_sorts_frames_and_derives_segment() {
        let track =
            EntityTrack::new(EntityKind::Object, "car", 0.8, vec![frame(3.0), frame(1.0), frame(2.0)])
                .unwrap();
        let times: Vec<f64> = track.frames.iter().map(Frame::time).collect();
        assert_eq!(times, vec![1.0, 2.0, 3.0]);
        assert_eq!(track.time_segment, TimeSegment { start: 1.0, end: 3.0 });
    }

    #[test]
    fn test_empty_track_rejected() {
        assert!(EntityTrack::new(EntityKind::Face, "face", 1.0, vec![]).is_none());
    }

    #[test]
    fn test_boxes_skip_missing() {
        let mut frames = vec![frame(0.0), frame(1.0)];
        frames[1].bounding_box = None;
        let track = EntityTrack::new(EntityKind::Person, "person", 0.7, frames).unwrap();
        assert_eq!(track.boxes().count(), 1);
    }
}
