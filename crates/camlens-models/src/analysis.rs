//! Per-shot analysis records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::bbox::Point;
use crate::shot::Shot;
use crate::track::EntityKind;

/// Framing of a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ShotType {
    #[serde(rename = "close-up")]
    CloseUp,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "wide")]
    Wide,
}

impl ShotType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShotType::CloseUp => "close-up",
            ShotType::Medium => "medium",
            ShotType::Wide => "wide",
        }
    }

    /// Leading phrase used in shot descriptions.
    pub fn phrase(&self) -> &'static str {
        match self {
            ShotType::CloseUp => "Close-up shot",
            ShotType::Medium => "Medium shot",
            ShotType::Wide => "Wide shot",
        }
    }
}

impl std::fmt::Display for ShotType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Camera motion label inferred for a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum MotionLabel {
    Static,
    PanLeft,
    PanRight,
    TiltUp,
    TiltDown,
    ZoomIn,
    ZoomOut,
}

impl MotionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionLabel::Static => "static",
            MotionLabel::PanLeft => "pan-left",
            MotionLabel::PanRight => "pan-right",
            MotionLabel::TiltUp => "tilt-up",
            MotionLabel::TiltDown => "tilt-down",
            MotionLabel::ZoomIn => "zoom-in",
            MotionLabel::ZoomOut => "zoom-out",
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, MotionLabel::Static)
    }
}

impl std::fmt::Display for MotionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Average on-screen position of an entity.
///
/// `(0, 0)` means "no position data", not "top-left" or "centered".
pub type ScreenPosition = Point;

/// An entity present in a shot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DominantEntity {
    pub kind: EntityKind,
    pub label: String,
    pub confidence: f64,
    pub screen_position: ScreenPosition,
}

/// Cinematographic interpretation of one shot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShotAnalysis {
    pub shot: Shot,
    /// Shot duration in seconds
    pub duration: f64,
    pub shot_type: ShotType,
    pub primary_motion: MotionLabel,
    pub secondary_motions: Vec<MotionLabel>,
    /// Combined motion magnitude (0-1)
    pub intensity: f64,
    /// Entities assigned to the shot, in track order
    pub dominant_entities: Vec<DominantEntity>,
    /// Human-readable summary used as prompt material
    pub description: String,
}
