//! Shared data models for camlens.
//!
//! This crate provides Serde-serializable types for:
//! - Time offsets and normalized bounding boxes
//! - Entity tracks (objects, persons, faces) and their frames
//! - Validated annotation input for one video
//! - Shots and the per-shot analysis records derived from them
//! - Director insights returned by the narrative-generation step

pub mod analysis;
pub mod annotations;
pub mod bbox;
pub mod insight;
pub mod shot;
pub mod time;
pub mod track;

// Re-export common types
pub use analysis::{DominantEntity, MotionLabel, ScreenPosition, ShotAnalysis, ShotType};
pub use annotations::VideoAnnotations;
pub use bbox::{BoundingBox, Point};
pub use insight::{DirectorInsight, ShotReport, ANALYSIS_UNAVAILABLE};
pub use shot::Shot;
pub use time::TimeOffset;
pub use track::{EntityKind, EntityTrack, Frame, TimeSegment};
