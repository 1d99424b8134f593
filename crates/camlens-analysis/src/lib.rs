//! Cinematographic analysis of annotation-service tracks.
//!
//! Turns noisy per-entity bounding-box sequences into stable per-shot labels:
//!
//! 1. **Motion Vector Extraction**: windowed center displacement and width ratio per track
//! 2. **Camera Motion Classification**: pan, tilt and zoom from the pooled mean vector
//! 3. **Shot Type Classification**: close-up, medium or wide from the largest face/person boxes
//! 4. **Shot Segmentation**: track-to-shot assignment and description assembly
//!
//! # Architecture
//!
//! ```text
//! Input: VideoAnnotations (shots + entity tracks)
//!     │
//!     ▼
//! Shot Segmenter → tracks per shot (inclusive overlap)
//!     │
//!     ├──▶ Motion Vector Extractor → vectors per track
//!     │        │
//!     │        ▼
//!     │    Camera Motion Classifier → primary/secondary motion + intensity
//!     │
//!     └──▶ Shot Type Classifier → close-up / medium / wide
//!     │
//!     ▼
//! ShotAnalysis per shot (type, motion, entities, description)
//! ```
//!
//! Every stage is a pure function of its input. Shots are analyzed
//! independently, so callers may process them in any order.

pub mod camera_motion;
pub mod config;
pub mod error;
pub mod geometry;
pub mod motion;
pub mod segmenter;
pub mod shot_type;

pub use camera_motion::{CameraMotion, CameraMotionClassifier};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, AnalysisResult};
pub use motion::{MotionVector, MotionVectorExtractor};
pub use segmenter::{average_position, resolve_shots, tracks_for_shot, ShotSegmenter};
pub use shot_type::ShotTypeClassifier;
