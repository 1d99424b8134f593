//! Configuration for shot analysis.
//!
//! The thresholds here are calibration constants tuned against the typical
//! noise floor of the upstream detector. They are not physical units.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// Tunable constants for motion and shot-type classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    // ============================================
    // Motion Vector Extraction
    // ============================================
    /// Trailing window size in frames; frame `i` is compared to `i - window`.
    pub motion_window: usize,

    /// Minimum usable frames for an entity to contribute motion vectors.
    pub min_motion_frames: usize,

    // ============================================
    // Camera Motion Classification
    // ============================================
    /// Minimum vectors across a shot before any motion is reported.
    pub min_motion_vectors: usize,

    /// Mean |dx| above which a pan is reported.
    pub pan_threshold: f64,

    /// Mean |dy| above which a tilt is reported.
    pub tilt_threshold: f64,

    /// Mean |scale - 1| above which a zoom is reported.
    pub zoom_threshold: f64,

    /// Multiplier mapping raw motion magnitude onto the 0-1 intensity scale.
    pub intensity_gain: f64,

    // ============================================
    // Shot Type Classification
    // ============================================
    /// Number of largest boxes averaged for face/person size.
    pub top_box_count: usize,

    /// Average face area (fraction of frame) above which a shot is a close-up.
    pub face_close_up_area: f64,

    /// Average person area above which a shot is a close-up.
    pub person_close_up_area: f64,

    /// Average person area above which a shot is medium.
    pub person_medium_area: f64,

    // ============================================
    // Description
    // ============================================
    /// Object tracks must exceed this confidence to be named in descriptions.
    pub object_label_confidence: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            motion_window: 3,
            min_motion_frames: 4,
            min_motion_vectors: 2,
            pan_threshold: 0.05,
            tilt_threshold: 0.05,
            zoom_threshold: 0.05,
            intensity_gain: 5.0,
            top_box_count: 3,
            face_close_up_area: 0.10,
            person_close_up_area: 0.30,
            person_medium_area: 0.15,
            object_label_confidence: 0.5,
        }
    }
}

impl AnalysisConfig {
    /// Create config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            motion_window: env_or("CAMLENS_MOTION_WINDOW", defaults.motion_window),
            min_motion_frames: env_or("CAMLENS_MIN_MOTION_FRAMES", defaults.min_motion_frames),
            min_motion_vectors: env_or("CAMLENS_MIN_MOTION_VECTORS", defaults.min_motion_vectors),
            pan_threshold: env_or("CAMLENS_PAN_THRESHOLD", defaults.pan_threshold),
            tilt_threshold: env_or("CAMLENS_TILT_THRESHOLD", defaults.tilt_threshold),
            zoom_threshold: env_or("CAMLENS_ZOOM_THRESHOLD", defaults.zoom_threshold),
            intensity_gain: env_or("CAMLENS_INTENSITY_GAIN", defaults.intensity_gain),
            top_box_count: env_or("CAMLENS_TOP_BOX_COUNT", defaults.top_box_count),
            face_close_up_area: env_or("CAMLENS_FACE_CLOSE_UP_AREA", defaults.face_close_up_area),
            person_close_up_area: env_or(
                "CAMLENS_PERSON_CLOSE_UP_AREA",
                defaults.person_close_up_area,
            ),
            person_medium_area: env_or("CAMLENS_PERSON_MEDIUM_AREA", defaults.person_medium_area),
            object_label_confidence: env_or(
                "CAMLENS_OBJECT_LABEL_CONFIDENCE",
                defaults.object_label_confidence,
            ),
        }
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> AnalysisResult<()> {
        if self.motion_window == 0 {
            return Err(AnalysisError::invalid_config("motion_window must be at least 1"));
        }
        if self.top_box_count == 0 {
            return Err(AnalysisError::invalid_config("top_box_count must be at least 1"));
        }

        let thresholds = [
            ("pan_threshold", self.pan_threshold),
            ("tilt_threshold", self.tilt_threshold),
            ("zoom_threshold", self.zoom_threshold),
            ("intensity_gain", self.intensity_gain),
            ("face_close_up_area", self.face_close_up_area),
            ("person_close_up_area", self.person_close_up_area),
            ("person_medium_area", self.person_medium_area),
            ("object_label_confidence", self.object_label_confidence),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(AnalysisError::invalid_config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.person_medium_area > self.person_close_up_area {
            return Err(AnalysisError::invalid_config(
                "person_medium_area must not exceed person_close_up_area",
            ));
        }

        Ok(())
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
