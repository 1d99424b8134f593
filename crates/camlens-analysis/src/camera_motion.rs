//! Camera motion classification for a shot.
//!
//! Motion vectors from every entity active in the shot are pooled and
//! averaged together. Entities with more valid comparisons therefore carry
//! more weight than short, noisy tracks.

use camlens_models::MotionLabel;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::motion::MotionVector;

/// Camera motion inferred for one shot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraMotion {
    /// First detected motion in pan, tilt, zoom order; `Static` if none.
    pub primary: MotionLabel,
    /// Remaining detected motions, same order.
    pub secondary: Vec<MotionLabel>,
    /// Combined magnitude, clamped to [0, 1].
    pub intensity: f64,
}

impl CameraMotion {
    /// No detectable camera movement.
    pub fn static_shot() -> Self {
        Self {
            primary: MotionLabel::Static,
            secondary: Vec::new(),
            intensity: 0.0,
        }
    }

    /// All detected labels, primary first. Empty for a static shot.
    pub fn labels(&self) -> Vec<MotionLabel> {
        if self.primary.is_static() {
            return Vec::new();
        }
        std::iter::once(self.primary)
            .chain(self.secondary.iter().copied())
            .collect()
    }
}

impl Default for CameraMotion {
    fn default() -> Self {
        Self::static_shot()
    }
}

/// Classifier turning pooled motion vectors into pan/tilt/zoom labels.
#[derive(Debug, Clone)]
pub struct CameraMotionClassifier {
    pub min_vectors: usize,
    pub pan_threshold: f64,
    pub tilt_threshold: f64,
    pub zoom_threshold: f64,
    pub intensity_gain: f64,
}

impl Default for CameraMotionClassifier {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl CameraMotionClassifier {
    /// Create classifier with thresholds from config.
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            min_vectors: config.min_motion_vectors,
            pan_threshold: config.pan_threshold,
            tilt_threshold: config.tilt_threshold,
            zoom_threshold: config.zoom_threshold,
            intensity_gain: config.intensity_gain,
        }
    }

    /// Classify the camera motion of a shot.
    pub fn classify(&self, vectors: &[MotionVector]) -> CameraMotion {
        if vectors.len() < self.min_vectors.max(1) {
            return CameraMotion::static_shot();
        }

        let mean = mean_vector(vectors);
        let zoom_delta = mean.scale - 1.0;

        let mut detected = Vec::with_capacity(3);
        if mean.dx.abs() > self.pan_threshold {
            detected.push(if mean.dx > 0.0 {
                MotionLabel::PanRight
            } else {
                MotionLabel::PanLeft
            });
        }
        if mean.dy.abs() > self.tilt_threshold {
            detected.push(if mean.dy > 0.0 {
                MotionLabel::TiltDown
            } else {
                MotionLabel::TiltUp
            });
        }
        if zoom_delta.abs() > self.zoom_threshold {
            detected.push(if mean.scale > 1.0 {
                MotionLabel::ZoomOut
            } else {
                MotionLabel::ZoomIn
            });
        }

        let magnitude =
            (mean.dx * mean.dx + mean.dy * mean.dy + zoom_delta * zoom_delta).sqrt();
        let intensity = clamp_unit(magnitude * self.intensity_gain);

        debug!(
            "Camera motion: vectors={}, mean_dx={:.4}, mean_dy={:.4}, mean_scale={:.4}, intensity={:.3}",
            vectors.len(),
            mean.dx,
            mean.dy,
            mean.scale,
            intensity
        );

        let mut labels = detected.into_iter();
        match labels.next() {
            Some(primary) => CameraMotion {
                primary,
                secondary: labels.collect(),
                intensity,
            },
            None => CameraMotion {
                primary: MotionLabel::Static,
                secondary: Vec::new(),
                intensity,
            },
        }
    }
}

/// Arithmetic mean of each component.
fn mean_vector(vectors: &[MotionVector]) -> MotionVector {
    let n = vectors.len() as f64;
    let sum = vectors.iter().fold(
        MotionVector {
            dx: 0.0,
            dy: 0.0,
            scale: 0.0,
        },
        |acc, v| MotionVector {
            dx: acc.dx + v.dx,
            dy: acc.dy + v.dy,
            scale: acc.scale + v.scale,
        },
    );
    MotionVector {
        dx: sum.dx / n,
        dy: sum.dy / n,
        scale: sum.scale / n,
    }
}

/// Clamp to [0, 1]; NaN maps to 0.
fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}
