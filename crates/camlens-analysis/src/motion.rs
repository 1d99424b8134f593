//! Motion vector extraction for a single entity track.
//!
//! Raw frame-to-frame box deltas from the detector are jittery, so each
//! frame is compared with the frame `window` positions earlier and the
//! displacement is divided by the window size.

use camlens_models::Frame;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::AnalysisConfig;
use crate::geometry::{center, scale_ratio};

/// Smoothed inter-frame change of one entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionVector {
    /// Horizontal center displacement per frame (normalized units).
    pub dx: f64,
    /// Vertical center displacement per frame (normalized units).
    pub dy: f64,
    /// Width ratio of the current box to the earlier box.
    pub scale: f64,
}

/// Extracts windowed motion vectors from an entity's frames.
#[derive(Debug, Clone)]
pub struct MotionVectorExtractor {
    window: usize,
    min_frames: usize,
}

impl Default for MotionVectorExtractor {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl MotionVectorExtractor {
    /// Create an extractor from config.
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            window: config.motion_window.max(1),
            min_frames: config.min_motion_frames,
        }
    }

    /// Compute motion vectors for frames within `[start, end]` (inclusive).
    ///
    /// Returns `None` for insufficient data: fewer than the minimum usable
    /// frames, or no valid comparison. Callers must treat that as a
    /// non-contributing entity, not as zero motion.
    pub fn extract(&self, frames: &[Frame], start: f64, end: f64) -> Option<Vec<MotionVector>> {
        let mut usable: Vec<&Frame> = frames
            .iter()
            .filter(|f| {
                let t = f.time();
                t >= start
                    && t <= end
                    && f.bounding_box.as_ref().is_some_and(|b| !b.is_degenerate())
            })
            .collect();

        if usable.len() < self.min_frames {
            trace!(
                usable = usable.len(),
                required = self.min_frames,
                "Insufficient frames for motion extraction"
            );
            return None;
        }

        usable.sort_by(|a, b| a.time().total_cmp(&b.time()));

        let window = self.window as f64;
        let vectors: Vec<MotionVector> = (self.window..usable.len())
            .filter_map(|i| {
                let prev = usable[i - self.window].bounding_box.as_ref()?;
                let curr = usable[i].bounding_box.as_ref()?;

                let prev_center = center(Some(prev))?;
                let curr_center = center(Some(curr))?;
                let scale = scale_ratio(prev, curr)?;

                Some(MotionVector {
                    dx: (curr_center.x - prev_center.x) / window,
                    dy: (curr_center.y - prev_center.y) / window,
                    scale,
                })
            })
            .collect();

        if vectors.is_empty() {
            return None;
        }
        Some(vectors)
    }
}
