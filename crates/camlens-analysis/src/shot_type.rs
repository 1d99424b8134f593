//! Shot type classification from face and person box sizes.
//!
//! Framing is judged from the few largest boxes in the shot rather than the
//! mean over every frame: framing is usually constant within a shot while
//! detection boxes fluctuate, and averaging the top few keeps a single
//! spurious huge box from deciding the result.

use camlens_models::{EntityTrack, ShotType};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::geometry::area;

/// Classifier labelling a shot close-up, medium or wide.
#[derive(Debug, Clone)]
pub struct ShotTypeClassifier {
    pub top_box_count: usize,
    pub face_close_up_area: f64,
    pub person_close_up_area: f64,
    pub person_medium_area: f64,
}

impl Default for ShotTypeClassifier {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl ShotTypeClassifier {
    /// Create classifier with thresholds from config.
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            top_box_count: config.top_box_count.max(1),
            face_close_up_area: config.face_close_up_area,
            person_close_up_area: config.person_close_up_area,
            person_medium_area: config.person_medium_area,
        }
    }

    /// Classify from the face and person tracks overlapping a shot.
    ///
    /// Faces dominate: if the largest faces are big enough the shot is a
    /// close-up and person boxes are not consulted. Without any face or
    /// person evidence the shot is wide.
    pub fn classify(&self, faces: &[&EntityTrack], persons: &[&EntityTrack]) -> ShotType {
        if let Some(avg_face) = self.average_top_area(faces) {
            debug!("Shot type: avg_face_size={:.4}", avg_face);
            if avg_face > self.face_close_up_area {
                return ShotType::CloseUp;
            }
        }

        match self.average_top_area(persons) {
            Some(avg_person) => {
                debug!("Shot type: avg_person_size={:.4}", avg_person);
                if avg_person > self.person_close_up_area {
                    ShotType::CloseUp
                } else if avg_person > self.person_medium_area {
                    ShotType::Medium
                } else {
                    ShotType::Wide
                }
            }
            None => ShotType::Wide,
        }
    }

    /// Mean area of the largest boxes across all frames of the given tracks.
    ///
    /// Zero-area and degenerate boxes carry no size information and are
    /// ignored. Returns `None` when no box remains.
    pub fn average_top_area(&self, tracks: &[&EntityTrack]) -> Option<f64> {
        let mut areas: Vec<f64> = tracks
            .iter()
            .flat_map(|t| t.boxes())
            .map(area)
            .filter(|a| *a > 0.0)
            .collect();

        if areas.is_empty() {
            return None;
        }

        areas.sort_by(|a, b| b.total_cmp(a));
        areas.truncate(self.top_box_count);
        Some(areas.iter().sum::<f64>() / areas.len() as f64)
    }
}
