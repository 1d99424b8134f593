//! Shot segmentation and per-shot aggregation.
//!
//! Tracks are assigned to shots by inclusive temporal overlap, so a track
//! spanning a cut belongs to both shots. Each shot is then analyzed on its
//! own with no state carried between shots.

use camlens_models::{
    DominantEntity, EntityKind, EntityTrack, MotionLabel, Point, Shot, ShotAnalysis, ShotType,
    VideoAnnotations,
};
use tracing::{debug, info, warn};

use crate::camera_motion::{CameraMotion, CameraMotionClassifier};
use crate::config::AnalysisConfig;
use crate::geometry::center;
use crate::motion::MotionVectorExtractor;
use crate::shot_type::ShotTypeClassifier;

/// Drives motion and shot-type classification for every shot of a video.
#[derive(Debug, Clone)]
pub struct ShotSegmenter {
    extractor: MotionVectorExtractor,
    motion_classifier: CameraMotionClassifier,
    shot_type_classifier: ShotTypeClassifier,
    object_label_confidence: f64,
}

impl Default for ShotSegmenter {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl ShotSegmenter {
    /// Create a segmenter from config.
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            extractor: MotionVectorExtractor::new(config),
            motion_classifier: CameraMotionClassifier::new(config),
            shot_type_classifier: ShotTypeClassifier::new(config),
            object_label_confidence: config.object_label_confidence,
        }
    }

    /// Analyze every shot of a video.
    ///
    /// Output preserves shot order. When no shots were detected the whole
    /// video is analyzed as one synthetic shot.
    pub fn analyze(&self, annotations: &VideoAnnotations) -> Vec<ShotAnalysis> {
        let shots = resolve_shots(annotations);
        if shots.is_empty() {
            warn!("No shots and no timeline extent available, nothing to analyze");
            return Vec::new();
        }

        let analyses: Vec<ShotAnalysis> = shots
            .iter()
            .map(|shot| {
                let tracks = tracks_for_shot(&annotations.tracks, shot);
                self.analyze_shot(shot, &tracks)
            })
            .collect();

        info!(
            shots = analyses.len(),
            tracks = annotations.tracks.len(),
            "Shot analysis complete"
        );
        analyses
    }

    /// Analyze one shot given the tracks assigned to it.
    pub fn analyze_shot(&self, shot: &Shot, tracks: &[&EntityTrack]) -> ShotAnalysis {
        let motion = self.camera_motion(shot, tracks);

        let faces = tracks_of_kind(tracks, EntityKind::Face);
        let persons = tracks_of_kind(tracks, EntityKind::Person);
        let shot_type = self.shot_type_classifier.classify(&faces, &persons);

        let description = self.describe(shot_type, tracks, &motion);

        debug!(
            start = shot.start_time,
            end = shot.end_time,
            shot_type = %shot_type,
            motion = %motion.primary,
            intensity = motion.intensity,
            "Analyzed shot"
        );

        ShotAnalysis {
            shot: *shot,
            duration: shot.duration(),
            shot_type,
            primary_motion: motion.primary,
            secondary_motions: motion.secondary,
            intensity: motion.intensity,
            dominant_entities: tracks.iter().map(|t| dominant_entity(t)).collect(),
            description,
        }
    }

    /// Pool motion vectors of every track in the shot window and classify.
    fn camera_motion(&self, shot: &Shot, tracks: &[&EntityTrack]) -> CameraMotion {
        let vectors: Vec<_> = tracks
            .iter()
            .filter_map(|t| {
                self.extractor
                    .extract(&t.frames, shot.start_time, shot.end_time)
            })
            .flatten()
            .collect();

        self.motion_classifier.classify(&vectors)
    }

    /// Build the textual description of a shot.
    ///
    /// Order: shot type, entity count, object labels, camera motion.
    pub fn describe(
        &self,
        shot_type: ShotType,
        tracks: &[&EntityTrack],
        motion: &CameraMotion,
    ) -> String {
        let mut elements = vec![shot_type.phrase().to_string()];

        let face_count = count_kind(tracks, EntityKind::Face);
        let person_count = count_kind(tracks, EntityKind::Person);
        if face_count > 0 {
            elements.push(format!(
                "with {} {}",
                face_count,
                if face_count == 1 { "face" } else { "faces" }
            ));
        } else if person_count > 0 {
            elements.push(format!(
                "with {} {}",
                person_count,
                if person_count == 1 { "person" } else { "people" }
            ));
        }

        let labels = self.object_labels(tracks);
        if !labels.is_empty() {
            elements.push(format!("showing {}", labels.join(", ")));
        }

        if !motion.primary.is_static() {
            let motions: Vec<&str> = motion.labels().iter().map(MotionLabel::as_str).collect();
            elements.push(format!("with camera {}", motions.join(" + ")));
        }

        elements.join(" ")
    }

    /// Unique lower-cased labels of confident object tracks, first-seen order.
    fn object_labels(&self, tracks: &[&EntityTrack]) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for track in tracks {
            if track.kind != EntityKind::Object || track.confidence <= self.object_label_confidence {
                continue;
            }
            let label = track.label.trim().to_lowercase();
            if !label.is_empty() && !labels.contains(&label) {
                labels.push(label);
            }
        }
        labels
    }
}

/// Shots to analyze: the detected shots, or one synthetic shot spanning the
/// video segment (or, lacking that, every track) when none were detected.
pub fn resolve_shots(annotations: &VideoAnnotations) -> Vec<Shot> {
    if !annotations.shots.is_empty() {
        return annotations.shots.clone();
    }

    match annotations.segment.or_else(|| annotations.track_extent()) {
        Some(segment) => {
            debug!(
                "No shot changes detected, using single shot {:.3}-{:.3}",
                segment.start_time, segment.end_time
            );
            vec![segment]
        }
        None => Vec::new(),
    }
}

/// Tracks whose time segment overlaps the shot (inclusive), in track order.
pub fn tracks_for_shot<'a>(tracks: &'a [EntityTrack], shot: &Shot) -> Vec<&'a EntityTrack> {
    tracks
        .iter()
        .filter(|t| shot.overlaps(t.time_segment.start, t.time_segment.end))
        .collect()
}

/// Mean center of a track's valid boxes; `(0, 0)` when it has none.
pub fn average_position(track: &EntityTrack) -> Point {
    let centers: Vec<Point> = track
        .frames
        .iter()
        .filter_map(|f| center(f.bounding_box.as_ref()))
        .collect();

    if centers.is_empty() {
        return Point::default();
    }

    let n = centers.len() as f64;
    Point::new(
        centers.iter().map(|c| c.x).sum::<f64>() / n,
        centers.iter().map(|c| c.y).sum::<f64>() / n,
    )
}

fn dominant_entity(track: &EntityTrack) -> DominantEntity {
    DominantEntity {
        kind: track.kind,
        label: track.label.clone(),
        confidence: track.confidence,
        screen_position: average_position(track),
    }
}

fn tracks_of_kind<'a>(tracks: &[&'a EntityTrack], kind: EntityKind) -> Vec<&'a EntityTrack> {
    tracks.iter().copied().filter(|t| t.kind == kind).collect()
}

fn count_kind(tracks: &[&EntityTrack], kind: EntityKind) -> usize {
    tracks.iter().filter(|t| t.kind == kind).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use camlens_models::{BoundingBox, Frame, TimeOffset};

    fn track(kind: EntityKind, label: &str, confidence: f64, times: &[f64]) -> EntityTrack {
        let frames = times
            .iter()
            .map(|t| {
                Frame::new(
                    TimeOffset::from_secs(*t).unwrap(),
                    Some(BoundingBox::new(0.2, 0.2, 0.4, 0.6)),
                    confidence,
                )
            })
            .collect();
        EntityTrack::new(kind, label, confidence, frames).unwrap()
    }

    fn shots(bounds: &[(f64, f64)]) -> Vec<Shot> {
        bounds
            .iter()
            .map(|(s, e)| Shot::new(*s, *e).unwrap())
            .collect()
    }

    #[test]
    fn test_synthetic_shot_from_segment() {
        let annotations = VideoAnnotations::new(vec![], vec![], Shot::new(0.0, 42.0));
        assert_eq!(resolve_shots(&annotations), shots(&[(0.0, 42.0)]));
    }

    #[test]
    fn test_synthetic_shot_from_track_extent() {
        let annotations = VideoAnnotations::new(
            vec![],
            vec![track(EntityKind::Object, "car", 0.9, &[2.0, 9.0])],
            None,
        );
        assert_eq!(resolve_shots(&annotations), shots(&[(2.0, 9.0)]));
    }

    #[test]
    fn test_detected_shots_take_precedence() {
        let annotations =
            VideoAnnotations::new(shots(&[(0.0, 5.0), (5.0, 9.0)]), vec![], Shot::new(0.0, 9.0));
        assert_eq!(resolve_shots(&annotations).len(), 2);
    }

    #[test]
    fn test_track_spanning_cut_belongs_to_both_shots() {
        let all = shots(&[(0.0, 5.0), (5.0, 12.0), (12.0, 20.0)]);
        let tracks = vec![track(EntityKind::Person, "person", 0.9, &[4.0, 5.0, 6.0])];

        assert_eq!(tracks_for_shot(&tracks, &all[0]).len(), 1);
        assert_eq!(tracks_for_shot(&tracks, &all[1]).len(), 1);
        assert!(tracks_for_shot(&tracks, &all[2]).is_empty());
    }

    #[test]
    fn test_empty_shot_defaults() {
        let segmenter = ShotSegmenter::default();
        let shot = Shot::new(0.0, 3.0).unwrap();
        let analysis = segmenter.analyze_shot(&shot, &[]);

        assert_eq!(analysis.shot_type, ShotType::Wide);
        assert_eq!(analysis.primary_motion, MotionLabel::Static);
        assert_eq!(analysis.intensity, 0.0);
        assert!(analysis.dominant_entities.is_empty());
        assert_eq!(analysis.description, "Wide shot");
    }

    #[test]
    fn test_description_counts_and_labels() {
        let segmenter = ShotSegmenter::default();
        let a = track(EntityKind::Person, "person", 0.9, &[0.0, 1.0]);
        let b = track(EntityKind::Person, "person", 0.8, &[0.0, 1.0]);
        let car = track(EntityKind::Object, "Car", 0.9, &[0.0]);
        let car_again = track(EntityKind::Object, "car ", 0.7, &[0.5]);
        let dog = track(EntityKind::Object, "Dog", 0.6, &[0.5]);
        let unsure = track(EntityKind::Object, "Kite", 0.5, &[0.5]);
        let tracks = [&a, &b, &car, &car_again, &dog, &unsure];

        let text = segmenter.describe(ShotType::Medium, &tracks, &CameraMotion::static_shot());
        assert_eq!(text, "Medium shot with 2 people showing car, dog");
    }

    #[test]
    fn test_description_prefers_faces() {
        let segmenter = ShotSegmenter::default();
        let face = track(EntityKind::Face, "face", 0.9, &[0.0]);
        let person = track(EntityKind::Person, "person", 0.9, &[0.0]);
        let motion = CameraMotion {
            primary: MotionLabel::PanLeft,
            secondary: vec![MotionLabel::ZoomIn],
            intensity: 0.4,
        };

        let text = segmenter.describe(ShotType::CloseUp, &[&face, &person], &motion);
        assert_eq!(text, "Close-up shot with 1 face with camera pan-left + zoom-in");
    }

    #[test]
    fn test_average_position() {
        let t = track(EntityKind::Object, "lamp", 0.9, &[0.0, 1.0]);
        let p = average_position(&t);
        assert!((p.x - 0.3).abs() < 1e-9);
        assert!((p.y - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_average_position_without_boxes() {
        let mut t = track(EntityKind::Object, "lamp", 0.9, &[0.0, 1.0]);
        for f in &mut t.frames {
            f.bounding_box = None;
        }
        assert_eq!(average_position(&t), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_dominant_entities_keep_track_order() {
        let segmenter = ShotSegmenter::default();
        let annotations = VideoAnnotations::new(
            shots(&[(0.0, 10.0)]),
            vec![
                track(EntityKind::Object, "zebra", 0.9, &[1.0]),
                track(EntityKind::Face, "face", 0.9, &[2.0]),
                track(EntityKind::Object, "apple", 0.9, &[3.0]),
            ],
            None,
        );
        let analyses = segmenter.analyze(&annotations);
        let labels: Vec<&str> = analyses[0]
            .dominant_entities
            .iter()
            .map(|e| e.label.as_str())
            .collect();
        assert_eq!(labels, vec!["zebra", "face", "apple"]);
    }

    #[test]
    fn test_steady_pan_through_analyze() {
        let frames = (0..6)
            .map(|i| {
                let left = 0.05 + 0.1 * i as f64;
                Frame::new(
                    TimeOffset::from_secs(i as f64).unwrap(),
                    Some(BoundingBox::new(left, 0.4, left + 0.1, 0.5)),
                    0.9,
                )
            })
            .collect();
        let car = EntityTrack::new(EntityKind::Object, "car", 0.9, frames).unwrap();
        let annotations = VideoAnnotations::new(shots(&[(0.0, 5.0)]), vec![car], None);

        let analyses = ShotSegmenter::default().analyze(&annotations);

        assert_eq!(analyses.len(), 1);
        let analysis = &analyses[0];
        assert_eq!(analysis.primary_motion, MotionLabel::PanRight);
        assert!(analysis.secondary_motions.is_empty());
        assert!((analysis.intensity - 0.5).abs() < 1e-9);
        assert_eq!(analysis.shot_type, ShotType::Wide);
        assert_eq!(analysis.description, "Wide shot showing car with camera pan-right");
    }
}
