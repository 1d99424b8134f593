//! Parse a recorded-style service response and run the full analysis on it.

use camlens_analysis::ShotSegmenter;
use camlens_annotations::parse_annotations_str;
use camlens_models::{EntityKind, MotionLabel, Shot, ShotType};

const RESPONSE: &str = include_str!("fixtures/annotation_response.json");

#[test]
fn test_fixture_parses() {
    let annotations = parse_annotations_str(RESPONSE).unwrap();

    assert_eq!(
        annotations.shots,
        vec![Shot::new(0.0, 5.4).unwrap(), Shot::new(5.5, 12.4).unwrap()]
    );
    assert_eq!(annotations.segment, Shot::new(0.0, 12.4));

    // The object with no timed frames is dropped.
    let kinds: Vec<EntityKind> = annotations.tracks.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EntityKind::Object,
            EntityKind::Object,
            EntityKind::Person,
            EntityKind::Face
        ]
    );

    // Last person frame lacks a coordinate and carries no box.
    let person = &annotations.tracks[2];
    assert_eq!(person.frames.len(), 6);
    assert!(person.frames[5].bounding_box.is_none());
    assert_eq!(person.time_segment.end, 8.5);
}

#[test]
fn test_fixture_analysis() {
    let annotations = parse_annotations_str(RESPONSE).unwrap();
    let analyses = ShotSegmenter::default().analyze(&annotations);
    assert_eq!(analyses.len(), 2);

    let opening = &analyses[0];
    assert_eq!(opening.shot_type, ShotType::Wide);
    assert_eq!(opening.primary_motion, MotionLabel::PanRight);
    assert!((opening.intensity - 0.4).abs() < 1e-6);
    assert_eq!(
        opening.description,
        "Wide shot showing car with camera pan-right"
    );
    assert_eq!(opening.dominant_entities.len(), 2);

    let interview = &analyses[1];
    assert_eq!(interview.shot_type, ShotType::CloseUp);
    assert_eq!(interview.primary_motion, MotionLabel::Static);
    assert_eq!(interview.intensity, 0.0);
    assert_eq!(interview.description, "Close-up shot with 1 face");
}
