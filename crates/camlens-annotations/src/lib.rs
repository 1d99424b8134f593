//! Annotation service result parsing.
//!
//! Reads the JSON produced by the video annotation service (shot changes,
//! object tracking, person and face detection) and converts it into
//! validated [`VideoAnnotations`](camlens_models::VideoAnnotations):
//!
//! - Durations are accepted as `{seconds, nanos}` objects, `"1.5s"` strings
//!   or plain numbers
//! - Boxes lacking a coordinate become "no box" rather than zeros
//! - Frames without a time offset are dropped, and so are tracks left empty

pub mod error;
pub mod parser;
pub mod raw;

pub use error::{AnnotationError, AnnotationResult};
pub use parser::{
    convert_result, parse_annotations, parse_annotations_str, parse_bounding_box,
    parse_time_offset, FACE_LABEL, PERSON_LABEL,
};
