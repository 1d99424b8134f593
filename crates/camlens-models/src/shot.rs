//! Shot models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A contiguous, uncut camera take.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Shot {
    /// Start time in seconds.
    pub start_time: f64,
    /// End time in seconds.
    pub end_time: f64,
}

impl Shot {
    /// Create a shot.
    ///
    /// Returns `None` unless both times are finite, non-negative and
    /// `end_time >= start_time`.
    pub fn new(start_time: f64, end_time: f64) -> Option<Self> {
        let valid = start_time.is_finite()
            && end_time.is_finite()
            && start_time >= 0.0
            && end_time >= start_time;
        valid.then_some(Self {
            start_time,
            end_time,
        })
    }

    /// Duration of the shot in seconds.
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Inclusive overlap test against another time span.
    #[inline]
    pub fn overlaps(&self, start: f64, end: f64) -> bool {
        start <= self.end_time && end >= self.start_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_order() {
        assert!(Shot::new(0.0, 5.0).is_some());
        assert!(Shot::new(5.0, 5.0).is_some());
        assert!(Shot::new(5.0, 4.0).is_none());
        assert!(Shot::new(-1.0, 4.0).is_none());
    }

    #[test]
    fn test_overlap_is_inclusive() {
        let shot = Shot::new(5.0, 12.0).unwrap();
        assert!(shot.overlaps(4.0, 5.0));
        assert!(shot.overlaps(12.0, 14.0));
        assert!(!shot.overlaps(12.5, 14.0));
        assert!(!shot.overlaps(0.0, 4.9));
    }

    #[test]
    fn test_duration() {
        let shot = Shot::new(1.5, 4.0).unwrap();
        assert!((shot.duration() - 2.5).abs() < 1e-9);
    }
}
