//! Time offsets reported by the annotation service.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const NANOS_PER_SEC: f64 = 1e9;

/// A non-negative offset from the start of the video, in fractional seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct TimeOffset(f64);

impl TimeOffset {
    /// Create from fractional seconds.
    ///
    /// Returns `None` for negative or non-finite values.
    pub fn from_secs(secs: f64) -> Option<Self> {
        if secs.is_finite() && secs >= 0.0 {
            Some(Self(secs))
        } else {
            None
        }
    }

    /// Create from the split seconds/nanoseconds representation.
    pub fn from_parts(seconds: f64, nanos: f64) -> Option<Self> {
        Self::from_secs(seconds + nanos / NANOS_PER_SEC)
    }

    /// Offset in fractional seconds.
    #[inline]
    pub fn as_secs(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for TimeOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}s", self.0)
    }
}
