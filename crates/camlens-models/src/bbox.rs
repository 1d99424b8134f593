//! Normalized bounding boxes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Bounding box in normalized frame coordinates ([0, 1] on both axes).
///
/// Constructed only when all four coordinates are known. A frame whose
/// detector output lacks a coordinate carries no box at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BoundingBox {
    /// Left edge x-coordinate
    pub left: f64,
    /// Top edge y-coordinate
    pub top: f64,
    /// Right edge x-coordinate
    pub right: f64,
    /// Bottom edge y-coordinate
    pub bottom: f64,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Box width (negative when inverted).
    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Box height (negative when inverted).
    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// True when the box is inverted or has a non-finite coordinate.
    pub fn is_degenerate(&self) -> bool {
        let finite = [self.left, self.top, self.right, self.bottom]
            .iter()
            .all(|v| v.is_finite());
        !finite || self.right < self.left || self.bottom < self.top
    }
}

/// A point in normalized frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
