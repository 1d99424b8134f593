//! Pure helpers over normalized bounding boxes.
//!
//! None of these panic. Absent or degenerate boxes yield "no data"
//! (`None`) or an area of zero.

use camlens_models::{BoundingBox, Point};

/// Midpoint of a box.
///
/// Returns `None` when the box is absent or degenerate.
pub fn center(bbox: Option<&BoundingBox>) -> Option<Point> {
    let b = bbox?;
    if b.is_degenerate() {
        return None;
    }
    Some(Point::new(
        b.left + b.width() / 2.0,
        b.top + b.height() / 2.0,
    ))
}

/// Area of a box as a fraction of the frame; 0 when degenerate.
pub fn area(bbox: &BoundingBox) -> f64 {
    if bbox.is_degenerate() {
        return 0.0;
    }
    bbox.width() * bbox.height()
}

/// Width of `curr` relative to `prev`.
///
/// Undefined (`None`) when `prev` has zero width or either box is degenerate.
pub fn scale_ratio(prev: &BoundingBox, curr: &BoundingBox) -> Option<f64> {
    if prev.is_degenerate() || curr.is_degenerate() {
        return None;
    }
    let prev_width = prev.width();
    if prev_width == 0.0 {
        return None;
    }
    Some(curr.width() / prev_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let b = BoundingBox::new(0.2, 0.4, 0.6, 0.8);
        let c = center(Some(&b)).unwrap();
        assert!((c.x - 0.4).abs() < 1e-9);
        assert!((c.y - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_center_absent_or_degenerate() {
        assert!(center(None).is_none());
        let inverted = BoundingBox::new(0.6, 0.4, 0.2, 0.8);
        assert!(center(Some(&inverted)).is_none());
        let flipped = BoundingBox::new(0.2, 0.8, 0.6, 0.4);
        assert!(center(Some(&flipped)).is_none());
    }

    #[test]
    fn test_area() {
        let b = BoundingBox::new(0.0, 0.0, 0.5, 0.4);
        assert!((area(&b) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_area_degenerate_is_zero() {
        assert_eq!(area(&BoundingBox::new(0.5, 0.0, 0.1, 0.4)), 0.0);
        assert_eq!(area(&BoundingBox::new(0.1, 0.5, 0.4, 0.1)), 0.0);
        assert_eq!(area(&BoundingBox::new(0.1, 0.1, 0.1, 0.5)), 0.0);
    }

    #[test]
    fn test_scale_ratio() {
        let prev = BoundingBox::new(0.1, 0.1, 0.3, 0.3);
        let curr = BoundingBox::new(0.1, 0.1, 0.5, 0.5);
        assert!((scale_ratio(&prev, &curr).unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_scale_ratio_zero_width_prev() {
        let prev = BoundingBox::new(0.3, 0.1, 0.3, 0.3);
        let curr = BoundingBox::new(0.1, 0.1, 0.5, 0.5);
        assert!(scale_ratio(&prev, &curr).is_none());
    }
}
