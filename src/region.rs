//! Axis-aligned rectangular clip region.
//!
//! The [`ClipRegion`] is the single source of truth for the clip window
//! bounds. It is an immutable configuration value: construct it once,
//! hand it to a clipper, and share it freely. Construction validates the
//! bounds so the clipping loop never has to.

use crate::error::ClipError;
use crate::math::vec2::Vec2;

/// An axis-aligned rectangular clip window.
///
/// Invariant: `x_min < x_max` and `y_min < y_max`, all bounds finite.
/// Enforced by [`ClipRegion::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRegion {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl ClipRegion {
    /// Creates a region from its four bounds.
    ///
    /// # Errors
    /// Returns [`ClipError::InvalidRegion`] if `x_min >= x_max`,
    /// `y_min >= y_max`, or any bound is NaN or infinite.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, ClipError> {
        let finite = [x_min, x_max, y_min, y_max].iter().all(|b| b.is_finite());
        if !finite || x_min >= x_max || y_min >= y_max {
            return Err(ClipError::InvalidRegion {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Returns the left bound.
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Returns the right bound.
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Returns the bottom bound.
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    /// Returns the top bound.
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Returns true if the point lies inside the region or on its boundary.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_bounds_construct() {
        let region = ClipRegion::new(-100.0, 100.0, -100.0, 100.0).unwrap();
        assert_eq!(region.x_min(), -100.0);
        assert_eq!(region.y_max(), 100.0);
    }

    #[test]
    fn inverted_x_bounds_are_rejected() {
        let result = ClipRegion::new(100.0, -100.0, -100.0, 100.0);
        assert!(matches!(result, Err(ClipError::InvalidRegion { .. })));
    }

    #[test]
    fn zero_height_is_rejected() {
        let result = ClipRegion::new(-100.0, 100.0, 50.0, 50.0);
        assert!(matches!(result, Err(ClipError::InvalidRegion { .. })));
    }

    #[test]
    fn non_finite_bound_is_rejected() {
        let result = ClipRegion::new(f64::NEG_INFINITY, 100.0, -100.0, 100.0);
        assert!(matches!(result, Err(ClipError::InvalidRegion { .. })));
        let result = ClipRegion::new(-100.0, f64::NAN, -100.0, 100.0);
        assert!(matches!(result, Err(ClipError::InvalidRegion { .. })));
    }

    #[test]
    fn contains_counts_boundary_as_inside() {
        let region = ClipRegion::new(-100.0, 100.0, -100.0, 100.0).unwrap();
        assert!(region.contains(Vec2::new(0.0, 0.0)));
        assert!(region.contains(Vec2::new(100.0, 0.0)));
        assert!(region.contains(Vec2::new(-100.0, -100.0)));
        assert!(!region.contains(Vec2::new(100.1, 0.0)));
    }
}
