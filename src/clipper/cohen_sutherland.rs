//! Cohen–Sutherland line clipping.
//!
//! Both endpoints of a segment are classified with outcodes, then the
//! segment is iteratively trimmed against one region boundary at a time:
//!
//! - both outcodes zero: trivial accept, the segment is fully visible
//! - outcodes share a side bit: trivial reject, fully outside
//! - otherwise: replace an outside endpoint with its boundary
//!   intersection, reclassify, and loop
//!
//! Each trim clears at least one side bit from one endpoint, so the loop
//! terminates after at most four trims per endpoint.

use crate::clipper::outcode::Outcode;
use crate::error::ClipError;
use crate::math::vec2::Vec2;
use crate::region::ClipRegion;

/// A directed line segment from endpoint `a` to endpoint `b`.
///
/// The ordering is preserved across clipping: the first endpoint of an
/// accepted result corresponds to `a` (possibly trimmed), the second to `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Builds a segment from raw endpoint coordinates.
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
    }
}

/// Outcome of clipping a segment against a region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipResult {
    /// Some part of the segment is visible. Endpoints that were outside
    /// the region have been replaced by boundary intersections.
    Accepted(Segment),
    /// The segment lies entirely outside the region.
    Rejected,
}

/// The four boundaries of the clip region.
///
/// An outcode may have two bits set (a corner region such as TOP|RIGHT);
/// one iteration trims only against the highest-priority boundary, and the
/// next iteration reclassifies and may trim against the remaining bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    Top,
    Bottom,
    Right,
    Left,
}

impl Boundary {
    /// Picks the boundary to trim against for a nonzero outcode, testing
    /// bits in fixed priority order: TOP, BOTTOM, RIGHT, LEFT.
    fn select(outside: Outcode) -> Self {
        if outside.intersects(Outcode::TOP) {
            Self::Top
        } else if outside.intersects(Outcode::BOTTOM) {
            Self::Bottom
        } else if outside.intersects(Outcode::RIGHT) {
            Self::Right
        } else {
            Self::Left
        }
    }

    /// Intersection of the line through `a` and `b` with this boundary,
    /// via the parametric line equation.
    fn intersection(self, a: Vec2, b: Vec2, region: &ClipRegion) -> Vec2 {
        match self {
            Self::Top => intersect_horizontal(a, b, region.y_max()),
            Self::Bottom => intersect_horizontal(a, b, region.y_min()),
            Self::Right => intersect_vertical(a, b, region.x_max()),
            Self::Left => intersect_vertical(a, b, region.x_min()),
        }
    }
}

/// Intersects the line through `a` and `b` with the horizontal boundary
/// `y = y_bound`.
///
/// A segment with `a.y == b.y` has no unique intersection; the endpoint is
/// snapped onto the boundary with its x-coordinate kept, treating it as
/// already aligned with the boundary instead of dividing by zero.
fn intersect_horizontal(a: Vec2, b: Vec2, y_bound: f64) -> Vec2 {
    let dy = b.y - a.y;
    if dy == 0.0 {
        return Vec2::new(a.x, y_bound);
    }
    Vec2::new(a.x + (b.x - a.x) * (y_bound - a.y) / dy, y_bound)
}

/// Intersects the line through `a` and `b` with the vertical boundary
/// `x = x_bound`. Same degenerate-axis handling as [`intersect_horizontal`].
fn intersect_vertical(a: Vec2, b: Vec2, x_bound: f64) -> Vec2 {
    let dx = b.x - a.x;
    if dx == 0.0 {
        return Vec2::new(x_bound, a.y);
    }
    Vec2::new(x_bound, a.y + (b.y - a.y) * (x_bound - a.x) / dx)
}

/// Clips line segments against a fixed rectangular region.
///
/// The clipper holds only the immutable region, so each call is
/// independent and a single clipper can be shared across segments.
#[derive(Debug, Clone, Copy)]
pub struct LineClipper {
    region: ClipRegion,
}

impl LineClipper {
    /// Creates a clipper for the given region.
    pub fn new(region: ClipRegion) -> Self {
        Self { region }
    }

    /// Returns the region this clipper trims against.
    pub fn region(&self) -> &ClipRegion {
        &self.region
    }

    /// Clips a segment, returning the visible sub-segment if any.
    ///
    /// When both endpoints are outside, the first endpoint is trimmed
    /// first; this tie-break keeps the trim sequence deterministic.
    ///
    /// # Errors
    /// Returns [`ClipError::NonFiniteCoordinate`] if an endpoint carries a
    /// NaN or infinite coordinate.
    pub fn clip(&self, segment: Segment) -> Result<ClipResult, ClipError> {
        for p in [segment.a, segment.b] {
            if !p.is_finite() {
                return Err(ClipError::NonFiniteCoordinate { x: p.x, y: p.y });
            }
        }

        let mut current = segment;
        let mut code_a = Outcode::classify(current.a, &self.region);
        let mut code_b = Outcode::classify(current.b, &self.region);

        loop {
            if code_a.is_inside() && code_b.is_inside() {
                return Ok(ClipResult::Accepted(current));
            }
            if code_a.shares_side(code_b) {
                return Ok(ClipResult::Rejected);
            }

            let trim_first = !code_a.is_inside();
            let outside = if trim_first { code_a } else { code_b };
            let boundary = Boundary::select(outside);
            let intersection = boundary.intersection(current.a, current.b, &self.region);

            if trim_first {
                current.a = intersection;
                code_a = Outcode::classify(current.a, &self.region);
            } else {
                current.b = intersection;
                code_b = Outcode::classify(current.b, &self.region);
            }
        }
    }

    /// Coordinate-level convenience wrapper around [`clip`](Self::clip).
    pub fn clip_line(
        &self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    ) -> Result<ClipResult, ClipError> {
        self.clip(Segment::from_coords(x1, y1, x2, y2))
    }
}
