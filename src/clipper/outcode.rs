//! Outcode classification for Cohen–Sutherland clipping.
//!
//! An outcode is a 4-bit mask recording which sides of the clip region a
//! point lies outside of. A zero outcode means the point is inside the
//! region; points exactly on a boundary count as inside.

use std::ops::{BitOr, BitOrAssign};

use crate::math::vec2::Vec2;
use crate::region::ClipRegion;

/// 4-bit region code for a point relative to a rectangular clip window.
///
/// LEFT/RIGHT are mutually exclusive by construction, as are BOTTOM/TOP:
/// an x-coordinate cannot be on both sides of a valid region at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcode(u8);

impl Outcode {
    pub const INSIDE: Self = Self(0b0000);
    pub const LEFT: Self = Self(0b0001);
    pub const RIGHT: Self = Self(0b0010);
    pub const BOTTOM: Self = Self(0b0100);
    pub const TOP: Self = Self(0b1000);

    /// Classifies a point against the region.
    ///
    /// Strict inequalities on every side, so a point exactly on a bound
    /// gets neither bit for that axis.
    pub fn classify(p: Vec2, region: &ClipRegion) -> Self {
        let mut code = Self::INSIDE;

        if p.x < region.x_min() {
            code |= Self::LEFT;
        } else if p.x > region.x_max() {
            code |= Self::RIGHT;
        }

        if p.y < region.y_min() {
            code |= Self::BOTTOM;
        } else if p.y > region.y_max() {
            code |= Self::TOP;
        }

        code
    }

    /// Returns true if no side bit is set.
    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// Returns true if this outcode has the given side bit set.
    pub fn intersects(self, side: Self) -> bool {
        self.0 & side.0 != 0
    }

    /// Returns true if both outcodes share a side bit. A segment whose
    /// endpoints share a side lies entirely outside the region.
    pub fn shares_side(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Raw bit value, mainly useful for debugging output.
    pub fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for Outcode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Outcode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> ClipRegion {
        ClipRegion::new(-100.0, 100.0, -100.0, 100.0).unwrap()
    }

    #[test]
    fn inside_point_has_zero_outcode() {
        let code = Outcode::classify(Vec2::new(0.0, 0.0), &region());
        assert_eq!(code, Outcode::INSIDE);
        assert!(code.is_inside());
    }

    #[test]
    fn boundary_point_counts_as_inside() {
        assert!(Outcode::classify(Vec2::new(100.0, 0.0), &region()).is_inside());
        assert!(Outcode::classify(Vec2::new(-100.0, 100.0), &region()).is_inside());
    }

    #[test]
    fn left_bit_set_regardless_of_y() {
        for y in [-50.0, 0.0, 99.0] {
            let code = Outcode::classify(Vec2::new(-150.0, y), &region());
            assert!(code.intersects(Outcode::LEFT));
            assert!(!code.intersects(Outcode::RIGHT));
        }
    }

    #[test]
    fn corner_region_sets_two_bits() {
        let code = Outcode::classify(Vec2::new(150.0, 150.0), &region());
        assert!(code.intersects(Outcode::RIGHT));
        assert!(code.intersects(Outcode::TOP));
        assert_eq!(code.bits(), (Outcode::RIGHT | Outcode::TOP).bits());
    }

    #[test]
    fn horizontal_bits_are_mutually_exclusive() {
        // No point can be both left of x_min and right of x_max.
        for x in [-200.0, -100.0, 0.0, 100.0, 200.0] {
            let code = Outcode::classify(Vec2::new(x, 0.0), &region());
            assert!(!(code.intersects(Outcode::LEFT) && code.intersects(Outcode::RIGHT)));
        }
    }

    #[test]
    fn shared_side_detected() {
        let a = Outcode::classify(Vec2::new(120.0, 30.0), &region());
        let b = Outcode::classify(Vec2::new(150.0, 140.0), &region());
        assert!(a.shares_side(b));

        let c = Outcode::classify(Vec2::new(-120.0, 0.0), &region());
        assert!(!a.shares_side(c));
    }
}
