//! Outcode region classification for Cohen-Sutherland line clipping.
//!
//! Each point gets a 4-bit code describing which side(s) of the clip
//! rectangle it lies beyond. A zero code means the point is inside the
//! rectangle or on its boundary.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::rect::{ClipRect, Point};

/// 4-bit region mask relative to a [`ClipRect`].
///
/// LEFT/RIGHT are mutually exclusive, as are BOTTOM/TOP. Boundary points
/// classify as inside on that axis (strict comparisons).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutCode(u8);

impl OutCode {
    pub const INSIDE: Self = Self(0);
    pub const LEFT: Self = Self(1);
    pub const RIGHT: Self = Self(2);
    pub const BOTTOM: Self = Self(4);
    pub const TOP: Self = Self(8);

    /// Classifies a point against the rectangle.
    pub fn classify(p: Point, rect: &ClipRect) -> Self {
        let mut code = Self::INSIDE;
        if p.x < rect.xmin() {
            code |= Self::LEFT;
        } else if p.x > rect.xmax() {
            code |= Self::RIGHT;
        }
        if p.y < rect.ymin() {
            code |= Self::BOTTOM;
        } else if p.y > rect.ymax() {
            code |= Self::TOP;
        }
        code
    }

    /// True when the point is inside the rectangle or on its boundary.
    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// True when this code has any of `other`'s bits set.
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for OutCode {
    type Output = OutCode;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for OutCode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for OutCode {
    type Output = OutCode;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}
