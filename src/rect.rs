//! Axis-aligned clip rectangle and its directed boundary edges.
//!
//! The [`ClipRect`] is the single clipping boundary shared by the line and
//! polygon clippers. Its four directed edges carry a fixed clockwise
//! winding; that winding defines the inside half-plane test used by the
//! polygon clipper, so it is generated in one place ([`ClipRect::edges`])
//! rather than spelled out at each use site.

use crate::error::ClipError;
use crate::math::Vec2;

/// A point in the plane. Alias kept local to the clipping code.
pub type Point = Vec2;

/// Axis-aligned clip rectangle.
///
/// Construction validates the bounds, so every `ClipRect` handed to the
/// clippers satisfies `xmin <= xmax` and `ymin <= ymax`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
}

impl ClipRect {
    /// Creates a clip rectangle from its extremal coordinates.
    ///
    /// Returns [`ClipError::InvertedBounds`] when `xmin > xmax` or
    /// `ymin > ymax`. A zero-width or zero-height rectangle is accepted.
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self, ClipError> {
        if xmin > xmax || ymin > ymax {
            return Err(ClipError::InvertedBounds {
                xmin,
                ymin,
                xmax,
                ymax,
            });
        }
        Ok(Self {
            xmin,
            ymin,
            xmax,
            ymax,
        })
    }

    /// Returns the minimum x bound.
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    /// Returns the minimum y bound.
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    /// Returns the maximum x bound.
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Returns the maximum y bound.
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    /// Boundary-inclusive point containment test.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    /// The four corners of the rectangle in clockwise order, starting at
    /// the bottom-left corner.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.xmin, self.ymin),
            Point::new(self.xmin, self.ymax),
            Point::new(self.xmax, self.ymax),
            Point::new(self.xmax, self.ymin),
        ]
    }

    /// The four directed boundary edges in fixed clockwise order:
    /// left (bottom to top), top (left to right), right (top to bottom),
    /// bottom (right to left).
    ///
    /// The polygon clipper's inside test keys off this winding; see
    /// [`ClipEdge::signed_distance`].
    pub fn edges(&self) -> [ClipEdge; 4] {
        let [bl, tl, tr, br] = self.corners();
        [
            ClipEdge::new(bl, tl),
            ClipEdge::new(tl, tr),
            ClipEdge::new(tr, br),
            ClipEdge::new(br, bl),
        ]
    }
}

/// A directed edge of the clip rectangle.
///
/// With the clockwise winding produced by [`ClipRect::edges`], the
/// rectangle interior lies on the positive side of every edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipEdge {
    pub start: Point,
    pub end: Point,
}

impl ClipEdge {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Returns the signed distance (scaled by the edge length) from a point
    /// to this edge's supporting line.
    /// Positive = rectangle interior, zero = on the boundary.
    pub fn signed_distance(&self, p: Point) -> f64 {
        (p - self.start).cross(self.end - self.start)
    }

    /// General-form coefficients `(a, b, c)` of the supporting line, with
    /// `a*x + b*y = c`. Used by the polygon clipper's 2x2 crossing solve.
    pub fn coefficients(&self) -> (f64, f64, f64) {
        let a = self.end.y - self.start.y;
        let b = self.start.x - self.end.x;
        let c = a * self.start.x + b * self.start.y;
        (a, b, c)
    }
}
