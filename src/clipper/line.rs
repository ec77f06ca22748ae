//! Cohen-Sutherland line clipping.
//!
//! The clipper classifies both endpoints with outcodes, trivially accepts
//! or rejects where possible, and otherwise clips one outside endpoint
//! against a single violated boundary per iteration. Each iteration
//! removes at least one violated boundary bit from the processed endpoint,
//! so the loop is bounded.

use crate::clipper::outcode::OutCode;
use crate::rect::{ClipRect, Point};

/// A line segment with ordered endpoints.
///
/// The order only matters for reporting; clipping treats both endpoints
/// symmetrically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
}

/// One boundary of the clip rectangle, as seen by the line clipper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Top,
    Bottom,
    Right,
    Left,
}

impl Boundary {
    /// Fixed clip priority: top, bottom, right, left.
    ///
    /// The clipper always resolves the first violated boundary in this
    /// order, so the order lives here as data instead of being implied by
    /// a chain of branches.
    pub const CLIP_ORDER: [Boundary; 4] = [
        Boundary::Top,
        Boundary::Bottom,
        Boundary::Right,
        Boundary::Left,
    ];

    /// The outcode bit this boundary corresponds to.
    fn bit(self) -> OutCode {
        match self {
            Boundary::Top => OutCode::TOP,
            Boundary::Bottom => OutCode::BOTTOM,
            Boundary::Right => OutCode::RIGHT,
            Boundary::Left => OutCode::LEFT,
        }
    }

    /// Intersection of the segment's supporting line with this boundary,
    /// via the parametric line equation.
    ///
    /// Returns `None` when the supporting line is parallel to the boundary
    /// (zero denominator). The clipper only calls this for an endpoint
    /// whose outcode violates the boundary, and a parallel line outside
    /// one axis is always trivially rejected first, so the guard is a
    /// backstop against NaN rather than a reachable outcome.
    fn intersect(self, a: Point, b: Point, rect: &ClipRect) -> Option<Point> {
        match self {
            Boundary::Top => {
                let dy = b.y - a.y;
                if dy == 0.0 {
                    return None;
                }
                let x = a.x + (b.x - a.x) * (rect.ymax() - a.y) / dy;
                Some(Point::new(x, rect.ymax()))
            }
            Boundary::Bottom => {
                let dy = b.y - a.y;
                if dy == 0.0 {
                    return None;
                }
                let x = a.x + (b.x - a.x) * (rect.ymin() - a.y) / dy;
                Some(Point::new(x, rect.ymin()))
            }
            Boundary::Right => {
                let dx = b.x - a.x;
                if dx == 0.0 {
                    return None;
                }
                let y = a.y + (b.y - a.y) * (rect.xmax() - a.x) / dx;
                Some(Point::new(rect.xmax(), y))
            }
            Boundary::Left => {
                let dx = b.x - a.x;
                if dx == 0.0 {
                    return None;
                }
                let y = a.y + (b.y - a.y) * (rect.xmin() - a.x) / dx;
                Some(Point::new(rect.xmin(), y))
            }
        }
    }
}

/// Clips a segment against the rectangle.
///
/// Returns the surviving (possibly shrunk) segment, or `None` when the
/// segment does not intersect the rectangle. A zero-length segment is
/// accepted or rejected purely by its outcode, without ever reaching an
/// intersection formula.
pub fn clip_line(segment: Segment, rect: &ClipRect) -> Option<Segment> {
    let Segment { mut a, mut b } = segment;
    let mut code_a = OutCode::classify(a, rect);
    let mut code_b = OutCode::classify(b, rect);

    loop {
        // Trivial accept: both endpoints inside or on the boundary.
        if code_a.is_inside() && code_b.is_inside() {
            return Some(Segment::new(a, b));
        }

        // Trivial reject: both endpoints beyond the same boundary.
        if code_a.intersects(code_b) {
            return None;
        }

        // Clip the first outside endpoint against the highest-priority
        // boundary it violates, then reclassify and go around again.
        let outside = if !code_a.is_inside() { code_a } else { code_b };
        let boundary = Boundary::CLIP_ORDER
            .into_iter()
            .find(|boundary| outside.intersects(boundary.bit()))?;
        let crossing = boundary.intersect(a, b, rect)?;

        if outside == code_a {
            a = crossing;
            code_a = OutCode::classify(a, rect);
        } else {
            b = crossing;
            code_b = OutCode::classify(b, rect);
        }
    }
}
