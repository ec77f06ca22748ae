//! Sutherland-Hodgman polygon clipping.
//!
//! The polygon is clipped against the rectangle's four directed edges in
//! turn; each pass keeps the vertices inside that edge's half-plane and
//! inserts the entry/exit crossings. Passes are strictly sequential: each
//! one consumes the previous pass's output.

use crate::error::ClipError;
use crate::rect::{ClipEdge, ClipRect, Point};

/// A polygon represented as a closed loop of vertices (the last vertex
/// implicitly connects to the first).
///
/// The clipper assumes the polygon is convex. Fewer than three vertices is
/// accepted and processed by the same mechanical rule; the output of a
/// clip may legitimately be empty, a single point, or a degenerate edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn from_vertices(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// True when the polygon has no vertices at all.
    ///
    /// Degenerate one- or two-vertex results still count as non-empty;
    /// only a fully clipped-away polygon is empty.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Clip this polygon against a single clip edge's half-plane.
    ///
    /// Walks the vertex list as a closed cycle, emitting every inside
    /// vertex plus the crossing point wherever the cycle enters or leaves
    /// the half-plane. The inside test is boundary-inclusive.
    fn clip_against_edge(&self, edge: &ClipEdge) -> Result<Self, ClipError> {
        if self.vertices.is_empty() {
            return Ok(Self { vertices: vec![] });
        }

        let mut output = Vec::with_capacity(self.vertices.len() + 4);

        for i in 0..self.vertices.len() {
            let current = self.vertices[i];
            let next = self.vertices[(i + 1) % self.vertices.len()];

            let current_inside = edge.signed_distance(current) >= 0.0;
            let next_inside = edge.signed_distance(next) >= 0.0;

            if current_inside {
                // Current vertex is inside, keep it.
                output.push(current);

                if !next_inside {
                    // Leaving the half-plane, add the exit crossing.
                    output.push(crossing(current, next, edge)?);
                }
            } else if next_inside {
                // Entering the half-plane, add the entry crossing.
                output.push(crossing(current, next, edge)?);
            }
            // Both outside: add nothing.
        }

        Ok(Self { vertices: output })
    }
}

/// Clips a convex polygon against the rectangle.
///
/// The vertex winding must match the clockwise rectangle-edge winding of
/// [`ClipRect::edges`]; the result is the intersection polygon, which may
/// be empty when the input lies entirely outside. Tangential contact with
/// the boundary can leave repeated or degenerate vertices in the output;
/// they are reported as-is, not suppressed.
///
/// The only error is [`ClipError::ParallelEdge`], raised when a crossing
/// that the inside/outside test guarantees to exist has a zero
/// determinant. That indicates a bug, never bad input.
pub fn clip_polygon(polygon: &Polygon, rect: &ClipRect) -> Result<Polygon, ClipError> {
    let mut result = polygon.clone();

    for edge in rect.edges() {
        if result.is_empty() {
            break;
        }
        result = result.clip_against_edge(&edge)?;
    }

    Ok(result)
}

/// Intersection of segment (s, e)'s supporting line with the clip edge's
/// supporting line, via the general-form 2x2 solve.
///
/// The caller only asks for a crossing when one endpoint is strictly
/// outside the edge's half-plane and the other is not, so the two lines
/// cannot be parallel; a zero determinant here is an invariant violation
/// and is surfaced instead of producing garbage coordinates.
fn crossing(s: Point, e: Point, edge: &ClipEdge) -> Result<Point, ClipError> {
    let (a1, b1, c1) = edge.coefficients();
    let a2 = e.y - s.y;
    let b2 = s.x - e.x;
    let c2 = a2 * s.x + b2 * s.y;

    let det = a1 * b2 - a2 * b1;
    if det == 0.0 {
        return Err(ClipError::ParallelEdge { from: s, to: e });
    }

    let x = (b2 * c1 - b1 * c2) / det;
    let y = (a1 * c2 - a2 * c1) / det;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rect() -> ClipRect {
        ClipRect::new(0.0, 0.0, 10.0, 10.0).unwrap()
    }

    fn polygon(points: &[(f64, f64)]) -> Polygon {
        Polygon::from_vertices(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    /// Signed area via the shoelace formula (absolute value).
    fn area(polygon: &Polygon) -> f64 {
        let n = polygon.vertices.len();
        let mut twice_area = 0.0;
        for i in 0..n {
            let p = polygon.vertices[i];
            let q = polygon.vertices[(i + 1) % n];
            twice_area += p.cross(q);
        }
        (twice_area / 2.0).abs()
    }

    #[test]
    fn polygon_identical_to_rect_is_unchanged() {
        let square = polygon(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
        let clipped = clip_polygon(&square, &rect()).unwrap();
        assert_eq!(clipped, square);
    }

    #[test]
    fn fully_inside_polygon_is_unchanged() {
        let triangle = polygon(&[(2.0, 2.0), (5.0, 8.0), (8.0, 2.0)]);
        let clipped = clip_polygon(&triangle, &rect()).unwrap();
        assert_eq!(clipped, triangle);
    }

    #[test]
    fn fully_outside_polygon_is_clipped_away() {
        let triangle = polygon(&[(20.0, 2.0), (25.0, 8.0), (30.0, 2.0)]);
        let clipped = clip_polygon(&triangle, &rect()).unwrap();
        assert!(clipped.is_empty());
    }

    #[test]
    fn triangle_poking_over_the_top_is_cut_flat() {
        let triangle = polygon(&[(2.0, 2.0), (5.0, 14.0), (8.0, 2.0)]);
        let clipped = clip_polygon(&triangle, &rect()).unwrap();

        assert_eq!(clipped.len(), 4);
        for v in &clipped.vertices {
            assert!(rect().contains(*v));
        }
        // Two of the vertices sit on the top boundary.
        let on_top = clipped
            .vertices
            .iter()
            .filter(|v| v.y == 10.0)
            .count();
        assert_eq!(on_top, 2);
    }

    #[test]
    fn square_overlapping_one_corner() {
        // Overlaps the rectangle's top-right corner; intersection is the
        // 5x5 square [5,10]x[5,10].
        let square = polygon(&[(5.0, 5.0), (5.0, 15.0), (15.0, 15.0), (15.0, 5.0)]);
        let clipped = clip_polygon(&square, &rect()).unwrap();

        assert_relative_eq!(area(&clipped), 25.0);
        for v in &clipped.vertices {
            assert!(rect().contains(*v));
        }
    }

    #[test]
    fn clipping_is_idempotent() {
        let square = polygon(&[(5.0, 5.0), (5.0, 15.0), (15.0, 15.0), (15.0, 5.0)]);
        let once = clip_polygon(&square, &rect()).unwrap();
        let twice = clip_polygon(&once, &rect()).unwrap();
        assert_eq!(twice, once);
    }

    #[test]
    fn diamond_tangent_at_all_corners_covers_the_rectangle() {
        // Every rectangle corner lies exactly on a diamond edge, so the
        // intersection is the full rectangle. Tangential contact may leave
        // repeated boundary vertices, so assert area and containment
        // rather than an exact vertex list.
        let diamond = polygon(&[(-5.0, 5.0), (5.0, 15.0), (15.0, 5.0), (5.0, -5.0)]);
        let clipped = clip_polygon(&diamond, &rect()).unwrap();

        assert_relative_eq!(area(&clipped), 100.0);
        for v in &clipped.vertices {
            assert!(rect().contains(*v));
        }
    }

    #[test]
    fn empty_input_stays_empty() {
        let clipped = clip_polygon(&polygon(&[]), &rect()).unwrap();
        assert!(clipped.is_empty());
    }

    #[test]
    fn single_vertex_inside_survives() {
        let clipped = clip_polygon(&polygon(&[(5.0, 5.0)]), &rect()).unwrap();
        assert_eq!(clipped.vertices, vec![Point::new(5.0, 5.0)]);
    }

    #[test]
    fn single_vertex_outside_is_removed() {
        let clipped = clip_polygon(&polygon(&[(-5.0, 5.0)]), &rect()).unwrap();
        assert!(clipped.is_empty());
    }

    #[test]
    fn two_vertex_degenerate_edge_is_clipped_like_a_segment() {
        // A "polygon" of two vertices traces the same edge both ways.
        let clipped = clip_polygon(&polygon(&[(-5.0, 5.0), (15.0, 5.0)]), &rect()).unwrap();
        assert!(!clipped.is_empty());
        for v in &clipped.vertices {
            assert!(rect().contains(*v));
            assert_relative_eq!(v.y, 5.0);
        }
    }

    #[test]
    fn crossing_solves_the_general_form_system() {
        let top = rect().edges()[1];
        let p = crossing(Point::new(5.0, 5.0), Point::new(5.0, 15.0), &top).unwrap();
        assert_relative_eq!(p.x, 5.0);
        assert_relative_eq!(p.y, 10.0);
    }

    #[test]
    fn crossing_reports_parallel_lines() {
        let top = rect().edges()[1];
        let result = crossing(Point::new(0.0, 12.0), Point::new(10.0, 12.0), &top);
        assert!(matches!(result, Err(ClipError::ParallelEdge { .. })));
    }
}
