//! Error types for the clipping operations.

use thiserror::Error;

use crate::math::Vec2;

/// Errors reported by rectangle construction and polygon clipping.
///
/// Line clipping never fails: a segment that misses the rectangle (or is
/// degenerate in a way that makes an intersection meaningless) simply
/// produces `None`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ClipError {
    /// The clip rectangle's bounds are inverted (`xmin > xmax` or
    /// `ymin > ymax`). Rejected before any clipping runs.
    #[error("inverted clip rectangle bounds: xmin={xmin}, ymin={ymin}, xmax={xmax}, ymax={ymax}")]
    InvertedBounds {
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
    },

    /// A polygon edge crossing was expected (one endpoint inside the clip
    /// edge's half-plane, one outside) but the intersection determinant was
    /// zero. This cannot happen for a consistent inside/outside test and
    /// indicates a bug rather than bad input.
    #[error("polygon edge ({:?} -> {:?}) parallel to a clip edge it must cross", from, to)]
    ParallelEdge { from: Vec2, to: Vec2 },
}
