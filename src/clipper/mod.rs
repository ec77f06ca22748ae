//! Viewport clipping algorithms.
//!
//! Two independent clippers against a shared [`crate::rect::ClipRect`]:
//!
//! - [`line`]: Cohen-Sutherland line clipping, driven by the outcode
//!   classification in [`outcode`].
//! - [`polygon`]: Sutherland-Hodgman convex polygon clipping against the
//!   rectangle's four directed edges.

pub mod line;
pub mod outcode;
pub mod polygon;

// Re-export the working types alongside the two entry points.
pub use line::{clip_line, Boundary, Segment};
pub use outcode::OutCode;
pub use polygon::{clip_polygon, Polygon};
