//! 2D viewport clipping of lines and convex polygons.
//!
//! This crate restricts geometric primitives to an axis-aligned clip
//! rectangle: line segments with the Cohen-Sutherland algorithm and convex
//! polygons with the Sutherland-Hodgman algorithm. Both clippers are pure
//! functions over small value types, with no I/O and no shared state, so
//! calls are independent and freely parallelizable by the caller.
//!
//! # Quick Start
//!
//! ```
//! use viewclip::prelude::*;
//!
//! let rect = ClipRect::new(0.0, 0.0, 10.0, 10.0)?;
//!
//! let segment = Segment::new(Point::new(-5.0, 5.0), Point::new(15.0, 5.0));
//! let clipped = clip_line(segment, &rect);
//! assert_eq!(clipped, Some(Segment::new(Point::new(0.0, 5.0), Point::new(10.0, 5.0))));
//!
//! let triangle = Polygon::from_vertices(vec![
//!     Point::new(2.0, 2.0),
//!     Point::new(5.0, 14.0),
//!     Point::new(8.0, 2.0),
//! ]);
//! let clipped = clip_polygon(&triangle, &rect)?;
//! assert_eq!(clipped.len(), 4);
//! # Ok::<(), viewclip::ClipError>(())
//! ```

// Public API - exposed to library consumers
pub mod clipper;
pub mod error;
pub mod math;
pub mod rect;

// Re-export commonly needed types at crate root for convenience
pub use clipper::{clip_line, clip_polygon, OutCode, Polygon, Segment};
pub use error::ClipError;
pub use rect::{ClipEdge, ClipRect, Point};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use viewclip::prelude::*;
/// ```
pub mod prelude {
    // Clipping entry points
    pub use crate::clipper::{clip_line, clip_polygon};

    // Geometry
    pub use crate::clipper::{OutCode, Polygon, Segment};
    pub use crate::rect::{ClipEdge, ClipRect, Point};

    // Math
    pub use crate::math::vec2::Vec2;

    // Errors
    pub use crate::error::ClipError;
}
