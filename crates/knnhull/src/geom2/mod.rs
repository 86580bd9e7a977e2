//! Epsilon-aware 2D geometry for the kNN concave hull.
//!
//! Purpose
//! - Provide the primitives hull growth needs (clockwise angles, segment
//!   intersection, crossing-number containment) with one explicit tolerance.
//! - Keep them pure and small; the hull modules own all state.
//!
//! Code cross-refs: `Tolerance`, `Point`, `crate::hull`

pub mod predicates;
pub mod rand;
mod types;
mod util;

pub use predicates::{
    angle, normalize_angle, point_in_polygon, points_equal, segments_intersect,
};
pub use types::{LineSegment, Point, PointValue, Tolerance};
pub use util::{bounding_box, convex_hull, polygon_area};
