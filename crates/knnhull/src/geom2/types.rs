//! Basic 2D types and the tolerance policy used by every predicate.
//!
//! - `Tolerance`: centralizes the absolute epsilon for scalar comparisons.
//! - `Point`: coordinate plus the stable id assigned after deduplication.
//! - `PointValue`, `LineSegment`: transient helpers for candidate sorting and
//!   intersection tests.
//!
//! Code cross-refs: `predicates::{segments_intersect, point_in_polygon}`,
//! `crate::points::prepare`

use nalgebra::Vector2;

/// Absolute comparison tolerance.
///
/// Hull growth and intersection tests are adjacency-sensitive, so all scalar
/// comparisons go through these helpers instead of raw `==`/`<`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub eps: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { eps: f64::EPSILON }
    }
}

impl Tolerance {
    #[inline]
    pub fn new(eps: f64) -> Self {
        Self { eps }
    }
    #[inline]
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.eps
    }
    #[inline]
    pub fn approx_zero(&self, a: f64) -> bool {
        a.abs() <= self.eps
    }
    /// `a < b` and not within eps of each other.
    #[inline]
    pub fn less_than(&self, a: f64, b: f64) -> bool {
        a < b && !self.approx_eq(a, b)
    }
    #[inline]
    pub fn less_or_equal(&self, a: f64, b: f64) -> bool {
        a < b || self.approx_eq(a, b)
    }
    #[inline]
    pub fn greater_than(&self, a: f64, b: f64) -> bool {
        a > b && !self.approx_eq(a, b)
    }
}

/// 2D point with a stable identifier.
///
/// Identity inside the hull algorithm is by `id`; ids are only meaningful after
/// `points::prepare` (or `assign_ids`) ran on a deduplicated set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub pos: Vector2<f64>,
    pub id: u64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            pos: Vector2::new(x, y),
            id: 0,
        }
    }
    #[inline]
    pub fn with_id(x: f64, y: f64, id: u64) -> Self {
        Self {
            pos: Vector2::new(x, y),
            id,
        }
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
    #[inline]
    pub fn xy(&self) -> [f64; 2] {
        [self.pos.x, self.pos.y]
    }
}

impl From<[f64; 2]> for Point {
    fn from(p: [f64; 2]) -> Self {
        Point::new(p[0], p[1])
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point::new(p.0, p.1)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Self {
        Self { pos: v, id: 0 }
    }
}

/// Candidate annotated with distance and clockwise angle from a query point.
/// Lives only while candidates are being sorted.
#[derive(Clone, Copy, Debug)]
pub struct PointValue {
    pub point: Point,
    pub distance: f64,
    pub angle: f64,
}

/// Ordered pair of known endpoints (existing or prospective hull edge).
#[derive(Clone, Copy, Debug)]
pub struct LineSegment {
    pub a: Point,
    pub b: Point,
}

impl LineSegment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
}
