//! Epsilon-aware predicates: point equality, clockwise angles, segment
//! intersection, and the crossing-number containment test.
//!
//! Conventions
//! - Angles are clockwise from +x in screen orientation (y grows downward),
//!   i.e. `-atan2(dy, dx)`, normalized by a single `+2π` when negative.
//! - Parallel or collinear segments never intersect, even when they overlap.
//!   Hull growth relies on this policy; do not "fix" it here.
//!
//! Code cross-refs: `types::{Tolerance, Point, LineSegment}`, `crate::hull::grow`

use std::f64::consts::TAU;

use nalgebra::Vector2;

use super::types::{LineSegment, Point, Tolerance};

/// Signed area of the parallelogram spanned by `a` and `b`.
#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Both coordinates approximately equal.
#[inline]
pub fn points_equal(tol: Tolerance, a: &Point, b: &Point) -> bool {
    tol.approx_eq(a.x(), b.x()) && tol.approx_eq(a.y(), b.y())
}

/// Shift a negative angle into the positive range by one full turn.
#[inline]
pub fn normalize_angle(radians: f64) -> f64 {
    if radians < 0.0 {
        radians + TAU
    } else {
        radians
    }
}

/// Clockwise angle of `to - from`, measured from +x.
#[inline]
pub fn angle(from: &Point, to: &Point) -> f64 {
    let d = to.pos - from.pos;
    normalize_angle(-d.y.atan2(d.x))
}

#[inline]
fn in_range(tol: Tolerance, v: f64, a: f64, b: f64) -> bool {
    (tol.less_or_equal(a, v) && tol.less_or_equal(v, b))
        || (tol.less_or_equal(b, v) && tol.less_or_equal(v, a))
}

/// Line–line intersection restricted to both segments (inclusive ends).
///
/// Returns false when the direction determinant is ~0.
pub fn segments_intersect(tol: Tolerance, s: &LineSegment, t: &LineSegment) -> bool {
    let (a1, a2) = (s.a.pos, s.b.pos);
    let (b1, b2) = (t.a.pos, t.b.pos);
    let da = a1 - a2;
    let db = b1 - b2;
    let det = cross(da, db);
    if tol.approx_zero(det) {
        return false;
    }
    let det_a = cross(a1, a2);
    let det_b = cross(b1, b2);
    let ix = (det_a * db.x - da.x * det_b) / det;
    let iy = (det_a * db.y - da.y * det_b) / det;
    in_range(tol, ix, a1.x, a2.x)
        && in_range(tol, ix, b1.x, b2.x)
        && in_range(tol, iy, a1.y, a2.y)
        && in_range(tol, iy, b1.y, b2.y)
}

/// Horizontal-ray crossing test over consecutive pairs of `ring`.
///
/// The ring is not wrapped: pass a closed ring (first == last) for a closed
/// test. Rings with two points or fewer contain nothing.
pub fn point_in_polygon(tol: Tolerance, p: &Point, ring: &[Point]) -> bool {
    if ring.len() <= 2 {
        return false;
    }
    let (x, y) = (p.x(), p.y());
    let mut crossings = 0usize;
    for w in ring.windows(2) {
        let (v0, v1) = (w[0].pos, w[1].pos);
        let spans = (tol.less_or_equal(v0.y, y) && tol.less_than(y, v1.y))
            || (tol.less_or_equal(v1.y, y) && tol.less_than(y, v0.y));
        if !spans || tol.approx_zero(v1.y - v0.y) {
            continue;
        }
        let t = (y - v0.y) / (v1.y - v0.y);
        if tol.less_than(x, v0.x + (v1.x - v0.x) * t) {
            crossings += 1;
        }
    }
    crossings % 2 == 1
}
