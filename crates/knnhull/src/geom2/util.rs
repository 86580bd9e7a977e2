use nalgebra::Vector2;

use super::predicates::cross;
use super::types::Point;

#[inline]
fn turn(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    cross(b - a, c - a)
}

/// Andrew’s monotone chain convex hull (CCW in y-up coordinates).
///
/// Collinear boundary points are dropped. Returns the input (deduplicated)
/// when fewer than three distinct points remain.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(|a, b| a.x().total_cmp(&b.x()).then(a.y().total_cmp(&b.y())));
    pts.dedup_by(|a, b| (a.pos - b.pos).norm() < 1e-12);
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2
            && turn(lower[lower.len() - 2].pos, lower[lower.len() - 1].pos, p.pos) <= 0.0
        {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2
            && turn(upper[upper.len() - 2].pos, upper[upper.len() - 1].pos, p.pos) <= 0.0
        {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// Unsigned shoelace area of an open vertex list (closing edge implied).
pub fn polygon_area(verts: &[Point]) -> f64 {
    if verts.len() < 3 {
        return 0.0;
    }
    let mut a = 0.0;
    for i in 0..verts.len() {
        let p = verts[i].pos;
        let q = verts[(i + 1) % verts.len()].pos;
        a += cross(p, q);
    }
    (0.5 * a).abs()
}

/// Bounding box `(min, max)` of a point list; `None` when empty.
pub fn bounding_box(points: &[Point]) -> Option<(Vector2<f64>, Vector2<f64>)> {
    let first = points.first()?.pos;
    Some(points.iter().fold((first, first), |(lo, hi), p| {
        (lo.inf(&p.pos), hi.sup(&p.pos))
    }))
}
