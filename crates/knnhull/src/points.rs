//! Point-set preprocessing: deduplication, id assignment, start-vertex choice,
//! and id-ordered list maintenance.
//!
//! Ids are assigned once, after duplicate removal, so each logical input
//! location owns exactly one id for the whole run.

use crate::geom2::{points_equal, Point, Tolerance};

/// Sort by `(x, y)` and collapse eps-equal neighbours, keeping the first.
pub fn remove_duplicates(points: &mut Vec<Point>, tol: Tolerance) {
    points.sort_by(|a, b| a.x().total_cmp(&b.x()).then(a.y().total_cmp(&b.y())));
    points.dedup_by(|cur, kept| points_equal(tol, cur, kept));
}

/// Number points `0..n` in their current order.
pub fn assign_ids(points: &mut [Point]) {
    for (i, p) in points.iter_mut().enumerate() {
        p.id = i as u64;
    }
}

/// Deduplicate, then assign ids.
pub fn prepare(points: &[Point], tol: Tolerance) -> Vec<Point> {
    let mut pts = points.to_vec();
    remove_duplicates(&mut pts, tol);
    assign_ids(&mut pts);
    pts
}

/// Point with the smallest `y`; eps-equal `y` values are broken by the largest `x`.
///
/// The tie-break makes the start vertex unique and places it on the convex
/// boundary.
pub fn find_min_y_point(points: &[Point], tol: Tolerance) -> Option<Point> {
    let mut it = points.iter();
    let mut best = *it.next()?;
    for p in it {
        let better = if tol.approx_eq(p.y(), best.y()) {
            p.x() > best.x()
        } else {
            p.y() < best.y()
        };
        if better {
            best = *p;
        }
    }
    Some(best)
}

/// Remove and return the point with `id` from a list sorted by id.
///
/// Panics if the id is missing: callers only pass ids they previously inserted.
pub fn remove_point_by_id(list: &mut Vec<Point>, id: u64) -> Point {
    debug_assert!(list.windows(2).all(|w| w[0].id < w[1].id), "list not sorted by id");
    match list.binary_search_by_key(&id, |p| p.id) {
        Ok(i) => list.remove(i),
        Err(_) => panic!("point id {id} not present"),
    }
}

/// Insert keeping the list sorted by id. Returns false if the id is already present.
pub fn insert_point(list: &mut Vec<Point>, p: Point) -> bool {
    match list.binary_search_by_key(&p.id, |q| q.id) {
        Ok(_) => false,
        Err(i) => {
            list.insert(i, p);
            true
        }
    }
}
