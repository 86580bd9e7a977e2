//! Enclosure validation: every input point that is not a hull vertex must lie
//! inside the closed ring.
//!
//! Each containment test reads only the ring and one point, so large
//! remainders are scanned on the rayon pool.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::geom2::{point_in_polygon, Point, Tolerance};

/// Points of `points` whose id is not on `ring`.
pub fn remainder(points: &[Point], ring: &[Point]) -> Vec<Point> {
    let on_hull: HashSet<u64> = ring.iter().map(|p| p.id).collect();
    points
        .iter()
        .filter(|p| !on_hull.contains(&p.id))
        .copied()
        .collect()
}

/// Number of remainder points outside `ring` (closed: first == last).
pub fn count_outside(points: &[Point], ring: &[Point], tol: Tolerance, parallel_min: usize) -> usize {
    let rest = remainder(points, ring);
    if rest.len() >= parallel_min {
        rest.par_iter()
            .filter(|p| !point_in_polygon(tol, p, ring))
            .count()
    } else {
        rest.iter()
            .filter(|p| !point_in_polygon(tol, p, ring))
            .count()
    }
}
