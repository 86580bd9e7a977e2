//! Entry points: single attempt at fixed `k` and the widening retry search.
//!
//! Policy
//! - Inputs with at most three points are returned unchanged (no growth).
//! - Every attempt deduplicates, assigns ids, and builds its own index, so
//!   attempts are independent of each other.
//! - Stuck and not-enclosed attempts are expected; they widen `k` (when
//!   iterating) and never surface as errors. Exhaustion returns `None`/empty.

use rayon::prelude::*;

use crate::geom2::Point;
use crate::knn::{NeighborIndex, RTreeIndex};
use crate::points::prepare;

use super::enclose::count_outside;
use super::grow::{GrowthEnd, HullGrower};
use super::types::{Attempt, HullCfg, HullResult};

/// One attempt at `k` over points prepared by `points::prepare` (unique ids).
///
/// `k` is clamped to `[3, n - 1]`.
pub fn attempt<I: NeighborIndex>(points: &[Point], k: usize, cfg: &HullCfg) -> Attempt {
    if points.len() <= 3 {
        return Attempt::Closed(points.to_vec());
    }
    let k = k.clamp(3, points.len() - 1);
    let Some(grower) = HullGrower::<I>::new(points, k, cfg.tol) else {
        return Attempt::Closed(Vec::new());
    };
    match grower.run() {
        GrowthEnd::Stuck { step } => Attempt::Stuck { step },
        GrowthEnd::Closed(mut ring) => {
            let outside = count_outside(points, &ring, cfg.tol, cfg.parallel_enclosure_min);
            if outside > 0 {
                return Attempt::NotEnclosed { outside };
            }
            ring.pop();
            Attempt::Closed(ring)
        }
    }
}

fn log_failure(k: usize, outcome: &Attempt) {
    match outcome {
        Attempt::Stuck { step } => tracing::debug!(k, step, "attempt stuck"),
        Attempt::NotEnclosed { outside } => tracing::debug!(k, outside, "attempt not enclosing"),
        Attempt::Closed(_) => {}
    }
}

/// Degenerate inputs short-circuit; otherwise the prepared set and `[k0, k_max]`.
enum Plan {
    Done(HullResult),
    Search {
        points: Vec<Point>,
        k0: usize,
        k_max: usize,
    },
}

fn plan(points: &[Point], cfg: &HullCfg) -> Plan {
    if points.len() <= 3 {
        return Plan::Done(HullResult {
            hull: points.to_vec(),
            k: cfg.start_k,
            attempts: 0,
        });
    }
    let prepared = prepare(points, cfg.tol);
    let n = prepared.len();
    if n <= 3 {
        return Plan::Done(HullResult {
            hull: prepared,
            k: cfg.start_k,
            attempts: 0,
        });
    }
    let k0 = cfg.start_k.clamp(3, n - 1);
    let k_max = if cfg.iterate {
        cfg.max_k.map_or(n - 1, |m| m.min(n - 1)).max(k0)
    } else {
        k0
    };
    Plan::Search {
        points: prepared,
        k0,
        k_max,
    }
}

/// Retry search with an explicit index backend.
pub fn concave_hull_with_index<I: NeighborIndex>(
    points: &[Point],
    cfg: &HullCfg,
) -> Option<HullResult> {
    let (pts, k0, k_max) = match plan(points, cfg) {
        Plan::Done(r) => return Some(r),
        Plan::Search { points, k0, k_max } => (points, k0, k_max),
    };
    for k in k0..=k_max {
        let outcome = attempt::<I>(&pts, k, cfg);
        if let Attempt::Closed(hull) = outcome {
            tracing::debug!(k, vertices = hull.len(), "hull closed");
            return Some(HullResult {
                hull,
                k,
                attempts: k - k0 + 1,
            });
        }
        log_failure(k, &outcome);
    }
    tracing::debug!(k0, k_max, n = pts.len(), "no k produced a valid hull");
    None
}

/// Retry search on the default R-tree backend.
pub fn concave_hull_with(points: &[Point], cfg: &HullCfg) -> Option<HullResult> {
    concave_hull_with_index::<RTreeIndex>(points, cfg)
}

/// Retry search with all `k` attempted concurrently; the smallest successful
/// `k` wins, so the result equals `concave_hull_with`.
pub fn concave_hull_par(points: &[Point], cfg: &HullCfg) -> Option<HullResult> {
    let (pts, k0, k_max) = match plan(points, cfg) {
        Plan::Done(r) => return Some(r),
        Plan::Search { points, k0, k_max } => (points, k0, k_max),
    };
    (k0..=k_max).into_par_iter().find_map_first(|k| {
        attempt::<RTreeIndex>(&pts, k, cfg)
            .into_hull()
            .map(|hull| HullResult {
                hull,
                k,
                attempts: k - k0 + 1,
            })
    })
}

/// Single attempt at `k`. On success `hull` is overwritten and true returned;
/// on failure `hull` is left untouched.
pub fn concave_hull_k(points: &[Point], k: usize, hull: &mut Vec<Point>) -> bool {
    let cfg = HullCfg {
        start_k: k,
        iterate: false,
        ..HullCfg::default()
    };
    match concave_hull_with(points, &cfg) {
        Some(r) => {
            *hull = r.hull;
            true
        }
        None => false,
    }
}

/// Widening search from `start_k`; empty on failure.
pub fn concave_hull(points: &[Point], start_k: usize, iterate: bool) -> Vec<Point> {
    let cfg = HullCfg {
        start_k,
        iterate,
        ..HullCfg::default()
    };
    concave_hull_with(points, &cfg)
        .map(|r| r.hull)
        .unwrap_or_default()
}
