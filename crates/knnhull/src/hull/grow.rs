//! Greedy hull growth at a fixed `k`.
//!
//! Model
//! - Start at the min-y (max-x on ties) vertex, heading angle 0. The start
//!   vertex is pulled from the index so the first steps cannot close a
//!   degenerate loop; it is reinserted before step 4.
//! - Each step ranks the `k` nearest live points by descending clockwise turn
//!   relative to the previous heading and accepts the first whose edge does
//!   not cross a non-adjacent hull edge.
//! - When the candidate is the start vertex, the edge `hull[0]..hull[1]` is
//!   also skipped: it shares the start vertex with the closing edge.
//!
//! Code cross-refs: `geom2::{angle, segments_intersect}`, `knn::NeighborIndex`

use crate::geom2::{
    angle, normalize_angle, segments_intersect, LineSegment, Point, PointValue, Tolerance,
};
use crate::knn::NeighborIndex;
use crate::points::find_min_y_point;

use super::types::Phase;

/// Terminal state of a growth run.
#[derive(Clone, Debug)]
pub(crate) enum GrowthEnd {
    /// Closed ring: first and last vertex are the start point.
    Closed(Vec<Point>),
    Stuck { step: usize },
}

/// One attempt's mutable state. Owns its index; nothing is shared across attempts.
pub(crate) struct HullGrower<I: NeighborIndex> {
    index: I,
    tol: Tolerance,
    k: usize,
    total: usize,
    first: Point,
    current: Point,
    prev_angle: f64,
    /// Number of accepted vertices; always `hull.len()`.
    step: usize,
    hull: Vec<Point>,
}

impl<I: NeighborIndex> HullGrower<I> {
    /// START: pick the first vertex and build a fresh index. `None` on empty input.
    pub(crate) fn new(points: &[Point], k: usize, tol: Tolerance) -> Option<Self> {
        let first = find_min_y_point(points, tol)?;
        let mut index = I::build(points);
        index.remove(first.id);
        Some(Self {
            index,
            tol,
            k,
            total: points.len(),
            first,
            current: first,
            prev_angle: 0.0,
            step: 1,
            hull: vec![first],
        })
    }

    #[inline]
    fn is_growing(&self) -> bool {
        (self.step == 1 || self.current.id != self.first.id) && self.hull.len() < self.total
    }

    /// Candidates sorted by descending clockwise turn. Stable, so equal
    /// angles keep the index order (nearest first, then lowest id).
    fn ranked_candidates(&self) -> Vec<PointValue> {
        let mut ranked: Vec<PointValue> = self
            .index
            .k_nearest(&self.current, self.k)
            .into_iter()
            .map(|n| PointValue {
                point: n.point,
                distance: n.distance,
                angle: normalize_angle(angle(&self.current, &n.point) - self.prev_angle),
            })
            .collect();
        ranked.sort_by(|a, b| b.angle.total_cmp(&a.angle));
        ranked
    }

    /// Does `current -> c` cross a hull edge not adjacent to either endpoint?
    fn crosses_hull(&self, c: &Point) -> bool {
        let last = usize::from(c.id == self.first.id);
        let step = self.step;
        let edge = LineSegment::new(self.hull[step - 1], *c);
        (2..self.hull.len() - last).any(|j| {
            let other = LineSegment::new(self.hull[step - j - 1], self.hull[step - j]);
            segments_intersect(self.tol, &edge, &other)
        })
    }

    /// The implicit edge back to the start after all points were consumed.
    fn closing_edge_crosses(&self) -> bool {
        let m = self.hull.len();
        let edge = LineSegment::new(self.current, self.first);
        (1..m.saturating_sub(2)).any(|i| {
            let other = LineSegment::new(self.hull[i], self.hull[i + 1]);
            segments_intersect(self.tol, &edge, &other)
        })
    }

    fn accept(&mut self, c: Point) {
        self.hull.push(c);
        self.index.remove(c.id);
        self.prev_angle = angle(&self.hull[self.step], &self.hull[self.step - 1]);
        self.step += 1;
        self.current = c;
    }

    /// GROWING: one step. Returns the phase after the step.
    pub(crate) fn advance(&mut self) -> Phase {
        if !self.is_growing() {
            return Phase::Closed;
        }
        debug_assert_eq!(self.step, self.hull.len());
        if self.step == 4 {
            self.index.reinsert(self.first);
        }
        let ranked = self.ranked_candidates();
        let chosen = ranked
            .iter()
            .map(|pv| pv.point)
            .find(|c| !self.crosses_hull(c));
        match chosen {
            Some(c) => {
                tracing::trace!(step = self.step, candidates = ranked.len(), id = c.id, "accept");
                self.accept(c);
                if self.is_growing() {
                    Phase::Growing
                } else {
                    Phase::Closed
                }
            }
            None => Phase::Stuck,
        }
    }

    /// Drive `advance` to a terminal phase.
    pub(crate) fn run(mut self) -> GrowthEnd {
        loop {
            match self.advance() {
                Phase::Growing => continue,
                Phase::Stuck => return GrowthEnd::Stuck { step: self.step },
                Phase::Closed => break,
            }
        }
        if self.current.id != self.first.id {
            // Every point consumed without returning to the start.
            if self.closing_edge_crosses() {
                return GrowthEnd::Stuck { step: self.step };
            }
            self.hull.push(self.first);
        }
        GrowthEnd::Closed(self.hull)
    }
}
