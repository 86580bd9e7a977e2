//! Nearest-neighbour index abstraction used by hull growth.
//!
//! Purpose
//! - Expose exactly the capability set the growth loop needs
//!   (`build`, `k_nearest`, `remove`, `reinsert`) so the backing structure is
//!   swappable.
//! - Fix the result order independently of the backend: ascending distance,
//!   equal distances by ascending id. Hull growth is order-sensitive, so two
//!   backends over the same points must return identical sequences.
//!
//! Backends
//! - `RTreeIndex`: `rstar` R*-tree, bulk-loaded once per attempt.
//! - `LinearIndex`: brute-force scan over a live-flag vector.

mod linear;
mod rtree;

pub use linear::LinearIndex;
pub use rtree::RTreeIndex;

use crate::geom2::Point;

/// A live point returned by a kNN query, with its Euclidean distance.
#[derive(Clone, Copy, Debug)]
pub struct Neighbor {
    pub point: Point,
    pub distance: f64,
}

/// Dynamic kNN index keyed by point id.
pub trait NeighborIndex {
    /// One-time construction over all points (ids must be unique).
    fn build(points: &[Point]) -> Self
    where
        Self: Sized;

    /// Up to `k` nearest live points to `query`, excluding any live point with
    /// the same id. Asking for more than are live is not an error.
    fn k_nearest(&self, query: &Point, k: usize) -> Vec<Neighbor>;

    /// Drop a point from future queries. Returns false if it was not live.
    fn remove(&mut self, id: u64) -> bool;

    /// Make a previously removed point live again.
    fn reinsert(&mut self, p: Point);

    /// Number of live points.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sort `(distance², point)` pairs into the canonical order and keep `k`.
pub(crate) fn finish_query(mut found: Vec<(f64, Point)>, k: usize) -> Vec<Neighbor> {
    found.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.id.cmp(&b.1.id)));
    found.truncate(k);
    found
        .into_iter()
        .map(|(d2, point)| Neighbor {
            point,
            distance: d2.sqrt(),
        })
        .collect()
}
