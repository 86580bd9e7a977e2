//! Configuration and outcome types for hull attempts.

use crate::geom2::{Point, Tolerance};

/// Hull search configuration.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    /// First neighbourhood size tried. Clamped to `[3, n - 1]`.
    pub start_k: usize,
    /// Widen `k` by one after a failed attempt.
    pub iterate: bool,
    /// Last `k` the retry loop may try (still clamped to `n - 1`). A caller
    /// wanting a time bound limits this; there is no other cancellation.
    pub max_k: Option<usize>,
    pub tol: Tolerance,
    /// Remainder size from which the enclosure scan runs on the rayon pool.
    pub parallel_enclosure_min: usize,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            start_k: 3,
            iterate: true,
            max_k: None,
            tol: Tolerance::default(),
            parallel_enclosure_min: 1024,
        }
    }
}

/// Growth phase of a single attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    Growing,
    /// Back at the start vertex, or every point consumed.
    Closed,
    /// No candidate among the `k` nearest avoids crossing the hull.
    Stuck,
}

/// Result of one attempt at a fixed `k`.
#[derive(Clone, Debug)]
pub enum Attempt {
    /// Simple polygon enclosing every input point (open vertex list).
    Closed(Vec<Point>),
    /// Dead end after `step` accepted vertices.
    Stuck { step: usize },
    /// The polygon closed but `outside` points are not enclosed.
    NotEnclosed { outside: usize },
}

impl Attempt {
    #[inline]
    pub fn into_hull(self) -> Option<Vec<Point>> {
        if let Attempt::Closed(h) = self {
            Some(h)
        } else {
            None
        }
    }
}

/// Successful retry-driven search.
#[derive(Clone, Debug)]
pub struct HullResult {
    pub hull: Vec<Point>,
    /// Neighbourhood size that produced `hull`.
    pub k: usize,
    /// Number of `k` values tried up to and including the winner.
    pub attempts: usize,
}
