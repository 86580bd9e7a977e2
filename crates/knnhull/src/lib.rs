//! k-nearest-neighbour concave hulls for 2D point sets.
//!
//! Modules
//! - `geom2`: tolerance-aware primitives (angles, segment intersection,
//!   containment), convex hull and area helpers, seeded point clouds.
//! - `points`: deduplication, id assignment, start-vertex selection.
//! - `knn`: the nearest-neighbour index trait and its backends.
//! - `hull`: growth, enclosure validation, and the widening retry search.
//!
//! API Policy
//! - Expected failures (dead-end attempts, exhausted `k`) are plain return
//!   values. Panics mean a broken internal invariant.

pub mod api;
pub mod geom2;
pub mod hull;
pub mod knn;
pub mod points;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Point, Tolerance};
pub use hull::{concave_hull, concave_hull_k, concave_hull_with, HullCfg, HullResult};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_cloud, CloudCfg, ReplayToken, Shape};
    pub use crate::geom2::{convex_hull, polygon_area, Point, Tolerance};
    pub use crate::hull::{
        concave_hull, concave_hull_k, concave_hull_par, concave_hull_with, Attempt, HullCfg,
        HullResult,
    };
    pub use crate::knn::{LinearIndex, NeighborIndex, RTreeIndex};
}
