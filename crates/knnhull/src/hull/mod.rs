//! k-nearest-neighbour concave hull (Moreira–Santos).
//!
//! Purpose
//! - Wrap a finite 2D point set in a simple polygon that may indent where the
//!   convex hull would over-approximate the footprint.
//! - Split the work into growth (`grow`), enclosure validation (`enclose`), and
//!   the widening retry search (`driver`).
//!
//! Flow
//! - `points::prepare` → per attempt: fresh index, `HullGrower::run`, then
//!   `enclose::count_outside` on the closed ring → on failure widen `k`.
//!
//! Output
//! - Hulls are open vertex lists in clockwise screen order (y down), starting
//!   at the min-y / max-x vertex; the closing edge is implied.
//!
//! Code cross-refs: `knn::NeighborIndex`, `geom2::{segments_intersect, point_in_polygon}`

mod driver;
pub mod enclose;
mod grow;
mod types;

pub use driver::{
    attempt, concave_hull, concave_hull_k, concave_hull_par, concave_hull_with,
    concave_hull_with_index,
};
pub use enclose::count_outside;
pub use types::{Attempt, HullCfg, HullResult};

#[cfg(test)]
mod tests;
