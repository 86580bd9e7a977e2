//! Curated surface for callers (CLI, benches).
//!
//! Prefer these re-exports over reaching into submodules.

// Geometry
pub use crate::geom2::{
    angle, bounding_box, convex_hull, point_in_polygon, polygon_area, segments_intersect,
    LineSegment, Point, Tolerance,
};
// Point clouds
pub use crate::geom2::rand::{draw_cloud, CloudCfg, ReplayToken, Shape};
// Hull search
pub use crate::hull::{
    attempt, concave_hull, concave_hull_k, concave_hull_par, concave_hull_with,
    concave_hull_with_index, Attempt, HullCfg, HullResult,
};
// Index backends
pub use crate::knn::{LinearIndex, NeighborIndex, RTreeIndex};
pub use crate::points::prepare;

/// Area of `hull` relative to the convex hull of `points` (1.0 = convex).
///
/// Returns `None` when the convex hull is degenerate.
pub fn fill_ratio(points: &[Point], hull: &[Point]) -> Option<f64> {
    let convex = polygon_area(&convex_hull(points));
    if convex <= 0.0 {
        return None;
    }
    Some(polygon_area(hull) / convex)
}
