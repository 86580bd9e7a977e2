use std::collections::HashMap;

use rstar::primitives::GeomWithData;
use rstar::RTree;

use super::{finish_query, Neighbor, NeighborIndex};
use crate::geom2::Point;

type Entry = GeomWithData<[f64; 2], u64>;

/// R*-tree backend. Removal by id goes through a side map of live coordinates.
pub struct RTreeIndex {
    tree: RTree<Entry>,
    live: HashMap<u64, Point>,
}

impl NeighborIndex for RTreeIndex {
    fn build(points: &[Point]) -> Self {
        let entries: Vec<Entry> = points
            .iter()
            .map(|p| GeomWithData::new(p.xy(), p.id))
            .collect();
        let live: HashMap<u64, Point> = points.iter().map(|p| (p.id, *p)).collect();
        debug_assert_eq!(live.len(), points.len(), "duplicate ids in index input");
        Self {
            tree: RTree::bulk_load(entries),
            live,
        }
    }

    fn k_nearest(&self, query: &Point, k: usize) -> Vec<Neighbor> {
        if k == 0 {
            return Vec::new();
        }
        // Collect past the k-th hit while distances tie so the id tie-break
        // does not depend on tree traversal order.
        let mut found: Vec<(f64, Point)> = Vec::with_capacity(k + 1);
        let mut cutoff = f64::INFINITY;
        for (e, d2) in self.tree.nearest_neighbor_iter_with_distance_2(&query.xy()) {
            if e.data == query.id {
                continue;
            }
            if found.len() >= k && d2 > cutoff {
                break;
            }
            let g = e.geom();
            found.push((d2, Point::with_id(g[0], g[1], e.data)));
            if found.len() == k {
                cutoff = d2;
            }
        }
        finish_query(found, k)
    }

    fn remove(&mut self, id: u64) -> bool {
        match self.live.remove(&id) {
            Some(p) => {
                let removed = self.tree.remove(&GeomWithData::new(p.xy(), id));
                debug_assert!(removed.is_some(), "live map and tree out of sync");
                removed.is_some()
            }
            None => false,
        }
    }

    fn reinsert(&mut self, p: Point) {
        if self.live.insert(p.id, p).is_none() {
            self.tree.insert(GeomWithData::new(p.xy(), p.id));
        }
    }

    fn len(&self) -> usize {
        self.tree.size()
    }
}
