use std::collections::HashMap;

use super::{finish_query, Neighbor, NeighborIndex};
use crate::geom2::Point;

/// Brute-force backend: O(n) per query, trivially correct.
#[derive(Clone, Debug, Default)]
pub struct LinearIndex {
    points: Vec<Point>,
    live: Vec<bool>,
    slot: HashMap<u64, usize>,
    n_live: usize,
}

impl NeighborIndex for LinearIndex {
    fn build(points: &[Point]) -> Self {
        let slot: HashMap<u64, usize> = points.iter().enumerate().map(|(i, p)| (p.id, i)).collect();
        debug_assert_eq!(slot.len(), points.len(), "duplicate ids in index input");
        Self {
            points: points.to_vec(),
            live: vec![true; points.len()],
            slot,
            n_live: points.len(),
        }
    }

    fn k_nearest(&self, query: &Point, k: usize) -> Vec<Neighbor> {
        let found: Vec<(f64, Point)> = self
            .points
            .iter()
            .zip(&self.live)
            .filter(|(p, alive)| **alive && p.id != query.id)
            .map(|(p, _)| ((p.pos - query.pos).norm_squared(), *p))
            .collect();
        finish_query(found, k)
    }

    fn remove(&mut self, id: u64) -> bool {
        match self.slot.get(&id) {
            Some(&i) if self.live[i] => {
                self.live[i] = false;
                self.n_live -= 1;
                true
            }
            _ => false,
        }
    }

    fn reinsert(&mut self, p: Point) {
        match self.slot.get(&p.id) {
            Some(&i) => {
                if !self.live[i] {
                    self.live[i] = true;
                    self.n_live += 1;
                }
                self.points[i] = p;
            }
            None => {
                self.slot.insert(p.id, self.points.len());
                self.points.push(p);
                self.live.push(true);
                self.n_live += 1;
            }
        }
    }

    fn len(&self) -> usize {
        self.n_live
    }
}
