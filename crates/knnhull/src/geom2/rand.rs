//! Seeded 2D point clouds (replay tokens + shape samplers).
//!
//! Purpose
//! - Provide small, deterministic point-cloud generators for benches, the CLI,
//!   and property tests. Draws are reproducible and indexable through a
//!   `(seed, index)` replay token mixed into a single RNG.
//!
//! Shapes
//! - `Disc`: uniform in a disc (the hull is close to convex).
//! - `Ell`: jittered samples along an L outline plus uniform interior points
//!   (the hull should follow the re-entrant corner).
//!
//! Code cross-refs: `Point`, `crate::hull::concave_hull`

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Cloud footprint.
#[derive(Clone, Copy, Debug)]
pub enum Shape {
    Disc { radius: f64 },
    /// L with both arms of length `arm` and thickness `width`, corner at the origin.
    Ell { arm: f64, width: f64 },
}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub shape: Shape,
    pub count: usize,
    /// Fraction of `count` drawn from the interior (only used by `Ell`). Clamped to [0, 1].
    pub interior_frac: f64,
    /// Outline jitter amplitude, relative to `width` (only used by `Ell`).
    pub jitter: f64,
}
impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            shape: Shape::Ell {
                arm: 6.0,
                width: 2.0,
            },
            count: 200,
            interior_frac: 0.3,
            jitter: 0.02,
        }
    }
}

/// Draw a point cloud. Ids are left at zero; `points::prepare` assigns them.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    match cfg.shape {
        Shape::Disc { radius } => (0..cfg.count)
            .map(|_| {
                let r = radius.max(0.0) * rng.gen::<f64>().sqrt();
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                Point::new(r * th.cos(), r * th.sin())
            })
            .collect(),
        Shape::Ell { arm, width } => {
            let arm = arm.max(1e-9);
            let width = width.max(1e-9).min(arm);
            let inner = ((cfg.count as f64) * cfg.interior_frac.clamp(0.0, 1.0)).round() as usize;
            let mut pts = Vec::with_capacity(cfg.count);
            let outline = ell_outline(arm, width);
            let perimeter: f64 = edges(&outline).map(|(a, b)| (b - a).norm()).sum();
            for _ in 0..cfg.count - inner {
                let mut t = rng.gen::<f64>() * perimeter;
                let mut sample = outline[0];
                for (a, b) in edges(&outline) {
                    let len = (b - a).norm();
                    if t <= len {
                        sample = a + (b - a) * (t / len);
                        break;
                    }
                    t -= len;
                }
                let amp = cfg.jitter.max(0.0) * width;
                let j = Vector2::new(
                    (rng.gen::<f64>() * 2.0 - 1.0) * amp,
                    (rng.gen::<f64>() * 2.0 - 1.0) * amp,
                );
                pts.push(Point::from(sample + j));
            }
            while pts.len() < cfg.count {
                let p = Vector2::new(rng.gen::<f64>() * arm, rng.gen::<f64>() * arm);
                if p.x <= width || p.y <= width {
                    pts.push(Point::from(p));
                }
            }
            pts
        }
    }
}

fn ell_outline(arm: f64, width: f64) -> [Vector2<f64>; 6] {
    [
        Vector2::new(0.0, 0.0),
        Vector2::new(arm, 0.0),
        Vector2::new(arm, width),
        Vector2::new(width, width),
        Vector2::new(width, arm),
        Vector2::new(0.0, arm),
    ]
}

fn edges(ring: &[Vector2<f64>]) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
    (0..ring.len()).map(move |i| (ring[i], ring[(i + 1) % ring.len()]))
}
