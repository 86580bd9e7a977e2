use super::grow::{GrowthEnd, HullGrower};
use super::types::Phase;
use super::*;
use crate::geom2::{convex_hull, polygon_area, Point, Tolerance};
use crate::knn::{LinearIndex, RTreeIndex};
use crate::points::prepare;
use proptest::prelude::*;

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn coords(hull: &[Point]) -> Vec<(f64, f64)> {
    hull.iter().map(|p| (p.x(), p.y())).collect()
}

fn unit_square_with_center() -> Vec<Point> {
    pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 0.5)])
}

/// L outline sampled on the integer lattice plus a few interior points.
fn ell_cloud() -> Vec<Point> {
    let outline: [(i32, i32); 6] = [(0, 0), (6, 0), (6, 2), (2, 2), (2, 6), (0, 6)];
    let mut raw = Vec::new();
    for i in 0..outline.len() {
        let (a, b) = (outline[i], outline[(i + 1) % outline.len()]);
        let len = (b.0 - a.0).abs().max((b.1 - a.1).abs());
        for t in 0..len {
            raw.push((
                (a.0 + (b.0 - a.0).signum() * t) as f64,
                (a.1 + (b.1 - a.1).signum() * t) as f64,
            ));
        }
    }
    raw.extend([(1.0, 1.0), (3.0, 1.0), (5.0, 1.0), (1.0, 3.0), (1.0, 5.0)]);
    pts(&raw)
}

// --- test oracles, independent of the production predicates ---

fn orient(a: &Point, b: &Point, c: &Point) -> f64 {
    (b.x() - a.x()) * (c.y() - a.y()) - (b.y() - a.y()) * (c.x() - a.x())
}

fn properly_cross(a: &Point, b: &Point, c: &Point, d: &Point) -> bool {
    orient(a, b, c) * orient(a, b, d) < 0.0 && orient(c, d, a) * orient(c, d, b) < 0.0
}

/// Brute-force: no two non-adjacent edges of the cyclic polygon cross.
fn is_simple(h: &[Point]) -> bool {
    let m = h.len();
    for i in 0..m {
        for j in i + 1..m {
            if j == i + 1 || (i == 0 && j == m - 1) {
                continue;
            }
            if properly_cross(&h[i], &h[(i + 1) % m], &h[j], &h[(j + 1) % m]) {
                return false;
            }
        }
    }
    true
}

/// Inside or on the boundary of the cyclic polygon.
fn covers(h: &[Point], p: &Point) -> bool {
    let m = h.len();
    let mut inside = false;
    for i in 0..m {
        let (a, b) = (&h[i], &h[(i + 1) % m]);
        let on_line = orient(a, b, p).abs() < 1e-12;
        let in_box = p.x() >= a.x().min(b.x()) - 1e-12
            && p.x() <= a.x().max(b.x()) + 1e-12
            && p.y() >= a.y().min(b.y()) - 1e-12
            && p.y() <= a.y().max(b.y()) + 1e-12;
        if on_line && in_box {
            return true;
        }
        if (a.y() > p.y()) != (b.y() > p.y()) {
            let x = a.x() + (p.y() - a.y()) * (b.x() - a.x()) / (b.y() - a.y());
            if p.x() < x {
                inside = !inside;
            }
        }
    }
    inside
}

fn assert_valid(points: &[Point], hull: &[Point]) {
    assert!(is_simple(hull), "hull self-intersects: {:?}", coords(hull));
    for p in points {
        assert!(
            hull.iter().any(|h| h.pos == p.pos) || covers(hull, p),
            "point {:?} not enclosed",
            (p.x(), p.y())
        );
    }
}

#[test]
fn unit_square_with_center_point() {
    let points = unit_square_with_center();
    let mut hull = Vec::new();
    assert!(concave_hull_k(&points, 3, &mut hull));
    // clockwise on screen from the min-y / max-x corner
    assert_eq!(
        coords(&hull),
        vec![(1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]
    );
    let prepared = prepare(&points, Tolerance::default());
    let mut ring = hull.clone();
    ring.push(hull[0]);
    assert_eq!(count_outside(&prepared, &ring, Tolerance::default(), 0), 0);
    assert_valid(&points, &hull);
}

#[test]
fn growth_phases_on_square() {
    let prepared = prepare(&unit_square_with_center(), Tolerance::default());
    let mut g = HullGrower::<LinearIndex>::new(&prepared, 3, Tolerance::default()).unwrap();
    assert_eq!(g.advance(), Phase::Growing);
    assert_eq!(g.advance(), Phase::Growing);
    assert_eq!(g.advance(), Phase::Growing);
    // step 4 reinserts the start vertex and closes on it
    assert_eq!(g.advance(), Phase::Closed);
    assert_eq!(g.advance(), Phase::Closed);
    match g.run() {
        GrowthEnd::Closed(ring) => {
            assert_eq!(ring.len(), 5);
            assert_eq!(ring.first().unwrap().id, ring.last().unwrap().id);
        }
        GrowthEnd::Stuck { .. } => panic!("expected closed ring"),
    }
}

#[test]
fn all_points_consumed_closes_implicitly() {
    let square = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let hull = concave_hull(&square, 3, false);
    assert_eq!(
        coords(&hull),
        vec![(1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]
    );
}

#[test]
fn degenerate_inputs_are_returned_unchanged() {
    for n in 0..=3 {
        let raw = [(2.0, 0.0), (0.0, 0.0), (1.0, 1.0)];
        let points = pts(&raw[..n]);
        let hull = concave_hull(&points, 3, true);
        assert_eq!(hull, points);
        let mut out = vec![Point::new(9.0, 9.0)];
        assert!(concave_hull_k(&points, 5, &mut out));
        assert_eq!(out, points);
    }
}

#[test]
fn duplicates_do_not_change_the_hull() {
    let clean = unit_square_with_center();
    let mut noisy = clean.clone();
    noisy.push(Point::new(1.0, 1.0));
    noisy.push(Point::new(0.0, 0.0));
    noisy.push(Point::new(0.5, 0.5));
    let a = concave_hull(&clean, 3, true);
    let b = concave_hull(&noisy, 3, true);
    assert_eq!(a, b);
    // five distinct locations, five ids
    assert!(b.iter().all(|p| p.id < 5));
}

#[test]
fn stuck_attempt_recovers_with_larger_k() {
    let points = pts(&[
        (1.0, 4.0),
        (2.0, 10.0),
        (6.0, 2.0),
        (3.0, 9.0),
        (2.0, 9.0),
        (1.0, 5.0),
        (8.0, 2.0),
    ]);
    let prepared = prepare(&points, Tolerance::default());
    let cfg = HullCfg::default();
    assert!(matches!(
        attempt::<RTreeIndex>(&prepared, 3, &cfg),
        Attempt::Stuck { step: 5 }
    ));
    assert!(concave_hull(&points, 3, false).is_empty());

    let r = concave_hull_with(&points, &cfg).expect("k = 4 succeeds");
    assert_eq!((r.k, r.attempts), (4, 2));
    assert_eq!(
        coords(&r.hull),
        vec![(8.0, 2.0), (3.0, 9.0), (2.0, 10.0), (1.0, 5.0), (1.0, 4.0), (6.0, 2.0)]
    );
    assert_valid(&points, &r.hull);

    let capped = HullCfg {
        max_k: Some(3),
        ..HullCfg::default()
    };
    assert!(concave_hull_with(&points, &capped).is_none());
}

#[test]
fn failed_single_attempt_leaves_hull_untouched() {
    let points = pts(&[
        (1.0, 4.0),
        (2.0, 10.0),
        (6.0, 2.0),
        (3.0, 9.0),
        (2.0, 9.0),
        (1.0, 5.0),
        (8.0, 2.0),
    ]);
    let sentinel = Point::new(-1.0, -1.0);
    let mut hull = vec![sentinel];
    assert!(!concave_hull_k(&points, 3, &mut hull));
    assert_eq!(hull, vec![sentinel]);
}

#[test]
fn crossing_closing_edge_is_stuck() {
    // k = 3 walks through all eight points; the edge (8,4) -> (1,1) back to
    // the start cuts (1,2) -> (8,2).
    let points = pts(&[
        (1.0, 2.0),
        (8.0, 4.0),
        (1.0, 1.0),
        (1.0, 8.0),
        (1.0, 4.0),
        (9.0, 8.0),
        (8.0, 2.0),
        (9.0, 7.0),
    ]);
    let prepared = prepare(&points, Tolerance::default());
    let cfg = HullCfg::default();
    assert!(matches!(
        attempt::<RTreeIndex>(&prepared, 3, &cfg),
        Attempt::Stuck { step: 8 }
    ));
    assert!(matches!(
        attempt::<LinearIndex>(&prepared, 3, &cfg),
        Attempt::Stuck { step: 8 }
    ));

    let r = concave_hull_with(&points, &cfg).expect("k = 4 succeeds");
    assert_eq!((r.k, r.attempts), (4, 2));
    assert_eq!(
        coords(&r.hull),
        vec![(1.0, 1.0), (8.0, 2.0), (9.0, 7.0), (9.0, 8.0), (1.0, 8.0), (1.0, 4.0), (1.0, 2.0)]
    );
    assert_valid(&points, &r.hull);
}

#[test]
fn start_k_beyond_point_count_tries_n_minus_one_once() {
    let cfg = HullCfg {
        start_k: 10,
        ..HullCfg::default()
    };
    let r = concave_hull_with(&unit_square_with_center(), &cfg).unwrap();
    assert_eq!((r.k, r.attempts), (4, 1));
    assert_eq!(
        coords(&r.hull),
        vec![(1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]
    );
}

#[test]
fn unenclosed_attempt_recovers_with_larger_k() {
    let points = pts(&[
        (4.0, 4.0),
        (2.0, 0.0),
        (1.0, 8.0),
        (5.0, 4.0),
        (0.0, 5.0),
        (4.0, 6.0),
        (9.0, 4.0),
        (5.0, 8.0),
    ]);
    let prepared = prepare(&points, Tolerance::default());
    let cfg = HullCfg::default();
    assert!(matches!(
        attempt::<LinearIndex>(&prepared, 3, &cfg),
        Attempt::NotEnclosed { outside: 1 }
    ));
    let r = concave_hull_with(&points, &cfg).unwrap();
    assert_eq!(r.k, 4);
    assert_eq!(
        coords(&r.hull),
        vec![(2.0, 0.0), (5.0, 4.0), (9.0, 4.0), (5.0, 8.0), (1.0, 8.0), (0.0, 5.0)]
    );
    assert_valid(&points, &r.hull);
}

#[test]
fn ell_shape_is_concave() {
    let points = ell_cloud();
    let r = concave_hull_with(&points, &HullCfg::default()).unwrap();
    assert!(r.k <= 6);
    assert!(r.hull.len() > 4);
    let area = polygon_area(&r.hull);
    let convex = polygon_area(&convex_hull(&points));
    assert!((convex - 28.0).abs() < 1e-9);
    assert!(area < convex, "area {area} vs convex {convex}");
    assert_valid(&points, &r.hull);
}

#[test]
fn widening_keeps_fixtures_valid() {
    let square = unit_square_with_center();
    for k in 3..=10 {
        let mut hull = Vec::new();
        assert!(concave_hull_k(&square, k, &mut hull), "k = {k}");
    }
    let ell = ell_cloud();
    let mut prev_area = 0.0;
    for k in 3..ell.len() {
        let mut hull = Vec::new();
        assert!(concave_hull_k(&ell, k, &mut hull), "k = {k}");
        let area = polygon_area(&hull);
        assert!(area + 1e-9 >= prev_area, "k = {k}");
        prev_area = area;
    }
}

#[test]
fn parallel_search_matches_sequential() {
    let points = ell_cloud();
    let cfg = HullCfg {
        start_k: 3,
        ..HullCfg::default()
    };
    let a = concave_hull_with(&points, &cfg).unwrap();
    let b = concave_hull_par(&points, &cfg).unwrap();
    assert_eq!(a.k, b.k);
    assert_eq!(a.hull, b.hull);
}

#[test]
fn parallel_enclosure_scan_agrees() {
    let points = ell_cloud();
    let seq = concave_hull_with(&points, &HullCfg::default()).unwrap();
    let par = concave_hull_with(
        &points,
        &HullCfg {
            parallel_enclosure_min: 0,
            ..HullCfg::default()
        },
    )
    .unwrap();
    assert_eq!(seq.hull, par.hull);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn successful_hulls_are_simple_and_enclosing(
        raw in prop::collection::vec((-1.0f64..1.0, -1.0f64..1.0), 4..60),
        k in 3usize..8,
    ) {
        let points = pts(&raw);
        let cfg = HullCfg { start_k: k, ..HullCfg::default() };
        if let Some(r) = concave_hull_with(&points, &cfg) {
            prop_assert!(is_simple(&r.hull));
            for p in &points {
                prop_assert!(r.hull.iter().any(|h| h.pos == p.pos) || covers(&r.hull, p));
            }
            let convex = polygon_area(&convex_hull(&points));
            prop_assert!(polygon_area(&r.hull) <= convex + 1e-9);
        }
    }

    #[test]
    fn runs_are_deterministic_across_backends(
        raw in prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 4..40),
        k in 3usize..6,
    ) {
        let points = pts(&raw);
        let cfg = HullCfg { start_k: k, iterate: false, ..HullCfg::default() };
        let a = concave_hull_with_index::<RTreeIndex>(&points, &cfg).map(|r| r.hull);
        let b = concave_hull_with_index::<RTreeIndex>(&points, &cfg).map(|r| r.hull);
        let c = concave_hull_with_index::<LinearIndex>(&points, &cfg).map(|r| r.hull);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&a, &c);
    }
}
