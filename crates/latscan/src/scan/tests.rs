use std::collections::BTreeSet;

use nalgebra::Vector2;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::*;
use crate::figure::{Figure, LatticePoint};
use crate::shapes::{draw_polygon_radial, rectangle, regular_polygon, RadialCfg, ReplayToken};

fn lattice(w: i32, h: i32) -> Lattice {
    Lattice::new(w, h).unwrap()
}

fn figure_of(rings: &[Vec<(f32, f32)>]) -> Figure {
    rings.iter().fold(Figure::new(), |fig, ring| {
        fig.polygon(ring.iter().map(|&(x, y)| Vector2::new(x, y)))
    })
}

fn scan_points(fig: &Figure, l: Lattice, fill: Fill) -> Vec<LatticePoint> {
    let mut ws = fig.workspace();
    fig.scan(&mut ws, l, fill).unwrap().collect()
}

fn xy(points: &[LatticePoint]) -> BTreeSet<(usize, usize)> {
    points.iter().map(|p| (p.x, p.y)).collect()
}

/// Closed even-odd membership of `(x, y)`; rings and query share integer units.
fn reference_inside(rings: &[Vec<(i64, i64)>], x: i64, y: i64) -> bool {
    let mut parity = false;
    for ring in rings {
        for k in 0..ring.len() {
            let a = ring[k];
            let b = ring[(k + 1) % ring.len()];
            let cross = (b.0 - a.0) * (y - a.1) - (b.1 - a.1) * (x - a.0);
            let within = a.0.min(b.0) <= x && x <= a.0.max(b.0) && a.1.min(b.1) <= y && y <= a.1.max(b.1);
            if cross == 0 && within {
                return true;
            }
            let (lo, hi) = if (a.1, a.0) <= (b.1, b.0) { (a, b) } else { (b, a) };
            if lo.1 < y && y <= hi.1 {
                let left = (lo.0 - x) * (hi.1 - lo.1) + (y - lo.1) * (hi.0 - lo.0);
                if left < 0 {
                    parity = !parity;
                }
            }
        }
    }
    parity
}

/// Reference point set for rings given in units of `1/den`.
fn reference_points(rings: &[Vec<(i64, i64)>], den: i64, l: Lattice, fill: Fill) -> BTreeSet<(usize, usize)> {
    let mut out = BTreeSet::new();
    for y in 0..l.height() as i64 {
        for x in 0..l.width() as i64 {
            let inside = reference_inside(rings, x * den, y * den);
            if inside == (fill == Fill::Interior) {
                out.insert((x as usize, y as usize));
            }
        }
    }
    out
}

fn to_float(rings: &[Vec<(i64, i64)>], den: i64) -> Vec<Vec<(f32, f32)>> {
    rings
        .iter()
        .map(|r| r.iter().map(|&(x, y)| ((x as f32) / den as f32, (y as f32) / den as f32)).collect())
        .collect()
}

fn assert_matches_reference(rings: &[Vec<(i64, i64)>], den: i64, l: Lattice) {
    let fig = figure_of(&to_float(rings, den));
    for fill in [Fill::Interior, Fill::Exterior] {
        let got = scan_points(&fig, l, fill);
        assert_raster_order(&got, l);
        assert_eq!(xy(&got), reference_points(rings, den, l, fill), "fill {fill:?} rings {rings:?}");
    }
}

fn assert_raster_order(points: &[LatticePoint], l: Lattice) {
    for p in points {
        assert!(p.x < l.width() as usize && p.y < l.height() as usize);
        assert_eq!(p.offset, p.y * l.width() as usize + p.x);
    }
    assert!(points.windows(2).all(|w| (w[0].y, w[0].x) < (w[1].y, w[1].x)));
}

#[test]
fn triangle_contains_interior_and_excludes_far_corner() {
    let fig = figure_of(&[vec![(2.0, 2.0), (2.0, 8.0), (8.0, 2.0)]]);
    let pts = xy(&scan_points(&fig, lattice(10, 10), Fill::Interior));
    assert!(pts.contains(&(3, 3)));
    assert!(!pts.contains(&(9, 9)));
    assert_eq!(pts.len(), 28);
}

#[test]
fn figure_outside_lattice_yields_nothing_inside() {
    let l = lattice(10, 10);
    let right = figure_of(&[vec![(12.0, 1.0), (18.0, 1.0), (15.0, 8.0)]]);
    let left = figure_of(&[vec![(-9.0, -3.0), (-1.0, 4.0), (-6.0, 15.0)]]);
    let above = figure_of(&[vec![(1.0, 10.5), (9.0, 11.0), (4.0, 19.0)]]);
    for fig in [right, left, above] {
        assert!(scan_points(&fig, l, Fill::Interior).is_empty());
        let outside = scan_points(&fig, l, Fill::Exterior);
        assert_eq!(outside.len(), 100);
        assert_raster_order(&outside, l);
    }
}

#[test]
fn hole_is_excluded_from_interior() {
    let l = lattice(10, 10);
    // Outer counterclockwise, hole clockwise.
    let fig = figure_of(&[
        vec![(1.0, 1.0), (8.0, 1.0), (8.0, 8.0), (1.0, 8.0)],
        vec![(3.0, 3.0), (3.0, 6.0), (6.0, 6.0), (6.0, 3.0)],
    ]);
    assert_eq!(fig.loop_count(), 2);
    let pts = xy(&scan_points(&fig, l, Fill::Interior));
    assert!(pts.contains(&(2, 2)));
    assert!(!pts.contains(&(4, 4)));
    assert!(!pts.contains(&(5, 5)));
    // The hole's boundary belongs to the figure.
    assert!(pts.contains(&(3, 3)));
    assert!(pts.contains(&(6, 4)));
    // 8x8 outer block minus the 2x2 open hole.
    assert_eq!(pts.len(), 64 - 4);
}

#[test]
fn horizontal_edge_on_scan_row_is_interior() {
    let fig = figure_of(&[vec![(2.0, 2.0), (8.0, 2.0), (2.0, 8.0)]]);
    let pts = xy(&scan_points(&fig, lattice(10, 10), Fill::Interior));
    for x in 2..=8 {
        assert!(pts.contains(&(x, 2)), "missing ({x}, 2)");
    }
    assert!(!pts.contains(&(9, 2)) && !pts.contains(&(1, 2)));
    // Top apex is a single point.
    let top: Vec<_> = pts.iter().filter(|p| p.1 == 8).collect();
    assert_eq!(top, vec![&(2, 8)]);
}

#[test]
fn horizontal_top_and_bottom_edges() {
    let rings = vec![vec![(1, 1), (5, 1), (5, 4), (1, 4)]];
    assert_matches_reference(&rings, 1, lattice(8, 6));
    let fig = figure_of(&to_float(&rings, 1));
    assert_eq!(scan_points(&fig, lattice(8, 6), Fill::Interior).len(), 20);
}

#[test]
fn vertices_on_lattice_points_are_interior() {
    let l = lattice(10, 10);
    let diamond = figure_of(&[vec![(5.0, 1.0), (9.0, 5.0), (5.0, 9.0), (1.0, 5.0)]]);
    let pts = xy(&scan_points(&diamond, l, Fill::Interior));
    assert_eq!(pts.len(), 41);
    for corner in [(5, 1), (9, 5), (5, 9), (1, 5)] {
        assert!(pts.contains(&corner));
    }
    // Local minimum apex on its own row.
    let vee = figure_of(&[vec![(5.0, 2.0), (8.0, 6.0), (2.0, 6.0)]]);
    let row2: Vec<_> = xy(&scan_points(&vee, l, Fill::Interior))
        .into_iter()
        .filter(|p| p.1 == 2)
        .collect();
    assert_eq!(row2, vec![(5, 2)]);
}

#[test]
fn overlapping_polygons_use_even_odd() {
    let rings = vec![
        vec![(1, 1), (6, 1), (6, 6), (1, 6)],
        vec![(3, 3), (9, 3), (9, 8), (3, 8)],
    ];
    assert_matches_reference(&rings, 1, lattice(10, 10));
    let pts = xy(&scan_points(&figure_of(&to_float(&rings, 1)), lattice(10, 10), Fill::Interior));
    // Strictly inside both squares: even crossings.
    assert!(!pts.contains(&(4, 4)));
    assert!(pts.contains(&(2, 2)) && pts.contains(&(8, 7)));
}

#[test]
fn figure_clipped_by_lattice_edges() {
    let fig = figure_of(&[vec![(-3.0, -3.0), (4.0, -3.0), (4.0, 4.0), (-3.0, 4.0)]]);
    let l = lattice(10, 10);
    let pts = scan_points(&fig, l, Fill::Interior);
    assert_eq!(pts.len(), 25);
    assert_eq!(pts[0], LatticePoint { x: 0, y: 0, offset: 0 });
    assert_eq!(pts.last().map(|p| p.offset), Some(44));
    assert_matches_reference(&[vec![(-3, -3), (4, -3), (4, 4), (-3, 4)]], 1, l);
    assert_matches_reference(&[vec![(-10, 5), (19, 2), (6, 19), (-4, -10)]], 1, l);
}

#[test]
fn half_integer_vertices_match_reference() {
    let l = lattice(12, 9);
    let rings = vec![
        vec![(1, 1), (21, 3), (13, 17), (-5, 11)],
        vec![(7, 5), (9, 13), (15, 6)],
    ];
    assert_matches_reference(&rings, 2, l);
}

#[test]
fn next_is_idempotent_after_exhaustion() {
    let fig = figure_of(&[vec![(1.0, 1.0), (3.0, 1.0), (2.0, 3.0)]]);
    let mut ws = fig.workspace();
    let mut scan = fig.scan(&mut ws, lattice(5, 5), Fill::Interior).unwrap();
    let n = scan.by_ref().count();
    assert!(n > 0);
    assert!(scan.is_done());
    for _ in 0..3 {
        assert_eq!(scan.next(), None);
    }
}

#[test]
fn workspace_is_reusable_across_scans() {
    let fig = figure_of(&[vec![(0.0, 0.0), (6.0, 0.0), (0.0, 6.0)]]);
    let l = lattice(8, 8);
    let mut ws = fig.workspace();
    let first: Vec<_> = fig.scan(&mut ws, l, Fill::Interior).unwrap().collect();
    let second: Vec<_> = fig.scan(&mut ws, l, Fill::Interior).unwrap().collect();
    assert_eq!(first, second);
    let larger = fig.workspace().len() + 4;
    let mut roomy = vec![Edge::default(); larger];
    let third: Vec<_> = fig.scan(&mut roomy, l, Fill::Interior).unwrap().collect();
    assert_eq!(first, third);
}

#[test]
fn scans_run_on_independent_threads() {
    let a = figure_of(&[vec![(1.0, 1.0), (14.0, 2.0), (6.0, 13.0)]]);
    let b = figure_of(&[vec![(0.0, 0.0), (15.0, 0.0), (15.0, 15.0), (0.0, 15.0)]]);
    let l = lattice(16, 16);
    let expected_a = scan_points(&a, l, Fill::Interior).len();
    let (na, nb) = std::thread::scope(|s| {
        let ha = s.spawn(|| scan_points(&a, l, Fill::Interior).len());
        let hb = s.spawn(|| scan_points(&b, l, Fill::Exterior).len());
        (ha.join().unwrap(), hb.join().unwrap())
    });
    assert_eq!(na, expected_a);
    assert_eq!(nb, 0);
}

#[test]
fn large_lattice_uses_coarser_scale() {
    let fig = figure_of(&[vec![(2.0, 2.0), (2.0, 8.0), (8.0, 2.0)]]);
    let l = lattice(1 << 20, 16);
    let mut ws = fig.workspace();
    let scan = fig.scan(&mut ws, l, Fill::Interior).unwrap();
    assert_eq!(scan.scale().bits(), 7);
    assert_eq!(scan.edge_count(), 3);
    assert_eq!(scan.count(), 28);
}

#[test]
fn construction_errors_surface_before_scanning() {
    let mut ws = vec![Edge::default(); 5];
    let l = lattice(10, 10);
    let two = [
        Vertex::new(1.0, 1.0),
        Vertex::new(4.0, 1.0),
        Vertex::closing(2.0, 4.0),
        Vertex::new(6.0, 6.0),
        Vertex::closing(8.0, 8.0),
    ];
    assert!(matches!(
        FigureScan::new(&mut ws, &two, l, Fill::Interior),
        Err(ScanError::TooFewVertices { count: 2 })
    ));
    let edge_x = [Vertex::new(1.0, 1.0), Vertex::new(20.0, 1.0), Vertex::new(2.0, 4.0)];
    assert!(matches!(
        FigureScan::new(&mut ws, &edge_x, l, Fill::Interior),
        Err(ScanError::CoordinateOutOfRange { index: 1, .. })
    ));
    let coarse = ScanCfg {
        max_bits: 12,
        min_scale_bits: 10,
    };
    assert!(matches!(
        FigureScan::with_cfg(&mut ws, &edge_x[..1], l, Fill::Interior, coarse),
        Err(ScanError::ScaleTooCoarse { bits: 8, min: 10 })
    ));
}

#[test]
fn regular_polygons_match_reference() {
    let l = lattice(24, 20);
    for n in 3..10 {
        let pts = regular_polygon(n, Vector2::new(11.0, 9.5), 8.0, 0.3 * n as f32);
        let ring: Vec<(i64, i64)> = pts.iter().map(|p| (p.x.round() as i64, p.y.round() as i64)).collect();
        assert_matches_reference(&[ring], 1, l);
    }
}

#[test]
fn random_star_polygons_match_reference() {
    let l = lattice(20, 20);
    let cfg = RadialCfg {
        radial_jitter: 0.6,
        snap: true,
        ..RadialCfg::default()
    };
    for index in 0..40 {
        let pts = draw_polygon_radial(cfg, ReplayToken { seed: 11, index });
        let ring: Vec<(i64, i64)> = pts.iter().map(|p| (p.x as i64, p.y as i64)).collect();
        assert_matches_reference(&[ring], 1, l);
    }
}

#[test]
fn random_multi_ring_figures_match_reference() {
    let mut rng = StdRng::seed_from_u64(7);
    let l = lattice(13, 11);
    for _ in 0..60 {
        let rings: Vec<Vec<(i64, i64)>> = (0..rng.gen_range(1..4))
            .map(|_| {
                (0..rng.gen_range(3..7))
                    .map(|_| (rng.gen_range(-26..52), rng.gen_range(-22..44)))
                    .collect()
            })
            .collect();
        assert_matches_reference(&rings, 2, l);
    }
}

#[test]
fn rectangle_helper_fills_closed_box() {
    let fig = Figure::new().polygon(rectangle(Vector2::new(2.0, 1.0), Vector2::new(5.0, 3.0)));
    let pts = scan_points(&fig, lattice(7, 5), Fill::Interior);
    assert_eq!(pts.len(), 12);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn triangles_agree_with_reference(
        pts in proptest::collection::vec((-12i64..24, -9i64..18), 3)
    ) {
        let l = lattice(12, 9);
        let rings = vec![pts];
        let fig = figure_of(&to_float(&rings, 1));
        let inside = scan_points(&fig, l, Fill::Interior);
        let outside = scan_points(&fig, l, Fill::Exterior);
        prop_assert_eq!(xy(&inside), reference_points(&rings, 1, l, Fill::Interior));
        prop_assert_eq!(inside.len() + outside.len(), l.cells());
        prop_assert!(xy(&inside).is_disjoint(&xy(&outside)));
    }

    #[test]
    fn rectangles_are_complementary(
        a in 0u32..1000, b in 0u32..1000, c in 0u32..1000, d in 0u32..1000,
        w in 1i32..14, h in 1i32..10,
    ) {
        let l = lattice(w, h);
        // Half-integer coordinates inside [−W, 2W) × [−H, 2H).
        let coord = |v: u32, side: i32| (v % (6 * side as u32)) as f32 / 2.0 - side as f32;
        let (xa, xb) = (coord(a, w).min(coord(b, w)), coord(a, w).max(coord(b, w)));
        let (ya, yb) = (coord(c, h).min(coord(d, h)), coord(c, h).max(coord(d, h)));
        let fig = figure_of(&[vec![(xa, ya), (xb, ya), (xb, yb), (xa, yb)]]);
        let inside = scan_points(&fig, l, Fill::Interior);
        let outside = scan_points(&fig, l, Fill::Exterior);
        for p in inside.iter().chain(outside.iter()) {
            prop_assert_eq!(p.offset, p.y * w as usize + p.x);
        }
        prop_assert!(inside.windows(2).all(|pair| (pair[0].y, pair[0].x) < (pair[1].y, pair[1].x)));
        prop_assert!(outside.windows(2).all(|pair| (pair[0].y, pair[0].x) < (pair[1].y, pair[1].x)));
        let in_box = |p: &LatticePoint| {
            let (x, y) = (p.x as f32, p.y as f32);
            x >= xa && x <= xb && y >= ya && y <= yb
        };
        prop_assert!(inside.iter().all(in_box));
        prop_assert!(outside.iter().all(|p| !in_box(p)));
        let mut all = xy(&inside);
        all.extend(xy(&outside));
        prop_assert_eq!(all.len(), l.cells());
        prop_assert_eq!(inside.len() + outside.len(), l.cells());
    }
}
