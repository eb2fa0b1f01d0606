use super::*;
use crate::error::SampleError;
use crate::reference::default_region;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn unit_square() -> Region {
    Ring::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).into()
}

fn l_shape() -> Region {
    Ring::from_coords(&[
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 1.0),
        (1.0, 1.0),
        (1.0, 4.0),
        (0.0, 4.0),
    ])
    .into()
}

fn regular_ngon(n: usize, center: Point, r: f64, phase: f64) -> Ring {
    let verts = (0..n)
        .map(|k| {
            let th = phase + (k as f64) * std::f64::consts::TAU / (n as f64);
            center + polar(r, th)
        })
        .collect();
    Ring::new(verts)
}

fn polar(r: f64, th: f64) -> Point {
    point(r * th.cos(), r * th.sin())
}

#[test]
fn unit_square_interior_exterior() {
    let sq = unit_square();
    assert!(contains(point(0.5, 0.5), &sq));
    assert!(contains(point(0.01, 0.99), &sq));
    assert!(!contains(point(1.5, 0.5), &sq));
    assert!(!contains(point(-0.5, 0.5), &sq));
    assert!(!contains(point(100.0, -100.0), &sq));
}

#[test]
fn boundary_points_are_inside() {
    let sq = unit_square();
    for p in [
        point(0.0, 0.0),
        point(1.0, 1.0),
        point(0.5, 0.0),
        point(1.0, 0.25),
        point(0.0, 0.75),
        point(0.3, 1.0),
    ] {
        assert!(contains(p, &sq), "boundary point {p:?} must be inside");
    }
    // Just off the boundary is outside.
    assert!(!contains(point(1.0 + 1e-9, 0.5), &sq));
}

#[test]
fn horizontal_edge_on_ray_not_double_counted() {
    let l = l_shape();
    // Ray along y=1 runs over the horizontal edge (4,1)-(1,1).
    assert!(contains(point(0.5, 1.0), &l));
    assert!(contains(point(0.5, 3.0), &l));
    assert!(contains(point(3.0, 0.5), &l));
    assert!(!contains(point(2.0, 2.0), &l));
    assert!(!contains(point(-1.0, 1.0), &l));
}

#[test]
fn ray_through_vertex_counted_once() {
    let diamond: Region =
        Ring::from_coords(&[(0.0, -1.0), (1.0, 0.0), (0.0, 1.0), (-1.0, 0.0)]).into();
    assert!(contains(point(-0.5, 0.0), &diamond));
    assert!(!contains(point(-2.0, 0.0), &diamond));
    assert!(!contains(point(0.9, 0.9), &diamond));
}

#[test]
fn explicitly_closed_ring_matches_implicit() {
    let open = unit_square();
    let closed: Region = Ring::from_coords(&[
        (0.0, 0.0),
        (0.0, 1.0),
        (1.0, 1.0),
        (1.0, 0.0),
        (0.0, 0.0),
    ])
    .into();
    for p in [point(0.5, 0.5), point(2.0, 0.5), point(0.0, 0.0), point(0.5, -0.1)] {
        assert_eq!(contains(p, &open), contains(p, &closed));
    }
}

#[test]
fn degenerate_ring_contains_nothing() {
    let seg: Region = Ring::from_coords(&[(0.0, 0.0), (1.0, 1.0)]).into();
    assert!(!contains(point(0.5, 0.5), &seg));
    assert!(!contains(point(0.0, 0.0), &Region::default()));
}

#[test]
fn holes_exclude_interior_keep_boundary() {
    let outer = Ring::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let hole = Ring::from_coords(&[(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)]);
    let donut: Region = Polygon::new(outer).with_hole(hole).into();
    assert!(contains(point(1.0, 1.0), &donut));
    assert!(!contains(point(5.0, 5.0), &donut));
    assert!(contains(point(4.0, 5.0), &donut));
    assert!(contains(point(0.0, 5.0), &donut));
    assert!(!contains(point(11.0, 5.0), &donut));
    assert!((donut.area() - 96.0).abs() < 1e-12);
}

#[test]
fn multi_polygon_first_match() {
    let a = Polygon::new(Ring::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]));
    let b = Polygon::new(Ring::from_coords(&[(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 6.0)]));
    let region = Region::new(vec![a, b]);
    assert!(contains(point(0.5, 0.5), &region));
    assert!(contains(point(5.5, 5.5), &region));
    assert!(!contains(point(3.0, 3.0), &region));
    let bbox = BoundingBox::of(&region).unwrap();
    assert_eq!(bbox, BoundingBox::new(0.0, 6.0, 0.0, 6.0));
}

#[test]
fn unit_square_sampling_scenario() {
    let sq = unit_square();
    let bbox = BoundingBox::from_corners(point(-1.0, -1.0), point(2.0, 2.0));
    assert!((bbox.expected_attempts(&sq) - 9.0).abs() < 1e-12);
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..200 {
        let p = sample_inside(&mut rng, &sq, &bbox, SampleCfg::default()).unwrap();
        assert!((0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y));
        let scaled = p * 1e6;
        assert!((scaled.x - scaled.x.round()).abs() < 1e-6);
    }
}

#[test]
fn thousand_samples_all_contained() {
    let region = default_region();
    let bbox = region.bounding_box().unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let p = sample_inside(&mut rng, &region, &bbox, SampleCfg::default()).unwrap();
        assert!(contains(p, &region));
    }
    let l = l_shape();
    for _ in 0..1000 {
        let p = sample_in_region(&mut rng, &l, SampleCfg::default()).unwrap();
        assert!(contains(p, &l));
    }
}

#[test]
fn disjoint_box_exhausts() {
    let sq = unit_square();
    let far = BoundingBox::new(5.0, 6.0, 5.0, 6.0);
    let cfg = SampleCfg {
        precision: 4,
        max_attempts: Some(50),
    };
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        sample_inside(&mut rng, &sq, &far, cfg),
        Err(SampleError::SamplingExhausted { attempts: 50 })
    );
}

#[test]
fn invalid_box_fails_fast() {
    let sq = unit_square();
    let inverted = BoundingBox::new(2.0, -1.0, -1.0, 2.0);
    let mut rng = StdRng::seed_from_u64(1);
    assert!(matches!(
        sample_inside(&mut rng, &sq, &inverted, SampleCfg::default()),
        Err(SampleError::InvalidRange { .. })
    ));
    assert!(matches!(
        sample_in_region(&mut rng, &Region::default(), SampleCfg::default()),
        Err(SampleError::InvalidRange { .. })
    ));
}

#[test]
fn same_seed_same_point() {
    let l = l_shape();
    let cfg = SampleCfg::default();
    let a = sample_in_region(&mut StdRng::seed_from_u64(99), &l, cfg).unwrap();
    let b = sample_in_region(&mut StdRng::seed_from_u64(99), &l, cfg).unwrap();
    assert_eq!(a, b);
}

#[test]
fn region_json_shape() {
    let json = r#"{"polygons":[{"outer":[[0,0],[0,1],[1,1],[1,0]]}]}"#;
    let region: Region = serde_json::from_str(json).unwrap();
    assert_eq!(region, unit_square());
    let back = serde_json::to_string(&region).unwrap();
    assert_eq!(back, r#"{"polygons":[{"outer":[[0.0,0.0],[0.0,1.0],[1.0,1.0],[1.0,0.0]]}]}"#);
}

proptest! {
    #[test]
    fn interior_points_of_regular_polygons(
        n in 3usize..12,
        cx in -50.0f64..50.0,
        cy in -50.0f64..50.0,
        r in 0.5f64..20.0,
        phase in 0.0f64..std::f64::consts::TAU,
        rho_frac in 0.0f64..0.95,
        theta in 0.0f64..std::f64::consts::TAU,
    ) {
        let c = point(cx, cy);
        let region: Region = regular_ngon(n, c, r, phase).into();
        let inradius = r * (std::f64::consts::PI / n as f64).cos();
        let inside = c + polar(rho_frac * inradius, theta);
        prop_assert!(contains(inside, &region));
        let outside = c + polar(r * 1.5 + 10.0, theta);
        prop_assert!(!contains(outside, &region));
    }

    #[test]
    fn sampled_points_always_contained(seed in any::<u64>(), n in 3usize..9) {
        let region: Region = regular_ngon(n, point(77.0, 22.0), 3.0, 0.3).into();
        let mut rng = StdRng::seed_from_u64(seed);
        let p = sample_in_region(&mut rng, &region, SampleCfg::default()).unwrap();
        prop_assert!(contains(p, &region));
    }
}
