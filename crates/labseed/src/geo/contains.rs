//! Ray-casting point-in-region test.
//!
//! Conventions
//! - Closed region: points on any boundary edge (outer or hole) are inside.
//! - The ray points towards +x. Each edge uses the half-open test
//!   `(a.y > p.y) != (b.y > p.y)`, so a vertex shared by two edges is counted
//!   once and horizontal edges never register a crossing.
//! - Polygons are tried in order; the first whose outer ring holds the point
//!   and whose holes do not strictly hold it accepts.

use super::types::{Point, Polygon, Region, Ring};

/// Relative tolerance for the on-boundary check (distance / edge length).
pub const BOUNDARY_EPS: f64 = 1e-12;

/// `true` if `p` lies in `region` (boundary included).
pub fn contains(p: Point, region: &Region) -> bool {
    region.polygons.iter().any(|poly| polygon_contains(p, poly))
}

/// Single-polygon variant of [`contains`].
pub fn polygon_contains(p: Point, poly: &Polygon) -> bool {
    if poly.outer.is_degenerate() {
        return false;
    }
    if !(on_boundary(p, &poly.outer) || odd_crossings(p, &poly.outer)) {
        return false;
    }
    for hole in poly.holes.iter().filter(|h| !h.is_degenerate()) {
        if on_boundary(p, hole) {
            return true;
        }
        if odd_crossings(p, hole) {
            return false;
        }
    }
    true
}

fn odd_crossings(p: Point, ring: &Ring) -> bool {
    let mut inside = false;
    for (a, b) in ring.edges() {
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

fn on_boundary(p: Point, ring: &Ring) -> bool {
    ring.edges().any(|(a, b)| on_segment(p, a, b))
}

fn on_segment(p: Point, a: Point, b: Point) -> bool {
    let ab = b - a;
    let ap = p - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return p == a;
    }
    let cross = ab.x * ap.y - ab.y * ap.x;
    if cross.abs() > BOUNDARY_EPS * len2 {
        return false;
    }
    let t = ap.dot(&ab) / len2;
    (-BOUNDARY_EPS..=1.0 + BOUNDARY_EPS).contains(&t)
}
