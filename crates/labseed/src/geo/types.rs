//! Region types: rings, polygons with holes, multi-polygon regions, boxes.
//!
//! - `Point`: `Vector2<f64>` with `x = longitude`, `y = latitude`.
//! - `Ring`: ordered vertices, closed implicitly (a repeated first vertex is harmless).
//! - `Polygon`: outer ring plus optional holes.
//! - `Region`: ordered list of polygons, tested in first-match order.
//! - `BoundingBox`: axis-aligned sampling window; validity is a caller contract.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Geographic point; `x` is longitude, `y` is latitude.
pub type Point = Vector2<f64>;

/// Shorthand for `Point::new(lon, lat)`.
#[inline]
pub fn point(lon: f64, lat: f64) -> Point {
    Vector2::new(lon, lat)
}

/// Closed ring of vertices. Serialized as `[[lon, lat], ...]`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>")]
pub struct Ring {
    pub vertices: Vec<Point>,
}

impl Ring {
    #[inline]
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self::new(coords.iter().map(|&(lon, lat)| point(lon, lat)).collect())
    }

    /// Fewer than three vertices enclose nothing.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Edges `(v[i], v[i+1])`, including the implicit closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Unsigned shoelace area (planar, in squared degrees).
    pub fn area(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let twice: f64 = self.edges().map(|(p, q)| p.x * q.y - q.x * p.y).sum();
        0.5 * twice.abs()
    }
}

impl From<Vec<[f64; 2]>> for Ring {
    fn from(coords: Vec<[f64; 2]>) -> Self {
        Self::new(coords.into_iter().map(|[lon, lat]| point(lon, lat)).collect())
    }
}

impl From<Ring> for Vec<[f64; 2]> {
    fn from(ring: Ring) -> Self {
        ring.vertices.into_iter().map(|p| [p.x, p.y]).collect()
    }
}

/// Outer ring with optional holes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub outer: Ring,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub holes: Vec<Ring>,
}

impl Polygon {
    pub fn new(outer: Ring) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    pub fn with_hole(mut self, hole: Ring) -> Self {
        self.holes.push(hole);
        self
    }

    /// Outer area minus hole areas (holes assumed nested and disjoint).
    pub fn area(&self) -> f64 {
        let holes: f64 = self.holes.iter().map(Ring::area).sum();
        (self.outer.area() - holes).max(0.0)
    }
}

/// Multi-polygon region; immutable reference data once loaded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub polygons: Vec<Polygon>,
}

impl Region {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn area(&self) -> f64 {
        self.polygons.iter().map(Polygon::area).sum()
    }

    /// Tight box around all outer rings; `None` without vertices.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::of(self)
    }
}

impl From<Polygon> for Region {
    fn from(polygon: Polygon) -> Self {
        Self::new(vec![polygon])
    }
}

impl From<Ring> for Region {
    fn from(ring: Ring) -> Self {
        Polygon::new(ring).into()
    }
}

/// Axis-aligned sampling window.
///
/// Callers must keep `min <= max` on both axes and overlap the sampled region
/// with non-trivial area; rejection sampling cost is `area(box) / area(region)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn new(min_lon: f64, max_lon: f64, min_lat: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            max_lon,
            min_lat,
            max_lat,
        }
    }

    /// Box spanned by a lower-left and an upper-right corner (not reordered).
    pub fn from_corners(lower_left: Point, upper_right: Point) -> Self {
        Self::new(lower_left.x, upper_right.x, lower_left.y, upper_right.y)
    }

    /// Tight box around every outer ring vertex of `region`.
    pub fn of(region: &Region) -> Option<Self> {
        let mut pts = region
            .polygons
            .iter()
            .flat_map(|p| p.outer.vertices.iter());
        let first = pts.next()?;
        let mut b = Self::new(first.x, first.x, first.y, first.y);
        for p in pts {
            b.min_lon = b.min_lon.min(p.x);
            b.max_lon = b.max_lon.max(p.x);
            b.min_lat = b.min_lat.min(p.y);
            b.max_lat = b.max_lat.max(p.y);
        }
        Some(b)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        [self.min_lon, self.max_lon, self.min_lat, self.max_lat]
            .iter()
            .all(|v| v.is_finite())
            && self.min_lon <= self.max_lon
            && self.min_lat <= self.max_lat
    }

    pub fn area(&self) -> f64 {
        (self.max_lon - self.min_lon) * (self.max_lat - self.min_lat)
    }

    /// Expected draws per accepted point, `area(box) / area(region)`.
    /// Infinite when the region has no area.
    pub fn expected_attempts(&self, region: &Region) -> f64 {
        let a = region.area();
        if a <= 0.0 {
            f64::INFINITY
        } else {
            self.area() / a
        }
    }
}
