//! Geofencing: containment of points in multi-polygon regions and
//! rejection sampling of coordinates inside them.
//!
//! Purpose
//! - Produce plausible coordinates confined to an irregular service region
//!   instead of anywhere on the globe.
//! - Keep the containment rule explicit (closed region, half-open ray test)
//!   so every caller sees the same answer for boundary points.
//!
//! Code cross-refs: `Region`, `contains`, `sample_inside`, `SampleCfg`

mod contains;
mod sample;
mod types;

pub use contains::{contains, polygon_contains, BOUNDARY_EPS};
pub use sample::{sample_in_region, sample_inside, SampleCfg};
pub use types::{point, BoundingBox, Point, Polygon, Region, Ring};

#[cfg(test)]
mod tests;
