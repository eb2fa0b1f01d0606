//! Geofenced coordinate sampling by rejection.
//!
//! Draw longitude and latitude independently over a bounding box at a fixed
//! precision, keep the first candidate the containment test accepts. The
//! returned point is exactly the tested (already rounded) candidate.

use super::contains::contains;
use super::types::{BoundingBox, Point, Region};
use crate::error::SampleError;
use crate::rng::uniform_float;
use nalgebra::Vector2;
use rand::Rng;

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleCfg {
    /// Fractional digits kept on both coordinates.
    pub precision: u32,
    /// Rejected draws tolerated before `SamplingExhausted`. `None` retries forever.
    pub max_attempts: Option<u64>,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            precision: 6,
            max_attempts: Some(100_000),
        }
    }
}

/// Rejection-sample a point of `region` from `bbox`.
///
/// With `max_attempts = None` a box disjoint from the region never returns.
pub fn sample_inside<R: Rng>(
    rng: &mut R,
    region: &Region,
    bbox: &BoundingBox,
    cfg: SampleCfg,
) -> Result<Point, SampleError> {
    if !bbox.is_valid() {
        return Err(SampleError::range(format!("bounding box {bbox:?}")));
    }
    let mut attempts: u64 = 0;
    loop {
        if cfg.max_attempts.is_some_and(|cap| attempts >= cap) {
            return Err(SampleError::SamplingExhausted { attempts });
        }
        let lon = uniform_float(rng, bbox.min_lon, bbox.max_lon, cfg.precision)?;
        let lat = uniform_float(rng, bbox.min_lat, bbox.max_lat, cfg.precision)?;
        attempts += 1;
        let p = Vector2::new(lon, lat);
        if contains(p, region) {
            return Ok(p);
        }
    }
}

/// [`sample_inside`] over the region's own tight bounding box.
pub fn sample_in_region<R: Rng>(
    rng: &mut R,
    region: &Region,
    cfg: SampleCfg,
) -> Result<Point, SampleError> {
    let bbox = region
        .bounding_box()
        .ok_or_else(|| SampleError::range("region has no vertices"))?;
    sample_inside(rng, region, &bbox, cfg)
}
