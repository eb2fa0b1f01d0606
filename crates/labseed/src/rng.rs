//! Bounded uniform draws and reproducible RNG construction.
//!
//! Model
//! - All draws consume an RNG handed in by the caller; there is no process-wide
//!   generator. Give each concurrent caller its own instance.
//! - Fixed-precision floats are drawn on the integer grid `k · 10^-precision`
//!   inside the range, so rounding can never leave `[min, max]`.
//! - Record-level determinism uses a replay token `(seed, index)` mixed into a
//!   single `StdRng`, so record `i` can be regenerated without replaying `0..i`.

use crate::error::SampleError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Largest supported number of fractional digits for `uniform_float`.
pub const MAX_PRECISION: u32 = 12;

/// Integers above this magnitude are no longer exact in `f64`.
const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

/// Uniform value in `[min, max]` with at most `precision` fractional digits.
///
/// Errors with `InvalidRange` if `min > max`, a bound is not finite, the
/// precision exceeds `MAX_PRECISION`, or no multiple of `10^-precision` lies in
/// the range.
pub fn uniform_float<R: Rng>(
    rng: &mut R,
    min: f64,
    max: f64,
    precision: u32,
) -> Result<f64, SampleError> {
    if !(min.is_finite() && max.is_finite()) {
        return Err(SampleError::range(format!(
            "bounds must be finite (got {min}, {max})"
        )));
    }
    if min > max {
        return Err(SampleError::range(format!("min {min} > max {max}")));
    }
    if precision > MAX_PRECISION {
        return Err(SampleError::range(format!(
            "precision {precision} exceeds {MAX_PRECISION} digits"
        )));
    }
    let factor = 10f64.powi(precision as i32);
    let lo = snap_to_grid(min * factor).ceil();
    let hi = snap_to_grid(max * factor).floor();
    if lo.abs() > MAX_EXACT || hi.abs() > MAX_EXACT {
        return Err(SampleError::range(format!(
            "[{min}, {max}] is too wide for {precision} fractional digits"
        )));
    }
    if lo > hi {
        return Err(SampleError::range(format!(
            "no value with {precision} fractional digits in [{min}, {max}]"
        )));
    }
    let k = rng.gen_range(lo as i64..=hi as i64);
    // Division can land one ulp outside the bounds.
    Ok((k as f64 / factor).clamp(min, max))
}

/// Round `x` to the nearest integer when it is within a few ulps of it, so a
/// bound like `1.15 * 100.0 == 114.99999999999999` keeps its grid point.
fn snap_to_grid(x: f64) -> f64 {
    let r = x.round();
    if (x - r).abs() <= 4.0 * f64::EPSILON * r.abs().max(1.0) {
        r
    } else {
        x
    }
}

/// Uniform integer in `[min, max]` (inclusive).
pub fn uniform_int<R: Rng>(rng: &mut R, min: i64, max: i64) -> Result<i64, SampleError> {
    if min > max {
        return Err(SampleError::range(format!("min {min} > max {max}")));
    }
    Ok(rng.gen_range(min..=max))
}

/// Random-order subset: shuffle a copy of `items`, keep the first
/// `N ∈ [min, max]` (never more than `items.len()`).
pub fn shuffled_prefix<T: Clone, R: Rng>(
    rng: &mut R,
    items: &[T],
    min: usize,
    max: usize,
) -> Result<Vec<T>, SampleError> {
    if min > max {
        return Err(SampleError::range(format!("count min {min} > max {max}")));
    }
    let mut out = items.to_vec();
    out.shuffle(rng);
    let count = rng.gen_range(min..=max).min(out.len());
    out.truncate(count);
    Ok(out)
}

/// `StdRng` from a fixed seed, or from OS entropy when `seed` is `None`.
pub fn seeded(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Replay token to make per-record draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Independent generator for this `(seed, index)` pair.
    #[inline]
    pub fn rng(self) -> StdRng {
        // SplitMix64 finalizer.
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
