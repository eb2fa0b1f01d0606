//! Show how the bounding box drives rejection-sampling cost.
//!
//! Usage:
//!   cargo run -p labseed --example acceptance_rate
//!
//! For the default region, samples 1000 points from the tight box and from
//! boxes padded by 5 and 20 degrees, and prints expected vs. observed draws.

use labseed::geo::{contains, sample_inside, BoundingBox, SampleCfg};
use labseed::reference::default_region;
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    let region = default_region();
    let tight = region.bounding_box().expect("default region has vertices");
    for pad in [0.0, 5.0, 20.0] {
        let bbox = BoundingBox::new(
            tight.min_lon - pad,
            tight.max_lon + pad,
            tight.min_lat - pad,
            tight.max_lat + pad,
        );
        let mut rng = StdRng::seed_from_u64(2025);
        let cfg = SampleCfg {
            precision: 4,
            max_attempts: Some(1),
        };
        let mut draws = 0u64;
        let mut accepted = 0u64;
        while accepted < 1000 {
            draws += 1;
            if let Ok(p) = sample_inside(&mut rng, &region, &bbox, cfg) {
                debug_assert!(contains(p, &region));
                accepted += 1;
            }
        }
        println!(
            "pad {pad:>4}: expected {:.2} draws/point, observed {:.2}",
            bbox.expected_attempts(&region),
            draws as f64 / accepted as f64
        );
    }
}
