//! Constrained random sampling for synthetic lab/patient fixtures.
//!
//! Every sampler takes the RNG it draws from; nothing here owns global
//! randomness, performs I/O, or logs. Callers decide how results are stored.
//!
//! Modules
//! - `rng`: bounded uniform draws and reproducible RNG construction.
//! - `geo`: ray-casting containment and geofenced coordinate sampling.
//! - `catalog`: unique subsets and single picks from a category → items catalog.
//! - `schedule`: shuffled, truncated, decorated time-slot schedules.
//! - `fixtures`: small record-level helpers (phones, image URLs, names, dates).
//! - `reference`: built-in catalog, canonical slots and default region.

pub mod catalog;
pub mod error;
pub mod fixtures;
pub mod geo;
pub mod reference;
pub mod rng;
pub mod schedule;

pub use error::SampleError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::catalog::{checked_limit, sample_pair, sample_unique, Catalog, CatalogPick};
    pub use crate::error::SampleError;
    pub use crate::geo::{
        contains, sample_inside, BoundingBox, Point, Polygon, Region, Ring, SampleCfg,
    };
    pub use crate::rng::{seeded, uniform_float, uniform_int, ReplayToken};
    pub use crate::schedule::{
        sample_schedule, sample_schedule_at, DecoratedSlot, ScheduleSlot, Session,
    };
}
