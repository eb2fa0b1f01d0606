use anyhow::{bail, Context, Result};
use labseed::catalog::Catalog;
use labseed::geo::{BoundingBox, Region};
use labseed::reference::{canonical_slots, default_region, test_catalog};
use labseed::schedule::ScheduleSlot;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read-only inputs for a seeding run: service region, test catalog, slots.
#[derive(Clone, Debug)]
pub struct ReferenceData {
    pub region: Region,
    pub bbox: BoundingBox,
    pub catalog: Catalog,
    pub slots: Vec<ScheduleSlot>,
}

impl ReferenceData {
    /// Load each input from its JSON file, falling back to the built-ins.
    pub fn load(
        region: Option<&Path>,
        catalog: Option<&Path>,
        slots: Option<&Path>,
    ) -> Result<Self> {
        let region = match region {
            Some(p) => read_json::<Region>(p)?,
            None => default_region(),
        };
        let catalog = match catalog {
            Some(p) => read_json::<Catalog>(p)?,
            None => test_catalog(),
        };
        let slots = match slots {
            Some(p) => read_json::<Vec<ScheduleSlot>>(p)?,
            None => canonical_slots(),
        };
        Self::new(region, catalog, slots)
    }

    pub fn new(region: Region, catalog: Catalog, slots: Vec<ScheduleSlot>) -> Result<Self> {
        let Some(bbox) = region.bounding_box() else {
            bail!("region has no vertices");
        };
        if region.area() <= 0.0 {
            bail!("region encloses no area");
        }
        if catalog.is_empty() {
            bail!("catalog has no tests");
        }
        Ok(Self {
            region,
            bbox,
            catalog,
            slots,
        })
    }

    /// Expected rejection-sampling draws per coordinate.
    pub fn expected_attempts(&self) -> f64 {
        self.bbox.expected_attempts(&self.region)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}
