//! In-memory lab and patient records assembled from the core samplers.
//!
//! Each record draws from its own RNG derived from `(seed, index)`; labs use
//! even indices and patients odd ones, so any record can be regenerated
//! without the others and counts can change without reshuffling earlier rows.

use crate::config::ReferenceData;
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use labseed::catalog::{sample_pair, sample_unique, CatalogPick};
use labseed::fixtures;
use labseed::geo::{sample_inside, SampleCfg};
use labseed::rng::{uniform_float, uniform_int, ReplayToken};
use labseed::schedule::{sample_schedule_at, DecoratedSlot};
use rand::Rng;
use serde::Serialize;

const EXPERIENCE_YEARS: (i64, i64) = (1, 20);
const RATING: (f64, f64) = (1.0, 5.0);
const SLOTS_PER_LAB: (usize, usize) = (3, 9);
const CERTIFICATE_LEN: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Lab,
    Patient,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lab {
    pub lab_location: String,
    pub nabl_certificate_number: String,
    pub certificate_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabDetails {
    pub lab_name: String,
    pub collection_types: Vec<String>,
    pub experience_years: i64,
    pub image_url: String,
    pub is_loved: bool,
    pub latitude: f64,
    pub longitude: f64,
    pub next_available: DateTime<Utc>,
    pub is_available: bool,
    pub rating: f64,
    pub test_type: String,
    pub offered_tests: Vec<CatalogPick>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabSeed {
    pub index: u64,
    pub user: User,
    pub lab: Lab,
    pub lab_details: LabDetails,
    pub time_slots: Vec<DecoratedSlot>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub address: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSeed {
    pub index: u64,
    pub user: User,
    pub patient: Patient,
}

/// Everything one run produces, ready to hand to storage.
#[derive(Clone, Debug, Serialize)]
pub struct SeedOutput {
    pub seed: u64,
    pub labs: Vec<LabSeed>,
    pub patients: Vec<PatientSeed>,
}

/// Record factory for one run.
pub struct Generator<'a> {
    pub refs: &'a ReferenceData,
    pub geo: SampleCfg,
    pub tests_per_lab: usize,
    pub seed: u64,
    pub now: DateTime<Utc>,
}

impl Generator<'_> {
    pub fn run(&self, labs: usize, patients: usize) -> Result<SeedOutput> {
        let labs = (0..labs as u64)
            .map(|i| self.lab(i))
            .collect::<Result<Vec<_>>>()?;
        let patients = (0..patients as u64)
            .map(|i| self.patient(i))
            .collect::<Result<Vec<_>>>()?;
        Ok(SeedOutput {
            seed: self.seed,
            labs,
            patients,
        })
    }

    pub fn lab(&self, index: u64) -> Result<LabSeed> {
        let mut rng = ReplayToken::new(self.seed, 2 * index).rng();
        let user = self.user(&mut rng, Role::Lab);
        let lab = Lab {
            lab_location: fixtures::street_address(&mut rng),
            nabl_certificate_number: fixtures::alphanumeric(&mut rng, CERTIFICATE_LEN),
            certificate_url: fixtures::url(&mut rng),
            created_at: self.now,
            updated_at: self.now,
        };

        let test = sample_pair(&mut rng, &self.refs.catalog)?;
        let lab_name = fixtures::capitalize(&fixtures::lab_name(&mut rng));
        let location = sample_inside(&mut rng, &self.refs.region, &self.refs.bbox, self.geo)
            .with_context(|| format!("placing lab {index}"))?;
        let lab_details = LabDetails {
            image_url: fixtures::lab_image_url(&lab_name),
            lab_name,
            collection_types: fixtures::collection_types(&mut rng)
                .into_iter()
                .map(String::from)
                .collect(),
            experience_years: uniform_int(&mut rng, EXPERIENCE_YEARS.0, EXPERIENCE_YEARS.1)?,
            is_loved: rng.gen_bool(0.5),
            latitude: location.y,
            longitude: location.x,
            next_available: fixtures::soon(&mut rng, self.now, 1),
            is_available: rng.gen_bool(0.5),
            rating: uniform_float(&mut rng, RATING.0, RATING.1, 1)?,
            test_type: test.to_string(),
            offered_tests: sample_unique(&mut rng, &self.refs.catalog, self.tests_per_lab),
        };

        let time_slots = sample_schedule_at(
            &mut rng,
            &self.refs.slots,
            SLOTS_PER_LAB.0,
            SLOTS_PER_LAB.1,
            self.now,
        )?;
        tracing::debug!(index, lab = %lab_details.lab_name, slots = time_slots.len(), "lab");
        Ok(LabSeed {
            index,
            user,
            lab,
            lab_details,
            time_slots,
        })
    }

    pub fn patient(&self, index: u64) -> Result<PatientSeed> {
        let mut rng = ReplayToken::new(self.seed, 2 * index + 1).rng();
        let user = self.user(&mut rng, Role::Patient);
        let location = sample_inside(&mut rng, &self.refs.region, &self.refs.bbox, self.geo)
            .with_context(|| format!("placing patient {index}"))?;
        let patient = Patient {
            address: fixtures::street_address(&mut rng),
            date_of_birth: fixtures::birthdate(&mut rng, self.now.date_naive()),
            gender: fixtures::gender(&mut rng).to_string(),
            latitude: location.y,
            longitude: location.x,
            created_at: self.now,
            updated_at: self.now,
        };
        tracing::debug!(index, "patient");
        Ok(PatientSeed {
            index,
            user,
            patient,
        })
    }

    fn user<R: Rng>(&self, rng: &mut R, role: Role) -> User {
        let (first_name, last_name) = fixtures::person_name(rng);
        User {
            email: fixtures::email(rng, &first_name, &last_name),
            phone: fixtures::phone_number(rng),
            first_name,
            last_name,
            role,
            created_at: self.now,
            updated_at: self.now,
        }
    }
}
