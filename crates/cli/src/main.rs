mod config;
mod provenance;
mod records;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use config::ReferenceData;
use labseed::catalog::checked_limit;
use labseed::geo::SampleCfg;
use records::Generator;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

/// Expected draws per point above which the region/box pair is worth a warning.
const SLOW_SAMPLING_ATTEMPTS: f64 = 50.0;

#[derive(Parser)]
#[command(name = "labseed")]
#[command(about = "Synthetic lab and patient fixture generator")]
struct Cmd {
    /// Service region boundary (JSON); defaults to the built-in outline
    #[arg(long, global = true)]
    region: Option<PathBuf>,
    /// Test catalog (JSON object of category -> tests)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Canonical time slots (JSON array)
    #[arg(long, global = true)]
    slots: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate labs and patients and write them as JSON
    Seed(SeedArgs),
    /// Print a provenance block and reference data summary
    Report,
}

#[derive(Args)]
struct SeedArgs {
    /// Positional counts: [LABS] [PATIENTS]; override the flags
    #[arg(num_args = 0..=2, value_name = "COUNT", allow_negative_numbers = true)]
    counts: Vec<i64>,
    #[arg(short = 'l', long, allow_negative_numbers = true)]
    labs: Option<i64>,
    #[arg(short = 'p', long, allow_negative_numbers = true)]
    patients: Option<i64>,
    /// RNG seed; drawn from OS entropy and recorded when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Fractional digits kept on coordinates
    #[arg(long, default_value_t = 6)]
    precision: u32,
    /// Rejected draws per coordinate before giving up (0 = retry forever)
    #[arg(long, default_value_t = 100_000)]
    max_attempts: u64,
    /// Distinct catalog tests offered per lab
    #[arg(long, default_value_t = 11, allow_negative_numbers = true)]
    tests_per_lab: i64,
    /// Output file; stdout when omitted
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Final record counts after applying the argument rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
struct Counts {
    labs: usize,
    patients: usize,
}

/// Positional values win over flags. `-l` without `-p` means no patients;
/// positional counts never trigger that rule. Negative counts clamp to zero.
fn resolve_counts(positional: &[i64], labs: Option<i64>, patients: Option<i64>) -> Counts {
    let labs_given = labs.is_some();
    let patients_given = patients.is_some();
    let labs = positional.first().copied().or(labs).unwrap_or(1);
    let default_patients = if labs_given && !patients_given { 0 } else { 1 };
    let patients = positional
        .get(1)
        .copied()
        .or(patients)
        .unwrap_or(default_patients);
    Counts {
        labs: labs.max(0) as usize,
        patients: patients.max(0) as usize,
    }
}

/// Run parameters recorded in the provenance sidecar.
#[derive(Debug, Serialize)]
struct SeedParams {
    #[serde(flatten)]
    counts: Counts,
    precision: u32,
    max_attempts: Option<u64>,
    tests_per_lab: usize,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let refs = ReferenceData::load(
        cmd.region.as_deref(),
        cmd.catalog.as_deref(),
        cmd.slots.as_deref(),
    )?;
    match cmd.action {
        Action::Seed(args) => seed(&refs, args),
        Action::Report => report(&refs),
    }
}

fn seed(refs: &ReferenceData, args: SeedArgs) -> Result<()> {
    let counts = resolve_counts(&args.counts, args.labs, args.patients);
    let tests_per_lab = checked_limit(args.tests_per_lab).context("--tests-per-lab")?;
    let seed = args.seed.unwrap_or_else(rand::random);
    let geo = SampleCfg {
        precision: args.precision,
        max_attempts: (args.max_attempts > 0).then_some(args.max_attempts),
    };
    let expected = refs.expected_attempts();
    if expected > SLOW_SAMPLING_ATTEMPTS {
        tracing::warn!(expected, "region covers little of its bounding box");
    }
    tracing::info!(
        labs = counts.labs,
        patients = counts.patients,
        seed,
        "starting seeding"
    );

    let generator = Generator {
        refs,
        geo,
        tests_per_lab,
        seed,
        now: chrono::Utc::now(),
    };
    let output = generator
        .run(counts.labs, counts.patients)
        .context("seeding failed")?;
    let body = serde_json::to_vec_pretty(&output)?;

    match &args.out {
        Some(out) => {
            write_output(out, &body)?;
            let params = SeedParams {
                counts,
                precision: geo.precision,
                max_attempts: geo.max_attempts,
                tests_per_lab,
            };
            let prov = provenance::write_sidecar(out, seed, &params)?;
            tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote fixtures");
        }
        None => println!("{}", String::from_utf8_lossy(&body)),
    }
    tracing::info!(
        labs = output.labs.len(),
        patients = output.patients.len(),
        "seeding completed"
    );
    Ok(())
}

fn write_output(out: &Path, body: &[u8]) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, body).with_context(|| format!("writing {}", out.display()))
}

fn report(refs: &ReferenceData) -> Result<()> {
    let obj = serde_json::json!({
        "build": provenance::BuildInfo::current(),
        "reference": {
            "categories": refs.catalog.categories().len(),
            "tests": refs.catalog.flatten().len(),
            "slots": refs.slots.len(),
            "region_polygons": refs.region.polygons.len(),
            "region_area": refs.region.area(),
            "bounding_box": refs.bbox,
            "expected_attempts": refs.expected_attempts(),
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
