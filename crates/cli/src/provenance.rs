//! `<stem>.provenance.json` sidecars describing how a fixture file was made.

use anyhow::{Context, Result};
use serde::Serialize;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Build identity shared by sidecars and the `report` command.
#[derive(Clone, Debug, Serialize)]
pub struct BuildInfo {
    pub code_rev: String,
    pub version: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            code_rev: current_git_rev(),
            version: labseed::VERSION,
        }
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a, P> {
    #[serde(flatten)]
    build: BuildInfo,
    callsite: Callsite,
    seed: u64,
    params: &'a P,
    outputs: Vec<String>,
}

/// Write the sidecar for `fixtures` and return its path.
#[track_caller]
pub fn write_sidecar<P: Serialize>(fixtures: &Path, seed: u64, params: &P) -> Result<PathBuf> {
    let caller = Location::caller();
    let sidecar = Sidecar {
        build: BuildInfo::current(),
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        seed,
        params,
        outputs: vec![fixtures.display().to_string()],
    };
    let path = sidecar_path(fixtures);
    let body = serde_json::to_vec_pretty(&sidecar)?;
    std::fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `out/fixtures.json` -> `out/fixtures.provenance.json`.
fn sidecar_path(fixtures: &Path) -> PathBuf {
    let stem = fixtures
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "fixtures".to_string());
    fixtures.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .filter(|rev| !rev.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|rev| !rev.is_empty()));
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|rev| rev.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
