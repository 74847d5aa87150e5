use anyhow::{Context, Result};
use polygons::PolygonSequence;
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: the sequence it was computed from and the params.
pub struct Payload {
    pub sequence: String,
    pub params: Value,
}

impl Payload {
    pub fn new(seq: &PolygonSequence, params: Value) -> Self {
        Self {
            sequence: seq.to_string(),
            params,
        }
    }
}

/// Write `<artifact stem>.provenance.json` with git revision, callsite,
/// library version, sequence, params, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = sidecar_path(artifact);
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "lib_version": polygons::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "sequence": payload.sequence,
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("table"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit hash from `GIT_COMMIT` (build time, then runtime) or `git rev-parse`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
