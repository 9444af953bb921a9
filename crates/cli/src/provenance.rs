use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::export::sibling_path;

/// What produced an artifact: the command name and its parameters.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self { command, params }
    }
}

/// Write `<artifact>.provenance.json` with the git commit, generator version,
/// callsite, params and every output written alongside the artifact.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(
    artifact: P,
    outputs: &[PathBuf],
    payload: Payload,
) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "generator": format!("discocube {}", discocube::VERSION),
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "command": payload.command,
        "params": payload.params,
        "outputs": outputs.iter().map(|p| p.to_string_lossy()).collect::<Vec<_>>()
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    sibling_path(artifact, "provenance", "json")
}

/// Commit the generator was built from: `GIT_COMMIT` at build time, then at
/// run time, then `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    let from_env = [
        option_env!("GIT_COMMIT").map(str::to_string),
        std::env::var("GIT_COMMIT").ok(),
    ];
    from_env
        .into_iter()
        .flatten()
        .find(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_string()).filter(|rev| !rev.is_empty())
}
