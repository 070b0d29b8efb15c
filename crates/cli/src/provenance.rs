use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Write `<dataset>.provenance.json` with the git commit, generator params and output path.
pub fn write_sidecar<P: AsRef<Path>>(dataset: P, params: Value) -> Result<PathBuf> {
    let dataset = dataset.as_ref();
    let provenance_path = provenance_path(dataset);
    let doc = json!({
        "code_rev": current_git_rev(),
        "tool_version": geoviz::VERSION,
        "params": params,
        "outputs": [dataset.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(dataset: &Path) -> PathBuf {
    let stem = dataset
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("dataset"));
    let mut name = stem;
    name.push(".provenance.json");
    dataset.with_file_name(name)
}

fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
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
