use crate::filters::FilterKind;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config for the `pixel-filter` tool: one input, one filter, one output.
#[derive(Debug, Deserialize)]
pub struct FilterToolConfig {
    pub input: PathBuf,
    pub filter: FilterKind,
    pub output: PathBuf,
}

pub fn load_config(path: &Path) -> Result<FilterToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
