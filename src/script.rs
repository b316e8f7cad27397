//! Action scripts
//!
//! A script is a YAML list of [`PencilMsg`] entries. Actions with an
//! argument are one-key maps (`- erase: "sea"`); `sharpen` is a bare string.

use anyhow::{Context, Result};
use std::path::Path;

use crate::messages::PencilMsg;

/// Parse a script from YAML
pub fn parse(content: &str) -> Result<Vec<PencilMsg>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    // serde_yaml reads enums as `!tag` values unless told to accept maps
    let msgs: Vec<PencilMsg> = serde_yaml::with::singleton_map_recursive::deserialize(
        serde_yaml::Deserializer::from_str(content),
    )
    .context("Invalid action script")?;
    Ok(msgs)
}

/// Read and parse a script file
pub fn load(path: &Path) -> Result<Vec<PencilMsg>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let msgs = parse(&content).with_context(|| format!("In script {}", path.display()))?;
    tracing::info!("Loaded {} actions from {}", msgs.len(), path.display());
    Ok(msgs)
}
