use anyhow::Result;
use std::path::PathBuf;

/// Expands `~` and environment variables in a configured catalog location.
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(path)
        .map_err(|e| anyhow::anyhow!("Failed to expand catalog path '{}': {}", path, e))?;
    Ok(PathBuf::from(expanded.as_ref()))
}
