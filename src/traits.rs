use std::io::Read;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Model artifacts are produced by the offline training pipeline and
/// are read-only at runtime, so unlike a regular storage there is no
/// save counterpart.
pub trait LoadArtifact
where
    Self: DeserializeOwned,
{
    fn load(path: &str) -> Result<Self> {
        let mut json: String = String::new();
        let mut file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open model artifact: {}", path))?;
        file.read_to_string(&mut json)
            .with_context(|| format!("Failed to read model artifact: {}", path))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse model artifact: {}", path))
    }
}
