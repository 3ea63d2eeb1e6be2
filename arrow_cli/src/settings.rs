use std::{fs, path::Path};

use anyhow::Context;
use arrow_core::GameConfig;

/// Reads a JSON config; missing fields take their defaults. No path means defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let bytes = fs::read(path).with_context(|| format!("failed to read config: {}", path.display()))?;
    let config: GameConfig = serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse config json: {}", path.display()))?;
    Ok(config)
}
