use std::{fs, path::Path};

use anyhow::{bail, Context};
use pose_schema::PoseScript;

pub fn load_script_json_from_path(path: impl AsRef<Path>) -> anyhow::Result<PoseScript> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("failed to read script: {}", path.display()))?;
    let script: PoseScript = serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse script json: {}", path.display()))?;
    check_script(&script).with_context(|| format!("invalid script: {}", path.display()))?;
    Ok(script)
}

pub fn load_script_json_from_str(json: &str) -> anyhow::Result<PoseScript> {
    let script: PoseScript = serde_json::from_str(json).context("failed to parse script json")?;
    check_script(&script)?;
    Ok(script)
}

fn check_script(script: &PoseScript) -> anyhow::Result<()> {
    if let Some(idx) = script.first_unordered_frame() {
        bail!(
            "frame {idx} at {}ms is earlier than the frame before it",
            script.frames[idx].time_ms
        );
    }
    if let Some(last) = script.frames.last() {
        if last.time_ms > script.meta.duration_ms {
            bail!(
                "frame at {}ms is past the declared duration {}ms",
                last.time_ms,
                script.meta.duration_ms
            );
        }
    }
    Ok(())
}
