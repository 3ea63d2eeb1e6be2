use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::gameplay::zones::{default_zones, ScoreZone, ZoneTable};

/// When a prompt inside the scoring span gets its one decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvePolicy {
    /// Decide on the first tick the prompt overlaps the widest zone.
    #[default]
    OnEntry,
    /// Keep checking while the prompt overlaps the widest zone; decide on the first
    /// scoring match, or as a miss once the prompt has passed the zone.
    WithinWindow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Track length in track-space units; prompts enter at the right edge.
    pub track_width: f64,
    /// Prompt footprint along the track. Zero makes the footprint the center point,
    /// so a prompt is decided when its center reaches the widest zone.
    pub prompt_width: f64,
    /// Shared center of every score zone.
    pub target_x: f64,
    /// Units per second.
    pub prompt_speed: f64,
    pub spawn_interval_secs: f64,
    pub max_active: usize,
    /// Upper bound on the time step a single tick may apply.
    pub max_tick_secs: f64,

    pub visibility_threshold: f32,
    pub frame_width: f32,
    pub frame_height: f32,
    /// Set when keypoints come from a mirrored (selfie) camera image.
    pub mirror_x: bool,

    pub resolve_policy: ResolvePolicy,
    pub zones: Vec<ScoreZone>,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            track_width: 640.0,
            prompt_width: 0.0,
            target_x: 100.0,
            prompt_speed: 300.0, // 5 units per frame at 60 Hz
            spawn_interval_secs: 2.0,
            max_active: 3,
            max_tick_secs: 0.25,
            visibility_threshold: 0.3,
            frame_width: 640.0,
            frame_height: 480.0,
            mirror_x: false,
            resolve_policy: ResolvePolicy::OnEntry,
            zones: default_zones(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let zones = ZoneTable::new(self.zones.clone())?;

        if !(self.prompt_speed.is_finite() && self.prompt_speed > 0.0) {
            return Err(ConfigError::new("C2001", "prompt_speed must be > 0").with_field("prompt_speed"));
        }
        if !(self.spawn_interval_secs.is_finite() && self.spawn_interval_secs >= 0.0) {
            return Err(ConfigError::new("C2002", "spawn_interval_secs must be >= 0")
                .with_field("spawn_interval_secs"));
        }
        if self.max_active == 0 {
            return Err(ConfigError::new("C2003", "max_active must be >= 1").with_field("max_active"));
        }
        if !(self.max_tick_secs.is_finite() && self.max_tick_secs > 0.0) {
            return Err(ConfigError::new("C2004", "max_tick_secs must be > 0").with_field("max_tick_secs"));
        }

        if !(self.prompt_width.is_finite() && self.prompt_width >= 0.0) {
            return Err(ConfigError::new("C3002", "prompt_width must be >= 0").with_field("prompt_width"));
        }
        if !(self.track_width.is_finite() && self.track_width > self.prompt_width) {
            return Err(ConfigError::new(
                "C3001",
                format!(
                    "track_width ({}) must exceed prompt_width ({})",
                    self.track_width, self.prompt_width
                ),
            )
            .with_field("track_width"));
        }
        let reach = zones.widest().half_width;
        if !self.target_x.is_finite()
            || self.target_x - reach < 0.0
            || self.target_x + reach > self.track_width
        {
            return Err(ConfigError::new(
                "C3003",
                format!(
                    "zone span {}..{} around target_x must lie on the track 0..{}",
                    self.target_x - reach,
                    self.target_x + reach,
                    self.track_width
                ),
            )
            .with_field("target_x"));
        }

        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(ConfigError::new("C4001", "visibility_threshold must be within 0..=1")
                .with_field("visibility_threshold"));
        }
        if !(self.frame_width > 0.0 && self.frame_height > 0.0) {
            return Err(ConfigError::new("C4002", "frame_width and frame_height must be > 0")
                .with_field("frame_width"));
        }
        Ok(())
    }
}
