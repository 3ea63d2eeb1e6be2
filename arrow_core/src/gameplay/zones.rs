use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A scoring band centered on the target. Narrower bands pay more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreZone {
    pub name: String,
    pub half_width: f64,
    pub points: u32,
    #[serde(default)]
    pub color_hint: String,
}

impl ScoreZone {
    pub fn new(name: impl Into<String>, half_width: f64, points: u32) -> Self {
        Self {
            name: name.into(),
            half_width,
            points,
            color_hint: String::new(),
        }
    }

    pub fn with_color_hint(mut self, color_hint: impl Into<String>) -> Self {
        self.color_hint = color_hint.into();
        self
    }
}

/// Default table: wow / perfect / good.
pub fn default_zones() -> Vec<ScoreZone> {
    vec![
        ScoreZone::new("wow", 15.0, 100).with_color_hint("rgba(255, 215, 0, 0.3)"),
        ScoreZone::new("perfect", 30.0, 70).with_color_hint("rgba(255, 0, 0, 0.3)"),
        ScoreZone::new("good", 50.0, 40).with_color_hint("rgba(0, 255, 0, 0.3)"),
    ]
}

/// Concentric zones ordered from tightest to widest.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneTable {
    zones: Vec<ScoreZone>,
}

impl ZoneTable {
    pub fn new(zones: Vec<ScoreZone>) -> Result<Self, ConfigError> {
        if zones.is_empty() {
            return Err(ConfigError::new("C1001", "zone table is empty").with_field("zones"));
        }
        for zone in &zones {
            if !zone.half_width.is_finite() || zone.half_width <= 0.0 {
                return Err(ConfigError::new(
                    "C1004",
                    format!(
                        "zone '{}' half_width must be a positive number (got {})",
                        zone.name, zone.half_width
                    ),
                )
                .with_field("zones"));
            }
        }
        for pair in zones.windows(2) {
            let (inner, outer) = (&pair[0], &pair[1]);
            if outer.half_width <= inner.half_width {
                return Err(ConfigError::new(
                    "C1002",
                    format!(
                        "zone '{}' (half_width {}) must be wider than '{}' (half_width {})",
                        outer.name, outer.half_width, inner.name, inner.half_width
                    ),
                )
                .with_field("zones"));
            }
            if outer.points >= inner.points {
                return Err(ConfigError::new(
                    "C1003",
                    format!(
                        "zone '{}' ({} points) must pay less than '{}' ({} points)",
                        outer.name, outer.points, inner.name, inner.points
                    ),
                )
                .with_field("zones"));
            }
        }
        Ok(Self { zones })
    }

    /// Narrowest zone whose half-width covers `offset`. A boundary offset belongs to
    /// the narrower zone.
    pub fn select(&self, offset: f64) -> Option<&ScoreZone> {
        self.zones.iter().find(|z| offset <= z.half_width)
    }

    pub fn widest(&self) -> &ScoreZone {
        // non-empty is checked in `new`
        &self.zones[self.zones.len() - 1]
    }

    pub fn zones(&self) -> &[ScoreZone] {
        &self.zones
    }
}
