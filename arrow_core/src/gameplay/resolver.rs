use pose_schema::Direction;
use serde::Serialize;
use tracing::debug;

use crate::config::{GameConfig, ResolvePolicy};
use crate::error::ConfigError;
use crate::gameplay::gesture::LimbDirections;
use crate::gameplay::scheduler::Prompt;
use crate::gameplay::zones::ZoneTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissReason {
    /// Neither arm pointed in the prompt's direction.
    NoGesture,
    /// The gesture matched but the prompt center was outside every zone.
    OutsideZones,
    /// The prompt passed the widest zone without a decision.
    LeftWindow,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ScoreOutcome {
    Hit { zone: String, points: u32, offset: f64 },
    Miss { reason: MissReason, offset: f64 },
}

impl ScoreOutcome {
    pub fn points(&self) -> u32 {
        match self {
            ScoreOutcome::Hit { points, .. } => *points,
            ScoreOutcome::Miss { .. } => 0,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, ScoreOutcome::Hit { .. })
    }
}

/// Decides each prompt's score once, when it meets the zone span around the target.
pub struct ScoreResolver {
    zones: ZoneTable,
    target_x: f64,
    policy: ResolvePolicy,
}

impl ScoreResolver {
    pub fn new(zones: ZoneTable, target_x: f64, policy: ResolvePolicy) -> Self {
        Self {
            zones,
            target_x,
            policy,
        }
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let zones = ZoneTable::new(config.zones.clone())?;
        Ok(Self::new(zones, config.target_x, config.resolve_policy))
    }

    pub fn zones(&self) -> &ZoneTable {
        &self.zones
    }

    pub fn target_x(&self) -> f64 {
        self.target_x
    }

    pub fn policy(&self) -> ResolvePolicy {
        self.policy
    }

    /// Closed interval covered by the widest zone.
    pub fn span(&self) -> (f64, f64) {
        let reach = self.zones.widest().half_width;
        (self.target_x - reach, self.target_x + reach)
    }

    pub fn overlaps(&self, prompt: &Prompt) -> bool {
        let (lo, hi) = self.span();
        prompt.position <= hi && prompt.trailing_edge() >= lo
    }

    pub fn has_passed(&self, prompt: &Prompt) -> bool {
        prompt.trailing_edge() < self.span().0
    }

    /// True when `resolve` might decide this prompt on the current tick.
    pub fn is_due(&self, prompt: &Prompt) -> bool {
        !prompt.is_resolved() && (self.overlaps(prompt) || self.has_passed(prompt))
    }

    pub fn offset(&self, prompt: &Prompt) -> f64 {
        (prompt.center() - self.target_x).abs()
    }

    /// Outcome for a prompt of `direction` whose center sits `offset` from the target.
    pub fn evaluate(&self, direction: Direction, offset: f64, limbs: &LimbDirections) -> ScoreOutcome {
        if !limbs.matches(direction) {
            return ScoreOutcome::Miss {
                reason: MissReason::NoGesture,
                offset,
            };
        }
        match self.zones.select(offset) {
            Some(zone) => ScoreOutcome::Hit {
                zone: zone.name.clone(),
                points: zone.points,
                offset,
            },
            None => ScoreOutcome::Miss {
                reason: MissReason::OutsideZones,
                offset,
            },
        }
    }

    /// Records an outcome on `prompt` if it is due for one. Returns `None` for prompts
    /// that are already resolved or not yet at the zone, so calling this again for
    /// the same prompt never produces a second outcome.
    pub fn resolve(&self, prompt: &mut Prompt, limbs: &LimbDirections) -> Option<ScoreOutcome> {
        if prompt.is_resolved() {
            return None;
        }

        let offset = self.offset(prompt);
        let outcome = if self.has_passed(prompt) {
            ScoreOutcome::Miss {
                reason: MissReason::LeftWindow,
                offset,
            }
        } else if !self.overlaps(prompt) {
            return None;
        } else {
            let outcome = self.evaluate(prompt.direction, offset, limbs);
            if self.policy == ResolvePolicy::WithinWindow && !outcome.is_hit() {
                return None;
            }
            outcome
        };

        debug!(prompt = prompt.id.0, direction = ?prompt.direction, ?limbs, ?outcome, "resolved prompt");
        prompt.outcome = Some(outcome.clone());
        Some(outcome)
    }
}
