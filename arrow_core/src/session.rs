use pose_schema::{Direction, PoseFrame};
use serde::Serialize;
use tracing::{info, trace, warn};

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::gameplay::gesture::{GestureClassifier, LimbDirections};
use crate::gameplay::resolver::{ScoreOutcome, ScoreResolver};
use crate::gameplay::scheduler::{Prompt, PromptId, PromptScheduler};
use crate::time::clock::TickClock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpawnedPrompt {
    pub id: PromptId,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPrompt {
    pub id: PromptId,
    pub direction: Direction,
    pub limbs: LimbDirections,
    pub outcome: ScoreOutcome,
}

/// What happened during one tick, in the order it happened.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TickReport {
    pub spawned: Option<SpawnedPrompt>,
    pub resolved: Vec<ResolvedPrompt>,
    pub exited: Vec<PromptId>,
}

impl TickReport {
    pub fn is_empty(&self) -> bool {
        self.spawned.is_none() && self.resolved.is_empty() && self.exited.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ScoringState {
    Pending,
    Hit { points: u32 },
    Missed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptView {
    pub id: PromptId,
    pub direction: Direction,
    /// Leading edge.
    pub position: f64,
    pub width: f64,
    /// Point the resolver measures the offset from.
    pub center: f64,
    pub scoring_state: ScoringState,
}

impl From<&Prompt> for PromptView {
    fn from(prompt: &Prompt) -> Self {
        let scoring_state = match &prompt.outcome {
            None => ScoringState::Pending,
            Some(ScoreOutcome::Hit { points, .. }) => ScoringState::Hit { points: *points },
            Some(ScoreOutcome::Miss { .. }) => ScoringState::Missed,
        };
        Self {
            id: prompt.id,
            direction: prompt.direction,
            position: prompt.position,
            width: prompt.width,
            center: prompt.center(),
            scoring_state,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneView {
    pub name: String,
    pub half_width: f64,
    pub color_hint: String,
    pub points: u32,
}

/// Read-only state handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub score: u64,
    pub target_x: f64,
    pub prompts: Vec<PromptView>,
    pub zones: Vec<ZoneView>,
}

/// One game: owns the prompts, the score and the tick loop state.
pub struct GameSession {
    phase: Phase,
    score: u64,
    scheduler: PromptScheduler,
    resolver: ScoreResolver,
    classifier: GestureClassifier,
    clock: TickClock,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            phase: Phase::Idle,
            score: 0,
            scheduler: PromptScheduler::new(&config),
            resolver: ScoreResolver::from_config(&config)?,
            classifier: GestureClassifier::from_config(&config),
            clock: TickClock::new(config.max_tick_secs),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn prompts(&self) -> &[Prompt] {
        self.scheduler.prompts()
    }

    pub fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }

    pub fn resolver(&self) -> &ScoreResolver {
        &self.resolver
    }

    /// Begins a fresh round. Ignored while already running.
    pub fn start(&mut self) {
        if self.phase == Phase::Running {
            return;
        }
        self.reset_round();
        self.phase = Phase::Running;
        info!("session started");
    }

    /// Ends the round and clears it. Safe to call in any phase.
    pub fn stop(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        self.reset_round();
        self.phase = Phase::Stopped;
        info!("session stopped");
    }

    fn reset_round(&mut self) {
        self.score = 0;
        self.scheduler.reset();
        self.clock.reset();
    }

    /// Runs one tick at host time `now` (seconds) against the latest keypoints:
    /// spawn, advance, resolve, purge.
    pub fn tick(&mut self, now: f64, frame: &PoseFrame) -> TickReport {
        let mut report = TickReport::default();
        if self.phase != Phase::Running {
            trace!(phase = ?self.phase, "tick ignored");
            return report;
        }
        if !now.is_finite() {
            warn!(now, "tick ignored: time is not finite");
            return report;
        }

        let dt = self.clock.advance(now);

        report.spawned = self.scheduler.spawn(now).and_then(|id| {
            self.scheduler
                .prompts()
                .iter()
                .find(|p| p.id == id)
                .map(|p| SpawnedPrompt {
                    id,
                    direction: p.direction,
                })
        });
        self.scheduler.advance(dt);

        // Classified lazily: most ticks have no prompt at the zone.
        let mut limbs: Option<LimbDirections> = None;
        for prompt in self.scheduler.prompts_mut() {
            if !self.resolver.is_due(prompt) {
                continue;
            }
            let current = *limbs.get_or_insert_with(|| self.classifier.classify_limbs(frame));
            if let Some(outcome) = self.resolver.resolve(prompt, &current) {
                self.score += u64::from(outcome.points());
                report.resolved.push(ResolvedPrompt {
                    id: prompt.id,
                    direction: prompt.direction,
                    limbs: current,
                    outcome,
                });
            }
        }

        report.exited = self
            .scheduler
            .purge_exited()
            .into_iter()
            .map(|p| p.id)
            .collect();

        trace!(now, dt, score = self.score, active = self.scheduler.prompts().len(), "tick");
        report
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            score: self.score,
            target_x: self.resolver.target_x(),
            prompts: self.scheduler.prompts().iter().map(PromptView::from).collect(),
            zones: self
                .resolver
                .zones()
                .zones()
                .iter()
                .map(|z| ZoneView {
                    name: z.name.clone(),
                    half_width: z.half_width,
                    color_hint: z.color_hint.clone(),
                    points: z.points,
                })
                .collect(),
        }
    }
}
