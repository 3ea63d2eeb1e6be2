use pose_schema::Direction;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

use crate::config::GameConfig;
use crate::gameplay::resolver::ScoreOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PromptId(pub u64);

/// A directional cue moving right to left along the track.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub id: PromptId,
    pub direction: Direction,
    /// Leading (left) edge.
    pub position: f64,
    pub width: f64,
    /// Set once, when the prompt is resolved.
    pub outcome: Option<ScoreOutcome>,
}

impl Prompt {
    pub fn trailing_edge(&self) -> f64 {
        self.position + self.width
    }

    pub fn center(&self) -> f64 {
        self.position + self.width / 2.0
    }

    pub fn is_resolved(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn has_exited(&self) -> bool {
        self.trailing_edge() < 0.0
    }
}

pub struct PromptScheduler {
    prompts: Vec<Prompt>,
    last_spawn: Option<f64>,
    next_id: u64,
    rng: StdRng,

    spawn_interval: f64,
    max_active: usize,
    speed: f64,
    entry_position: f64,
    prompt_width: f64,
}

impl PromptScheduler {
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            prompts: Vec::new(),
            last_spawn: None,
            next_id: 0,
            rng,
            spawn_interval: config.spawn_interval_secs,
            max_active: config.max_active,
            speed: config.prompt_speed,
            entry_position: config.track_width - config.prompt_width,
            prompt_width: config.prompt_width,
        }
    }

    /// Drops every prompt and forgets the spawn timer. Ids keep increasing.
    pub fn reset(&mut self) {
        self.prompts.clear();
        self.last_spawn = None;
    }

    pub fn can_spawn(&self, now: f64) -> bool {
        if self.prompts.len() >= self.max_active {
            return false;
        }
        match self.last_spawn {
            None => true,
            Some(last) => now - last >= self.spawn_interval,
        }
    }

    /// Spawns a prompt at the entry edge if the cap and the cadence allow it.
    pub fn spawn(&mut self, now: f64) -> Option<PromptId> {
        if !self.can_spawn(now) {
            return None;
        }

        let direction = Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())];
        let id = PromptId(self.next_id);
        self.next_id += 1;
        self.last_spawn = Some(now);
        self.prompts.push(Prompt {
            id,
            direction,
            position: self.entry_position,
            width: self.prompt_width,
            outcome: None,
        });

        debug!(prompt = id.0, ?direction, now, "spawned prompt");
        Some(id)
    }

    /// Moves every prompt left by `speed * dt`.
    pub fn advance(&mut self, dt: f64) {
        let step = self.speed * dt;
        for prompt in &mut self.prompts {
            prompt.position -= step;
        }
    }

    /// Removes prompts whose trailing edge has left the track, oldest first.
    pub fn purge_exited(&mut self) -> Vec<Prompt> {
        let mut exited = Vec::new();
        for i in (0..self.prompts.len()).rev() {
            if self.prompts[i].has_exited() {
                let prompt = self.prompts.remove(i);
                debug!(prompt = prompt.id.0, resolved = prompt.is_resolved(), "prompt left the track");
                exited.push(prompt);
            }
        }
        exited.reverse();
        exited
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub(crate) fn prompts_mut(&mut self) -> &mut [Prompt] {
        &mut self.prompts
    }

    pub fn last_spawn(&self) -> Option<f64> {
        self.last_spawn
    }
}
