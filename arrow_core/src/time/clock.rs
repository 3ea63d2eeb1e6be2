use tracing::warn;

/// Turns host timestamps (seconds) into per-tick time steps.
pub struct TickClock {
    last_tick: Option<f64>,
    max_step: f64,
}

impl TickClock {
    pub fn new(max_step: f64) -> Self {
        Self {
            last_tick: None,
            max_step,
        }
    }

    pub fn reset(&mut self) {
        self.last_tick = None;
    }

    /// Seconds since the previous tick, capped at `max_step`. The first tick after a
    /// reset, and a tick whose time goes backwards, step by zero.
    pub fn advance(&mut self, now: f64) -> f64 {
        let Some(last) = self.last_tick else {
            self.last_tick = Some(now);
            return 0.0;
        };

        if now < last {
            warn!(now, last, "tick time went backwards; ignoring step");
            return 0.0;
        }

        self.last_tick = Some(now);
        (now - last).min(self.max_step)
    }

    pub fn last_tick(&self) -> Option<f64> {
        self.last_tick
    }
}
