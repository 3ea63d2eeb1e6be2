use pose_schema::{PoseFrame, PoseScript};

use super::KeypointSource;

/// Plays back a recorded script: at time `now` the most recent frame stamped at or
/// before `now` is current.
pub struct ReplaySource {
    frames: Vec<(f64, PoseFrame)>,
    cursor: usize,
    empty: PoseFrame,
}

impl ReplaySource {
    /// `script` frames are expected in time order (see `PoseScript::first_unordered_frame`).
    pub fn new(script: &PoseScript) -> Self {
        let frames = script
            .frames
            .iter()
            .map(|f| (f.time_ms as f64 / 1000.0, f.keypoints.clone()))
            .collect();
        Self {
            frames,
            cursor: 0,
            empty: PoseFrame::new(),
        }
    }

    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    pub fn frame_at(&mut self, now: f64) -> &PoseFrame {
        if self.cursor > 0 && self.frames[self.cursor - 1].0 > now {
            self.rewind();
        }
        while self.cursor < self.frames.len() && self.frames[self.cursor].0 <= now {
            self.cursor += 1;
        }
        match self.cursor {
            0 => &self.empty,
            n => &self.frames[n - 1].1,
        }
    }
}

impl KeypointSource for ReplaySource {
    fn sample(&mut self, now: f64) -> PoseFrame {
        self.frame_at(now).clone()
    }
}
