pub mod replay;

use crossbeam_channel::{unbounded, Receiver, Sender};
use pose_schema::PoseFrame;

/// Anything the host can sample keypoints from once per tick.
pub trait KeypointSource {
    /// Latest frame available at `now` (seconds). An empty frame means no detection.
    fn sample(&mut self, now: f64) -> PoseFrame;
}

/// Latest-frame mailbox between a pose-estimation thread and the tick loop.
pub struct KeypointFeed {
    sender: Sender<PoseFrame>,
    receiver: Receiver<PoseFrame>,
    latest: PoseFrame,
}

impl KeypointFeed {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver,
            latest: PoseFrame::new(),
        }
    }

    /// Publishes a frame. Can be called from any thread.
    pub fn push(&self, frame: PoseFrame) {
        let _ = self.sender.send(frame);
    }

    /// Returns a clone of the sender, for the estimation thread.
    pub fn sender(&self) -> Sender<PoseFrame> {
        self.sender.clone()
    }

    /// Drains queued frames, keeps the newest, and returns a copy of it.
    /// Non-blocking; repeats the previous frame if nothing new arrived.
    pub fn latest(&mut self) -> PoseFrame {
        if let Some(frame) = self.receiver.try_iter().last() {
            self.latest = frame;
        }
        self.latest.clone()
    }
}

impl Default for KeypointFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypointSource for KeypointFeed {
    fn sample(&mut self, _now: f64) -> PoseFrame {
        self.latest()
    }
}
