use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type Milliseconds = u64;

/// Anatomical vocabulary produced by single-pose estimators (COCO order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeypointName {
    Nose,
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub name: KeypointName,
    pub x: f32,
    pub y: f32,
    #[serde(alias = "score")]
    pub confidence: f32,
}

impl Keypoint {
    pub fn new(name: KeypointName, x: f32, y: f32, confidence: f32) -> Self {
        Self {
            name,
            x,
            y,
            confidence,
        }
    }
}

/// One estimation cycle worth of keypoints, addressed by name.
///
/// On the wire this is a plain list; a later entry with the same name replaces an
/// earlier one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Keypoint>", into = "Vec<Keypoint>")]
pub struct PoseFrame {
    points: BTreeMap<KeypointName, Keypoint>,
}

impl PoseFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_keypoints(keypoints: impl IntoIterator<Item = Keypoint>) -> Self {
        let points = keypoints.into_iter().map(|k| (k.name, k)).collect();
        Self { points }
    }

    pub fn insert(&mut self, keypoint: Keypoint) {
        self.points.insert(keypoint.name, keypoint);
    }

    pub fn get(&self, name: KeypointName) -> Option<&Keypoint> {
        self.points.get(&name)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keypoint> {
        self.points.values()
    }
}

impl From<Vec<Keypoint>> for PoseFrame {
    fn from(keypoints: Vec<Keypoint>) -> Self {
        Self::from_keypoints(keypoints)
    }
}

impl From<PoseFrame> for Vec<Keypoint> {
    fn from(frame: PoseFrame) -> Self {
        frame.points.into_values().collect()
    }
}

/// Compass direction of a prompt or of a raised arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Sector center in degrees, counter-clockwise from East.
    pub fn center_degrees(self) -> f64 {
        match self {
            Direction::E => 0.0,
            Direction::NE => 45.0,
            Direction::N => 90.0,
            Direction::NW => 135.0,
            Direction::W => 180.0,
            Direction::SW => 225.0,
            Direction::S => 270.0,
            Direction::SE => 315.0,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Direction::N => '↑',
            Direction::NE => '↗',
            Direction::E => '→',
            Direction::SE => '↘',
            Direction::S => '↓',
            Direction::SW => '↙',
            Direction::W => '←',
            Direction::NW => '↖',
        }
    }
}

/// Recorded keypoint stream used for offline replay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PoseScript {
    pub meta: ScriptMeta,
    pub frames: Vec<ScriptFrame>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScriptMeta {
    pub title: String,
    pub duration_ms: Milliseconds,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScriptFrame {
    pub time_ms: Milliseconds,
    pub keypoints: PoseFrame,
}

impl PoseScript {
    /// Index of the first frame whose timestamp goes backwards, if any.
    pub fn first_unordered_frame(&self) -> Option<usize> {
        self.frames
            .windows(2)
            .position(|w| w[1].time_ms < w[0].time_ms)
            .map(|i| i + 1)
    }
}
