//! Arm direction from shoulder and wrist keypoints.
//!
//! The shoulder-to-wrist vector is turned into a compass angle (screen y grows
//! downward, so it is flipped) and bucketed into one of eight 45° sectors centered
//! on the compass directions. Anything unreliable about the input yields `None`.

use glam::DVec2;
use pose_schema::{Direction, Keypoint, KeypointName, PoseFrame};
use serde::Serialize;

use crate::config::GameConfig;

/// Sectors in counter-clockwise order starting at East (0°).
const SECTORS: [Direction; 8] = [
    Direction::E,
    Direction::NE,
    Direction::N,
    Direction::NW,
    Direction::W,
    Direction::SW,
    Direction::S,
    Direction::SE,
];

const SECTOR_WIDTH: f64 = 45.0;

/// Which sector an angle falls in. `degrees` may be any finite value; it is
/// normalized first. Each sector is closed on its lower edge and open on its upper
/// edge, so East spans [-22.5°, 22.5°).
pub fn direction_for_angle(degrees: f64) -> Direction {
    let shifted = (normalize_degrees(degrees) + SECTOR_WIDTH / 2.0).rem_euclid(360.0);
    let idx = (shifted / SECTOR_WIDTH).floor() as usize;
    SECTORS[idx % SECTORS.len()]
}

/// Maps any finite angle into [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    let a = degrees.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Per-limb classification for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LimbDirections {
    pub left: Option<Direction>,
    pub right: Option<Direction>,
}

impl LimbDirections {
    pub fn matches(&self, direction: Direction) -> bool {
        self.left == Some(direction) || self.right == Some(direction)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureClassifier {
    pub visibility_threshold: f32,
    pub frame_width: f32,
    pub frame_height: f32,
    pub mirror_x: bool,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl GestureClassifier {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            visibility_threshold: config.visibility_threshold,
            frame_width: config.frame_width,
            frame_height: config.frame_height,
            mirror_x: config.mirror_x,
        }
    }

    /// A point is usable when it is confident enough and inside the frame.
    pub fn is_visible(&self, point: &Keypoint) -> bool {
        if point.confidence.is_nan() || point.confidence < self.visibility_threshold {
            return false;
        }
        (0.0..=self.frame_width).contains(&point.x) && (0.0..=self.frame_height).contains(&point.y)
    }

    /// Angle of the shoulder-to-wrist vector in degrees, [0, 360), counter-clockwise
    /// from East. `None` when either point is missing, unreliable, or the two coincide.
    pub fn arm_angle(&self, shoulder: Option<&Keypoint>, wrist: Option<&Keypoint>) -> Option<f64> {
        let (shoulder, wrist) = (shoulder?, wrist?);
        if !self.is_visible(shoulder) || !self.is_visible(wrist) {
            return None;
        }

        let mut d = DVec2::new(f64::from(wrist.x), f64::from(wrist.y))
            - DVec2::new(f64::from(shoulder.x), f64::from(shoulder.y));
        if d == DVec2::ZERO {
            return None;
        }
        if self.mirror_x {
            d.x = -d.x;
        }

        let angle = (-d.y).atan2(d.x).to_degrees();
        Some(normalize_degrees(angle))
    }

    pub fn classify(&self, shoulder: Option<&Keypoint>, wrist: Option<&Keypoint>) -> Option<Direction> {
        self.arm_angle(shoulder, wrist).map(direction_for_angle)
    }

    pub fn classify_limbs(&self, frame: &PoseFrame) -> LimbDirections {
        LimbDirections {
            left: self.classify(
                frame.get(KeypointName::LeftShoulder),
                frame.get(KeypointName::LeftWrist),
            ),
            right: self.classify(
                frame.get(KeypointName::RightShoulder),
                frame.get(KeypointName::RightWrist),
            ),
        }
    }
}
