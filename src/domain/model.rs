use crate::utils::error::{PostureError, Result};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Number of landmarks the upstream pose estimator emits per body.
pub const POSE_LANDMARK_COUNT: usize = 33;

/// Named body landmarks, in the estimator's output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoseLandmark {
    Nose = 0,
    LeftEyeInner,
    LeftEye,
    LeftEyeOuter,
    RightEyeInner,
    RightEye,
    RightEyeOuter,
    LeftEar,
    RightEar,
    MouthLeft,
    MouthRight,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftPinky,
    RightPinky,
    LeftIndex,
    RightIndex,
    LeftThumb,
    RightThumb,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
    LeftHeel,
    RightHeel,
    LeftFootIndex,
    RightFootIndex,
}

impl PoseLandmark {
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A single landmark in normalized image space (origin top-left, y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
    pub visibility: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64, visibility: f64) -> Self {
        Self { x, y, z, visibility }
    }
}

/// The full, ordered landmark output for one detected body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    landmarks: Vec<Landmark>,
}

impl LandmarkSet {
    pub fn new(landmarks: Vec<Landmark>) -> Result<Self> {
        if landmarks.len() != POSE_LANDMARK_COUNT {
            return Err(PostureError::InvalidLandmarkCount {
                expected: POSE_LANDMARK_COUNT,
                actual: landmarks.len(),
            });
        }
        Ok(Self { landmarks })
    }

    pub fn get(&self, landmark: PoseLandmark) -> &Landmark {
        // Length is fixed at construction, so every named index is present.
        &self.landmarks[landmark.index()]
    }

    pub fn as_slice(&self) -> &[Landmark] {
        &self.landmarks
    }
}

impl TryFrom<Vec<Landmark>> for LandmarkSet {
    type Error = PostureError;

    fn try_from(landmarks: Vec<Landmark>) -> Result<Self> {
        Self::new(landmarks)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Right,
    Left,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Right, Side::Left];

    /// The (shoulder, ear) pair that defines this side's neck line.
    pub fn landmarks(self) -> (PoseLandmark, PoseLandmark) {
        match self {
            Side::Right => (PoseLandmark::RightShoulder, PoseLandmark::RightEar),
            Side::Left => (PoseLandmark::LeftShoulder, PoseLandmark::LeftEar),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Right => "right",
            Side::Left => "left",
        }
    }
}

/// Outcome of measuring one side of the neck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SideReading {
    Included { angle: f64 },
    /// Landmarks were not confident enough; `visibility` is the weaker of the pair.
    Excluded { visibility: f64 },
}

impl SideReading {
    pub fn angle(&self) -> Option<f64> {
        match self {
            SideReading::Included { angle } => Some(*angle),
            SideReading::Excluded { .. } => None,
        }
    }

    pub fn is_included(&self) -> bool {
        matches!(self, SideReading::Included { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeckAngles {
    pub right: SideReading,
    pub left: SideReading,
}

impl NeckAngles {
    pub fn reading(&self, side: Side) -> &SideReading {
        match side {
            Side::Right => &self.right,
            Side::Left => &self.left,
        }
    }

    /// Angles of the sides that passed the visibility gate.
    pub fn included(&self) -> BTreeMap<Side, f64> {
        Side::ALL
            .iter()
            .filter_map(|side| self.reading(*side).angle().map(|angle| (*side, angle)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        !self.right.is_included() && !self.left.is_included()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostureStatus {
    Good,
    BadNeck,
    BadBack,
}

impl PostureStatus {
    pub fn from_bad_count(bad_sides: usize) -> Self {
        match bad_sides {
            0 => PostureStatus::Good,
            1 => PostureStatus::BadNeck,
            _ => PostureStatus::BadBack,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PostureStatus::Good => "Good Posture",
            PostureStatus::BadNeck => "Bad Posture! Please fix your neck angle",
            PostureStatus::BadBack => "Bad Posture! Please sit straight and fix your back posture",
        }
    }
}

impl Serialize for PostureStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Classification result for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub angles: BTreeMap<Side, f64>,
    pub status: PostureStatus,
    pub is_good: bool,
    #[serde(skip)]
    pub bad_sides: Vec<Side>,
}
