//! Neck angle measurement from shoulder and ear landmarks.

use crate::domain::model::{Landmark, LandmarkSet, NeckAngles, Side, SideReading};
use crate::utils::error::{PostureError, Result};

/// A side is measured only when both of its landmarks are strictly above this.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Direction of the shoulder→ear vector in degrees.
///
/// The right side uses the raw `atan2` result; the left side is negated so that the
/// mirrored profile reads with the opposite sign.
pub fn neck_angle(shoulder: &Landmark, ear: &Landmark, side: Side) -> f64 {
    let dy = ear.y - shoulder.y;
    let dx = ear.x - shoulder.x;
    let raw = dy.atan2(dx).to_degrees();
    match side {
        Side::Right => raw,
        Side::Left => -raw,
    }
}

pub fn measure_side(landmarks: &LandmarkSet, side: Side) -> SideReading {
    let (shoulder_id, ear_id) = side.landmarks();
    let shoulder = landmarks.get(shoulder_id);
    let ear = landmarks.get(ear_id);

    let visibility = shoulder.visibility.min(ear.visibility);
    if visibility > VISIBILITY_THRESHOLD {
        SideReading::Included {
            angle: neck_angle(shoulder, ear, side),
        }
    } else {
        SideReading::Excluded { visibility }
    }
}

/// Measures both sides. Fails when neither side is visible enough to use.
pub fn calculate_neck_angles(landmarks: &LandmarkSet) -> Result<NeckAngles> {
    let angles = NeckAngles {
        right: measure_side(landmarks, Side::Right),
        left: measure_side(landmarks, Side::Left),
    };

    for side in Side::ALL {
        match angles.reading(side) {
            SideReading::Included { angle } => {
                tracing::debug!("{} neck angle: {:.2}°", side.as_str(), angle)
            }
            SideReading::Excluded { visibility } => tracing::debug!(
                "{} side excluded (visibility {:.2})",
                side.as_str(),
                visibility
            ),
        }
    }

    if angles.is_empty() {
        return Err(PostureError::InsufficientVisibility);
    }
    Ok(angles)
}
