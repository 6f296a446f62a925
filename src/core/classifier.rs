use crate::core::config_store::PostureConfig;
use crate::domain::model::{NeckAngles, PostureStatus, Side, Verdict};
use crate::utils::error::{PostureError, Result};

/// Closed interval of acceptable neck angles for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AngleBand {
    pub min: i32,
    pub max: i32,
}

impl AngleBand {
    pub fn contains(&self, angle: f64) -> bool {
        f64::from(self.min) <= angle && angle <= f64::from(self.max)
    }
}

/// Compares every measured side against its band. Sides that were excluded for low
/// visibility are skipped and never count as bad.
pub fn classify_posture(angles: &NeckAngles, config: &PostureConfig) -> Result<Verdict> {
    let included = angles.included();
    if included.is_empty() {
        return Err(PostureError::NoAnglesToClassify);
    }

    let bad_sides: Vec<Side> = included
        .iter()
        .filter(|(side, angle)| !config.band(**side).contains(**angle))
        .map(|(side, _)| *side)
        .collect();

    let status = PostureStatus::from_bad_count(bad_sides.len());
    tracing::debug!(
        "Posture verdict: {} (bad sides: {:?})",
        status.message(),
        bad_sides
    );

    Ok(Verdict {
        angles: included,
        status,
        is_good: bad_sides.is_empty(),
        bad_sides,
    })
}
