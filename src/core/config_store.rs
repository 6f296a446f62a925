use crate::core::classifier::AngleBand;
use crate::domain::model::Side;
use crate::utils::error::Result;
use crate::utils::validation::{validate_band, Validate};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};

/// Acceptable neck angle ranges, in whole degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostureConfig {
    // Right side range (negative angles)
    pub right_min_angle: i32,
    pub right_max_angle: i32,
    // Left side range (positive angles)
    pub left_min_angle: i32,
    pub left_max_angle: i32,
}

impl Default for PostureConfig {
    fn default() -> Self {
        Self {
            right_min_angle: -80,
            right_max_angle: -63,
            left_min_angle: 80,
            left_max_angle: 115,
        }
    }
}

impl PostureConfig {
    pub fn right_band(&self) -> AngleBand {
        AngleBand {
            min: self.right_min_angle,
            max: self.right_max_angle,
        }
    }

    pub fn left_band(&self) -> AngleBand {
        AngleBand {
            min: self.left_min_angle,
            max: self.left_max_angle,
        }
    }

    pub fn band(&self, side: Side) -> AngleBand {
        match side {
            Side::Right => self.right_band(),
            Side::Left => self.left_band(),
        }
    }
}

impl Validate for PostureConfig {
    fn validate(&self) -> Result<()> {
        validate_band("right_angle", self.right_min_angle, self.right_max_angle)?;
        validate_band("left_angle", self.left_min_angle, self.left_max_angle)?;
        Ok(())
    }
}

/// Process-wide threshold store shared between concurrent requests.
///
/// Readers take an `Arc` snapshot and never hold the lock while classifying; writers
/// swap in a whole new value, so a reader sees either the old or the new four bounds.
#[derive(Debug)]
pub struct PostureConfigStore {
    current: RwLock<Arc<PostureConfig>>,
}

impl PostureConfigStore {
    pub fn new(initial: PostureConfig) -> Result<Self> {
        initial.validate()?;
        Ok(Self {
            current: RwLock::new(Arc::new(initial)),
        })
    }

    pub fn snapshot(&self) -> Arc<PostureConfig> {
        // The guarded value is plain data, so a poisoned lock still holds a whole config.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    pub fn get_config(&self) -> PostureConfig {
        *self.snapshot()
    }

    /// Replaces all four bounds at once. Inverted bands are rejected and leave the
    /// current configuration untouched.
    pub fn update_config(&self, config: PostureConfig) -> Result<()> {
        if let Err(e) = config.validate() {
            tracing::warn!("Rejected posture config update {:?}: {}", config, e);
            return Err(e);
        }

        let next = Arc::new(config);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = next;
        drop(guard);

        tracing::info!(
            "Posture config updated: right [{}, {}], left [{}, {}]",
            config.right_min_angle,
            config.right_max_angle,
            config.left_min_angle,
            config.left_max_angle
        );
        Ok(())
    }

    pub fn reset_config(&self) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(PostureConfig::default());
        drop(guard);
        tracing::info!("Posture config reset to defaults");
    }
}

impl Default for PostureConfigStore {
    fn default() -> Self {
        Self {
            current: RwLock::new(Arc::new(PostureConfig::default())),
        }
    }
}
