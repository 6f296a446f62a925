use crate::domain::model::{Landmark, LandmarkSet};
use crate::domain::ports::PoseEstimator;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WrappedLandmarks {
    landmarks: Vec<Landmark>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LandmarkPayload {
    List(Vec<Landmark>),
    Wrapped(WrappedLandmarks),
}

/// Estimator for landmarks that were already computed elsewhere and saved as JSON.
///
/// A frame is either a bare array of `{x, y, z, visibility}` objects or an object with a
/// `landmarks` array and nothing else. `null` or an empty array means no pose; any other
/// shape is a serialization error.
#[derive(Debug, Default)]
pub struct JsonLandmarkEstimator {
    frames_processed: u64,
}

impl JsonLandmarkEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    pub fn parse(frame: &[u8]) -> Result<Option<LandmarkSet>> {
        let payload: Option<LandmarkPayload> = serde_json::from_slice(frame)?;
        let landmarks = match payload {
            Some(LandmarkPayload::List(landmarks)) => landmarks,
            Some(LandmarkPayload::Wrapped(wrapped)) => wrapped.landmarks,
            None => return Ok(None),
        };

        if landmarks.is_empty() {
            return Ok(None);
        }
        LandmarkSet::try_from(landmarks).map(Some)
    }
}

#[async_trait]
impl PoseEstimator for JsonLandmarkEstimator {
    async fn estimate(&mut self, frame: &[u8]) -> Result<Option<LandmarkSet>> {
        self.frames_processed += 1;
        let detection = Self::parse(frame)?;
        tracing::debug!(
            "Frame {}: {}",
            self.frames_processed,
            if detection.is_some() {
                "pose found"
            } else {
                "no pose"
            }
        );
        Ok(detection)
    }
}
