use crate::core::angles::calculate_neck_angles;
use crate::core::classifier::classify_posture;
use crate::core::config_store::{PostureConfig, PostureConfigStore};
use crate::domain::model::{Landmark, LandmarkSet, PostureStatus, Side, Verdict};
use crate::domain::ports::PoseEstimator;
use crate::utils::error::{PostureError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Verdict plus the landmarks it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameAnalysis {
    pub angles: BTreeMap<Side, f64>,
    pub status: PostureStatus,
    pub is_good: bool,
    pub landmarks: Vec<Landmark>,
}

impl FrameAnalysis {
    fn new(verdict: Verdict, landmarks: &LandmarkSet) -> Self {
        Self {
            angles: verdict.angles,
            status: verdict.status,
            is_good: verdict.is_good,
            landmarks: landmarks.as_slice().to_vec(),
        }
    }
}

/// What a caller receives for one frame: the analysis or a user-facing error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResponse {
    Analysis(FrameAnalysis),
    Error { error: String },
}

impl From<Result<FrameAnalysis>> for AnalysisResponse {
    fn from(result: Result<FrameAnalysis>) -> Self {
        match result {
            Ok(analysis) => AnalysisResponse::Analysis(analysis),
            Err(e) => AnalysisResponse::Error {
                error: e.user_friendly_message(),
            },
        }
    }
}

/// Runs estimator → angles → classification against the shared thresholds.
pub struct PostureService<E: PoseEstimator> {
    estimator: Mutex<E>,
    config: Arc<PostureConfigStore>,
}

impl<E: PoseEstimator> PostureService<E> {
    pub fn new(estimator: E, config: Arc<PostureConfigStore>) -> Self {
        Self {
            estimator: Mutex::new(estimator),
            config,
        }
    }

    pub fn get_config(&self) -> PostureConfig {
        self.config.get_config()
    }

    pub fn update_config(
        &self,
        right_min_angle: i32,
        right_max_angle: i32,
        left_min_angle: i32,
        left_max_angle: i32,
    ) -> Result<()> {
        self.config.update_config(PostureConfig {
            right_min_angle,
            right_max_angle,
            left_min_angle,
            left_max_angle,
        })
    }

    pub fn reset_config(&self) {
        self.config.reset_config()
    }

    pub fn classify(&self, landmarks: &LandmarkSet) -> Result<Verdict> {
        let angles = calculate_neck_angles(landmarks)?;
        let config = self.config.snapshot();
        classify_posture(&angles, &config)
    }

    /// Like [`classify`](Self::classify), for estimator output that may contain no body.
    pub fn classify_detection(&self, landmarks: Option<&LandmarkSet>) -> Result<Verdict> {
        match landmarks {
            Some(landmarks) => self.classify(landmarks),
            None => Err(PostureError::NoPoseDetected),
        }
    }

    pub async fn analyze_frame(&self, frame: &[u8]) -> Result<FrameAnalysis> {
        let detection = {
            let mut estimator = self.estimator.lock().await;
            estimator.estimate(frame).await?
        };

        let Some(landmarks) = detection else {
            tracing::debug!("Estimator found no pose in frame ({} bytes)", frame.len());
            return Err(PostureError::NoPoseDetected);
        };

        let verdict = self.classify(&landmarks)?;
        Ok(FrameAnalysis::new(verdict, &landmarks))
    }

    pub async fn respond(&self, frame: &[u8]) -> AnalysisResponse {
        self.analyze_frame(frame).await.into()
    }
}
