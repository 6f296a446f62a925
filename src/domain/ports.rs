use crate::domain::model::LandmarkSet;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Body-landmark estimator. Given one encoded frame it returns the landmarks of the
/// detected person, or `None` when no body was found.
///
/// Takes `&mut self` because real estimators keep graph state between calls and are
/// not reentrant; callers share one instance behind a lock.
#[async_trait]
pub trait PoseEstimator: Send {
    async fn estimate(&mut self, frame: &[u8]) -> Result<Option<LandmarkSet>>;
}
