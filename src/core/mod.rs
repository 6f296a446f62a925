pub mod angles;
pub mod classifier;
pub mod config_store;
pub mod service;

pub use crate::domain::model::{LandmarkSet, NeckAngles, Verdict};
pub use crate::domain::ports::PoseEstimator;
pub use crate::utils::error::Result;
