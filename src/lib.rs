pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::json_estimator::JsonLandmarkEstimator;
pub use config::toml_config::AppConfig;
pub use core::{
    config_store::{PostureConfig, PostureConfigStore},
    service::{AnalysisResponse, FrameAnalysis, PostureService},
};
pub use domain::model::{Landmark, LandmarkSet, PoseLandmark, Side, Verdict};
pub use utils::error::{PostureError, Result};
