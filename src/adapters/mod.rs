// Adapters layer: concrete pose estimators.

pub mod json_estimator;
