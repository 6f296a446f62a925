// Domain layer: landmark and verdict models plus the estimator port.

pub mod model;
pub mod ports;
