use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostureError {
    #[error("No pose detected")]
    NoPoseDetected,

    #[error("No clear view of neck angle")]
    InsufficientVisibility,

    #[error("No neck angle available to classify")]
    NoAnglesToClassify,

    #[error("Expected {expected} landmarks, got {actual}")]
    InvalidLandmarkCount { expected: usize, actual: usize },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    ConfigValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Detection,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PostureError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PostureError::NoPoseDetected
            | PostureError::InsufficientVisibility
            | PostureError::NoAnglesToClassify => ErrorCategory::Detection,
            PostureError::ConfigValidationError { .. } | PostureError::ConfigError { .. } => {
                ErrorCategory::Configuration
            }
            PostureError::InvalidLandmarkCount { .. } | PostureError::SerializationError(_) => {
                ErrorCategory::Input
            }
            PostureError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // The frame was fine, the person just was not visible enough.
            PostureError::NoPoseDetected | PostureError::InsufficientVisibility => {
                ErrorSeverity::Low
            }
            PostureError::NoAnglesToClassify | PostureError::InvalidLandmarkCount { .. } => {
                ErrorSeverity::Medium
            }
            PostureError::ConfigValidationError { .. }
            | PostureError::ConfigError { .. }
            | PostureError::SerializationError(_) => ErrorSeverity::High,
            PostureError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Message safe to show to an end user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            PostureError::NoPoseDetected | PostureError::InsufficientVisibility => self.to_string(),
            PostureError::NoAnglesToClassify => "No clear view of neck angle".to_string(),
            PostureError::InvalidLandmarkCount { .. } | PostureError::SerializationError(_) => {
                format!("Landmark input could not be read: {}", self)
            }
            PostureError::ConfigValidationError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            PostureError::ConfigError { message } => format!("Configuration problem: {}", message),
            PostureError::IoError(_) => format!("System error: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PostureError::NoPoseDetected => "Make sure your upper body is inside the frame",
            PostureError::InsufficientVisibility | PostureError::NoAnglesToClassify => {
                "Turn sideways so that one ear and shoulder are clearly visible"
            }
            PostureError::InvalidLandmarkCount { .. } => {
                "Provide the full set of 33 pose landmarks in estimator order"
            }
            PostureError::ConfigValidationError { .. } => {
                "Make sure every minimum angle is less than or equal to its maximum"
            }
            PostureError::ConfigError { .. } => "Check the configuration file syntax",
            PostureError::SerializationError(_) => {
                "Check that the landmark file is valid JSON with x, y, z and visibility fields"
            }
            PostureError::IoError(_) => "Check that the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, PostureError>;
