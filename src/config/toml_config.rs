use crate::core::config_store::PostureConfig;
use crate::utils::error::{PostureError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Every bound is optional in the file; missing ones fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    pub right_min_angle: Option<i32>,
    pub right_max_angle: Option<i32>,
    pub left_min_angle: Option<i32>,
    pub left_max_angle: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PostureError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` references with environment values before parsing.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PostureError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn posture_config(&self) -> PostureConfig {
        let defaults = PostureConfig::default();
        let t = &self.thresholds;
        PostureConfig {
            right_min_angle: t.right_min_angle.unwrap_or(defaults.right_min_angle),
            right_max_angle: t.right_max_angle.unwrap_or(defaults.right_max_angle),
            left_min_angle: t.left_min_angle.unwrap_or(defaults.left_min_angle),
            left_max_angle: t.left_max_angle.unwrap_or(defaults.left_max_angle),
        }
    }

    pub fn json_logging(&self) -> bool {
        self.logging.format == "json"
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.posture_config().validate()?;
        validate_non_empty_string("logging.level", &self.logging.level)?;
        validate_one_of("logging.format", &self.logging.format, &LOG_FORMATS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.posture_config(), PostureConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_thresholds_merge_with_defaults() {
        let toml_content = r#"
[thresholds]
right_min_angle = -85
left_max_angle = 120

[logging]
format = "json"
"#;
        let config = AppConfig::from_toml_str(toml_content).unwrap();
        let posture = config.posture_config();
        assert_eq!(posture.right_min_angle, -85);
        assert_eq!(posture.right_max_angle, -63);
        assert_eq!(posture.left_min_angle, 80);
        assert_eq!(posture.left_max_angle, 120);
        assert!(config.json_logging());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("POSTURE_TEST_LEFT_MIN", "75");

        let toml_content = r#"
[thresholds]
left_min_angle = ${POSTURE_TEST_LEFT_MIN}
"#;
        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.posture_config().left_min_angle, 75);

        std::env::remove_var("POSTURE_TEST_LEFT_MIN");
    }

    #[test]
    fn test_inverted_thresholds_fail_validation() {
        let toml_content = r#"
[thresholds]
right_min_angle = -60
right_max_angle = -70
"#;
        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(PostureError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_unknown_log_format_fails_validation() {
        let config = AppConfig::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = AppConfig::from_toml_str("[thresholds\n").unwrap_err();
        assert!(matches!(err, PostureError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[thresholds]\nleft_min_angle = 70\nleft_max_angle = 110\n")
            .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.thresholds.left_min_angle, Some(70));
        assert_eq!(config.thresholds.left_max_angle, Some(110));
    }
}
