use crate::config::toml_config::AppConfig;
use crate::core::config_store::PostureConfig;
use crate::utils::error::Result;
use std::io::Read;
use std::path::Path;

impl super::CliConfig {
    /// Loads the TOML file (if any) and applies the per-bound command-line overrides.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        let t = &mut config.thresholds;
        if let Some(v) = self.right_min {
            t.right_min_angle = Some(v);
        }
        if let Some(v) = self.right_max {
            t.right_max_angle = Some(v);
        }
        if let Some(v) = self.left_min {
            t.left_min_angle = Some(v);
        }
        if let Some(v) = self.left_max {
            t.left_max_angle = Some(v);
        }

        if self.json_log {
            config.logging.format = "json".to_string();
        }
        Ok(config)
    }

    pub fn posture_config(&self) -> Result<PostureConfig> {
        Ok(self.resolve()?.posture_config())
    }

    /// Reads the landmark frame; `-` means stdin.
    pub fn read_frame(&self) -> Result<Vec<u8>> {
        let Some(path) = &self.landmarks else {
            return Ok(Vec::new());
        };
        if path == "-" {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        } else {
            Ok(std::fs::read(Path::new(path))?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::CliConfig;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_overrides_win_over_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[thresholds]\nright_min_angle = -85\nleft_min_angle = 70\n")
            .unwrap();
        let path = file.path().to_str().unwrap();

        let cli = CliConfig::parse_from([
            "posture-check",
            "--config",
            path,
            "--left-min",
            "75",
        ]);
        let posture = cli.posture_config().unwrap();
        assert_eq!(posture.right_min_angle, -85);
        assert_eq!(posture.left_min_angle, 75);
        assert_eq!(posture.left_max_angle, 115);
    }

    #[test]
    fn test_negative_override_values_parse() {
        let cli = CliConfig::parse_from(["posture-check", "--right-max", "-60"]);
        assert_eq!(cli.posture_config().unwrap().right_max_angle, -60);
    }

    #[test]
    fn test_read_frame_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();
        let cli = CliConfig::parse_from([
            "posture-check",
            "--landmarks",
            file.path().to_str().unwrap(),
        ]);
        assert_eq!(cli.read_frame().unwrap(), b"[]");
    }

    #[test]
    fn test_missing_landmark_file_has_user_message() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let cli = CliConfig::parse_from([
            "posture-check",
            "--landmarks",
            missing.to_str().unwrap(),
        ]);
        let err = cli.read_frame().unwrap_err();
        assert!(matches!(err, crate::utils::error::PostureError::IoError(_)));
        assert!(err.user_friendly_message().starts_with("System error:"));
        assert_eq!(
            err.recovery_suggestion(),
            "Check that the file exists and is readable"
        );
    }
}
