use crate::utils::error::{PostureError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks that `[min, max]` is a usable closed interval.
pub fn validate_band(field_name: &str, min: i32, max: i32) -> Result<()> {
    if min > max {
        return Err(PostureError::ConfigValidationError {
            field: field_name.to_string(),
            value: format!("[{}, {}]", min, max),
            reason: "minimum angle must not exceed maximum angle".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(PostureError::ConfigValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be one of: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PostureError::ConfigValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
