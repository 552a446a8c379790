use crate::utils::error::{PacerError, Result};
use std::time::Duration;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PacerError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PacerError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Parses a non-negative, finite number of seconds such as `0.25`.
pub fn parse_seconds(field_name: &str, raw: &str) -> Result<Duration> {
    let invalid = |reason: String| PacerError::InvalidConfigValue {
        field: field_name.to_string(),
        value: raw.to_string(),
        reason,
    };

    let secs: f64 = raw
        .trim()
        .parse()
        .map_err(|e| invalid(format!("Not a number: {}", e)))?;

    if !secs.is_finite() {
        return Err(invalid("Value must be a finite number of seconds".to_string()));
    }
    if secs < 0.0 {
        return Err(invalid("Value cannot be negative".to_string()));
    }

    Duration::try_from_secs_f64(secs).map_err(|e| invalid(e.to_string()))
}
