use crate::utils::error::{GreeterError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GreeterError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GreeterError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// The greeting is printed as exactly one line, so names may not break it.
pub fn validate_single_line(field_name: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(GreeterError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must not contain line breaks".to_string(),
        });
    }
    Ok(())
}

/// Accepts a single level name (`trace`..`error`), not a filter directive list.
pub fn validate_log_level(field_name: &str, value: &str) -> Result<tracing::Level> {
    value
        .trim()
        .parse::<tracing::Level>()
        .map_err(|_| GreeterError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected one of: trace, debug, info, warn, error".to_string(),
        })
}
