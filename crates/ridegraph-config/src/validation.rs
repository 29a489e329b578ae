//! Custom validation functions for configuration fields

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Matches #RRGGBB hex colors
pub static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex pattern"));

/// Validate a tracing level filter string
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    match level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ValidationError::new("invalid_log_level")),
    }
}

/// Validate that a path is non-empty and does not name a directory
pub fn validate_file_path(path: &str) -> Result<(), ValidationError> {
    if path.trim().is_empty() {
        return Err(ValidationError::new("empty_path"));
    }
    if path.ends_with('/') || path.ends_with('\\') {
        return Err(ValidationError::new("path_is_directory"));
    }
    Ok(())
}
