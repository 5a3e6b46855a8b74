//! Field validation helpers shared by the resource input validators.
//!
//! Field names in messages are the camelCase names the client sent.

use crate::error::AppError;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// Rejects empty and whitespace-only strings, and strings longer than `max` characters.
pub fn require_text(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    require_max_length(field, value, max)
}

pub fn require_max_length(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

/// Inclusive range check.
pub fn require_range(field: &str, value: i32, min: i32, max: i32) -> Result<(), AppError> {
    if value < min || value > max {
        return Err(AppError::Validation(format!(
            "{} must be between {} and {}",
            field, min, max
        )));
    }
    Ok(())
}

pub fn require_one_of(field: &str, value: &str, allowed: &[&str]) -> Result<(), AppError> {
    if !allowed.contains(&value) {
        return Err(AppError::Validation(format!(
            "{} must be one of: {}",
            field,
            allowed.join(", ")
        )));
    }
    Ok(())
}

/// Accepts `#RRGGBB`.
pub fn require_hex_color(field: &str, value: &str) -> Result<(), AppError> {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());

    if !valid {
        return Err(AppError::Validation(format!(
            "{} must be a hex color like #A8A878",
            field
        )));
    }
    Ok(())
}

/// Applies `check` when the optional value is present.
pub fn optional<T>(
    value: Option<&T>,
    check: impl FnOnce(&T) -> Result<(), AppError>,
) -> Result<(), AppError> {
    match value {
        Some(value) => check(value),
        None => Ok(()),
    }
}

/// Joins category names as "a", "a and b", "a, b and c".
pub fn join_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
