use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses an optional u64 value, treating an empty string like a missing one.
///
/// # Arguments
/// - `value` - Optional String to parse
///
/// # Returns
/// - `Ok(Some(u64))` - Value present and parsed
/// - `Ok(None)` - Value missing or empty
/// - `Err(AppError::InternalErr(ParseStringId))` - Value present but not a u64
pub fn parse_optional_u64_from_string(value: Option<String>) -> Result<Option<u64>, AppError> {
    match value {
        Some(value) if !value.trim().is_empty() => parse_u64_from_string(value).map(Some),
        _ => Ok(None),
    }
}
