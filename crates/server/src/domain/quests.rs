use crate::api::routes::errors::ApiError;

pub const EMPTY_QUEST_NAME: &str = "Quest name cannot be empty";
pub const QUEST_NOT_FOUND: &str = "Quest not found";

/// A quest name is required and must contain something above U+0020.
/// Only ASCII spaces and control characters count as blank.
pub fn validate_quest_name(name: Option<&str>) -> Result<&str, ApiError> {
    match name {
        Some(name) if !name.trim_matches(|c: char| c <= ' ').is_empty() => Ok(name),
        _ => Err(ApiError::Validation(EMPTY_QUEST_NAME.to_string())),
    }
}
