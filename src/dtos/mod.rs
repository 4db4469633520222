use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::models::usage::UsageStats;

/// Maximum accepted input length, in characters (not bytes, not trimmed).
pub const MAX_USER_TEXT_CHARS: usize = 5000;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateLessonRequest {
    #[validate(custom(function = "validate_user_text"))]
    pub user_text: String,
}

fn validate_user_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::new("empty_input"));
    }
    if text.chars().count() > MAX_USER_TEXT_CHARS {
        return Err(ValidationError::new("too_long"));
    }
    Ok(())
}

/// Success envelope for the generate-lesson route. The lesson is the raw
/// JSON document produced by the model (after fence stripping and id
/// backfill), passed through without schema rejection.
#[derive(Debug, Serialize)]
pub struct GenerateLessonResponse {
    pub success: bool,
    pub lesson: Value,
    pub usage: UsageStats,
}
