use crate::dtos::{GenerateLessonRequest, GenerateLessonResponse};
use crate::error::AppError;
use crate::models::lesson::Lesson;
use crate::services::{prompt, sanitize};
use crate::startup::AppState;
use axum::{Json, extract::State};
use validator::Validate;

/// POST /api/generate-lesson
///
/// Linear per-request pipeline: configured check, input validation, prompt
/// construction, one completion call, sanitize/parse, id backfill, respond.
/// No state survives the request.
pub async fn generate_lesson(
    State(state): State<AppState>,
    Json(payload): Json<GenerateLessonRequest>,
) -> Result<Json<GenerateLessonResponse>, AppError> {
    // Configured check comes first: without a key the route is always 503,
    // whatever the input.
    let provider = state.provider.as_ref().ok_or(AppError::NotConfigured)?;

    payload.validate()?;

    let messages = prompt::build_messages(&payload.user_text);
    let completion = provider.complete(&messages).await.map_err(|e| {
        tracing::error!(error = %e, "Lesson generation failed");
        e
    })?;

    let lesson = sanitize::parse_lesson(&completion.content).map_err(|e| {
        tracing::error!(error = %e, "Model output failed to parse");
        e
    })?;

    // Schema check is warn-only: the raw document is returned either way.
    match serde_json::from_value::<Lesson>(lesson.clone()) {
        Ok(typed) => {
            let invalid = typed.invalid_quizzes();
            if !invalid.is_empty() {
                tracing::warn!(
                    quizzes = ?invalid,
                    "Generated quizzes do not have exactly one correct option"
                );
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Generated lesson does not match the drop schema");
        }
    }

    tracing::info!(
        lesson_id = lesson["id"].as_str().unwrap_or("-"),
        prompt_tokens = completion.usage.prompt_tokens,
        completion_tokens = completion.usage.completion_tokens,
        "Lesson generated"
    );

    Ok(Json(GenerateLessonResponse {
        success: true,
        lesson,
        usage: completion.usage,
    }))
}
