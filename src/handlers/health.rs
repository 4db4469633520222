use crate::startup::AppState;
use axum::{Json, extract::State, response::IntoResponse};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let openai = if state.provider.is_some() {
        "configured"
    } else {
        "not configured"
    };

    Json(json!({
        "status": "ok",
        "openai": openai,
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}
