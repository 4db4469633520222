#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use conversa_learn::config::Settings;
use conversa_learn::services::providers::ChatProvider;
use conversa_learn::startup::{AppState, build_router};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::util::ServiceExt;

pub fn test_settings() -> Settings {
    Settings {
        port: 0,
        openai_api_key: None,
        openai_model: "gpt-4o-mini".to_string(),
        openai_temperature: None,
        static_dir: "static".to_string(),
    }
}

/// Router wired with the given provider (None = not configured).
pub fn app(provider: Option<Arc<dyn ChatProvider>>) -> Router {
    build_router(AppState {
        settings: test_settings(),
        provider,
    })
}

pub async fn post_generate(app: Router, user_text: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/generate-lesson")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "userText": user_text }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    into_json(response).await
}

pub async fn into_json(response: Response<axum::body::Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// A well-formed four-drop lesson matching the prompt's schema example.
pub fn sample_lesson() -> Value {
    json!({
        "title": "Deus é Amor",
        "estimatedTime": "3 minutos",
        "drops": [
            {
                "type": "gancho",
                "sender": "professor",
                "messages": [
                    {"text": "Já parou para pensar no que é o amor?", "delay": 0},
                    {"text": "Vamos descobrir juntos! 💙", "delay": 1500}
                ],
                "interaction": {"type": "continue", "button": "Vamos lá"}
            },
            {
                "type": "conceito",
                "sender": "professor",
                "messages": [
                    {"text": "**Deus é amor** (1 João 4:8) ✝️", "delay": 0}
                ],
                "interaction": {"type": "continue", "button": "Entendi!"},
                "xp": 5
            },
            {
                "type": "reflexao",
                "sender": "professor",
                "messages": [{"text": "Agora vamos testar:", "delay": 0}],
                "interaction": {
                    "type": "quiz",
                    "question": "O que 1 João 4:8 nos ensina?",
                    "options": [
                        {"id": "a", "text": "Deus é amor", "correct": true, "feedback": "Parabéns! 🎉"},
                        {"id": "b", "text": "Deus é distante", "correct": false, "feedback": "Tente novamente! 💪"},
                        {"id": "c", "text": "Deus é indiferente", "correct": false, "feedback": "Quase! 💡"}
                    ],
                    "xpCorrect": 10,
                    "xpIncorrect": 2
                }
            },
            {
                "type": "reforco",
                "sender": "professor",
                "messages": [{"text": "Parabéns! Você completou! 🎊", "delay": 0}],
                "interaction": {"type": "complete", "button": "Finalizar", "bonusXP": 20}
            }
        ]
    })
}
