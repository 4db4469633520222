//! Application startup and lifecycle management.

use crate::config::Settings;
use crate::error::AppError;
use crate::handlers::{health::health_check, lesson::generate_lesson};
use crate::services::providers::ChatProvider;
use crate::services::providers::openai::{OpenAiChatProvider, OpenAiConfig};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

/// Request body limit, matching the original 10mb JSON limit.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Shared application state. The provider is constructed once at startup and
/// shared read-only across request tasks; `None` means no API key was
/// configured and the generate route answers 503.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub provider: Option<Arc<dyn ChatProvider>>,
}

pub fn build_router(state: AppState) -> Router {
    let static_dir = PathBuf::from(&state.settings.static_dir);

    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service("/app", ServeFile::new(static_dir.join("webapp.html")))
        .route_service(
            "/content-creator",
            ServeFile::new(static_dir.join("content-creator.html")),
        )
        .route("/api/generate-lesson", post(generate_lesson))
        .route("/api/health", get(health_check))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(settings: Settings) -> Result<Self, AppError> {
        let provider: Option<Arc<dyn ChatProvider>> = match settings.api_key() {
            Some(api_key) => {
                let config = OpenAiConfig {
                    api_key: api_key.to_string(),
                    model: settings.openai_model.clone(),
                    temperature: settings.temperature(),
                };
                tracing::info!(
                    model = %config.model,
                    temperature = config.temperature,
                    "Initialized OpenAI chat provider"
                );
                Some(Arc::new(OpenAiChatProvider::new(config)))
            }
            None => {
                tracing::warn!(
                    "OPENAI_API_KEY not set; /api/generate-lesson will answer 503"
                );
                None
            }
        };

        let state = AppState { settings, provider };

        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], state.settings.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
