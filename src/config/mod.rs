use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Default sampling temperature when OPENAI_TEMPERATURE is absent or unparseable.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_port")]
    pub port: u16,
    /// API key for the completion service. When absent the generate-lesson
    /// route answers 503 and no client is constructed.
    #[serde(default)]
    pub openai_api_key: Option<String>,
    #[serde(default = "default_model")]
    pub openai_model: String,
    /// Kept as the raw string so an unparseable override falls back silently.
    #[serde(default)]
    pub openai_temperature: Option<String>,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_port() -> u16 {
    3000
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

impl Settings {
    /// Resolve configuration once at startup: optional `configuration` file,
    /// overridden by environment variables (PORT, OPENAI_API_KEY,
    /// OPENAI_MODEL, OPENAI_TEMPERATURE, STATIC_DIR).
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::default())
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn temperature(&self) -> f32 {
        self.openai_temperature
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_TEMPERATURE)
    }

    /// An empty OPENAI_API_KEY counts as not configured.
    pub fn api_key(&self) -> Option<&str> {
        self.openai_api_key.as_deref().filter(|key| !key.is_empty())
    }
}
