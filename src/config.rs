use log::{info, warn};

/// Environment variable naming the prediction service location.
pub const API_URL_ENV: &str = "PERSONALITY_API_URL";

/// Used when neither the runtime environment nor the build embedded a value.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Runtime,
    Embedded,
    Default,
}

impl ConfigSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigSource::Runtime => "runtime",
            ConfigSource::Embedded => "embedded",
            ConfigSource::Default => "default",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub api_url_source: ConfigSource,
}

impl AppConfig {
    /// Resolve configuration from `.env`, the process environment and the
    /// values embedded by build.rs, in that order of precedence.
    pub fn from_env() -> Self {
        // Load .env file if it exists for development
        let _ = dotenvy::dotenv();

        Self::resolve(
            std::env::var(API_URL_ENV).ok(),
            option_env!("PERSONALITY_API_URL"),
        )
    }

    pub fn resolve(runtime: Option<String>, embedded: Option<&str>) -> Self {
        if let Some(value) = runtime.filter(|v| !v.trim().is_empty()) {
            return Self {
                api_url: value.trim().to_string(),
                api_url_source: ConfigSource::Runtime,
            };
        }

        if let Some(value) = embedded.filter(|v| !v.trim().is_empty()) {
            return Self {
                api_url: value.trim().to_string(),
                api_url_source: ConfigSource::Embedded,
            };
        }

        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_url_source: ConfigSource::Default,
        }
    }
}

pub fn log_environment_status(config: &AppConfig) {
    info!("🔧 Environment configuration status:");
    match config.api_url_source {
        ConfigSource::Default => warn!(
            "⚠️ {} not set (neither runtime nor embedded), using {}",
            API_URL_ENV, config.api_url
        ),
        source => info!("✅ {}: {} ({})", API_URL_ENV, config.api_url, source.as_str()),
    }
}
