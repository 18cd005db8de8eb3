use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use anyhow::{Context, Result};

/// Environment variable holding the upstream API credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable pointing at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "TALKMATE_CONFIG";

const DEFAULT_CONFIG_FILES: [&str; 3] = ["talkmate.yaml", "talkmate.json", "talkmate.toml"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub openai: OpenAIConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on a whole turn; unset means no timeout.
    pub request_timeout_secs: Option<u64>,
    pub max_upload_bytes: usize,
    /// Used when the upload carries no usable file extension.
    pub default_audio_extension: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            request_timeout_secs: None,
            max_upload_bytes: 25 * 1024 * 1024,
            default_audio_extension: ".webm".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Origin allow-list. Each entry maps an origin to whether it is permitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: BTreeMap<String, bool>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        let allowed_origins = [
            "http://localhost",
            "http://localhost:5500",
            "http://127.0.0.1:5500",
            "https://talkmate-frontend.onrender.com",
        ]
        .into_iter()
        .map(|origin| (origin.to_string(), true))
        .collect();

        Self { allowed_origins }
    }
}

impl CorsConfig {
    /// Enabled origins, lowercased. Config map keys arrive lowercased from
    /// files anyway, and browsers send scheme and host in lowercase.
    pub fn permitted_origins(&self) -> impl Iterator<Item = String> + '_ {
        self.allowed_origins
            .iter()
            .filter(|(_, allowed)| **allowed)
            .map(|(origin, _)| origin.to_ascii_lowercase())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAIConfig {
    #[serde(skip_serializing)]
    pub api_key: String,
    pub base_url: String,
    pub transcription_model: String,
    pub chat_model: String,
    pub temperature: f32,
    pub tts_model: String,
    pub tts_voice: String,
    pub tts_format: String,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com/v1".to_string(),
            transcription_model: "whisper-1".to_string(),
            chat_model: "gpt-3.5-turbo-1106".to_string(),
            temperature: 0.7,
            tts_model: "tts-1".to_string(),
            tts_voice: "nova".to_string(),
            tts_format: "mp3".to_string(),
        }
    }
}

impl OpenAIConfig {
    /// The environment credential wins over any value from config files.
    pub fn resolve_api_key(&mut self, from_env: Option<String>) -> Result<()> {
        if let Some(key) = from_env.filter(|k| !k.trim().is_empty()) {
            self.api_key = key;
        }
        if self.api_key.trim().is_empty() {
            anyhow::bail!("{} not found in environment or .env file", API_KEY_ENV);
        }
        Ok(())
    }
}

impl Config {
    /// Load defaults, then the optional config file, then `TALKMATE__*`
    /// environment overrides, and finally resolve the API credential.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var(CONFIG_PATH_ENV).ok();
        let path = match explicit {
            Some(path) => Some(path),
            None => DEFAULT_CONFIG_FILES
                .iter()
                .find(|candidate| Path::new(candidate).exists())
                .map(|candidate| candidate.to_string()),
        };

        let mut config = Self::build(path.as_deref())?;
        config.openai.resolve_api_key(std::env::var(API_KEY_ENV).ok())?;

        tracing::info!(
            config_file = path.as_deref().unwrap_or("<none>"),
            bind = %config.server.bind_addr(),
            "Loaded configuration"
        );
        Ok(config)
    }

    fn build(path: Option<&str>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(Path::new(path)).required(true));
        }
        builder = builder.add_source(
            config::Environment::with_prefix("TALKMATE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| format!("Failed to read configuration from {:?}", path))?;
        let config: Config = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        Ok(config)
    }
}
