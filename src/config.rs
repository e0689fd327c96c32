use anyhow::{Context, Result};
use serde::Deserialize;

use crate::summary::DEFAULT_PROMPT;

/// Environment overrides use this prefix, e.g. `DIGEST__GENERATION__BASE_URL`
pub const ENV_PREFIX: &str = "DIGEST";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub generation: GenerationConfig,
    pub transcripts: TranscriptsConfig,
    pub prompt: PromptConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
    /// CORS origins; empty allows any origin
    pub allowed_origins: Vec<String>,
    /// Directory served at `/` (index page and assets)
    pub static_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Ollama-compatible API root
    pub base_url: String,
    pub default_model: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranscriptsConfig {
    /// Working and archived caption files
    pub dir: String,
    pub default_language: String,
    pub chunk_duration_secs: u64,
    pub retrieval_timeout_secs: u64,
    pub yt_dlp_binary: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub base_prompt: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "transcript-digest".to_string(),
            http: HttpConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8080,
            allowed_origins: Vec::new(),
            static_dir: None,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434/api".to_string(),
            default_model: "llama3.2:latest".to_string(),
            timeout_secs: 120,
        }
    }
}

impl Default for TranscriptsConfig {
    fn default() -> Self {
        Self {
            dir: "transcripts".to_string(),
            default_language: "en".to_string(),
            chunk_duration_secs: 300, // 5 minutes
            retrieval_timeout_secs: 300,
            yt_dlp_binary: "yt-dlp".to_string(),
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            base_prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Config {
    /// Load from a config file (extension optional) layered with environment overrides
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .with_context(|| format!("Failed to load config from {}", path))?;

        Ok(settings.try_deserialize()?)
    }

    /// Parse TOML text without environment overrides
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
