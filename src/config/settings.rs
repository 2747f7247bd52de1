//! TOML-based configuration for promptchart.
//!
//! Supports a config file (promptchart.toml) with environment variable expansion.
//!
//! Example configuration:
//! ```toml
//! [llm]
//! api_key = "${OPENAI_API_KEY}"
//! model = "gpt-4o-mini"
//! base_url = "https://api.openai.com/v1"
//! max_tokens = 1000
//!
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [catalog]
//! path = "./catalog.json"  # built-in sample data when omitted
//!
//! [logging]
//! filter = "info"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::intent::openai::{DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use crate::intent::OpenAiConfig;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PROMPTCHART_CONFIG";

/// Fallback source for the model API key.
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Intent source (language model) configuration.
    pub llm: LlmSettings,

    /// HTTP server configuration.
    pub server: ServerSettings,

    /// Dataset catalog configuration.
    pub catalog: CatalogSettings,

    /// Logging configuration.
    pub logging: LoggingSettings,
}

/// Intent source configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LlmSettings {
    /// API key (supports ${ENV_VAR} expansion). Falls back to `OPENAI_API_KEY`.
    pub api_key: String,

    /// Chat model name.
    pub model: String,

    /// Base URL of an OpenAI-compatible API.
    pub base_url: String,

    /// Completion token cap.
    pub max_tokens: u32,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl LlmSettings {
    /// The API key with environment variables expanded.
    ///
    /// An empty key falls back to `OPENAI_API_KEY`; if that is unset too the
    /// result is empty and the intent source reports the missing key.
    pub fn resolved_api_key(&self) -> Result<String, SettingsError> {
        let key = expand_env_vars(&self.api_key)?;
        if key.is_empty() {
            return Ok(env::var(API_KEY_ENV_VAR).unwrap_or_default());
        }
        Ok(key)
    }

    /// Build the intent source configuration.
    pub fn to_openai_config(&self) -> Result<OpenAiConfig, SettingsError> {
        if self.max_tokens == 0 {
            return Err(SettingsError::InvalidConfig(
                "llm.max_tokens must be greater than 0".to_string(),
            ));
        }
        Ok(OpenAiConfig {
            api_key: self.resolved_api_key()?,
            model: self.model.clone(),
            base_url: expand_env_vars(&self.base_url)?,
            max_tokens: self.max_tokens,
        })
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerSettings {
    /// `host:port` for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Dataset catalog configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CatalogSettings {
    /// JSON catalog file. The built-in sample catalog is used when unset.
    pub path: Option<String>,
}

impl CatalogSettings {
    /// Catalog path with environment variables expanded.
    pub fn resolved_path(&self) -> Result<Option<PathBuf>, SettingsError> {
        self.path
            .as_deref()
            .map(|p| expand_env_vars(p).map(PathBuf::from))
            .transpose()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive. `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `PROMPTCHART_CONFIG`
    /// 2. `./promptchart.toml`
    /// 3. `~/.config/promptchart/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("promptchart.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("promptchart").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        // Return defaults if no config file found
        Ok(Settings::default())
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        let var_name: String = if chars.peek() == Some(&'{') {
            chars.next(); // consume '{'
            let mut name = String::new();
            for ch in chars.by_ref() {
                if ch == '}' {
                    break;
                }
                name.push(ch);
            }
            name
        } else {
            let mut name = String::new();
            while let Some(&ch) = chars.peek() {
                if !(ch.is_alphanumeric() || ch == '_') {
                    break;
                }
                name.push(ch);
                chars.next();
            }
            if name.is_empty() {
                // Just a lone $, keep it
                result.push('$');
                continue;
            }
            name
        };

        let value =
            env::var(&var_name).map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
        result.push_str(&value);
    }

    Ok(result)
}
