//! Configuration module for promptchart.
//!
//! Handles the TOML config file, environment variable expansion, and settings.

mod settings;

pub use settings::{
    expand_env_vars, CatalogSettings, LlmSettings, LoggingSettings, ServerSettings, Settings,
    SettingsError, API_KEY_ENV_VAR, CONFIG_ENV_VAR,
};
