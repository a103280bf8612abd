//! Configuration management for the Viajero planner
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::ViajeroError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the Viajero planner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViajeroConfig {
    /// Language model configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Web search configuration
    #[serde(default)]
    pub search: SearchConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Language model settings.
///
/// Holds no credential: the API key is supplied per run and unknown fields
/// such as `api_key` are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    /// Provider name (only `openai` is supported)
    #[serde(default = "default_llm_provider")]
    pub provider: String,
    /// Base URL of the completion API
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,
    /// Model identifier
    #[serde(default = "default_llm_model")]
    pub model: String,
    /// Sampling temperature
    #[serde(default = "default_llm_temperature")]
    pub temperature: f32,
    /// Request timeout in seconds
    #[serde(default = "default_llm_timeout")]
    pub timeout_seconds: u32,
}

/// Web search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// DuckDuckGo HTML endpoint
    #[serde(default = "default_search_base_url")]
    pub base_url: String,
    /// DuckDuckGo region code (`wt-wt` is "no region")
    #[serde(default = "default_search_region")]
    pub region: String,
    /// Maximum number of snippets kept per query
    #[serde(default = "default_search_max_results")]
    pub max_results: u32,
    /// Request timeout in seconds
    #[serde(default = "default_search_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_llm_provider() -> String {
    "openai".to_string()
}

fn default_llm_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_llm_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_llm_temperature() -> f32 {
    0.5
}

fn default_llm_timeout() -> u32 {
    120
}

fn default_search_base_url() -> String {
    "https://html.duckduckgo.com/html/".to_string()
}

fn default_search_region() -> String {
    "wt-wt".to_string()
}

fn default_search_max_results() -> u32 {
    5
}

fn default_search_timeout() -> u32 {
    30
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            base_url: default_llm_base_url(),
            model: default_llm_model(),
            temperature: default_llm_temperature(),
            timeout_seconds: default_llm_timeout(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_search_base_url(),
            region: default_search_region(),
            max_results: default_search_max_results(),
            timeout_seconds: default_search_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ViajeroConfig {
    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // VIAJERO_LLM__MODEL -> llm.model
        builder = builder.add_source(
            Environment::with_prefix("VIAJERO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: ViajeroConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("viajero").join("config.toml"))
    }

    /// Apply default values to blank configuration fields
    pub fn apply_defaults(&mut self) {
        if self.llm.provider.is_empty() {
            self.llm.provider = default_llm_provider();
        }
        if self.llm.base_url.is_empty() {
            self.llm.base_url = default_llm_base_url();
        }
        if self.llm.model.is_empty() {
            self.llm.model = default_llm_model();
        }
        if self.llm.timeout_seconds == 0 {
            self.llm.timeout_seconds = default_llm_timeout();
        }
        if self.search.base_url.is_empty() {
            self.search.base_url = default_search_base_url();
        }
        if self.search.region.is_empty() {
            self.search.region = default_search_region();
        }
        if self.search.max_results == 0 {
            self.search.max_results = default_search_max_results();
        }
        if self.search.timeout_seconds == 0 {
            self.search.timeout_seconds = default_search_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(
                ViajeroError::config("LLM temperature must be between 0.0 and 2.0").into(),
            );
        }

        if self.llm.timeout_seconds > 600 {
            return Err(ViajeroError::config("LLM timeout cannot exceed 600 seconds").into());
        }

        if self.search.timeout_seconds > 300 {
            return Err(ViajeroError::config("Search timeout cannot exceed 300 seconds").into());
        }

        if self.search.max_results > 25 {
            return Err(ViajeroError::config("Search max results cannot exceed 25").into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(ViajeroError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(ViajeroError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("LLM", &self.llm.base_url),
            ("Search", &self.search.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ViajeroError::config(format!(
                    "{name} base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}
