//! Configuration loading, validation, and management for Airwave.
//!
//! Loads configuration from `~/.airwave/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.airwave/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP gateway settings
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Model provider credentials and models
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Generation parameters shared by both providers
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Where the framework content is read from
    #[serde(default)]
    pub framework: FrameworkConfig,

    /// Context budgets, in approximate tokens
    #[serde(default)]
    pub budgets: BudgetConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    /// Origin allowed by CORS. `None` leaves browsers to same-origin only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_origin: Option<String>,
}

fn default_port() -> u16 {
    42618
}
fn default_host() -> String {
    "127.0.0.1".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            allowed_origin: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default = "ProviderConfig::openai")]
    pub openai: ProviderConfig,

    #[serde(default = "ProviderConfig::anthropic")]
    pub anthropic: ProviderConfig,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            openai: ProviderConfig::openai(),
            anthropic: ProviderConfig::anthropic(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL override, e.g. for a proxy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    pub model: String,
}

impl ProviderConfig {
    pub fn openai() -> Self {
        Self {
            api_key: None,
            api_url: None,
            model: "gpt-4".into(),
        }
    }

    pub fn anthropic() -> Self {
        Self {
            api_key: None,
            api_url: None,
            model: "claude-3-sonnet-20240229".into(),
        }
    }

    /// True when a non-empty credential is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

/// Redact a secret for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &redact(&self.api_key))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Maximum tokens per model response
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_max_tokens() -> u32 {
    1000
}
fn default_temperature() -> f32 {
    0.7
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkConfig {
    /// Bundled framework document with START/END section markers.
    #[serde(default = "default_bundle_path")]
    pub bundle_path: PathBuf,

    /// Plain-text fallback document.
    #[serde(default = "default_raw_path")]
    pub raw_path: PathBuf,
}

fn default_bundle_path() -> PathBuf {
    PathBuf::from("../publicradio.txt")
}
fn default_raw_path() -> PathBuf {
    PathBuf::from("../publicradio.txt")
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            bundle_path: default_bundle_path(),
            raw_path: default_raw_path(),
        }
    }
}

/// Context budgets in approximate tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Complex requests: workflows and auxiliary material included
    #[serde(default = "default_complex_budget")]
    pub complex: usize,

    /// Persona requests that are not complex
    #[serde(default = "default_persona_budget")]
    pub persona: usize,

    /// Everything else
    #[serde(default = "default_plain_budget")]
    pub plain: usize,
}

fn default_complex_budget() -> usize {
    25_000
}
fn default_persona_budget() -> usize {
    20_000
}
fn default_plain_budget() -> usize {
    15_000
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            complex: default_complex_budget(),
            persona: default_persona_budget(),
            plain: default_plain_budget(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.airwave/config.toml),
    /// then apply environment overrides:
    /// - `OPENAI_API_KEY`
    /// - `ANTHROPIC_API_KEY`
    /// - `AIRWAVE_FRAMEWORK_PATH` (bundle path)
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides using `lookup` to read variables.
    ///
    /// Credentials in the environment win over the file.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty("OPENAI_API_KEY") {
            self.providers.openai.api_key = Some(key);
        }
        if let Some(key) = non_empty("ANTHROPIC_API_KEY") {
            self.providers.anthropic.api_key = Some(key);
        }
        if let Some(path) = non_empty("AIRWAVE_FRAMEWORK_PATH") {
            self.framework.bundle_path = PathBuf::from(path);
        }
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".airwave")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.generation.temperature) {
            return Err(ConfigError::ValidationError(
                "generation.temperature must be between 0.0 and 2.0".into(),
            ));
        }

        if self.generation.max_tokens == 0 {
            return Err(ConfigError::ValidationError(
                "generation.max_tokens must be greater than zero".into(),
            ));
        }

        for (name, value) in [
            ("complex", self.budgets.complex),
            ("persona", self.budgets.persona),
            ("plain", self.budgets.plain),
        ] {
            if value == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "budgets.{name} must be greater than zero"
                )));
            }
        }

        Ok(())
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigError> for airwave_core::Error {
    fn from(err: ConfigError) -> Self {
        airwave_core::Error::Config {
            message: err.to_string(),
        }
    }
}
