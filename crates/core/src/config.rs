//! Parley configuration loaded from TOML.

use crate::{Error, Persona};
use anyhow::Context;
use llm::General;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote completion API configuration.
    pub llm: LlmConfig,
    /// Persona and greeting.
    pub persona: PersonaConfig,
    /// Log sink configuration.
    pub log: LogConfig,
}

/// Remote completion API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Model and sampling parameters.
    #[serde(flatten)]
    pub general: General,
    /// API key (supports `${ENV_VAR}` expansion).
    pub api_key: String,
    /// Optional endpoint override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Optional HTTP timeout in seconds. No timeout when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            general: General::default(),
            api_key: format!("${{{API_KEY_ENV}}}"),
            base_url: None,
            timeout_secs: None,
        }
    }
}

/// Persona configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaConfig {
    /// File replacing the built-in persona text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Banner printed when an interactive chat starts.
    pub greeting: String,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            path: None,
            greeting: "Welcome to WeHouse!!".to_owned(),
        }
    }
}

/// Log sink configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// File that receives log lines.
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("parley.log"),
        }
    }
}

impl Config {
    /// Parse a TOML string, then expand `${VAR}` references in the
    /// `llm.api_key` and `llm.base_url` values.
    pub fn from_toml(toml_str: &str) -> anyhow::Result<Self> {
        let mut config: Self = toml::from_str(toml_str)?;
        config.expand();
        Ok(config)
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Configuration with defaults, expanding the default key reference
    /// against the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.expand();
        config
    }

    fn expand(&mut self) {
        self.llm.api_key = expand_env_vars(&self.llm.api_key);
        if let Some(url) = &self.llm.base_url {
            self.llm.base_url = Some(expand_env_vars(url));
        }
    }

    /// The API key, or [`Error::MissingApiKey`] when it is empty.
    pub fn api_key(&self) -> Result<&str, Error> {
        let key = self.llm.api_key.trim();
        if key.is_empty() {
            return Err(Error::MissingApiKey(API_KEY_ENV.to_owned()));
        }
        Ok(key)
    }

    /// Check sampling parameters.
    pub fn validate(&self) -> Result<(), Error> {
        let general = &self.llm.general;
        if general.model.trim().is_empty() {
            return Err(Error::Config("llm.model must not be empty".to_owned()));
        }
        if !(0.0..=2.0).contains(&general.temperature) {
            return Err(Error::Config(format!(
                "llm.temperature must be within 0.0..=2.0, got {}",
                general.temperature
            )));
        }
        if general.max_tokens == 0 {
            return Err(Error::Config("llm.max_tokens must be positive".to_owned()));
        }
        Ok(())
    }

    /// Resolve the persona: the configured file, or the built-in text.
    pub fn persona(&self) -> Result<Persona, Error> {
        match &self.persona.path {
            Some(path) => Persona::load(path),
            None => Ok(Persona::default()),
        }
    }
}

/// Expand `${VAR}` patterns in a string with environment variable values.
///
/// Unknown variables are replaced with an empty string.
pub fn expand_env_vars(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && chars.peek() == Some(&'{') {
            chars.next();
            let mut var_name = String::new();
            for c in chars.by_ref() {
                if c == '}' {
                    break;
                }
                var_name.push(c);
            }
            if let Ok(val) = std::env::var(&var_name) {
                result.push_str(&val);
            }
        } else {
            result.push(ch);
        }
    }

    result
}
