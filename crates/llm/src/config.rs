//! Sampling configuration for a chat

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Default model served by Groq.
pub const DEFAULT_MODEL: &str = "llama-3.2-90b-text-preview";

/// Chat configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct General {
    /// The model to use
    pub model: CompactString,

    /// Sampling temperature
    pub temperature: f64,

    /// Maximum number of tokens to generate
    pub max_tokens: usize,
}

impl General {
    /// Create a new configuration for the given model
    pub fn new(model: impl Into<CompactString>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }
}

impl Default for General {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            temperature: 0.7,
            max_tokens: 1000,
        }
    }
}
