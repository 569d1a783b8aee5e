//! OpenAI-compatible chat completions request body.

use crate::{General, Message};
use compact_str::CompactString;
use serde::Serialize;

/// Chat completions request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request {
    /// The messages to send.
    pub messages: Vec<Message>,
    /// The model identifier.
    pub model: CompactString,
    /// Temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>,
}

impl Request {
    /// Create a new request for the given model.
    pub fn new(model: impl Into<CompactString>) -> Self {
        Self {
            messages: Vec::new(),
            model: model.into(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the messages for this request.
    pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = messages;
        self
    }
}

impl From<&General> for Request {
    fn from(general: &General) -> Self {
        Self {
            messages: Vec::new(),
            model: general.model.clone(),
            temperature: Some(general.temperature),
            max_tokens: Some(general.max_tokens),
        }
    }
}
