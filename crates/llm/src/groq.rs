//! Groq LLM provider

use crate::{HttpProvider, Model, Request, Response};
use anyhow::Result;
use reqwest::Client;

/// Groq's OpenAI-compatible chat completions endpoint.
pub const ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

/// The Groq LLM provider
#[derive(Clone)]
pub struct Groq {
    http: HttpProvider,
}

impl Groq {
    /// Create a provider for the public Groq endpoint.
    pub fn new(client: Client, key: &str) -> Result<Self> {
        Self::custom(client, key, ENDPOINT)
    }

    /// Create a provider for a custom OpenAI-compatible endpoint.
    pub fn custom(client: Client, key: &str, endpoint: &str) -> Result<Self> {
        Ok(Self {
            http: HttpProvider::bearer(client, key, endpoint)?,
        })
    }

    /// The endpoint requests are posted to.
    pub fn endpoint(&self) -> &str {
        self.http.endpoint()
    }
}

impl Model for Groq {
    async fn send(&self, request: &Request) -> Result<Response> {
        self.http.send(request).await
    }
}
