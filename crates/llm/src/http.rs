//! Shared HTTP transport for OpenAI-compatible chat completions.
//!
//! `HttpProvider` wraps a `reqwest::Client` with pre-configured headers and
//! the endpoint URL, and turns non-2xx replies into errors that carry the
//! status code and the API's own error message.

use crate::response::ApiError;
use crate::{Request, Response};
use anyhow::{Result, bail};
use reqwest::{
    Client, Method,
    header::{self, HeaderMap, HeaderValue},
};

/// Shared HTTP transport for OpenAI-compatible providers.
#[derive(Clone)]
pub struct HttpProvider {
    client: Client,
    headers: HeaderMap,
    endpoint: String,
}

impl HttpProvider {
    /// Create a provider with Bearer token authentication.
    pub fn bearer(client: Client, key: &str, endpoint: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        let mut auth: HeaderValue = format!("Bearer {key}").parse()?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        Ok(Self {
            client,
            headers,
            endpoint: endpoint.to_owned(),
        })
    }

    /// Send a request and deserialize the response as JSON.
    pub async fn send(&self, body: &Request) -> Result<Response> {
        tracing::trace!("request: {}", serde_json::to_string(body)?);
        let response = self
            .client
            .request(Method::POST, &self.endpoint)
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::trace!("response ({status}): {text}");
        if !status.is_success() {
            match serde_json::from_str::<ApiError>(&text) {
                Ok(err) => bail!("API returned {status}: {}", err.error.message),
                Err(_) => bail!("API returned {status}: {text}"),
            }
        }

        serde_json::from_str(&text).map_err(Into::into)
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get a reference to the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}
