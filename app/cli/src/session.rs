//! Session construction from resolved configuration.

use anyhow::Result;
use llm::{Client, Groq};
use pcore::{Config, Session};
use std::time::Duration;

/// Build a Groq-backed session.
///
/// Fails before any network activity when the API key is missing, the
/// sampling parameters are invalid, or the persona file cannot be read.
pub fn build_session(config: &Config) -> Result<Session<Groq>> {
    let key = config.api_key()?;
    config.validate()?;
    let persona = config.persona()?;

    let mut builder = Client::builder();
    if let Some(secs) = config.llm.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build()?;

    let groq = match config.llm.base_url.as_deref() {
        Some(url) => Groq::custom(client, key, url)?,
        None => Groq::new(client, key)?,
    };
    tracing::info!(
        "session started with model {} at {}",
        config.llm.general.model,
        groq.endpoint()
    );
    Ok(Session::new(groq, config.llm.general.clone(), persona))
}
