//! Provider abstraction for chat completions

use crate::{Request, Response};
use anyhow::Result;

/// A chat-completion backend.
///
/// Constructors are inherent methods on each provider, never called
/// polymorphically.
pub trait Model: Clone {
    /// Send a chat completion request.
    fn send(&self, request: &Request) -> impl Future<Output = Result<Response>> + Send;
}

/// `()` as a no-op Model for testing (panics on send).
impl Model for () {
    async fn send(&self, _request: &Request) -> Result<Response> {
        panic!("unit Model::send called, not intended for real completions");
    }
}
