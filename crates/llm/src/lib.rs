//! Chat-completion types and the HTTP provider used by parley.
//!
//! This crate provides the wire types shared by the session core and the
//! remote API: `Message`, `Request`, `Response`, the `General` sampling
//! config, the `Model` trait, and `Groq`, an OpenAI-compatible provider
//! built on `HttpProvider`.

pub use config::{DEFAULT_MODEL, General};
pub use groq::{ENDPOINT, Groq};
pub use http::HttpProvider;
pub use message::{Message, Role};
pub use provider::Model;
pub use request::Request;
pub use reqwest::{self, Client};
pub use response::{Choice, CompletionMeta, Delta, FinishReason, Response, Usage};

mod config;
mod groq;
mod http;
mod message;
mod provider;
mod request;
mod response;
