//! Session core for parley.
//!
//! Folds chat turns into a bounded context window, extracts a best-effort
//! user profile from free text, and composes the per-turn system prompt.

pub use {
    config::{API_KEY_ENV, Config, LlmConfig, LogConfig, PersonaConfig, expand_env_vars},
    error::{Error, ErrorKind},
    history::{HISTORY_WINDOW, History},
    profile::{NAME_MARKER, PREFERENCE_KEYWORDS, Profile},
    prompt::{DEFAULT_PERSONA, Persona},
    session::{ChatState, Session},
};

pub mod config;
mod error;
mod history;
mod profile;
mod prompt;
mod session;
