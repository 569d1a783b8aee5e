//! System prompt assembly.

use crate::{Error, Profile};
use std::path::Path;

/// Built-in persona text.
pub const DEFAULT_PERSONA: &str = include_str!("../persona.md");

/// The static instruction block that opens every system message.
///
/// The text is opaque configuration: it is never parsed or edited, only
/// placed verbatim at the head of the system prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    text: String,
}

impl Persona {
    /// Create a persona from the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Load the persona text from a file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        std::fs::read_to_string(path)
            .map(Self::new)
            .map_err(|e| Error::Config(format!("failed to read persona {}: {e}", path.display())))
    }

    /// The raw persona text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Compose the system prompt for the given profile.
    pub fn system_prompt(&self, profile: &Profile) -> String {
        let mut prompt = self.text.clone();
        if let Some(name) = profile.name() {
            prompt.push_str(&format!(" The user's name is {name}."));
        }
        if !profile.preferences.is_empty() {
            let prefs = profile.preferences.join(", ");
            prompt.push_str(&format!(" Their preferences include: {prefs}."));
        }
        prompt
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::new(DEFAULT_PERSONA)
    }
}
