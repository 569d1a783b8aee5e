//! Best-effort user profile extracted from free text.
//!
//! Extraction is plain substring matching on the lower-cased utterance.
//! Whatever follows the first occurrence of a marker, up to its next
//! occurrence if any, is taken verbatim (trimmed), including trailing
//! punctuation or unrelated clauses.

use serde::{Deserialize, Serialize};

/// Marker introducing the user's name.
pub const NAME_MARKER: &str = "my name is";

/// Preference keywords, checked in this order.
pub const PREFERENCE_KEYWORDS: [&str; 4] = ["like", "love", "enjoy", "prefer"];

/// Inferred facts about the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// The user's name, if they ever stated one.
    pub name: Option<String>,
    /// Stated preferences, insertion-ordered and free of exact duplicates.
    pub preferences: Vec<String>,
}

impl Profile {
    /// Create an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// The name, if set and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Update the profile from a user utterance.
    pub fn update(&mut self, utterance: &str) {
        let lower = utterance.to_lowercase();

        if let Some(name) = segment_after(&lower, NAME_MARKER) {
            tracing::info!("updated user name to: {name}");
            self.name = Some(name.to_owned());
        }

        for keyword in PREFERENCE_KEYWORDS {
            let Some(preference) = segment_after(&lower, keyword) else {
                continue;
            };
            if self.preferences.iter().any(|p| p == preference) {
                continue;
            }
            tracing::info!("added new preference: {preference}");
            self.preferences.push(preference.to_owned());
        }
    }
}

/// Text between the first and second occurrence of `marker` (or the end
/// of `text`), trimmed.
fn segment_after<'s>(text: &'s str, marker: &str) -> Option<&'s str> {
    text.split(marker).nth(1).map(str::trim)
}
