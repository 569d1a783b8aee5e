//! Chat session: history + profile + the model that answers.

use crate::{Error, HISTORY_WINDOW, History, Persona, Profile};
use anyhow::anyhow;
use llm::{General, Message, Model, Request};

/// Per-session conversation state.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    /// Every turn exchanged so far.
    pub history: History,
    /// Facts inferred about the user.
    pub profile: Profile,
}

/// A single conversation with one user.
///
/// Owns its state exclusively; turns are processed one at a time.
pub struct Session<M: Model> {
    model: M,
    general: General,
    persona: Persona,
    state: ChatState,
}

impl<M: Model> Session<M> {
    /// Create a new session with empty state.
    pub fn new(model: M, general: General, persona: Persona) -> Self {
        Self {
            model,
            general,
            persona,
            state: ChatState::default(),
        }
    }

    /// The session state.
    pub fn state(&self) -> &ChatState {
        &self.state
    }

    /// The sampling configuration used for every request.
    pub fn general(&self) -> &General {
        &self.general
    }

    /// Build the outbound request from the current state: the system
    /// prompt followed by the most recent turns of history.
    pub fn request(&self) -> Request {
        let system = self.persona.system_prompt(&self.state.profile);
        let window = self.state.history.window(HISTORY_WINDOW);
        let mut messages = Vec::with_capacity(window.len() + 1);
        messages.push(Message::system(system));
        messages.extend_from_slice(window);
        Request::from(&self.general).with_messages(messages)
    }

    /// Process one user utterance.
    ///
    /// The user turn is recorded before the remote call, so it stays in
    /// history even when the call fails. The assistant turn and the
    /// profile update only happen for a non-empty completion.
    pub async fn turn(&mut self, utterance: &str) -> Result<String, Error> {
        self.state.history.push(Message::user(utterance));
        let request = self.request();
        tracing::debug!(
            "sending {} messages to {}",
            request.messages.len(),
            request.model
        );

        let response = match self.model.send(&request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("error in chat completion: {e:#}");
                return Err(Error::Remote(e));
            }
        };

        if response.choices.is_empty() {
            tracing::error!("chat completion returned no choices");
            return Err(Error::Remote(anyhow!("completion returned no choices")));
        }

        let Some(content) = response.content() else {
            tracing::warn!("chat completion returned no content");
            return Err(Error::EmptyCompletion);
        };

        let content = content.to_owned();
        self.state.history.push(Message::assistant(content.clone()));
        self.state.profile.update(utterance);
        Ok(content)
    }

    /// Process one user utterance, flattening errors into their
    /// user-facing text.
    pub async fn handle_turn(&mut self, utterance: &str) -> String {
        match self.turn(utterance).await {
            Ok(content) => content,
            Err(e) => e.to_string(),
        }
    }
}
