//! Conversation history.

use llm::Message;

/// Number of most recent turns sent with each request.
pub const HISTORY_WINDOW: usize = 5;

/// Append-only, chronologically ordered list of turns.
#[derive(Debug, Clone, Default)]
pub struct History {
    turns: Vec<Message>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn.
    pub fn push(&mut self, turn: Message) {
        self.turns.push(turn);
    }

    /// The most recent `size` turns, oldest first.
    pub fn window(&self, size: usize) -> &[Message] {
        let start = self.turns.len().saturating_sub(size);
        &self.turns[start..]
    }

    /// All turns, oldest first.
    pub fn turns(&self) -> &[Message] {
        &self.turns
    }

    /// Get the last turn, if any.
    pub fn last(&self) -> Option<&Message> {
        self.turns.last()
    }

    /// Number of turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether no turn has been recorded.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
