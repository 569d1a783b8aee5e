//! Tests for the history window.

use parley_core::{HISTORY_WINDOW, History};
use llm::{Message, Role};

#[test]
fn window_of_short_history_is_everything() {
    let mut history = History::new();
    history.push(Message::user("a"));
    history.push(Message::assistant("b"));
    assert_eq!(history.window(HISTORY_WINDOW).len(), 2);
    assert_eq!(history.window(HISTORY_WINDOW), history.turns());
}

#[test]
fn window_keeps_most_recent_in_order() {
    let mut history = History::new();
    for i in 0..8 {
        history.push(Message::user(i.to_string()));
    }
    let window = history.window(HISTORY_WINDOW);
    let contents: Vec<_> = window.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, ["3", "4", "5", "6", "7"]);
    assert_eq!(history.len(), 8);
}

#[test]
fn empty_history() {
    let history = History::new();
    assert!(history.is_empty());
    assert!(history.window(HISTORY_WINDOW).is_empty());
    assert!(history.last().is_none());
}

#[test]
fn last_is_most_recent_turn() {
    let mut history = History::new();
    history.push(Message::user("question"));
    history.push(Message::assistant("answer"));
    let last = history.last().unwrap();
    assert_eq!(last.role, Role::Assistant);
    assert_eq!(last.content, "answer");
}
