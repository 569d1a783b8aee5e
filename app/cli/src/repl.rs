//! Interactive chat REPL.

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use llm::Model;
use pcore::Session;
use rustyline::error::ReadlineError;

/// Word that ends the conversation, compared case-insensitively.
pub const EXIT_SENTINEL: &str = "exit";

/// Interactive chat REPL over a single session.
pub struct ChatRepl<M: Model> {
    session: Session<M>,
    greeting: String,
    editor: rustyline::DefaultEditor,
}

impl<M: Model> ChatRepl<M> {
    /// Create a new REPL for the given session.
    pub fn new(session: Session<M>, greeting: impl Into<String>) -> Result<Self> {
        Ok(Self {
            session,
            greeting: greeting.into(),
            editor: rustyline::DefaultEditor::new()?,
        })
    }

    /// Run the interactive loop until `exit`, Ctrl+C or Ctrl+D.
    pub async fn run(&mut self, clear: bool) -> Result<()> {
        if clear {
            execute!(std::io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        }

        print_divider();
        println!("{}", self.greeting);
        println!("Type '{EXIT_SENTINEL}' to end the conversation");
        print_divider();

        loop {
            match self.editor.readline("You: ") {
                Ok(line) => {
                    let line = line.trim();
                    if is_exit(line) {
                        print_divider();
                        println!("Thank you for chatting! Goodbye!");
                        print_divider();
                        break;
                    }
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(line);
                    let reply = self.session.handle_turn(line).await;
                    println!("\nAssistant: {reply}\n");
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                    println!("\nGoodbye!");
                    break;
                }
                Err(e) => {
                    tracing::error!("readline failed: {e}");
                    println!("\nAn error occurred: {e}");
                    break;
                }
            }
        }

        tracing::info!(
            "chat ended after {} turns",
            self.session.state().history.len()
        );
        Ok(())
    }
}

/// Whether a trimmed input line ends the conversation.
pub fn is_exit(line: &str) -> bool {
    line.eq_ignore_ascii_case(EXIT_SENTINEL)
}

fn print_divider() {
    println!("\n{}\n", "=".repeat(50));
}
