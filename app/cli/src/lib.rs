//! Parley CLI application: interactive chat and one-shot messages against
//! a hosted chat-completion API.

pub use cmd::{Cli, Command};

pub mod cmd;
pub mod config;
pub mod repl;
pub mod session;
