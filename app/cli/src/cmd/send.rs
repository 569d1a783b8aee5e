//! One-shot message command.

use crate::session::build_session;
use anyhow::Result;
use clap::Args;
use pcore::{Config, ErrorKind};

/// Send a one-shot message and print the reply.
#[derive(Args, Debug)]
pub struct Send {
    /// Message content.
    pub content: String,
}

impl Send {
    /// Send the message and print the response.
    ///
    /// An empty completion prints the fallback text; a remote failure is
    /// returned so the process exits non-zero.
    pub async fn run(self, config: &Config) -> Result<()> {
        let mut session = build_session(config)?;
        match session.turn(&self.content).await {
            Ok(response) => println!("{response}"),
            Err(e) if e.kind() == ErrorKind::EmptyCompletion => println!("{e}"),
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }
}
