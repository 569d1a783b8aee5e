//! Interactive chat command.

use crate::repl::ChatRepl;
use crate::session::build_session;
use anyhow::Result;
use clap::Args;
use pcore::Config;

/// Start an interactive chat.
#[derive(Args, Debug, Default)]
pub struct Chat {
    /// Do not clear the terminal before starting.
    #[arg(long)]
    pub no_clear: bool,
}

impl Chat {
    /// Build a session and enter the interactive REPL.
    pub async fn run(self, config: &Config) -> Result<()> {
        let session = build_session(config)?;
        let mut repl = ChatRepl::new(session, config.persona.greeting.clone())?;
        repl.run(!self.no_clear).await
    }
}
