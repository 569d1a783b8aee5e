//! CLI argument parsing and subcommand dispatch.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub mod chat;
pub mod config;
pub mod send;

/// Chat with a hosted LLM from the terminal.
#[derive(Parser, Debug)]
#[command(name = "parley", version, about)]
pub struct Cli {
    /// Subcommand to execute (defaults to `chat`).
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Model name override.
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Verbosity level (use -v, -vv, -vvv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an interactive chat.
    Chat(chat::Chat),
    /// Send a one-shot message and print the reply.
    Send(send::Send),
    /// Manage the configuration file.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

/// Config management subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the resolved configuration file.
    Show,
    /// Write the default configuration file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Parse-independent entry point: load `.env`, resolve config, set up
    /// logging and run the selected command.
    pub async fn run(self) -> Result<()> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(e.into());
            }
        }

        let command = self.command.unwrap_or(Command::Chat(chat::Chat::default()));
        if let Command::Config { action } = &command {
            return config::run(action, self.config.as_deref());
        }

        let path = crate::config::resolve_config_path(self.config.as_deref());
        let mut config = crate::config::load_config(path.as_deref())?;
        if let Some(model) = self.model {
            config.llm.general.model = model.into();
        }
        let _guard = init_tracing(self.verbose, &config.log.file)?;
        match &path {
            Some(path) => tracing::debug!("loaded config from {}", path.display()),
            None => tracing::debug!("no config file found, using built-in defaults"),
        }

        match command {
            Command::Chat(chat) => chat.run(&config).await,
            Command::Send(send) => send.run(&config).await,
            Command::Config { .. } => Ok(()),
        }
    }
}

/// Map the `-v` count to a filter directive. `RUST_LOG` takes precedence.
pub fn filter_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "parley=debug",
        2 => "parley=trace",
        3 => "debug",
        _ => "trace",
    }
}

/// Install the file-backed tracing subscriber.
///
/// Log lines go to `file` so they never interleave with the conversation.
/// The returned guard flushes buffered lines when dropped.
pub fn init_tracing(verbose: u8, file: &Path) -> Result<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose)));

    let dir = file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = file
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("invalid log file path {}", file.display()))?;
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(filter)
        .with_target(verbose != 0)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(guard)
}
