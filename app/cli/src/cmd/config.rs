//! Config management commands: show, init.

use crate::cmd::ConfigCommand;
use crate::config::{generate_default_config, global_config_path, resolve_config_path};
use anyhow::{Context, Result};
use std::path::Path;

/// Dispatch config management subcommands.
pub fn run(action: &ConfigCommand, config_flag: Option<&Path>) -> Result<()> {
    match action {
        ConfigCommand::Show => show(config_flag),
        ConfigCommand::Init { force } => {
            let path = config_flag
                .map(Path::to_path_buf)
                .unwrap_or_else(global_config_path);
            generate_default_config(&path, *force)?;
            println!("Wrote default config to {}", path.display());
            Ok(())
        }
    }
}

fn show(config_flag: Option<&Path>) -> Result<()> {
    let Some(path) = resolve_config_path(config_flag) else {
        println!("No config file found, using built-in defaults");
        return Ok(());
    };
    if !path.exists() {
        println!("No config file at {}", path.display());
        return Ok(());
    }
    let contents =
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    println!("# {}", path.display());
    print!("{contents}");
    Ok(())
}
