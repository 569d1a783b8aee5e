//! Configuration resolution for the CLI.
//!
//! Resolves config.toml in priority order:
//! 1. `--config <path>` flag (explicit override)
//! 2. `{cwd}/.parley/config.toml` (workspace config)
//! 3. `~/.config/parley/config.toml` (global default)
//!
//! With no file at all, built-in defaults are used and the API key comes
//! straight from the environment.

use anyhow::{Context, Result, bail};
use pcore::Config;
use std::path::{Path, PathBuf};

/// Config directory name under the platform config dir.
pub const CONFIG_DIR: &str = "parley";

/// Config file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the config file path following the priority chain, if any exists.
pub fn resolve_config_path(config_flag: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = config_flag {
        return Some(path.to_path_buf());
    }

    let workspace_path = Path::new(".parley").join(CONFIG_FILE);
    if workspace_path.exists() {
        return Some(workspace_path);
    }

    let global_path = global_config_path();
    global_path.exists().then_some(global_path)
}

/// Resolve config following the priority chain.
pub fn resolve_config(config_flag: Option<&Path>) -> Result<Config> {
    load_config(resolve_config_path(config_flag).as_deref())
}

/// Load the config at `path`, or the built-in defaults when there is none.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::from_env()),
    }
}

/// Path to the global default config.
pub fn global_config_path() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join(CONFIG_DIR)
        .join(CONFIG_FILE)
}

/// Write the default config to `path`.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn generate_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(&Config::default())?;
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write default config to {}", path.display()))?;
    Ok(())
}
