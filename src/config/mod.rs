mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config = parse_config(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    tracing::debug!("Loaded config from {:?}", path);
    Ok(config)
}

/// Parse and validate configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config> {
    let mut config: Config = toml::from_str(content)?;
    validate_config(&config)?;
    normalize_extensions(&mut config.scan.extensions);
    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    match find_config_file() {
        Some(path) => load_config(&path),
        None => Ok(Config::default()),
    }
}

/// First existing config file among the default locations
pub fn find_config_file() -> Option<PathBuf> {
    let default_paths = ["./flptime.toml", "~/.config/flptime/config.toml"];

    default_paths
        .iter()
        .map(|path_str| PathBuf::from(shellexpand::tilde(path_str).as_ref()))
        .find(|path| path.exists())
}

fn normalize_extensions(extensions: &mut Vec<String>) {
    for ext in extensions.iter_mut() {
        *ext = ext.to_lowercase();
    }
    extensions.sort();
    extensions.dedup();
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.scan.extensions.is_empty() {
        anyhow::bail!("scan.extensions cannot be empty");
    }

    for ext in &config.scan.extensions {
        if ext.is_empty() {
            anyhow::bail!("scan.extensions cannot contain an empty extension");
        }
        if ext.starts_with('.') {
            anyhow::bail!("Extension '{}' must not start with a dot", ext);
        }
    }

    Ok(())
}
