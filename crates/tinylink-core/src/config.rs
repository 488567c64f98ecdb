use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::codegen::{DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS, DEFAULT_USER_ID_PREFIX};

/// Identifier minting bounds (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintConfig {
    /// Maximum attempts to find an unused identifier (including the first).
    pub max_attempts: u32,
}

impl Default for MintConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Global configuration loaded from `~/.config/tinylink/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TinylinkConfig {
    /// Length of generated short codes.
    pub code_length: usize,
    /// Prefix prepended to generated user IDs.
    pub user_id_prefix: String,
    /// Optional minting bounds; if missing, built-in defaults are used.
    #[serde(default)]
    pub mint: Option<MintConfig>,
}

impl Default for TinylinkConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            user_id_prefix: DEFAULT_USER_ID_PREFIX.to_string(),
            mint: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tinylink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TinylinkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TinylinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. Used by tests and by anything
/// that manages its own config location.
pub fn load_from(path: &Path) -> Result<TinylinkConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: TinylinkConfig = toml::from_str(&data)?;
    Ok(cfg)
}
