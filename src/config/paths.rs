//! Default path helpers and symlink checks.
//! Determines OS-appropriate config/log paths and detects symlinked ancestors
//! before the program writes anywhere near them.

use anyhow::{anyhow, Result};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::CONFIG_ENV_VAR;

/// OS-appropriate default config path.
pub fn default_config_path() -> Result<PathBuf> {
    if let Some(mut base) = dirs::config_dir() {
        base.push("asset_copy");
        base.push("config.xml");
        return Ok(base);
    }
    env::var("HOME")
        .map(|h| {
            PathBuf::from(h)
                .join(".config")
                .join("asset_copy")
                .join("config.xml")
        })
        .map_err(|_| anyhow!("could not determine a config directory (no config dir, no HOME)"))
}

/// Effective config path: ASSET_COPY_CONFIG wins, else the platform default.
pub fn config_file_path() -> Result<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(p));
    }
    default_config_path()
}

/// OS-appropriate default log file path (data dir).
pub fn default_log_path() -> Result<PathBuf> {
    if let Some(mut base) = dirs::data_dir() {
        base.push("asset_copy");
        base.push("asset_copy.log");
        return Ok(base);
    }
    env::var("HOME")
        .map(|h| {
            PathBuf::from(h)
                .join(".local")
                .join("share")
                .join("asset_copy")
                .join("asset_copy.log")
        })
        .map_err(|_| anyhow!("could not determine a data directory (no data dir, no HOME)"))
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}
