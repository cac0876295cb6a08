//! XML configuration support.
//! - Loads the copy manifest and settings from config.xml (quick_xml).
//! - Creates a commented template if missing (unless ASSET_COPY_CONFIG is set).
//!
//! Notes:
//! - This module only reads/writes the config file; manifest validation
//!   happens in `validate`.
//! - Unknown XML fields are a hard error so misconfigurations surface early.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::paths::{config_file_path, default_config_path, default_log_path, path_has_symlink_ancestor};
use super::types::{Config, CopyRequest, LogLevel};
use super::CONFIG_ENV_VAR;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "copy", default)]
    copies: Vec<XmlCopy>,
    log_level: Option<String>,
    log_file: Option<String>,
    dry_run: Option<bool>,
}

/// One `<copy>` element.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct XmlCopy {
    source: String,
    dest: String,
    label: Option<String>,
}

fn xml_to_config(parsed: XmlConfig) -> Config {
    let mut cfg = Config::default();

    cfg.manifest = parsed
        .copies
        .into_iter()
        .map(|c| CopyRequest {
            source: PathBuf::from(c.source.trim()),
            dest: PathBuf::from(c.dest.trim()),
            label: c.label.map(|l| l.trim().to_string()).filter(|l| !l.is_empty()),
        })
        .collect();

    if let Some(s) = parsed.log_level.as_deref() {
        if let Some(level) = LogLevel::parse(s.trim()) {
            cfg.log_level = level;
        }
    }

    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }

    cfg.dry_run = parsed.dry_run.unwrap_or(false);

    cfg
}

/// Load a Config from a specific XML file path (quick_xml).
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    Ok(xml_to_config(parsed))
}

/// Load the effective config: ASSET_COPY_CONFIG if set, else the platform
/// default path. Returns Ok(None) when no config file exists yet.
pub fn load_config() -> Result<Option<Config>> {
    let path = config_file_path()?;
    if !path.exists() {
        // An explicitly pointed-to file that is missing is an error the user
        // should hear about; a missing default file just means "not set up yet".
        if env::var_os(CONFIG_ENV_VAR).is_some() {
            anyhow::bail!(
                "{} points to '{}', but no such file exists",
                CONFIG_ENV_VAR,
                path.display()
            );
        }
        return Ok(None);
    }
    load_config_from_path(&path).map(Some)
}

/// Create a commented template config file and its parent directory.
/// Refuses to write through a symlinked ancestor.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        anyhow::bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory '{}'", parent.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = fs::set_permissions(parent, fs::Permissions::from_mode(0o700));
        }
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "/path/to/asset_copy.log".into());

    let content = format!(
        "<!--\n  asset_copy configuration (XML)\n\n  Each <copy> entry names one file to duplicate:\n    source  -> absolute path of the file to read\n    dest    -> absolute path to write (parent directories are created)\n    label   -> optional short name used in status lines\n\n  Other fields:\n    log_level  -> quiet | normal | info | debug\n    log_file   -> path to log file (optional; stdout/stderr still used)\n    dry_run    -> true/false; report actions without touching the filesystem\n\n  Notes:\n    - Entries are processed in order; one failure does not stop the rest.\n    - CLI flags override XML values.\n-->\n<config>\n  <copy>\n    <source>/path/to/project/.attachments/logo_horizontal.png</source>\n    <dest>/path/to/project/assets/images/logo_horizontal.png</dest>\n    <label>horizontal logo</label>\n  </copy>\n  <copy>\n    <source>/path/to/project/.attachments/logo_vertical.png</source>\n    <dest>/path/to/project/assets/images/logo_vertical.png</dest>\n    <label>vertical logo</label>\n  </copy>\n  <log_level>normal</log_level>\n  <log_file>{}</log_file>\n  <dry_run>false</dry_run>\n</config>\n",
        suggested_log
    );

    fs::write(path, content)
        .with_context(|| format!("write template config '{}'", path.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }

    info!("Created template config at {}", path.display());
    Ok(())
}

/// Create a default config if ASSET_COPY_CONFIG is not set and none exists;
/// return the created path so the CLI can inform the user.
pub fn ensure_default_config_exists() -> Option<PathBuf> {
    if env::var_os(CONFIG_ENV_VAR).is_some() {
        return None;
    }

    let cfg_path = default_config_path().ok()?;
    if cfg_path.exists() {
        return None;
    }

    match create_template_config(&cfg_path) {
        Ok(()) => Some(cfg_path),
        Err(e) => {
            eprintln!(
                "Failed to create template config at {}: {}",
                cfg_path.display(),
                e
            );
            None
        }
    }
}
