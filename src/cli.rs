//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - With no positional arguments, the copy manifest comes from the config file.
//! - A SOURCE/DEST positional pair performs a one-off copy instead.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::{Config, CopyRequest, LogLevel};

/// CLI wrapper for the asset_copy library.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Copy configured binary assets (logos, images) into place"
)]
pub struct Args {
    /// Source file for a one-off copy; bypasses the configured manifest.
    #[arg(value_name = "SOURCE", value_hint = ValueHint::FilePath, requires = "dest")]
    pub source: Option<PathBuf>,

    /// Destination path for the one-off copy (parent directories are created).
    #[arg(value_name = "DEST", value_hint = ValueHint::AnyPath)]
    pub dest: Option<PathBuf>,

    /// Short name for the one-off copy, used in status lines.
    #[arg(long, requires = "source", help = "Label for the one-off copy, used in status lines")]
    pub label: Option<String>,

    /// Read configuration from this file instead of ASSET_COPY_CONFIG/default.
    #[arg(
        long,
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        help = "Use this config file instead of the ASSET_COPY_CONFIG/default one"
    )]
    pub config: Option<PathBuf>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Print where asset_copy will look for the config file, then exit.
    #[arg(
        long,
        help = "Print the config file location used by asset_copy and exit"
    )]
    pub print_config: bool,

    /// Dry-run: log actions but do not modify the filesystem.
    #[arg(
        long,
        help = "Show what would be done, but do not modify files/directories"
    )]
    pub dry_run: bool,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// The one-off request from the SOURCE/DEST positional pair, if given.
    pub fn adhoc_request(&self) -> Option<CopyRequest> {
        match (&self.source, &self.dest) {
            (Some(s), Some(d)) => {
                let mut req = CopyRequest::new(s.clone(), d.clone());
                if let Some(l) = &self.label {
                    req = req.labelled(l.clone());
                }
                Some(req)
            }
            _ => None,
        }
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(req) = self.adhoc_request() {
            cfg.manifest = vec![req];
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
