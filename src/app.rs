//! Application orchestrator.
//! Loads/merges config, initializes logging, validates the manifest, and runs
//! the copy driver, reporting per-file status lines and an aggregate summary.

use anyhow::{bail, Result};
use tracing::{debug, info};

use asset_copy::cli::Args;
use asset_copy::config::{self, CONFIG_ENV_VAR};
use asset_copy::output as out;
use asset_copy::{default_config_path, run_manifest};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        if let Ok(cfg_env) = std::env::var(CONFIG_ENV_VAR) {
            out::print_info(&format!(
                "Using {} (explicit):\n  {}\n",
                CONFIG_ENV_VAR, cfg_env
            ));
            out::print_info(&format!(
                "To override, unset {} or set it to another file.",
                CONFIG_ENV_VAR
            ));
            return Ok(());
        }
        match default_config_path() {
            Ok(p) => {
                out::print_info(&format!(
                    "Default asset_copy config path:\n  {}\n",
                    p.display()
                ));
                if p.exists() {
                    out::print_info("A config file already exists at that location.");
                } else {
                    out::print_info(
                        "No config file exists there yet. Run without --print-config to create a template.",
                    );
                }
            }
            Err(e) => {
                out::print_error(&format!("Could not determine a default config path: {e}"));
            }
        }
        return Ok(());
    }

    // First run with nothing to copy: write a template config and explain it.
    // Skipped when the user supplied an explicit config file or a SOURCE/DEST pair.
    if args.config.is_none() && args.adhoc_request().is_none() {
        if let Some(path) = config::ensure_default_config_exists() {
            out::print_info(&format!(
                "A template asset_copy config was written to: {}",
                path.display()
            ));
            out::print_info(
                "Edit the file to list the files to copy. Example:\n\n<config>\n  <copy>\n    <source>/path/to/logo.png</source>\n    <dest>/path/to/assets/images/logo.png</dest>\n    <label>logo</label>\n  </copy>\n</config>\n",
            );
            out::print_info(&format!(
                "Then re-run this command. To use a different location set {}.",
                CONFIG_ENV_VAR
            ));
            return Ok(());
        }
    }

    // Build config (may read XML). CLI args override config values.
    let mut cfg = if let Some(path) = args.config.as_deref() {
        config::xml::load_config_from_path(path)?
    } else {
        config::load_config()?.unwrap_or_default()
    };
    args.apply_overrides(&mut cfg);

    // Initialize logging; hold the guard so any file logs flush before exit.
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!("Starting asset_copy: {:?}", args);

    cfg.validate()?;

    let summary = run_manifest(&cfg);
    out::print_summary(summary.succeeded, summary.total);

    if summary.all_succeeded() {
        if !cfg.dry_run && summary.total > 1 {
            out::print_info("All files are in place.");
        }
        info!(
            copied = summary.succeeded,
            total = summary.total,
            "Run completed"
        );
        Ok(())
    } else {
        info!(
            copied = summary.succeeded,
            total = summary.total,
            failed = summary.failures.len(),
            "Run completed with failures"
        );
        bail!(
            "{} of {} copies failed",
            summary.failures.len(),
            summary.total
        )
    }
}
