//! Copy driver.
//! Walks the configured manifest strictly in order, one request at a time,
//! pushing each through the guarded copy. A failed request is reported and
//! recorded; the driver always moves on to the next one.

mod copy;
mod io_copy;
mod meta;
mod util;

pub use copy::{guarded_copy, CopyOutcome};

use tracing::{error, info};

use crate::config::Config;
use crate::errors::AssetCopyError;
use crate::output as out;

/// One recorded failure from a driver run.
#[derive(Debug)]
pub struct CopyFailure {
    /// Zero-based position in the manifest.
    pub index: usize,
    /// The request's display name (label or file name).
    pub name: String,
    /// Rendered error chain.
    pub error: String,
}

/// Aggregate result of a driver run.
#[derive(Debug)]
pub struct CopySummary {
    pub total: usize,
    pub succeeded: usize,
    pub failures: Vec<CopyFailure>,
}

impl CopySummary {
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Process every request in the manifest, printing one status line per file.
/// Never short-circuits: each request's outcome is independent of the others.
pub fn run_manifest(cfg: &Config) -> CopySummary {
    let total = cfg.manifest.len();
    let mut succeeded = 0usize;
    let mut failures = Vec::new();

    for (idx, req) in cfg.manifest.iter().enumerate() {
        let name = req.display_name();

        if cfg.dry_run {
            info!(
                source = %req.source.display(),
                dest = %req.dest.display(),
                "dry-run: would copy"
            );
            out::print_info(&format!(
                "Dry-run: would copy '{}' -> '{}'",
                req.source.display(),
                req.dest.display()
            ));
            succeeded += 1;
            continue;
        }

        match guarded_copy(&req.source, &req.dest) {
            Ok(outcome) => {
                if let Some(dir) = &outcome.created_dir {
                    out::print_info(&format!("Created directory: {}", dir.display()));
                }
                info!(
                    source = %req.source.display(),
                    dest = %req.dest.display(),
                    bytes = outcome.bytes,
                    "Copy completed"
                );
                out::print_copy_ok(&name, &req.dest);
                succeeded += 1;
            }
            Err(e) => {
                if let Some(ac) = e.downcast_ref::<AssetCopyError>() {
                    error!(code = ac.code(), request = %name, error = %ac, "Copy failed");
                } else {
                    error!(request = %name, error = ?e, "Copy failed");
                }
                out::print_copy_failed(&name, &format!("{e:#}"));
                failures.push(CopyFailure {
                    index: idx,
                    name,
                    error: format!("{e:#}"),
                });
            }
        }
    }

    CopySummary {
        total,
        succeeded,
        failures,
    }
}
