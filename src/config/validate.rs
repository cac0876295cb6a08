//! Manifest validation logic.
//! Catches empty manifests and nonsense path pairs before any copy runs.

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::types::Config;

impl Config {
    /// Validate the copy manifest: it must be non-empty, every request must
    /// carry non-empty paths, and no request may read and write the same file.
    pub fn validate(&self) -> Result<()> {
        if self.manifest.is_empty() {
            bail!(
                "No copy requests configured; add <copy> entries to the config file \
                 or pass SOURCE and DEST on the command line"
            );
        }

        for (idx, req) in self.manifest.iter().enumerate() {
            let name = req.display_name();
            if req.source.as_os_str().is_empty() {
                bail!("Copy request #{} ('{}') has an empty source path", idx + 1, name);
            }
            if req.dest.as_os_str().is_empty() {
                bail!("Copy request #{} ('{}') has an empty destination path", idx + 1, name);
            }
            if same_file(&req.source, &req.dest) {
                bail!(
                    "Copy request #{} ('{}') would copy '{}' onto itself",
                    idx + 1,
                    name,
                    req.source.display()
                );
            }
            debug!(
                index = idx + 1,
                source = %req.source.display(),
                dest = %req.dest.display(),
                "manifest entry ok"
            );
        }

        info!(requests = self.manifest.len(), "Manifest validated");
        Ok(())
    }
}

/// Symlink-aware equality: canonicalize where possible so `a/../b` and
/// symlinked spellings of the same file are caught too.
fn same_file(a: &Path, b: &Path) -> bool {
    let a_real = fs::canonicalize(a).unwrap_or_else(|_| a.to_path_buf());
    let b_real = fs::canonicalize(b).unwrap_or_else(|_| b.to_path_buf());
    a_real == b_real
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::CopyRequest;

    #[test]
    fn empty_manifest_is_rejected() {
        let cfg = Config::new(Vec::new());
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("No copy requests configured"));
    }

    #[test]
    fn same_source_and_dest_is_rejected() {
        let cfg = Config::new(vec![CopyRequest::new("/tmp/a.png", "/tmp/a.png")]);
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("onto itself"));
    }

    #[test]
    fn distinct_pair_passes() {
        let cfg = Config::new(vec![
            CopyRequest::new("/tmp/a.png", "/tmp/out/a.png").labelled("logo"),
        ]);
        cfg.validate().expect("valid manifest");
    }
}
