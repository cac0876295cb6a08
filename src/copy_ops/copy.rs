//! The guarded copy:
//! - Checks the source is an existing regular file (fails with no side effects otherwise)
//! - Creates the destination's parent directory tree when absent
//! - Streams bytes to a temp file in the destination directory, then renames
//!   over the destination, so an interrupted copy never leaves a truncated file
//! - Carries timestamps over best-effort afterwards

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::util::{io_error_with_help, unique_temp_path};
use super::{io_copy, meta};
use crate::errors::AssetCopyError;

/// What a successful guarded copy did.
#[derive(Debug)]
pub struct CopyOutcome {
    /// Bytes written to the destination.
    pub bytes: u64,
    /// Destination parent directory, if this copy had to create it.
    pub created_dir: Option<PathBuf>,
}

/// Copy `src` -> `dest`, guarding the preconditions and replacing any existing
/// destination content. Errors are returned, never escalated past the caller.
pub fn guarded_copy(src: &Path, dest: &Path) -> Result<CopyOutcome> {
    // Source must be an existing regular file. Checked before any filesystem
    // mutation so a failed request leaves no trace.
    let src_meta = match fs::metadata(src) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(AssetCopyError::SourceNotFound(src.to_path_buf()).into());
        }
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            return Err(AssetCopyError::PermissionDenied {
                path: src.to_path_buf(),
                context: e.to_string(),
            }
            .into());
        }
        Err(e) => return Err(e).map_err(io_error_with_help("stat source", src)),
    };
    if !src_meta.is_file() {
        return Err(AssetCopyError::SourceNotFile(src.to_path_buf()).into());
    }

    let dest_dir = dest
        .parent()
        .ok_or_else(|| anyhow::anyhow!("destination has no parent: {}", dest.display()))?;

    let created_dir = if dest_dir.as_os_str().is_empty() || dest_dir.exists() {
        None
    } else {
        fs::create_dir_all(dest_dir).map_err(|e| AssetCopyError::DestDirUncreatable {
            dir: dest_dir.to_path_buf(),
            context: e.to_string(),
        })?;
        Some(dest_dir.to_path_buf())
    };

    // Stream into a temp file next to the destination, then rename. The temp
    // file is created with create_new, so concurrent runs cannot interleave.
    let tmp_path = unique_temp_path(dest_dir);
    let bytes = match io_copy::copy_streaming(src, &tmp_path) {
        Ok(n) => n,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            let _ = fs::remove_file(&tmp_path);
            // The refusal came from whichever side could not be opened; probe
            // the read side to attribute the right path in the report.
            let denied = if fs::File::open(src).is_err() { src } else { dest };
            return Err(AssetCopyError::PermissionDenied {
                path: denied.to_path_buf(),
                context: e.to_string(),
            }
            .into());
        }
        Err(e) => {
            let _ = fs::remove_file(&tmp_path);
            return Err(e).map_err(io_error_with_help("copy to temporary file", &tmp_path));
        }
    };

    if let Err(e) = fs::rename(&tmp_path, dest) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e).with_context(|| {
            format!(
                "rename temporary file '{}' -> '{}'",
                tmp_path.display(),
                dest.display()
            )
        });
    }

    meta::preserve_timestamps(&src_meta, dest);

    Ok(CopyOutcome { bytes, created_dir })
}
