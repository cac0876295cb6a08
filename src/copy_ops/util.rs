//! Small helpers for the copy pipeline: temp-file naming and IO error
//! messages enriched with actionable, platform-aware hints.

use anyhow::anyhow;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Allocate a unique temp-file path inside `dir`.
/// Pattern: ".asset_copy.<pid>.<nanos>.tmp"; uniqueness is enforced again by
/// `create_new` at open time, so a collision here only costs a retry upstream.
pub(super) fn unique_temp_path(dir: &Path) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    dir.join(format!(".asset_copy.{}.{}.tmp", std::process::id(), nanos))
}

/// Append a short hint for the failure classes this tool actually hits.
fn hint_for(e: &io::Error) -> &'static str {
    #[cfg(unix)]
    if let Some(code) = e.raw_os_error() {
        return match code {
            libc::EACCES | libc::EPERM => " — permission denied; check ownership and write permissions.",
            libc::ENOENT => " — path not found; verify it exists.",
            libc::ENOSPC => " — insufficient space on device.",
            libc::EROFS => " — read-only filesystem; cannot write here.",
            libc::ENAMETOOLONG => " — filename or path too long; shorten path segments.",
            _ => "",
        };
    }
    match e.kind() {
        io::ErrorKind::PermissionDenied => " — permission denied; check ownership and write permissions.",
        io::ErrorKind::NotFound => " — path not found; verify it exists.",
        io::ErrorKind::AlreadyExists => " — already exists; remove or choose a unique name.",
        _ => "",
    }
}

/// Adapter for `.map_err(...)` converting io::Error -> anyhow::Error with
/// op/path context plus a hint where we have one.
pub(super) fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!("{} '{}': {}{}", op, path.display(), e, hint_for(&e))
}
