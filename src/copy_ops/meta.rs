//! Timestamp carry-over.
//! Copies atime/mtime from source to destination best-effort; the copy result
//! never depends on whether this worked.

use filetime::{set_file_times, FileTime};
use std::fs;
use std::path::Path;
use tracing::debug;

pub(super) fn preserve_timestamps(src_meta: &fs::Metadata, dest: &Path) {
    let (at_opt, mt_opt) = {
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            let mt = FileTime::from_unix_time(src_meta.mtime(), src_meta.mtime_nsec() as u32);
            let at = FileTime::from_unix_time(src_meta.atime(), src_meta.atime_nsec() as u32);
            (Some(at), Some(mt))
        }
        #[cfg(not(unix))]
        {
            let at = src_meta.accessed().ok().map(FileTime::from_system_time);
            let mt = src_meta.modified().ok().map(FileTime::from_system_time);
            (at, mt)
        }
    };

    if let (Some(at), Some(mt)) = (at_opt, mt_opt) {
        if let Err(e) = set_file_times(dest, at, mt) {
            debug!(dest = %dest.display(), error = %e, "could not carry over timestamps");
        }
    }
}
