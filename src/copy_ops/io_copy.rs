//! Streaming byte copy.
//!
//! - Writes to a newly created destination file (`create_new`; never clobbers —
//!   overwrite semantics live a level up, via temp + rename).
//! - Buffered I/O with large buffers to keep the syscall count down.
//! - Fsyncs the written file before returning, so the subsequent rename never
//!   publishes a half-written file.
//!
//! Snapshot semantics: the source is read once from start to EOF. A source
//! that shrinks mid-copy surfaces as a short read; the caller can compare the
//! returned byte count against the source length if it cares.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

const BUF_SIZE: usize = 1024 * 1024; // 1 MiB buffers

/// Copy `src` -> `dst` using buffered I/O, then fsync the destination.
/// Returns the number of bytes written. `dst` must not already exist.
pub(super) fn copy_streaming(src: &Path, dst: &Path) -> io::Result<u64> {
    let src_f = File::open(src)?;
    let dst_f = OpenOptions::new().write(true).create_new(true).open(dst)?;

    let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst_f);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;

    Ok(bytes)
}
