//! Core library for `asset_copy`.
//!
//! Copies a configured list of binary files (typically image assets) into a
//! project tree. The library keeps a small surface: a Config carrying the copy
//! manifest, validation for it, and the guarded copy driver in `copy_ops`.
//! The binary wires CLI parsing, logging and user-facing reporting on top.

pub mod cli;
pub mod config;
pub mod copy_ops;
pub mod errors;
pub mod output;

pub use config::paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use config::{Config, CopyRequest, LogLevel};
pub use copy_ops::{run_manifest, CopySummary};
pub use errors::AssetCopyError;
