//! Config module (modularized).
//! Provides configuration types, default paths, XML manifest loading, and
//! validation. Re-exports keep the public API flat for external callers.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, CopyRequest, LogLevel};
pub use xml::{create_template_config, ensure_default_config_exists, load_config};

/// Environment variable naming an explicit config file, overriding the default path.
pub const CONFIG_ENV_VAR: &str = "ASSET_COPY_CONFIG";
