// maskform/src/logger.rs
//! Logger bootstrap for the maskform CLI.
//!
//! The core library logs diagnostics through the `log` facade; whatever
//! this module installs decides where (and whether) they go.

use log::LevelFilter;

/// Initializes `env_logger`, honoring `RUST_LOG` unless an explicit level
/// is forced by a CLI flag. Safe to call more than once; later calls are
/// no-ops.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.format_timestamp(None).try_init();
}
