// whitespace/src/logger.rs
//! Logger initialization for the whitespace binary.
//!
//! Built on `env_logger`: `RUST_LOG` is honored unless a level is forced
//! by the caller (the `--quiet` and `--debug` flags).

use log::LevelFilter;

/// Initializes the global logger. A `Some(level)` argument overrides any
/// `RUST_LOG` setting; `None` falls back to `RUST_LOG`, defaulting to Info.
///
/// Uses `try_init` so repeated calls (e.g. from tests) are harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.format_timestamp(None).try_init();
}
