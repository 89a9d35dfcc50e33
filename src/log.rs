// src/log.rs
//
// File-backed logging. The macros keep call sites short; everything goes
// through `tracing`, so a subscriber installed by a binary (or a test) sees it.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_ENV, LOG_FILE};

static INIT: Once = Once::new();

/// Install the global subscriber writing to `.store/debug.log`.
/// Level comes from `SPOTS_LOG` (e.g. `debug`, `spot_viewer=trace`), default `info`.
/// Safe to call more than once; only the first call does anything.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

        if let Some(parent) = Path::new(LOG_FILE).parent() {
            let _ = fs::create_dir_all(parent);
        }

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false);

        let res = match OpenOptions::new().create(true).append(true).open(LOG_FILE) {
            Ok(file) => builder.with_writer(Mutex::new(file)).try_init(),
            // No writable store dir: fall back to stderr
            Err(_) => builder.with_writer(std::io::stderr).try_init(),
        };
        if let Err(e) = res {
            eprintln!("Logging already initialized: {e}");
        }
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
