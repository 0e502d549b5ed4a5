use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::app_dirs::AppDirs;

/// Sends `tracing` output to the log file. The terminal belongs to the TUI, so when no
/// file can be opened logging stays off.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(log_path) = AppDirs::log_path() else {
        return;
    };
    let Some(file) = open_log_file(&log_path) else {
        return;
    };

    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(env_filter)
        .try_init();

    if installed.is_ok() {
        tracing::info!(path = %log_path.display(), "logging initialized");
    }
}

fn open_log_file(path: &Path) -> Option<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
