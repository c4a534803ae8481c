//! File-backed logging for the interactive session.
//!
//! The terminal belongs to the UI while the picker runs, so log records go to
//! `initz.log` in the data directory instead of stderr.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};

use crate::app_dirs;

/// Environment variable holding an `env_logger` filter directive.
pub const LOG_ENV: &str = "INITZ_LOG";
/// Filter used when neither the environment nor the configuration sets one.
pub const DEFAULT_LEVEL: &str = "warn";

/// Name of the log file inside the data directory.
pub const LOG_FILE: &str = "initz.log";

/// Install the global logger.
///
/// The filter comes from [`LOG_ENV`], then `level`, then [`DEFAULT_LEVEL`].
/// Returns the log file path, or `None` when the file could not be opened or
/// a logger was already installed; logging is then silently disabled.
pub fn initialize(level: Option<&str>) -> Option<PathBuf> {
	let dir = app_dirs::get_data_dir().ok()?;
	let path = dir.join(LOG_FILE);
	let file = open_log_file(&dir, &path)?;

	let default_filter = level.unwrap_or(DEFAULT_LEVEL);
	Builder::from_env(Env::default().filter_or(LOG_ENV, default_filter))
		.target(Target::Pipe(Box::new(file)))
		.format_timestamp_millis()
		.try_init()
		.ok()?;

	log::debug!("logging to {}", path.display());
	Some(path)
}

fn open_log_file(dir: &Path, path: &Path) -> Option<File> {
	fs::create_dir_all(dir).ok()?;
	File::create(path).ok()
}
