use std::fmt::Write;
use std::path::PathBuf;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use initz::preferences::PreferenceStore;
use initz::{app_dirs, logging};

/// Version banner listing where configuration, preferences and logs live.
pub(super) fn long_version() -> &'static str {
	let config_dir = app_dirs::get_config_dir();
	let preferences = PreferenceStore::in_config_dir().map(|store| store.path().to_path_buf());
	let log_file = app_dirs::get_data_dir().map(|dir| dir.join(logging::LOG_FILE));

	let mut details = format!("initz {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {}", describe(config_dir));
	let _ = writeln!(details, "preferences: {}", describe(preferences));
	let _ = writeln!(details, "log file: {}", describe(log_file));

	Box::leak(details.into_boxed_str())
}

fn describe(path: anyhow::Result<PathBuf>) -> String {
	match path {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	}
}

pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD | Effects::UNDERLINE))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::BrightGreen.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
}
