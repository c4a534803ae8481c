use std::fmt;

/// Where a configured value came from, for error messages.
#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) metadata: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) visible_rows: Option<SettingSource>,
	pub(crate) log_level: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_metadata(&self) -> SettingSource {
		Self::or_key(&self.metadata, "catalog.metadata")
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		Self::or_key(&self.theme, "ui.theme")
	}

	pub(crate) fn source_for_visible_rows(&self) -> SettingSource {
		Self::or_key(&self.visible_rows, "ui.visible_rows")
	}

	pub(crate) fn source_for_log_level(&self) -> SettingSource {
		Self::or_key(&self.log_level, "log.level")
	}

	fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
		source.clone().unwrap_or(SettingSource::ConfigKey(key))
	}
}
