use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod catalog;
mod project;
mod ui;

use catalog::CatalogSection;
use project::ProjectSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	project: ProjectSection,
	ui: UiSection,
	history: HistorySection,
	log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct HistorySection {
	enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.catalog.apply_cli_overrides(cli);
		self.project.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		if cli.no_history {
			self.history.enabled = Some(false);
		}
		if let Some(level) = cli.log_level.clone() {
			self.log.level = Some(level);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			metadata: METADATA.origin(cli.metadata.is_some(), self.catalog.metadata.is_some()),
			theme: THEME.origin(cli.theme.is_some(), self.ui.theme.is_some()),
			visible_rows: VISIBLE_ROWS.origin(cli.visible_rows.is_some(), self.ui.visible_rows.is_some()),
			log_level: LOG_LEVEL.origin(cli.log_level.is_some(), self.log.level.is_some()),
		};

		let (metadata, service_url) = self.catalog.finalize();
		let ui = self.ui.finalize();

		let config = ResolvedConfig {
			metadata,
			service_url,
			project: self.project.finalize(),
			initial_query: ui.initial_query,
			theme: ui.theme,
			visible_rows: ui.visible_rows,
			history: self.history.enabled.unwrap_or(true),
			log_level: self
				.log
				.level
				.map(|level| level.trim().to_string())
				.filter(|level| !level.is_empty()),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

/// The three places a validated setting can be given.
struct Setting {
	flag: &'static str,
	env: &'static str,
	key: &'static str,
}

const METADATA: Setting = Setting {
	flag: "--metadata",
	env: "INITZ__CATALOG__METADATA",
	key: "catalog.metadata",
};
const THEME: Setting = Setting {
	flag: "--theme",
	env: "INITZ__UI__THEME",
	key: "ui.theme",
};
const VISIBLE_ROWS: Setting = Setting {
	flag: "--visible-rows",
	env: "INITZ__UI__VISIBLE_ROWS",
	key: "ui.visible_rows",
};
const LOG_LEVEL: Setting = Setting {
	flag: "--log-level",
	env: "INITZ__LOG__LEVEL",
	key: "log.level",
};

impl Setting {
	/// Where a present value came from; CLI flags were merged last, so they win.
	fn origin(&self, from_cli: bool, present: bool) -> Option<SettingSource> {
		if !present {
			None
		} else if from_cli {
			Some(SettingSource::CliFlag(self.flag))
		} else if env::var_os(self.env).is_some() {
			Some(SettingSource::Environment(self.env))
		} else {
			Some(SettingSource::ConfigKey(self.key))
		}
	}
}

#[cfg(test)]
mod tests;
