use initz::ui::theme;
use log::LevelFilter;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	if config.metadata.as_os_str().is_empty() {
		return Err(ConfigError::invalid(
			"catalog.metadata",
			"",
			sources.source_for_metadata(),
			"a metadata file is required (use `-` to read standard input)",
		));
	}

	if config.visible_rows == 0 {
		return Err(ConfigError::invalid(
			"ui.visible_rows",
			config.visible_rows.to_string(),
			sources.source_for_visible_rows(),
			"must be at least 1",
		));
	}

	if theme::by_name(&config.theme).is_none() {
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme.clone(),
			sources.source_for_theme(),
			format!("unknown theme; expected one of {}", theme::names().join(", ")),
		));
	}

	if let Some(level) = &config.log_level
		&& level.parse::<LevelFilter>().is_err()
	{
		return Err(ConfigError::invalid(
			"log.level",
			level.clone(),
			sources.source_for_log_level(),
			"expected off, error, warn, info, debug or trace",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::super::{ProjectOverrides, SettingSource};
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			metadata: PathBuf::from("metadata.json"),
			service_url: "https://start.spring.io".into(),
			project: ProjectOverrides::default(),
			initial_query: String::new(),
			theme: theme::DEFAULT_THEME.into(),
			visible_rows: 20,
			history: true,
			log_level: None,
		}
	}

	#[test]
	fn valid_configuration_passes() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_rows() {
		let config = ResolvedConfig {
			visible_rows: 0,
			..config()
		};
		let sources = ConfigSources {
			visible_rows: Some(SettingSource::Environment("INITZ__UI__VISIBLE_ROWS")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "ui.visible_rows"));
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn validation_rejects_unknown_theme() {
		let config = ResolvedConfig {
			theme: "neon".into(),
			..config()
		};
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "ui.theme");
		assert!(err.to_string().contains("configuration key `ui.theme`"));
	}

	#[test]
	fn validation_rejects_bad_log_level() {
		let config = ResolvedConfig {
			log_level: Some("loud".into()),
			..config()
		};
		let sources = ConfigSources {
			log_level: Some(SettingSource::CliFlag("--log-level")),
			..ConfigSources::default()
		};
		let err = validate(&config, &sources).unwrap_err();
		assert!(err.to_string().contains("CLI flag `--log-level`"));
	}
}
