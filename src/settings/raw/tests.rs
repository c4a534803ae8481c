use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;

fn cli(args: &[&str]) -> CliArgs {
	CliArgs::parse_from(std::iter::once("initz").chain(args.iter().copied()))
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = cli(&[
		"-m",
		"metadata.json",
		"--service-url",
		"http://localhost:8080/",
		"-q",
		"jpa",
		"--theme",
		"slate",
		"--visible-rows",
		"7",
		"--group-id",
		"org.acme",
		"-d",
		"web, jpa,,web",
		"--no-history",
		"--log-level",
		"debug",
	]);

	let mut config = RawConfig::default();
	config.ui.theme = Some("spring".into());
	config.history.enabled = Some(true);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.catalog.metadata, cli.metadata);
	assert_eq!(config.ui.theme.as_deref(), Some("slate"));
	assert_eq!(config.ui.visible_rows, Some(7));
	assert_eq!(config.project.group_id.as_deref(), Some("org.acme"));
	assert_eq!(config.history.enabled, Some(false));
	assert_eq!(config.log.level.as_deref(), Some("debug"));

	let resolved = config.resolve(&cli).unwrap();
	assert_eq!(resolved.service_url, "http://localhost:8080");
	assert_eq!(resolved.initial_query, "jpa");
	assert_eq!(resolved.project.dependencies, ["web", "jpa"]);
	assert!(!resolved.history);
}

#[test]
fn defaults_fill_unset_values() {
	let cli = cli(&["-m", "-"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli).unwrap();

	assert_eq!(resolved.service_url, initz::request::DEFAULT_SERVICE_URL);
	assert_eq!(resolved.theme, initz::ui::theme::DEFAULT_THEME);
	assert_eq!(resolved.visible_rows, 20);
	assert!(resolved.history);
	assert!(resolved.log_level.is_none());
	assert!(resolved.project.dependencies.is_empty());
}

#[test]
fn missing_metadata_is_rejected() {
	let cli = cli(&[]);
	let err = RawConfig::default().resolve(&cli).unwrap_err();
	assert!(err.to_string().contains("catalog.metadata"));
}

#[test]
fn zero_visible_rows_names_the_flag() {
	let cli = cli(&["-m", "-", "--visible-rows", "0"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("ui.visible_rows"));
	assert!(message.contains("CLI flag `--visible-rows`"));
}

#[test]
fn blank_project_values_are_dropped() {
	let cli = cli(&["-m", "-"]);
	let mut config = RawConfig::default();
	config.project.language = Some("  ".into());
	config.project.description = Some(String::new());
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli).unwrap();
	assert_eq!(resolved.metadata, std::path::PathBuf::from("-"));
	assert!(resolved.project.language.is_none());
	assert_eq!(resolved.project.description.as_deref(), Some(""));
}
