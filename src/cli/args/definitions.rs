use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `initz` binary.
#[derive(Parser, Debug)]
#[command(
	name = "initz",
	version,
	long_version = long_version(),
	about = "Configure a generated project and pick its dependencies from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "INITZ_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'm',
		long,
		value_name = "FILE",
		help = "Metadata document describing the catalog, or - for stdin"
	)]
	pub(crate) metadata: Option<PathBuf>,
	#[arg(
		long = "service-url",
		value_name = "URL",
		help = "Base URL of the project generator (default: https://start.spring.io)"
	)]
	pub(crate) service_url: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Start with a dependency search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: spring)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "visible-rows",
		value_name = "NUM",
		help = "Number of dependency rows kept visible (default: 20)"
	)]
	pub(crate) visible_rows: Option<u16>,
	#[arg(
		long = "type",
		value_name = "ID",
		help = "Project type such as maven-project (default: metadata default)"
	)]
	pub(crate) project_type: Option<String>,
	#[arg(
		long,
		value_name = "ID",
		help = "Project language (default: metadata default)"
	)]
	pub(crate) language: Option<String>,
	#[arg(
		long = "boot-version",
		value_name = "VERSION",
		help = "Platform version (default: metadata default)"
	)]
	pub(crate) boot_version: Option<String>,
	#[arg(
		long = "group-id",
		value_name = "GROUP",
		help = "Project group (default: metadata default)"
	)]
	pub(crate) group_id: Option<String>,
	#[arg(
		long = "artifact-id",
		value_name = "ARTIFACT",
		help = "Project artifact; also sets the name (default: metadata default)"
	)]
	pub(crate) artifact_id: Option<String>,
	#[arg(
		long,
		value_name = "NAME",
		help = "Project name (default: artifact id)"
	)]
	pub(crate) name: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Project description (default: metadata default)"
	)]
	pub(crate) description: Option<String>,
	#[arg(
		long = "package-name",
		value_name = "PACKAGE",
		help = "Root package (default: group and artifact joined by a dot)"
	)]
	pub(crate) package_name: Option<String>,
	#[arg(
		long,
		value_name = "ID",
		help = "Packaging such as jar or war (default: metadata default)"
	)]
	pub(crate) packaging: Option<String>,
	#[arg(
		long = "java-version",
		value_name = "VERSION",
		help = "Java version (default: metadata default)"
	)]
	pub(crate) java_version: Option<String>,
	#[arg(
		long = "application-format",
		value_name = "ID",
		help = "Application configuration format (default: properties)"
	)]
	pub(crate) application_format: Option<String>,
	#[arg(
		short = 'd',
		long = "dependencies",
		value_delimiter = ',',
		value_name = "ID",
		help = "Comma-separated dependency ids to preselect (default: none)"
	)]
	pub(crate) dependencies: Option<Vec<String>>,
	#[arg(
		long = "no-history",
		help = "Neither read nor update stored preferences (default: disabled)"
	)]
	pub(crate) no_history: bool,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Log level written to the log file (default: warn)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
