use std::path::PathBuf;

use initz::project::ProjectConfig;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub metadata: PathBuf,
	pub service_url: String,
	pub project: ProjectOverrides,
	pub initial_query: String,
	pub theme: String,
	pub visible_rows: u16,
	pub history: bool,
	pub log_level: Option<String>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

/// Project values pinned by configuration.
///
/// Applied last, so they win over metadata defaults and stored preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectOverrides {
	pub project_type: Option<String>,
	pub language: Option<String>,
	pub boot_version: Option<String>,
	pub group_id: Option<String>,
	pub artifact_id: Option<String>,
	pub name: Option<String>,
	pub description: Option<String>,
	pub package_name: Option<String>,
	pub packaging: Option<String>,
	pub java_version: Option<String>,
	pub application_format: Option<String>,
	/// Dependency ids to preselect.
	pub dependencies: Vec<String>,
}

impl ProjectOverrides {
	pub fn apply_to(&self, project: &mut ProjectConfig) {
		let set = |value: &Option<String>, target: &mut String| {
			if let Some(value) = value {
				target.clone_from(value);
			}
		};
		set(&self.project_type, &mut project.project_type);
		set(&self.language, &mut project.language);
		set(&self.boot_version, &mut project.boot_version);
		set(&self.packaging, &mut project.packaging);
		set(&self.java_version, &mut project.java_version);
		set(&self.application_format, &mut project.application_format);

		// coordinates first: they rewrite name and package name
		if let Some(group_id) = &self.group_id {
			project.set_group_id(group_id.clone());
		}
		if let Some(artifact_id) = &self.artifact_id {
			project.set_artifact_id(artifact_id.clone());
		}
		set(&self.name, &mut project.name);
		set(&self.description, &mut project.description);
		set(&self.package_name, &mut project.package_name);
	}

	/// Number of pinned project fields, not counting dependencies.
	#[must_use]
	pub fn pinned_count(&self) -> usize {
		[
			&self.project_type,
			&self.language,
			&self.boot_version,
			&self.group_id,
			&self.artifact_id,
			&self.name,
			&self.description,
			&self.package_name,
			&self.packaging,
			&self.java_version,
			&self.application_format,
		]
		.iter()
		.filter(|value| value.is_some())
		.count()
	}
}
