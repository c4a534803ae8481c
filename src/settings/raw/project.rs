use serde::Deserialize;

use super::super::resolved::ProjectOverrides;
use super::super::util::{non_blank, sanitize_ids};
use crate::cli::CliArgs;

/// Project parameters pinned by configuration rather than taken from the
/// metadata defaults or stored preferences.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ProjectSection {
	pub(super) project_type: Option<String>,
	pub(super) language: Option<String>,
	pub(super) boot_version: Option<String>,
	pub(super) group_id: Option<String>,
	pub(super) artifact_id: Option<String>,
	pub(super) name: Option<String>,
	pub(super) description: Option<String>,
	pub(super) package_name: Option<String>,
	pub(super) packaging: Option<String>,
	pub(super) java_version: Option<String>,
	pub(super) application_format: Option<String>,
	pub(super) dependencies: Option<Vec<String>>,
}

impl ProjectSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		let pairs = [
			(&mut self.project_type, &cli.project_type),
			(&mut self.language, &cli.language),
			(&mut self.boot_version, &cli.boot_version),
			(&mut self.group_id, &cli.group_id),
			(&mut self.artifact_id, &cli.artifact_id),
			(&mut self.name, &cli.name),
			(&mut self.description, &cli.description),
			(&mut self.package_name, &cli.package_name),
			(&mut self.packaging, &cli.packaging),
			(&mut self.java_version, &cli.java_version),
			(&mut self.application_format, &cli.application_format),
		];
		for (target, value) in pairs {
			if let Some(value) = value {
				*target = Some(value.clone());
			}
		}
		if let Some(ids) = &cli.dependencies {
			self.dependencies = Some(ids.clone());
		}
	}

	pub(super) fn finalize(self) -> ProjectOverrides {
		ProjectOverrides {
			project_type: non_blank(self.project_type),
			language: non_blank(self.language),
			boot_version: non_blank(self.boot_version),
			group_id: non_blank(self.group_id),
			artifact_id: non_blank(self.artifact_id),
			name: non_blank(self.name),
			// an explicitly empty description is allowed
			description: self.description,
			package_name: non_blank(self.package_name),
			packaging: non_blank(self.packaging),
			java_version: non_blank(self.java_version),
			application_format: non_blank(self.application_format),
			dependencies: self.dependencies.map(sanitize_ids).unwrap_or_default(),
		}
	}
}
