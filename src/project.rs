//! Parameters of the project to generate.

use initz_core::Selection;
use serde::Serialize;

use crate::metadata::{Metadata, SelectField, SelectOption, TextField};

/// Generate parameters plus the chosen dependency ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
	#[serde(rename = "type")]
	pub project_type: String,
	pub language: String,
	pub boot_version: String,
	group_id: String,
	artifact_id: String,
	pub name: String,
	pub description: String,
	pub package_name: String,
	pub packaging: String,
	pub java_version: String,
	pub application_format: String,
	pub dependencies: Selection,
}

impl Default for ProjectConfig {
	fn default() -> Self {
		Self {
			project_type: "gradle-project".into(),
			language: "java".into(),
			boot_version: String::new(),
			group_id: "com.example".into(),
			artifact_id: "demo".into(),
			name: "demo".into(),
			description: "Demo project for Spring Boot".into(),
			package_name: "com.example.demo".into(),
			packaging: "jar".into(),
			java_version: "25".into(),
			application_format: "properties".into(),
			dependencies: Selection::new(),
		}
	}
}

impl ProjectConfig {
	/// Take every default the metadata declares; absent fields keep their value.
	pub fn apply_defaults(&mut self, metadata: &Metadata) {
		let select = |field: &Option<SelectField>, target: &mut String| {
			if let Some(value) = field.as_ref().and_then(SelectField::default_or_first) {
				*target = value.to_owned();
			}
		};
		select(&metadata.project_type, &mut self.project_type);
		select(&metadata.language, &mut self.language);
		select(&metadata.boot_version, &mut self.boot_version);
		select(&metadata.packaging, &mut self.packaging);
		select(&metadata.java_version, &mut self.java_version);
		select(&metadata.application_format, &mut self.application_format);

		let text = |field: &Option<TextField>, target: &mut String| {
			if let Some(field) = field {
				*target = field.default_or_empty().to_owned();
			}
		};
		text(&metadata.group_id, &mut self.group_id);
		text(&metadata.artifact_id, &mut self.artifact_id);
		text(&metadata.name, &mut self.name);
		text(&metadata.description, &mut self.description);
		text(&metadata.package_name, &mut self.package_name);
	}

	#[must_use]
	pub fn group_id(&self) -> &str {
		&self.group_id
	}

	#[must_use]
	pub fn artifact_id(&self) -> &str {
		&self.artifact_id
	}

	/// Set the group and derive the package name from it.
	pub fn set_group_id(&mut self, group_id: impl Into<String>) {
		self.group_id = group_id.into();
		self.update_package_name();
	}

	/// Set the artifact; the project name and package name follow it.
	pub fn set_artifact_id(&mut self, artifact_id: impl Into<String>) {
		self.artifact_id = artifact_id.into();
		self.name.clone_from(&self.artifact_id);
		self.update_package_name();
	}

	fn update_package_name(&mut self) {
		self.package_name = format!("{}.{}", self.group_id, self.artifact_id);
	}

	/// Boot version as the generator expects it.
	#[must_use]
	pub fn cleaned_boot_version(&self) -> String {
		clean_boot_version(&self.boot_version)
	}

	#[must_use]
	pub fn value(&self, field: ProjectField) -> &str {
		match field {
			ProjectField::ProjectType => &self.project_type,
			ProjectField::Language => &self.language,
			ProjectField::BootVersion => &self.boot_version,
			ProjectField::Packaging => &self.packaging,
			ProjectField::JavaVersion => &self.java_version,
			ProjectField::ApplicationFormat => &self.application_format,
		}
	}

	fn value_mut(&mut self, field: ProjectField) -> &mut String {
		match field {
			ProjectField::ProjectType => &mut self.project_type,
			ProjectField::Language => &mut self.language,
			ProjectField::BootVersion => &mut self.boot_version,
			ProjectField::Packaging => &mut self.packaging,
			ProjectField::JavaVersion => &mut self.java_version,
			ProjectField::ApplicationFormat => &mut self.application_format,
		}
	}

	/// Step `field` through `options` with wraparound.
	///
	/// A current value missing from `options` counts as the first option.
	/// Returns the new value, or `None` when there are no options.
	pub fn cycle(&mut self, field: ProjectField, options: &[SelectOption], step: isize) -> Option<&str> {
		let len = isize::try_from(options.len()).ok().filter(|len| *len > 0)?;
		let current = options
			.iter()
			.position(|option| option.id == self.value(field))
			.and_then(|index| isize::try_from(index).ok())
			.unwrap_or(0);
		let next = usize::try_from((current + step).rem_euclid(len)).ok()?;
		let option = options.get(next)?;

		let slot = self.value_mut(field);
		slot.clone_from(&option.id);
		Some(slot.as_str())
	}
}

/// Strip the legacy `.RELEASE` suffix and rename `.BUILD-SNAPSHOT`.
#[must_use]
pub fn clean_boot_version(version: &str) -> String {
	version
		.replace(".RELEASE", "")
		.replace(".BUILD-SNAPSHOT", "-SNAPSHOT")
}

/// Project settings chosen from a fixed list of options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectField {
	ProjectType,
	Language,
	BootVersion,
	Packaging,
	JavaVersion,
	ApplicationFormat,
}

impl ProjectField {
	pub const ALL: [Self; 6] = [
		Self::ProjectType,
		Self::Language,
		Self::BootVersion,
		Self::Packaging,
		Self::JavaVersion,
		Self::ApplicationFormat,
	];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::ProjectType => "Project",
			Self::Language => "Language",
			Self::BootVersion => "Spring Boot",
			Self::Packaging => "Packaging",
			Self::JavaVersion => "Java",
			Self::ApplicationFormat => "Config",
		}
	}

	/// Options the metadata offers for this field.
	///
	/// Application format falls back to properties and YAML when the
	/// metadata does not list it.
	#[must_use]
	pub fn options(self, metadata: &Metadata) -> Vec<SelectOption> {
		let field = match self {
			Self::ProjectType => &metadata.project_type,
			Self::Language => &metadata.language,
			Self::BootVersion => &metadata.boot_version,
			Self::Packaging => &metadata.packaging,
			Self::JavaVersion => &metadata.java_version,
			Self::ApplicationFormat => &metadata.application_format,
		};
		match field {
			Some(field) if !field.values.is_empty() => field.values.clone(),
			_ if self == Self::ApplicationFormat => fallback_formats(),
			_ => Vec::new(),
		}
	}

	#[must_use]
	pub fn next(self) -> Option<Self> {
		let index = Self::ALL.iter().position(|field| *field == self)?;
		Self::ALL.get(index + 1).copied()
	}

	#[must_use]
	pub fn previous(self) -> Option<Self> {
		let index = Self::ALL.iter().position(|field| *field == self)?;
		index.checked_sub(1).and_then(|prev| Self::ALL.get(prev).copied())
	}
}

fn fallback_formats() -> Vec<SelectOption> {
	[("properties", "Properties"), ("yaml", "YAML")]
		.into_iter()
		.map(|(id, name)| SelectOption {
			id: id.into(),
			name: Some(name.into()),
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::metadata::tests::SAMPLE;

	fn options(ids: &[&str]) -> Vec<SelectOption> {
		ids.iter()
			.map(|id| SelectOption {
				id: (*id).into(),
				name: None,
			})
			.collect()
	}

	#[test]
	fn defaults_come_from_metadata() {
		let metadata = Metadata::from_json(SAMPLE).unwrap();
		let mut project = ProjectConfig::default();
		project.apply_defaults(&metadata);

		assert_eq!(project.project_type, "maven-project");
		assert_eq!(project.java_version, "21");
		assert_eq!(project.group_id(), "org.acme");
		assert_eq!(project.package_name, "org.acme.shop");
		assert_eq!(project.description, "");
		// not declared by the sample
		assert_eq!(project.application_format, "properties");
	}

	#[test]
	fn coordinates_drive_package_and_name() {
		let mut project = ProjectConfig::default();
		project.set_group_id("io.acme");
		assert_eq!(project.package_name, "io.acme.demo");
		project.set_artifact_id("billing");
		assert_eq!(project.name, "billing");
		assert_eq!(project.package_name, "io.acme.billing");
	}

	#[test]
	fn boot_versions_are_cleaned() {
		assert_eq!(clean_boot_version("3.5.0.RELEASE"), "3.5.0");
		assert_eq!(clean_boot_version("3.5.1.BUILD-SNAPSHOT"), "3.5.1-SNAPSHOT");
		assert_eq!(clean_boot_version("4.0.0-M1"), "4.0.0-M1");
	}

	#[test]
	fn cycle_wraps_both_ways() {
		let mut project = ProjectConfig::default();
		let languages = options(&["java", "kotlin", "groovy"]);
		assert_eq!(project.cycle(ProjectField::Language, &languages, 1), Some("kotlin"));
		assert_eq!(project.cycle(ProjectField::Language, &languages, 1), Some("groovy"));
		assert_eq!(project.cycle(ProjectField::Language, &languages, 1), Some("java"));
		assert_eq!(project.cycle(ProjectField::Language, &languages, -1), Some("groovy"));
	}

	#[test]
	fn cycle_from_unknown_value_starts_at_first_option() {
		let mut project = ProjectConfig::default();
		let versions = options(&["17", "21"]);
		assert_eq!(project.cycle(ProjectField::JavaVersion, &versions, 1), Some("21"));
		assert_eq!(project.cycle(ProjectField::JavaVersion, &[], 1), None);
		assert_eq!(project.java_version, "21");
	}

	#[test]
	fn application_format_has_a_fallback() {
		let metadata = Metadata::default();
		let formats = ProjectField::ApplicationFormat.options(&metadata);
		assert_eq!(formats.len(), 2);
		assert!(ProjectField::Language.options(&metadata).is_empty());
	}

	#[test]
	fn field_navigation_stops_at_the_ends() {
		assert_eq!(ProjectField::ProjectType.previous(), None);
		assert_eq!(ProjectField::ProjectType.next(), Some(ProjectField::Language));
		assert_eq!(ProjectField::ApplicationFormat.next(), None);
	}
}
