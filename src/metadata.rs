//! Catalog service metadata document.
//!
//! The document describes the selectable project options and the categorized
//! dependency list. Only the fields the picker needs are modelled; anything
//! else in the document is ignored.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use initz_core::{Catalog, Category, Dependency};
use serde::Deserialize;
use thiserror::Error;

/// Path value that makes [`load_metadata`] read standard input.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Error)]
pub enum MetadataError {
	#[error("failed to read metadata from {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to parse metadata document")]
	Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
	#[serde(rename = "type")]
	pub project_type: Option<SelectField>,
	pub packaging: Option<SelectField>,
	pub java_version: Option<SelectField>,
	pub language: Option<SelectField>,
	pub boot_version: Option<SelectField>,
	pub group_id: Option<TextField>,
	pub artifact_id: Option<TextField>,
	pub name: Option<TextField>,
	pub description: Option<TextField>,
	pub package_name: Option<TextField>,
	pub application_format: Option<SelectField>,
	pub dependencies: Option<DependencyGroup>,
}

/// A field with a fixed list of options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectField {
	#[serde(rename = "default")]
	pub default_value: Option<String>,
	pub values: Vec<SelectOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectOption {
	pub id: String,
	pub name: Option<String>,
}

impl SelectOption {
	/// Display name, falling back to the id.
	#[must_use]
	pub fn label(&self) -> &str {
		self.name.as_deref().unwrap_or(&self.id)
	}
}

impl SelectField {
	/// The declared default if it names a listed option, else the first option.
	#[must_use]
	pub fn default_or_first(&self) -> Option<&str> {
		let declared = self
			.default_value
			.as_deref()
			.filter(|default| self.values.iter().any(|option| option.id == *default));
		declared.or_else(|| self.values.first().map(|option| option.id.as_str()))
	}
}

/// A free-text field with an optional default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextField {
	#[serde(rename = "default")]
	pub default_value: Option<String>,
}

impl TextField {
	#[must_use]
	pub fn default_or_empty(&self) -> &str {
		self.default_value.as_deref().unwrap_or_default()
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DependencyGroup {
	pub values: Vec<RawCategory>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCategory {
	pub name: Option<String>,
	pub values: Vec<RawDependency>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDependency {
	pub id: String,
	pub name: Option<String>,
	pub description: Option<String>,
}

impl Metadata {
	pub fn from_json(text: &str) -> Result<Self, MetadataError> {
		Ok(serde_json::from_str(text)?)
	}

	/// Build the dependency catalog, dropping entries without an id.
	#[must_use]
	pub fn catalog(&self) -> Catalog {
		let groups = self
			.dependencies
			.as_ref()
			.map(|group| group.values.as_slice())
			.unwrap_or_default();

		let categories = groups
			.iter()
			.map(|raw| {
				let dependencies = raw
					.values
					.iter()
					.filter(|dependency| !dependency.id.is_empty())
					.map(|dependency| {
						Dependency::new(
							dependency.id.clone(),
							dependency.name.clone().unwrap_or_default(),
							dependency.description.clone().unwrap_or_default(),
						)
					});
				Category::new(raw.name.clone().unwrap_or_default(), dependencies)
			})
			.collect();

		Catalog::new(categories)
	}
}

/// Read and parse the metadata document at `path`, or stdin for `-`.
pub fn load_metadata(path: &Path) -> Result<Metadata, MetadataError> {
	let read_error = |source| MetadataError::Read {
		path: path.to_path_buf(),
		source,
	};

	let text = if path.as_os_str() == STDIN_PATH {
		let mut buffer = String::new();
		io::stdin().read_to_string(&mut buffer).map_err(read_error)?;
		buffer
	} else {
		fs::read_to_string(path).map_err(read_error)?
	};

	let metadata = Metadata::from_json(&text)?;
	log::info!("loaded metadata from {}", path.display());
	Ok(metadata)
}
