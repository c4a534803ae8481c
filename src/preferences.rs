//! Remembered project choices and dependency history.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use initz_core::RecentSelections;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;
use crate::project::ProjectConfig;

const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Error)]
pub enum PreferencesError {
	#[error("failed to create preferences directory {path}")]
	CreateDir {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to write preferences to {path}")]
	Write {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to encode preferences")]
	Encode(#[from] serde_json::Error),
}

/// Choices carried over between sessions.
///
/// Unset fields leave the project untouched when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
	pub last_project_type: Option<String>,
	pub last_language: Option<String>,
	pub last_java_version: Option<String>,
	pub last_group_id: Option<String>,
	pub last_packaging: Option<String>,
	pub last_application_format: Option<String>,
	pub recent_dependencies: RecentSelections,
}

impl UserPreferences {
	/// Restore remembered choices onto `project`.
	pub fn apply_to(&self, project: &mut ProjectConfig) {
		let restore = |value: &Option<String>, target: &mut String| {
			if let Some(value) = value.as_ref().filter(|value| !value.is_empty()) {
				target.clone_from(value);
			}
		};
		restore(&self.last_project_type, &mut project.project_type);
		restore(&self.last_language, &mut project.language);
		restore(&self.last_java_version, &mut project.java_version);
		restore(&self.last_packaging, &mut project.packaging);
		restore(&self.last_application_format, &mut project.application_format);
		if let Some(group_id) = self.last_group_id.as_ref().filter(|value| !value.is_empty()) {
			project.set_group_id(group_id.clone());
		}
	}

	/// Store the choices of an accepted project and record its dependencies.
	pub fn remember(&mut self, project: &ProjectConfig) {
		self.last_project_type = Some(project.project_type.clone());
		self.last_language = Some(project.language.clone());
		self.last_java_version = Some(project.java_version.clone());
		self.last_group_id = Some(project.group_id().to_owned());
		self.last_packaging = Some(project.packaging.clone());
		self.last_application_format = Some(project.application_format.clone());
		self.recent_dependencies.record(project.dependencies.iter());
	}
}

/// Reads and writes [`UserPreferences`] as JSON.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
	path: PathBuf,
}

impl PreferenceStore {
	/// Store `preferences.json` inside `dir`.
	#[must_use]
	pub fn new(dir: impl AsRef<Path>) -> Self {
		Self {
			path: dir.as_ref().join(PREFERENCES_FILE),
		}
	}

	/// Store inside the application configuration directory.
	pub fn in_config_dir() -> Result<Self> {
		Ok(Self::new(app_dirs::get_config_dir()?))
	}

	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Load stored preferences, falling back to defaults.
	///
	/// A missing file is normal; an unreadable or malformed one is logged.
	#[must_use]
	pub fn load(&self) -> UserPreferences {
		let text = match fs::read_to_string(&self.path) {
			Ok(text) => text,
			Err(err) if err.kind() == io::ErrorKind::NotFound => return UserPreferences::default(),
			Err(err) => {
				log::warn!("ignoring unreadable preferences {}: {err}", self.path.display());
				return UserPreferences::default();
			}
		};

		serde_json::from_str(&text).unwrap_or_else(|err| {
			log::warn!("ignoring malformed preferences {}: {err}", self.path.display());
			UserPreferences::default()
		})
	}

	pub fn save(&self, preferences: &UserPreferences) -> Result<(), PreferencesError> {
		if let Some(dir) = self.path.parent() {
			fs::create_dir_all(dir).map_err(|source| PreferencesError::CreateDir {
				path: dir.to_path_buf(),
				source,
			})?;
		}
		let json = serde_json::to_string_pretty(preferences)?;
		fs::write(&self.path, json).map_err(|source| PreferencesError::Write {
			path: self.path.clone(),
			source,
		})?;
		log::debug!("saved preferences to {}", self.path.display());
		Ok(())
	}
}
