use anyhow::{Context, Result};
use initz::metadata::{Metadata, load_metadata};
use initz::preferences::{PreferenceStore, UserPreferences};
use initz::project::ProjectConfig;
use initz::ui::{self, App, UiOptions, theme};
use initz::request;
use initz_core::{Catalog, SelectionSet};

use crate::settings::{ProjectOverrides, ResolvedConfig};

/// What the session produced, ready to be printed.
#[derive(Debug, Clone)]
pub(crate) struct SessionOutcome {
	pub(crate) accepted: bool,
	pub(crate) query: String,
	pub(crate) project: ProjectConfig,
	pub(crate) archive_url: Option<String>,
	pub(crate) build_file_url: Option<String>,
}

impl SessionOutcome {
	pub(crate) fn accepted(project: ProjectConfig, query: String, base_url: &str) -> Self {
		Self {
			accepted: true,
			query,
			archive_url: Some(request::archive_url(base_url, &project)),
			build_file_url: Some(request::build_file_url(base_url, &project)),
			project,
		}
	}

	pub(crate) fn cancelled(project: ProjectConfig, query: String) -> Self {
		Self {
			accepted: false,
			query,
			project,
			archive_url: None,
			build_file_url: None,
		}
	}
}

/// Loads the catalog, prepares the project and runs the picker.
pub(crate) struct SessionWorkflow {
	config: ResolvedConfig,
	store: Option<PreferenceStore>,
}

impl SessionWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let store = if config.history {
			PreferenceStore::in_config_dir()
				.inspect_err(|err| log::warn!("preferences disabled: {err:#}"))
				.ok()
		} else {
			None
		};
		Self { config, store }
	}

	pub(crate) fn run(self) -> Result<SessionOutcome> {
		let path = &self.config.metadata;
		let metadata = load_metadata(path)
			.with_context(|| format!("failed to load catalog metadata from {}", path.display()))?;
		let catalog = metadata.catalog();
		if catalog.is_empty() {
			log::warn!("metadata from {} lists no dependencies", path.display());
		}

		let mut preferences = self
			.store
			.as_ref()
			.map(PreferenceStore::load)
			.unwrap_or_default();
		let project = prepare_project(
			&metadata,
			&catalog,
			self.store.is_some().then_some(&preferences),
			&self.config.project,
		);

		let options = UiOptions {
			initial_query: Some(self.config.initial_query.clone()),
			theme: theme::by_name(&self.config.theme).unwrap_or_default(),
			visible_rows: self.config.visible_rows,
		};
		let app = App::new(
			&catalog,
			&preferences.recent_dependencies,
			&metadata,
			project,
			options,
		);
		let outcome = ui::run(app).context("terminal session failed")?;

		if !outcome.accepted {
			return Ok(SessionOutcome::cancelled(outcome.project, outcome.query));
		}
		if let Some(store) = &self.store {
			preferences.remember(&outcome.project);
			if let Err(err) = store.save(&preferences) {
				log::warn!("could not save preferences: {err}");
			}
		}
		Ok(SessionOutcome::accepted(
			outcome.project,
			outcome.query,
			&self.config.service_url,
		))
	}
}

/// Layer metadata defaults, stored preferences and configured overrides, then
/// preselect the configured dependencies that the catalog knows about.
fn prepare_project(
	metadata: &Metadata,
	catalog: &Catalog,
	preferences: Option<&UserPreferences>,
	overrides: &ProjectOverrides,
) -> ProjectConfig {
	let mut project = ProjectConfig::default();
	project.apply_defaults(metadata);
	if let Some(preferences) = preferences {
		preferences.apply_to(&mut project);
	}
	overrides.apply_to(&mut project);

	for id in &overrides.dependencies {
		if catalog.contains(id) {
			project.dependencies.insert(id);
		} else {
			log::warn!("skipping unknown dependency {id}");
		}
	}
	project
}
