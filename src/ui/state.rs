//! State shared by the terminal front-end.
//!
//! [`App`] wraps the [`DependencyPicker`] together with the project being
//! configured and the transient UI state (focus, input mode and the search
//! buffer). Key handling and rendering live in sibling modules.

use initz_core::{Catalog, DependencyPicker, RecentSelections, SelectionSet};

use super::theme::Theme;
use crate::metadata::Metadata;
use crate::project::{ProjectConfig, ProjectField};

/// Panel receiving navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
	Project,
	Dependencies,
}

/// Whether printable keys run commands or edit the search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
	Browse,
	Search,
}

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
	Accepted,
	Cancelled,
}

/// Presentation options for a session.
#[derive(Debug, Clone)]
pub struct UiOptions {
	pub initial_query: Option<String>,
	pub theme: Theme,
	pub visible_rows: u16,
}

impl Default for UiOptions {
	fn default() -> Self {
		Self {
			initial_query: None,
			theme: Theme::default(),
			visible_rows: 20,
		}
	}
}

/// Result of a finished session.
#[derive(Debug, Clone)]
pub struct PickerOutcome {
	pub accepted: bool,
	pub query: String,
	pub project: ProjectConfig,
}

pub struct App<'a> {
	pub(crate) picker: DependencyPicker<'a>,
	pub(crate) metadata: &'a Metadata,
	pub(crate) project: ProjectConfig,
	pub(crate) focus: Focus,
	pub(crate) input_mode: InputMode,
	pub(crate) search_input: String,
	pub(crate) project_field: ProjectField,
	pub(crate) theme: Theme,
	pub(crate) visible_rows: u16,
}

impl<'a> App<'a> {
	/// Build the session state. A non-empty initial query starts in search mode.
	pub fn new(
		catalog: &'a Catalog,
		recency: &'a RecentSelections,
		metadata: &'a Metadata,
		project: ProjectConfig,
		options: UiOptions,
	) -> Self {
		let mut app = Self {
			picker: DependencyPicker::new(catalog, recency),
			metadata,
			project,
			focus: Focus::Dependencies,
			input_mode: InputMode::Browse,
			search_input: String::new(),
			project_field: ProjectField::ProjectType,
			theme: options.theme,
			visible_rows: options.visible_rows.max(1),
		};
		if let Some(query) = options.initial_query.filter(|query| !query.trim().is_empty()) {
			app.input_mode = InputMode::Search;
			app.search_input = query;
			app.picker.set_query(&app.search_input);
		}
		app
	}

	#[must_use]
	pub fn project(&self) -> &ProjectConfig {
		&self.project
	}

	#[must_use]
	pub fn picker(&self) -> &DependencyPicker<'a> {
		&self.picker
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	#[must_use]
	pub fn input_mode(&self) -> InputMode {
		self.input_mode
	}

	pub(crate) fn is_selected(&self, id: &str) -> bool {
		self.project.dependencies.contains(id)
	}

	/// Consume the session into its outcome.
	pub fn finish(self, exit: Exit) -> PickerOutcome {
		PickerOutcome {
			accepted: exit == Exit::Accepted,
			query: self.search_input,
			project: self.project,
		}
	}
}
