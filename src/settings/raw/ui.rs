use serde::Deserialize;

use initz::ui::theme;

use crate::cli::CliArgs;

pub(super) const DEFAULT_VISIBLE_ROWS: u16 = 20;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) visible_rows: Option<u16>,
}

pub(super) struct UiResolution {
	pub(super) initial_query: String,
	pub(super) theme: String,
	pub(super) visible_rows: u16,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(rows) = cli.visible_rows {
			self.visible_rows = Some(rows);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let theme = self
			.theme
			.map(|name| name.trim().to_string())
			.filter(|name| !name.is_empty())
			.unwrap_or_else(|| theme::DEFAULT_THEME.to_string());

		UiResolution {
			initial_query: self.initial_query.unwrap_or_default(),
			theme,
			visible_rows: self.visible_rows.unwrap_or(DEFAULT_VISIBLE_ROWS),
		}
	}
}
