use std::path::PathBuf;

use initz::request::DEFAULT_SERVICE_URL;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Where the catalog comes from and where archives would be generated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CatalogSection {
	pub(super) metadata: Option<PathBuf>,
	pub(super) service_url: Option<String>,
}

impl CatalogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.metadata.clone() {
			self.metadata = Some(path);
		}
		if let Some(url) = cli.service_url.clone() {
			self.service_url = Some(url);
		}
	}

	/// An unset metadata path resolves to an empty one, which validation rejects.
	pub(super) fn finalize(self) -> (PathBuf, String) {
		let service_url = self
			.service_url
			.map(|url| url.trim().trim_end_matches('/').to_string())
			.filter(|url| !url.is_empty())
			.unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
		(self.metadata.unwrap_or_default(), service_url)
	}
}
