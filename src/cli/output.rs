use anyhow::Result;
use serde_json::json;

use crate::workflow::SessionOutcome;

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
	if !outcome.accepted {
		println!("Cancelled (query: '{}')", outcome.query);
		return;
	}

	let ids: Vec<&str> = outcome.project.dependencies.iter().collect();
	if ids.is_empty() {
		println!("Dependencies: (none)");
	} else {
		println!("Dependencies: {}", ids.join(", "));
	}
	if let Some(url) = &outcome.archive_url {
		println!("Archive: {url}");
	}
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"dependencies": outcome.project.dependencies,
		"project": outcome.project,
		"archiveUrl": outcome.archive_url,
		"buildFileUrl": outcome.build_file_url,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
