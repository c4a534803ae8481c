use std::collections::HashSet;

/// Trim ids, drop empty entries and keep the first of each duplicate.
pub(super) fn sanitize_ids(values: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut cleaned = Vec::new();
	for value in values {
		let id = value.trim();
		if id.is_empty() {
			continue;
		}
		if seen.insert(id.to_string()) {
			cleaned.push(id.to_string());
		}
	}
	cleaned
}

/// Trimmed value, or `None` when nothing is left.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ids_are_trimmed_and_deduplicated() {
		let cleaned = sanitize_ids(vec![" web ".into(), "jpa".into(), "".into(), "web".into()]);
		assert_eq!(cleaned, vec!["web", "jpa"]);
	}

	#[test]
	fn blank_values_become_none() {
		assert_eq!(non_blank(Some("  ".into())), None);
		assert_eq!(non_blank(Some(" 21 ".into())), Some("21".into()));
		assert_eq!(non_blank(None), None);
	}
}
