use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Metadata: {}", config.metadata.display());
	println!("  Service URL: {}", config.service_url);
	println!("  UI theme: {}", config.theme);
	println!("  Visible rows: {}", config.visible_rows);
	println!("  History: {}", bool_to_word(config.history));
	println!(
		"  Log level: {}",
		config.log_level.as_deref().unwrap_or("(default)")
	);
	if !config.initial_query.is_empty() {
		println!("  Initial query: {}", config.initial_query);
	}
	println!("  Pinned project fields: {}", config.project.pinned_count());
	if !config.project.dependencies.is_empty() {
		println!(
			"  Preselected dependencies: {}",
			config.project.dependencies.join(", ")
		);
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "enabled" } else { "disabled" }
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::super::ProjectOverrides;
	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(bool_to_word(true), "enabled");
		assert_eq!(bool_to_word(false), "disabled");
	}

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			metadata: PathBuf::from("-"),
			service_url: "https://start.spring.io".into(),
			project: ProjectOverrides {
				dependencies: vec!["web".into()],
				..ProjectOverrides::default()
			},
			initial_query: "jpa".into(),
			theme: "slate".into(),
			visible_rows: 10,
			history: false,
			log_level: Some("debug".into()),
		};

		print_summary(&config);
	}
}
