//! URLs for the generator endpoints.
//!
//! Nothing here performs network I/O; callers hand the URLs to whatever
//! downloads the archive.

use url::form_urlencoded;

use crate::project::ProjectConfig;

pub const DEFAULT_SERVICE_URL: &str = "https://start.spring.io";

/// Form-encoded generate parameters for `project`.
#[must_use]
pub fn query_string(project: &ProjectConfig) -> String {
	let mut query = form_urlencoded::Serializer::new(String::new());
	query
		.append_pair("type", &project.project_type)
		.append_pair("language", &project.language)
		.append_pair("bootVersion", &project.cleaned_boot_version())
		.append_pair("groupId", project.group_id())
		.append_pair("artifactId", project.artifact_id())
		.append_pair("name", &project.name)
		.append_pair("description", &project.description)
		.append_pair("packageName", &project.package_name)
		.append_pair("packaging", &project.packaging)
		.append_pair("javaVersion", &project.java_version)
		.append_pair("applicationFormat", &project.application_format);

	if !project.dependencies.is_empty() {
		let ids: Vec<&str> = project.dependencies.iter().collect();
		query.append_pair("dependencies", &ids.join(","));
	}
	query.finish()
}

/// URL of the zipped project archive.
#[must_use]
pub fn archive_url(base: &str, project: &ProjectConfig) -> String {
	endpoint(base, "/starter.zip", project)
}

/// URL of the build file alone, matching the project type.
#[must_use]
pub fn build_file_url(base: &str, project: &ProjectConfig) -> String {
	endpoint(base, build_file_path(&project.project_type), project)
}

fn build_file_path(project_type: &str) -> &'static str {
	match project_type {
		"gradle-project" => "/build.gradle",
		"gradle-project-kotlin" => "/build.gradle.kts",
		_ => "/pom.xml",
	}
}

fn endpoint(base: &str, path: &str, project: &ProjectConfig) -> String {
	format!("{}{path}?{}", base.trim_end_matches('/'), query_string(project))
}

#[cfg(test)]
mod tests {
	use initz_core::SelectionSet;

	use super::*;

	fn project() -> ProjectConfig {
		let mut project = ProjectConfig::default();
		project.boot_version = "3.5.0.RELEASE".into();
		project.description = "Demo & more".into();
		project.dependencies.insert("web");
		project.dependencies.insert("jpa");
		project
	}

	#[test]
	fn query_encodes_every_parameter() {
		let query = query_string(&project());
		assert!(query.starts_with("type=gradle-project&language=java&bootVersion=3.5.0&"));
		assert!(query.contains("description=Demo+%26+more"));
		assert!(query.ends_with("&applicationFormat=properties&dependencies=web%2Cjpa"));
	}

	#[test]
	fn empty_selection_omits_dependencies() {
		let query = query_string(&ProjectConfig::default());
		assert!(!query.contains("dependencies="));
	}

	#[test]
	fn build_file_follows_project_type() {
		let mut project = project();
		assert!(build_file_url(DEFAULT_SERVICE_URL, &project).starts_with("https://start.spring.io/build.gradle?"));
		project.project_type = "maven-project".into();
		assert!(build_file_url("http://localhost:8080/", &project).starts_with("http://localhost:8080/pom.xml?"));
		project.project_type = "gradle-project-kotlin".into();
		assert!(build_file_url(DEFAULT_SERVICE_URL, &project).contains("/build.gradle.kts?"));
	}

	#[test]
	fn archive_points_at_starter_zip() {
		let url = archive_url(DEFAULT_SERVICE_URL, &project());
		assert!(url.starts_with("https://start.spring.io/starter.zip?type="));
	}
}
