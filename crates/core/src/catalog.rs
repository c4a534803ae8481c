use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A single selectable add-on offered by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
	pub id: String,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub description: String,
}

impl Dependency {
	#[must_use]
	pub fn new(
		id: impl Into<String>,
		name: impl Into<String>,
		description: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			description: description.into(),
		}
	}
}

/// A named group of dependencies, kept in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
	pub name: String,
	#[serde(default)]
	pub dependencies: Vec<Arc<Dependency>>,
}

impl Category {
	#[must_use]
	pub fn new<I>(name: impl Into<String>, dependencies: I) -> Self
	where
		I: IntoIterator<Item = Dependency>,
	{
		Self {
			name: name.into(),
			dependencies: dependencies.into_iter().map(Arc::new).collect(),
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.dependencies.is_empty()
	}
}

/// Immutable, ordered set of categories with an id index.
///
/// Built once from metadata and never mutated afterwards. When an id occurs
/// in more than one category the first occurrence owns it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	categories: Vec<Category>,
	by_id: HashMap<String, (usize, usize)>,
}

impl Catalog {
	#[must_use]
	pub fn new(categories: Vec<Category>) -> Self {
		let mut by_id = HashMap::new();
		for (category_index, category) in categories.iter().enumerate() {
			for (position, dependency) in category.dependencies.iter().enumerate() {
				by_id
					.entry(dependency.id.clone())
					.or_insert((category_index, position));
			}
		}
		Self { categories, by_id }
	}

	#[must_use]
	pub fn categories(&self) -> &[Category] {
		&self.categories
	}

	#[must_use]
	pub fn category(&self, index: usize) -> Option<&Category> {
		self.categories.get(index)
	}

	#[must_use]
	pub fn category_count(&self) -> usize {
		self.categories.len()
	}

	/// Number of distinct dependency ids in the catalog.
	#[must_use]
	pub fn dependency_count(&self) -> usize {
		self.by_id.len()
	}

	/// True when the catalog has no categories at all.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.categories.is_empty()
	}

	#[must_use]
	pub fn get(&self, id: &str) -> Option<&Arc<Dependency>> {
		let &(category, position) = self.by_id.get(id)?;
		self.categories.get(category)?.dependencies.get(position)
	}

	#[must_use]
	pub fn contains(&self, id: &str) -> bool {
		self.by_id.contains_key(id)
	}
}

impl From<Vec<Category>> for Catalog {
	fn from(categories: Vec<Category>) -> Self {
		Self::new(categories)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Catalog {
		Catalog::new(vec![
			Category::new(
				"Web",
				[
					Dependency::new("web", "Spring Web", "Build web applications"),
					Dependency::new("webflux", "Spring Reactive Web", "Reactive web apps"),
				],
			),
			Category::new("Empty", Vec::<Dependency>::new()),
			Category::new(
				"Data",
				[
					Dependency::new("jpa", "Spring Data JPA", "Java Persistence API"),
					Dependency::new("web", "Shadowed Web", "Duplicate id"),
				],
			),
		])
	}

	#[test]
	fn lookup_resolves_ids() {
		let catalog = sample();
		assert_eq!(catalog.get("jpa").map(|dep| dep.name.as_str()), Some("Spring Data JPA"));
		assert!(catalog.contains("jpa"));
		assert!(catalog.get("missing").is_none());
	}

	#[test]
	fn first_occurrence_of_duplicate_id_wins() {
		let catalog = sample();
		assert_eq!(catalog.get("web").map(|dep| dep.name.as_str()), Some("Spring Web"));
		assert_eq!(catalog.dependency_count(), 3);
	}

	#[test]
	fn counts_include_empty_categories() {
		let catalog = sample();
		assert_eq!(catalog.category_count(), 3);
		assert!(catalog.category(1).is_some_and(Category::is_empty));
		assert!(Catalog::default().is_empty());
	}
}
