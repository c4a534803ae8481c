//! Derives the header-interleaved list the picker navigates.
//!
//! The list is a pure function of the catalog and the filter state and is
//! rebuilt from scratch on every change; nothing here patches an existing
//! list in place.

use std::collections::HashSet;
use std::sync::Arc;

use crate::catalog::{Catalog, Category, Dependency};
use crate::matcher;
use crate::recency::RecentSelections;

/// Label of the synthetic section listing recently chosen dependencies.
pub const RECENT_HEADER: &str = "Recently Used";
/// Maximum number of rows shown in the recently used section.
pub const RECENT_LIMIT: usize = 10;

/// One entry of the flattened catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlatItem {
	Header {
		label: String,
	},
	Row {
		category: String,
		dependency: Arc<Dependency>,
		/// Char offsets into `dependency.name` matched by the query.
		positions: Option<Vec<usize>>,
	},
}

impl FlatItem {
	fn row(category: &str, dependency: &Arc<Dependency>, positions: Option<Vec<usize>>) -> Self {
		Self::Row {
			category: category.to_owned(),
			dependency: Arc::clone(dependency),
			positions,
		}
	}

	fn header(label: &str) -> Self {
		Self::Header {
			label: label.to_owned(),
		}
	}

	#[must_use]
	pub fn is_header(&self) -> bool {
		matches!(self, Self::Header { .. })
	}

	#[must_use]
	pub fn dependency(&self) -> Option<&Arc<Dependency>> {
		match self {
			Self::Row { dependency, .. } => Some(dependency),
			Self::Header { .. } => None,
		}
	}

	/// Header label, or the owning category for a row.
	#[must_use]
	pub fn label(&self) -> &str {
		match self {
			Self::Header { label } => label,
			Self::Row { category, .. } => category,
		}
	}

	#[must_use]
	pub fn positions(&self) -> Option<&[usize]> {
		match self {
			Self::Row {
				positions: Some(positions),
				..
			} => Some(positions),
			_ => None,
		}
	}
}

/// Build the flat list for the given filter state.
///
/// A non-empty `query` ranks matching dependencies across the catalog (or only
/// `active_category` when one is set). An empty query lists categories in
/// catalog order, led by the recently used section when no category filter
/// is active and the history still resolves to at least one dependency.
#[must_use]
pub fn build(
	catalog: &Catalog,
	query: &str,
	active_category: Option<usize>,
	recency: &RecentSelections,
) -> Vec<FlatItem> {
	let categories = scoped_categories(catalog, active_category);
	if !query.is_empty() {
		return ranked(categories, query);
	}

	let mut items = Vec::new();
	if active_category.is_none() {
		push_recent(&mut items, catalog, recency);
	}
	for category in categories.filter(|category| !category.is_empty()) {
		items.push(FlatItem::header(&category.name));
		items.extend(
			category
				.dependencies
				.iter()
				.map(|dependency| FlatItem::row(&category.name, dependency, None)),
		);
	}
	items
}

fn scoped_categories(
	catalog: &Catalog,
	active_category: Option<usize>,
) -> Box<dyn Iterator<Item = &Category> + '_> {
	match active_category {
		Some(index) => Box::new(catalog.category(index).into_iter()),
		None => Box::new(catalog.categories().iter()),
	}
}

struct Ranked<'a> {
	category: &'a str,
	dependency: &'a Arc<Dependency>,
	score: u32,
	positions: Option<Vec<usize>>,
}

fn rank<'a>(category: &'a str, dependency: &'a Arc<Dependency>, query: &str) -> Option<Ranked<'a>> {
	let name = matcher::score(query, &dependency.name);
	let id = matcher::score(query, &dependency.id);
	let description = matcher::score(query, &dependency.description);

	let best = name.score.max(id.score).max(description.score);
	if best == 0 {
		return None;
	}
	// highlight the name whenever it matched, even if another field scored higher
	let positions = name.is_match().then_some(name.positions);
	Some(Ranked {
		category,
		dependency,
		score: best,
		positions,
	})
}

fn ranked<'a>(categories: impl Iterator<Item = &'a Category>, query: &str) -> Vec<FlatItem> {
	let mut hits: Vec<Ranked<'a>> = categories
		.flat_map(|category| {
			category
				.dependencies
				.iter()
				.filter_map(move |dependency| rank(&category.name, dependency, query))
		})
		.collect();
	// sort_by is stable: equal scores keep catalog order
	hits.sort_by(|a, b| b.score.cmp(&a.score));

	let mut items = Vec::with_capacity(hits.len() * 2);
	let mut current: Option<&str> = None;
	for hit in hits {
		if current != Some(hit.category) {
			items.push(FlatItem::header(hit.category));
			current = Some(hit.category);
		}
		items.push(FlatItem::row(hit.category, hit.dependency, hit.positions));
	}
	items
}

fn push_recent(items: &mut Vec<FlatItem>, catalog: &Catalog, recency: &RecentSelections) {
	let mut seen = HashSet::new();
	let recent: Vec<&Arc<Dependency>> = recency
		.iter()
		.flatten()
		.filter_map(|id| catalog.get(id))
		.filter(|dependency| seen.insert(dependency.id.as_str()))
		.take(RECENT_LIMIT)
		.collect();

	if recent.is_empty() {
		return;
	}
	items.push(FlatItem::header(RECENT_HEADER));
	items.extend(
		recent
			.into_iter()
			.map(|dependency| FlatItem::row(RECENT_HEADER, dependency, None)),
	);
}

#[cfg(test)]
mod tests {
	use super::*;

	fn catalog() -> Catalog {
		Catalog::new(vec![
			Category::new(
				"Web",
				[
					Dependency::new("web", "Spring Web", "Build web, including RESTful, applications"),
					Dependency::new("webflux", "Spring Reactive Web", "Reactive web applications"),
				],
			),
			Category::new("Empty", Vec::<Dependency>::new()),
			Category::new(
				"Data",
				[
					Dependency::new("jpa", "Spring Data JPA", "Persist data with JPA"),
					Dependency::new("jdbc", "Spring Data JDBC", "Persist data with plain JDBC"),
				],
			),
		])
	}

	fn shape(items: &[FlatItem]) -> Vec<String> {
		items
			.iter()
			.map(|item| match item {
				FlatItem::Header { label } => format!("# {label}"),
				FlatItem::Row { dependency, .. } => dependency.id.clone(),
			})
			.collect()
	}

	#[test]
	fn browse_lists_non_empty_categories_in_order() {
		let items = build(&catalog(), "", None, &RecentSelections::default());
		assert_eq!(shape(&items), ["# Web", "web", "webflux", "# Data", "jpa", "jdbc"]);
		assert!(items.iter().all(|item| item.positions().is_none()));
	}

	#[test]
	fn active_category_limits_browse_to_one_category() {
		let recency = RecentSelections::new(vec![vec!["web".into()]]);
		let items = build(&catalog(), "", Some(2), &recency);
		assert_eq!(shape(&items), ["# Data", "jpa", "jdbc"]);

		let empty = build(&catalog(), "", Some(1), &recency);
		assert!(empty.is_empty());

		let out_of_range = build(&catalog(), "", Some(9), &recency);
		assert!(out_of_range.is_empty());
	}

	#[test]
	fn recent_section_resolves_dedups_and_skips_unknown_ids() {
		let recency = RecentSelections::new(vec![
			vec!["jdbc".into(), "gone".into()],
			vec!["web".into(), "jdbc".into()],
		]);
		let items = build(&catalog(), "", None, &recency);
		assert_eq!(
			shape(&items),
			[
				"# Recently Used",
				"jdbc",
				"web",
				"# Web",
				"web",
				"webflux",
				"# Data",
				"jpa",
				"jdbc"
			]
		);
		assert_eq!(items[1].label(), RECENT_HEADER);
	}

	#[test]
	fn unresolvable_history_emits_no_recent_header() {
		let recency = RecentSelections::new(vec![vec!["gone".into()]]);
		let items = build(&catalog(), "", None, &recency);
		assert_eq!(items.first(), Some(&FlatItem::header("Web")));
	}

	#[test]
	fn recent_section_is_capped() {
		let deps = (0..15).map(|n| Dependency::new(format!("d{n}"), format!("Dep {n}"), ""));
		let catalog = Catalog::new(vec![Category::new("Many", deps)]);
		let ids = (0..15).map(|n| format!("d{n}")).collect();
		let items = build(&catalog, "", None, &RecentSelections::new(vec![ids]));

		let recent_rows = items
			.iter()
			.skip(1)
			.take_while(|item| !item.is_header())
			.count();
		assert_eq!(recent_rows, RECENT_LIMIT);
	}

	#[test]
	fn query_ranks_and_rederives_headers() {
		let items = build(&catalog(), "jdbc", None, &RecentSelections::default());
		assert_eq!(shape(&items), ["# Data", "jdbc"]);
		// the id scores higher, the name still carries the highlight
		assert_eq!(items[1].positions(), Some([12, 13, 14, 15].as_slice()));
	}

	#[test]
	fn equal_scores_keep_catalog_order() {
		// every name starts with "Spring", so each gets the same substring score
		let items = build(&catalog(), "spring", None, &RecentSelections::default());
		assert_eq!(shape(&items), ["# Web", "web", "webflux", "# Data", "jpa", "jdbc"]);
	}

	#[test]
	fn better_match_pulls_its_category_header_forward() {
		let items = build(&catalog(), "data", None, &RecentSelections::default());
		// "Spring Data JPA" and "Spring Data JDBC" match at offset 7 in the name;
		// the Web entries only match "data" scattered, if at all
		assert_eq!(shape(&items).first().map(String::as_str), Some("# Data"));
	}

	#[test]
	fn name_highlight_survives_a_better_description_match() {
		// description "Reactive web applications" matches at offset 0 and
		// outscores the name match at offset 7
		let items = build(&catalog(), "reactive", None, &RecentSelections::default());
		assert_eq!(shape(&items), ["# Web", "webflux"]);
		let name = matcher::score("reactive", "Spring Reactive Web");
		let description = matcher::score("reactive", "Reactive web applications");
		assert!(name.is_match() && name.score < description.score);
		assert_eq!(items[1].positions(), Some((7..15).collect::<Vec<_>>().as_slice()));
	}

	#[test]
	fn description_only_match_has_no_highlight() {
		let items = build(&catalog(), "restful", None, &RecentSelections::default());
		assert_eq!(shape(&items), ["# Web", "web"]);
		assert_eq!(items[1].positions(), None);
	}

	#[test]
	fn unmatched_query_yields_empty_list() {
		let items = build(&catalog(), "zzz", None, &RecentSelections::default());
		assert!(items.is_empty());
	}
}
