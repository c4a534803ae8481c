use initz_core::{
	Catalog, Category, Dependency, DependencyPicker, FlatItem, RECENT_HEADER, RecentSelections,
	Selection, SelectionSet,
};

fn catalog() -> Catalog {
	Catalog::new(vec![
		Category::new(
			"Web",
			[
				Dependency::new("web", "Spring Web", "Build web applications using Spring MVC"),
				Dependency::new(
					"webflux",
					"Spring Reactive Web",
					"Build reactive web applications",
				),
			],
		),
		Category::new(
			"Data",
			[
				Dependency::new("jpa", "Spring Data JPA", "Persist data in SQL stores"),
				Dependency::new("jdbc", "Spring Data JDBC", "Persist data in SQL stores"),
			],
		),
	])
}

fn ids(items: &[FlatItem]) -> Vec<String> {
	items
		.iter()
		.map(|item| match item {
			FlatItem::Header { label } => format!("[{label}]"),
			FlatItem::Row { dependency, .. } => dependency.id.clone(),
		})
		.collect()
}

fn current_id<'p>(picker: &'p DependencyPicker<'_>) -> Option<&'p str> {
	picker.current().map(|dependency| dependency.id.as_str())
}

#[test]
fn browse_list_interleaves_headers() {
	let catalog = catalog();
	let recency = RecentSelections::default();
	let picker = DependencyPicker::new(&catalog, &recency);
	assert_eq!(
		ids(picker.items()),
		["[Web]", "web", "webflux", "[Data]", "jpa", "jdbc"]
	);
}

#[test]
fn three_moves_down_skip_the_data_header_and_toggle_jpa() {
	let catalog = catalog();
	let recency = RecentSelections::default();
	let mut picker = DependencyPicker::new(&catalog, &recency);
	let mut selection = Selection::new();

	for _ in 0..3 {
		picker.move_down();
	}
	assert_eq!(picker.cursor(), 4);
	assert_eq!(current_id(&picker), Some("jpa"));

	picker.toggle_selected(&mut selection);
	assert!(selection.contains("jpa"));
	assert_eq!(selection.len(), 1);
}

#[test]
fn moving_down_clamps_at_the_last_row() {
	let catalog = catalog();
	let recency = RecentSelections::default();
	let mut picker = DependencyPicker::new(&catalog, &recency);

	for _ in 0..20 {
		picker.move_down();
		assert!(!picker.items()[picker.cursor()].is_header());
	}
	assert_eq!(picker.cursor(), 5);
	assert_eq!(current_id(&picker), Some("jdbc"));
}

#[test]
fn moving_up_from_the_first_row_is_idempotent() {
	let catalog = catalog();
	let recency = RecentSelections::default();
	let mut picker = DependencyPicker::new(&catalog, &recency);
	picker.move_down();
	assert_eq!(picker.cursor(), 1);

	picker.move_up();
	picker.move_up();
	assert_eq!(picker.cursor(), 1);
	assert_eq!(current_id(&picker), Some("web"));
}

#[test]
fn reactive_query_finds_only_webflux() {
	let catalog = catalog();
	let recency = RecentSelections::default();
	let mut picker = DependencyPicker::new(&catalog, &recency);

	picker.set_query("reactive");
	assert!(picker.is_searching());
	assert_eq!(ids(picker.items()), ["[Web]", "webflux"]);
	assert_eq!(picker.cursor(), 1);
	// "Reactive" sits at offset 7 of "Spring Reactive Web"
	assert_eq!(
		picker.items()[1].positions(),
		Some([7, 8, 9, 10, 11, 12, 13, 14].as_slice())
	);
}

#[test]
fn clearing_the_query_restores_the_browse_list() {
	let catalog = catalog();
	let recency = RecentSelections::new(vec![vec!["jdbc".into()]]);
	let mut picker = DependencyPicker::new(&catalog, &recency);
	let before = picker.items().to_vec();

	picker.set_query("x");
	picker.set_query("");
	assert_eq!(picker.items(), before.as_slice());
}

#[test]
fn equal_scores_keep_catalog_order() {
	let catalog = catalog();
	let recency = RecentSelections::default();
	let mut picker = DependencyPicker::new(&catalog, &recency);

	// both Data entries share a description and match it at the same offset
	picker.set_query("sql");
	assert_eq!(ids(picker.items()), ["[Data]", "jpa", "jdbc"]);
}

#[test]
fn recent_dependencies_lead_the_browse_list() {
	let catalog = catalog();
	let recency = RecentSelections::new(vec![vec!["jdbc".into(), "web".into()]]);
	let mut picker = DependencyPicker::new(&catalog, &recency);

	let items = ids(picker.items());
	assert_eq!(&items[..3], [format!("[{RECENT_HEADER}]"), "jdbc".into(), "web".into()]);

	picker.cycle_category();
	assert_eq!(ids(picker.items()), ["[Web]", "web", "webflux"]);
}

#[test]
fn category_filter_cycles_and_resets_the_cursor() {
	let catalog = catalog();
	let recency = RecentSelections::default();
	let mut picker = DependencyPicker::new(&catalog, &recency);

	picker.cycle_category();
	picker.cycle_category();
	assert_eq!(picker.active_category_name(), "Data");
	assert_eq!(ids(picker.items()), ["[Data]", "jpa", "jdbc"]);
	assert_eq!(current_id(&picker), Some("jpa"));

	picker.cycle_category();
	assert!(!picker.has_category_filter());
	assert_eq!(picker.row_count(), 4);
}

#[test]
fn toggling_twice_deselects() {
	let catalog = catalog();
	let recency = RecentSelections::default();
	let mut picker = DependencyPicker::new(&catalog, &recency);
	let mut selection: Selection = ["webflux"].into_iter().collect();

	picker.move_down();
	picker.move_down();
	picker.toggle_selected(&mut selection);
	assert!(selection.is_empty());
	picker.toggle_selected(&mut selection);
	assert_eq!(selection.to_vec(), ["webflux"]);
}

#[test]
fn empty_catalog_is_inert() {
	let catalog = Catalog::default();
	let recency = RecentSelections::default();
	let mut picker = DependencyPicker::new(&catalog, &recency);
	let mut selection = Selection::new();

	picker.move_down();
	picker.move_up();
	picker.cycle_category();
	picker.set_query("anything");
	picker.toggle_selected(&mut selection);

	assert!(picker.items().is_empty());
	assert_eq!(picker.cursor(), 0);
	assert!(picker.is_at_top());
	assert!(selection.is_empty());
}

fn outline(items: &[FlatItem]) -> String {
	items
		.iter()
		.map(|item| match (item, item.positions()) {
			(FlatItem::Header { label }, _) => format!("[{label}]"),
			(FlatItem::Row { dependency, .. }, Some(positions)) => {
				format!("  {} {positions:?}", dependency.id)
			}
			(FlatItem::Row { dependency, .. }, None) => format!("  {}", dependency.id),
		})
		.collect::<Vec<_>>()
		.join("\n")
}

#[test]
fn exact_id_query_still_highlights_the_name() {
	let catalog = catalog();
	let recency = RecentSelections::default();
	let mut picker = DependencyPicker::new(&catalog, &recency);
	picker.set_query("jdbc");
	insta::assert_snapshot!(outline(picker.items()), @r"
	[Data]
	  jdbc [12, 13, 14, 15]
	");
}

#[test]
fn shared_prefix_query_highlights_every_name() {
	let catalog = catalog();
	let recency = RecentSelections::default();
	let mut picker = DependencyPicker::new(&catalog, &recency);
	picker.set_query("spring");
	insta::assert_snapshot!(outline(picker.items()), @r"
	[Web]
	  web [0, 1, 2, 3, 4, 5]
	  webflux [0, 1, 2, 3, 4, 5]
	[Data]
	  jpa [0, 1, 2, 3, 4, 5]
	  jdbc [0, 1, 2, 3, 4, 5]
	");
}
