use std::sync::Arc;

use crate::catalog::{Catalog, Category, Dependency};
use crate::flat::{self, FlatItem};
use crate::recency::RecentSelections;
use crate::selection::SelectionSet;

/// Label used for the category filter when none is active.
pub const ALL_CATEGORIES: &str = "All";

/// Cursor and filter state over the flattened catalog.
///
/// The picker borrows the catalog and the recency history and never owns
/// them. Every filter change rebuilds the whole list before the cursor is
/// re-placed, so callers only ever observe a complete list.
#[derive(Debug, Clone)]
pub struct DependencyPicker<'a> {
	catalog: &'a Catalog,
	recency: &'a RecentSelections,
	query: String,
	active_category: Option<usize>,
	cursor: usize,
	items: Vec<FlatItem>,
}

impl<'a> DependencyPicker<'a> {
	/// Create a picker in browse mode with the cursor at the top of the list.
	#[must_use]
	pub fn new(catalog: &'a Catalog, recency: &'a RecentSelections) -> Self {
		let mut picker = Self {
			catalog,
			recency,
			query: String::new(),
			active_category: None,
			cursor: 0,
			items: Vec::new(),
		};
		picker.rebuild();
		picker
	}

	/// Replace the free-text query.
	///
	/// Surrounding whitespace is ignored. A non-empty query searches the whole
	/// catalog, so it clears any category filter.
	pub fn set_query(&mut self, query: &str) {
		let query = query.trim();
		if !query.is_empty() {
			self.active_category = None;
		}
		self.query = query.to_owned();
		self.rebuild();
		self.reset_cursor();
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn is_searching(&self) -> bool {
		!self.query.is_empty()
	}

	/// Advance the category filter: all, first, second, ..., last, all again.
	///
	/// Meant for browse mode; callers leave search before cycling.
	pub fn cycle_category(&mut self) {
		let count = self.catalog.category_count();
		if count == 0 {
			return;
		}
		self.active_category = match self.active_category {
			None => Some(0),
			Some(index) if index + 1 < count => Some(index + 1),
			Some(_) => None,
		};
		self.rebuild();
		self.reset_cursor();
	}

	#[must_use]
	pub fn active_category(&self) -> Option<&'a Category> {
		self.catalog.category(self.active_category?)
	}

	#[must_use]
	pub fn active_category_name(&self) -> &'a str {
		self.active_category()
			.map_or(ALL_CATEGORIES, |category| category.name.as_str())
	}

	#[must_use]
	pub fn has_category_filter(&self) -> bool {
		self.active_category.is_some()
	}

	/// Move to the previous dependency row, staying put when there is none.
	pub fn move_up(&mut self) {
		let before = self.items.get(..self.cursor).unwrap_or_default();
		if let Some(index) = before.iter().rposition(|item| !item.is_header()) {
			self.cursor = index;
		}
	}

	/// Move to the next dependency row, staying put when there is none.
	pub fn move_down(&mut self) {
		let start = self.cursor + 1;
		let after = self.items.get(start..).unwrap_or_default();
		if let Some(offset) = after.iter().position(|item| !item.is_header()) {
			self.cursor = start + offset;
		}
	}

	/// Flip the dependency under the cursor in `selection`.
	///
	/// Returns whether it is selected afterwards, or `None` when the cursor is
	/// not on a dependency row.
	pub fn toggle_selected<S>(&self, selection: &mut S) -> Option<bool>
	where
		S: SelectionSet + ?Sized,
	{
		let dependency = self.current()?;
		let selected = selection.toggle(&dependency.id);
		log::debug!(
			"{} dependency {}",
			if selected { "selected" } else { "deselected" },
			dependency.id
		);
		Some(selected)
	}

	#[must_use]
	pub fn is_at_top(&self) -> bool {
		self.cursor == 0
	}

	#[must_use]
	pub fn items(&self) -> &[FlatItem] {
		&self.items
	}

	#[must_use]
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Dependency under the cursor, if the cursor rests on a row.
	#[must_use]
	pub fn current(&self) -> Option<&Dependency> {
		self.items.get(self.cursor)?.dependency().map(Arc::as_ref)
	}

	/// Number of dependency rows in the current list.
	#[must_use]
	pub fn row_count(&self) -> usize {
		self.items.iter().filter(|item| !item.is_header()).count()
	}

	fn rebuild(&mut self) {
		self.items = flat::build(self.catalog, &self.query, self.active_category, self.recency);
		log::debug!(
			"rebuilt dependency list: query={:?} category={} items={}",
			self.query,
			self.active_category_name(),
			self.items.len()
		);
	}

	fn reset_cursor(&mut self) {
		let leads_with_header = self.items.first().is_some_and(FlatItem::is_header);
		self.cursor = usize::from(leads_with_header && self.items.len() > 1);
	}
}
