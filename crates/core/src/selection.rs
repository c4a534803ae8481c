use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Membership operations the picker needs on caller-owned selection state.
pub trait SelectionSet {
	fn contains(&self, id: &str) -> bool;

	/// Add `id`; returns false if it was already present.
	fn insert(&mut self, id: &str) -> bool;

	/// Remove `id`; returns false if it was not present.
	fn remove(&mut self, id: &str) -> bool;

	/// Flip membership of `id` and report whether it is now selected.
	fn toggle(&mut self, id: &str) -> bool {
		if self.remove(id) {
			false
		} else {
			self.insert(id);
			true
		}
	}
}

/// Insertion-ordered set of selected dependency ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
	ids: IndexSet<String>,
}

impl Selection {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Iterate ids in the order they were first selected.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.ids.iter().map(String::as_str)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.ids.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	pub fn clear(&mut self) {
		self.ids.clear();
	}

	#[must_use]
	pub fn to_vec(&self) -> Vec<String> {
		self.ids.iter().cloned().collect()
	}
}

impl SelectionSet for Selection {
	fn contains(&self, id: &str) -> bool {
		self.ids.contains(id)
	}

	fn insert(&mut self, id: &str) -> bool {
		self.ids.insert(id.to_owned())
	}

	fn remove(&mut self, id: &str) -> bool {
		self.ids.shift_remove(id)
	}
}

impl<S: Into<String>> FromIterator<S> for Selection {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self {
			ids: iter.into_iter().map(Into::into).collect(),
		}
	}
}
