use serde::{Deserialize, Serialize};

/// Number of previously chosen dependency sets kept in the history.
pub const MAX_RECENT_SETS: usize = 5;

/// History of previously chosen dependency-id sets, most recent first.
///
/// The picker only reads it; whoever persists preferences records new sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentSelections {
	sets: Vec<Vec<String>>,
}

impl RecentSelections {
	#[must_use]
	pub fn new(sets: Vec<Vec<String>>) -> Self {
		Self { sets }
	}

	/// Iterate sets from most to least recent.
	pub fn iter(&self) -> impl Iterator<Item = &[String]> {
		self.sets.iter().map(Vec::as_slice)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.sets.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.sets.is_empty()
	}

	/// Put `ids` at the front of the history.
	///
	/// Empty sets are ignored and an identical earlier set is moved rather
	/// than duplicated. The history never grows past [`MAX_RECENT_SETS`].
	pub fn record<I, S>(&mut self, ids: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let set: Vec<String> = ids.into_iter().map(Into::into).collect();
		if set.is_empty() {
			return;
		}
		self.sets.retain(|existing| *existing != set);
		self.sets.insert(0, set);
		self.sets.truncate(MAX_RECENT_SETS);
	}
}
