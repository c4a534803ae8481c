//! Dependency selection engine behind the `initz` picker.
//!
//! The crate holds an immutable, categorized [`Catalog`] and derives a flat,
//! header-interleaved view of it for the current filter state. Free-text
//! queries are ranked with the scorer in [`matcher`]; the [`DependencyPicker`]
//! keeps the cursor on dependency rows as the view is rebuilt.
//!
//! Nothing here performs I/O. Selection and recency state are owned by the
//! caller and lent to the picker through [`SelectionSet`] and
//! [`RecentSelections`].

pub mod catalog;
pub mod flat;
pub mod matcher;
pub mod picker;
pub mod recency;
pub mod selection;

pub use catalog::{Catalog, Category, Dependency};
pub use flat::{FlatItem, RECENT_HEADER, RECENT_LIMIT};
pub use matcher::MatchResult;
pub use picker::{ALL_CATEGORIES, DependencyPicker};
pub use recency::{MAX_RECENT_SETS, RecentSelections};
pub use selection::{Selection, SelectionSet};
