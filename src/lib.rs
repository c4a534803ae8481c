//! Terminal front-end for configuring a generated project and picking its
//! dependencies.
//!
//! The catalog, matcher and picker state live in `initz-core`; this crate adds
//! the metadata document, the project being configured, stored preferences
//! and the ratatui interface that ties them together.

pub mod app_dirs;
pub mod logging;
pub mod metadata;
pub mod preferences;
pub mod project;
pub mod request;
pub mod ui;

pub use metadata::{Metadata, load_metadata};
pub use preferences::{PreferenceStore, UserPreferences};
pub use project::{ProjectConfig, ProjectField};
pub use ui::{App, PickerOutcome, Theme, UiOptions, run};
