//! Interactive terminal front-end.
//!
//! [`App`] holds the session state, `actions` maps keys onto the picker and
//! the project, `render` draws both panels and [`run`] drives the event loop.

mod actions;
mod highlight;
mod render;
mod runtime;
mod state;
pub mod theme;

pub use runtime::run;
pub use state::{App, Exit, Focus, InputMode, PickerOutcome, UiOptions};
pub use theme::Theme;
