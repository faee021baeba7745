//! Interactive terminal UI for browsing the `vitrine` catalog.
//!
//! The crate contains the searchable list application, the overlay that
//! displays a selected item full-screen, the event loop, and the reusable
//! widgets/style definitions that power the terminal application.

mod app;
mod config;
pub mod components;
pub mod input;
pub mod persist;
mod runtime;
pub mod style;

#[cfg(test)]
mod snapshot_tests;

pub use app::{App, Overlay, ResolvedState};
pub use config::UiLabels;
pub use input::QueryInput;
pub use persist::{FileQueryStore, QueryStore};
pub use runtime::run;
pub use style::{StyleConfig, Theme, builtin_themes, default_theme};
