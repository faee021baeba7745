//! Developer-time catalog for inspecting terminal UI widgets in isolation.
//!
//! Applications describe their own catalog by registering scenes (shown
//! full-screen) and components (shown with multiple named states in one
//! scroll view) against a [`GalleryRegistry`], then hand the shared registry
//! to [`App`] and [`run`] to browse it. The root module re-exports the
//! registration and UI surfaces so embedders can configure everything without
//! digging through the member crates.

pub mod app_dirs;
pub mod logging;

pub use vitrine_registry::{
	ChangeListener, ChangeNotifier, CloseHandle, GalleryItem, GalleryRegistry, ItemKind,
	ItemOptions, ItemWidget, QUIESCENCE_WINDOW, Renderable, RegistryError, SharedRegistry,
	filter_indices, search_haystack,
};
pub use vitrine_tui::{
	App, FileQueryStore, QueryInput, QueryStore, StyleConfig, Theme, UiLabels, builtin_themes,
	default_theme, run, style,
};
