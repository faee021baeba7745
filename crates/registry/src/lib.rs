//! Registration and discovery core for the `vitrine` catalog.
//!
//! Applications describe their own catalog by registering renderable items at
//! load time; the [`GalleryRegistry`] stores them under stable keys, merges
//! multi-state components, and publishes debounced change notifications so a
//! running catalog can pick up hot-reloaded registrations. The [`search`]
//! module provides the synchronous filter the list UI runs on every keystroke.

pub mod error;
pub mod item;
pub mod notifier;
pub mod registry;
pub mod search;

pub use error::RegistryError;
pub use item::{CloseHandle, GalleryItem, ItemKind, ItemOptions, ItemWidget, Renderable};
pub use notifier::{ChangeListener, ChangeNotifier, QUIESCENCE_WINDOW};
pub use registry::{GalleryRegistry, SharedRegistry};
pub use search::{filter_indices, search_haystack};
