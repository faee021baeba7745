//! Core state container for the catalog browser.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use ratatui::widgets::TableState;
use vitrine_registry::{ChangeListener, GalleryItem, SharedRegistry};

use super::overlay::Overlay;
use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::persist::QueryStore;
use crate::style::{StyleConfig, Theme};

/// Forwards batched registry notifications onto the event loop's channel.
///
/// The notifier calls listeners synchronously mid-pump; pushing the batch
/// through a channel lets [`App`] apply it on its own terms without the
/// listener needing a handle back into the application.
struct ChangeForwarder {
	tx: Sender<Vec<String>>,
}

impl ChangeListener for ChangeForwarder {
	fn on_items_changed(&self, keys: &[String]) {
		let _ = self.tx.send(keys.to_vec());
	}
}

/// Aggregate state for the catalog browser.
///
/// Owns the current snapshot of the registry's contents, the filtered index
/// buffer the list renders from, the query input, and the overlay state
/// machine for whichever item is open full-screen.
pub struct App {
	pub(crate) registry: SharedRegistry,
	/// Snapshot of `registry.list()`, refreshed on change notifications.
	pub(crate) all: Vec<GalleryItem>,
	/// Indices into `all` that match the current query.
	pub(crate) filtered: Vec<usize>,
	pub(crate) table_state: TableState,
	pub(crate) search_input: QueryInput,
	pub(crate) overlay: Overlay,
	pub(crate) ui: UiLabels,
	pub(crate) style: StyleConfig,
	pub(crate) query_store: Option<Box<dyn QueryStore>>,
	pub(crate) changes: Receiver<Vec<String>>,
	/// Height of the overlay content viewport as of the last draw; used to
	/// clamp component-state scrolling.
	pub(crate) overlay_viewport: u16,
	listener: Arc<dyn ChangeListener>,
}

impl App {
	/// Construct the browser over a shared registry handle and subscribe to
	/// its change notifications.
	#[must_use]
	pub fn new(registry: SharedRegistry) -> Self {
		let (tx, changes) = mpsc::channel();
		let listener: Arc<dyn ChangeListener> = Arc::new(ChangeForwarder { tx });
		registry.borrow_mut().subscribe(Arc::clone(&listener));

		let mut app = Self {
			registry,
			all: Vec::new(),
			filtered: Vec::new(),
			table_state: TableState::default(),
			search_input: QueryInput::default(),
			overlay: Overlay::Closed,
			ui: UiLabels::default(),
			style: StyleConfig::default(),
			query_store: None,
			changes,
			overlay_viewport: 0,
			listener,
		};
		app.reload_items();
		app
	}

	/// Apply a new theme.
	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
	}

	/// Install the last-query store and seed the filter from it.
	pub fn set_query_store(&mut self, store: Box<dyn QueryStore>) {
		if let Some(saved) = store.load() {
			self.set_query(saved);
		}
		self.query_store = Some(store);
	}

	/// Replace the filter text and re-run the filter.
	pub fn set_query(&mut self, query: impl Into<String>) {
		self.search_input.set_text(query);
		self.refilter();
	}

	/// Number of entries matching the current filter.
	#[must_use]
	pub fn filtered_len(&self) -> usize {
		self.filtered.len()
	}

	/// The item under the list cursor, if any.
	pub(crate) fn selected_item(&self) -> Option<&GalleryItem> {
		let row = self.table_state.selected()?;
		let index = *self.filtered.get(row)?;
		self.all.get(index)
	}

	/// Keep the row selection valid for the currently filtered list.
	pub(crate) fn ensure_selection(&mut self) {
		if self.filtered.is_empty() {
			self.table_state.select(None);
			return;
		}
		let row = self.table_state.selected().unwrap_or(0);
		self.table_state.select(Some(row.min(self.filtered.len() - 1)));
	}

	pub(crate) fn move_selection_up(&mut self) {
		if let Some(row) = self.table_state.selected() {
			self.table_state.select(Some(row.saturating_sub(1)));
		}
	}

	pub(crate) fn move_selection_down(&mut self) {
		if self.filtered.is_empty() {
			return;
		}
		let row = self.table_state.selected().unwrap_or(0);
		self.table_state
			.select(Some((row + 1).min(self.filtered.len() - 1)));
	}

	/// Per-tick maintenance: deliver due notification batches, apply them, and
	/// honor close requests from displayed content.
	pub fn tick(&mut self) {
		let now = std::time::Instant::now();
		self.registry.borrow_mut().pump_notifications(now);
		self.pump_changes();
		self.pump_close_requests();
	}

	/// Persist the current query through the installed store, if any.
	pub fn persist_query(&self) {
		if let Some(store) = &self.query_store {
			store.save(self.search_input.text());
		}
	}
}

impl Drop for App {
	fn drop(&mut self) {
		if let Ok(mut registry) = self.registry.try_borrow_mut() {
			registry.unsubscribe(&self.listener);
		}
	}
}
