//! Selection/display state machine for the item shown full-screen.
//!
//! The overlay is either `Closed` or `Open` over a key plus the item content
//! resolved for display. Factories are resolved when the item opens (or is
//! refreshed by a change notification), receiving a [`CloseHandle`] so the
//! displayed content can dismiss the overlay itself.

use std::sync::Arc;

use ratatui::style::Style;
use tracing::debug;
use vitrine_registry::{CloseHandle, GalleryItem, ItemKind, ItemWidget, Renderable};

use super::state::App;

/// One component state resolved for display: its label plus the widget its
/// renderable produced.
pub struct ResolvedState {
	pub title: Option<String>,
	pub widget: Option<Arc<dyn ItemWidget>>,
	pub wrapper_style: Option<Style>,
}

/// Display state for the currently selected item, if any.
pub enum Overlay {
	Closed,
	Open {
		key: String,
		item: GalleryItem,
		/// Resolved content for a scene item.
		scene: Option<Arc<dyn ItemWidget>>,
		/// Resolved content for a component item, in declaration order.
		states: Vec<ResolvedState>,
		close: CloseHandle,
		/// Scroll offset (in rows) through a component's state stack.
		scroll: u16,
	},
}

impl Overlay {
	/// Resolve `item`'s renderables and enter the open state.
	fn open(key: String, item: GalleryItem) -> Self {
		let close = CloseHandle::new();
		let (scene, states) = match item.kind {
			ItemKind::Scene => {
				let widget = item
					.renderable
					.as_ref()
					.map(|renderable| renderable.resolve(close.clone()));
				(widget, Vec::new())
			}
			ItemKind::Component => {
				let states = item
					.states
					.iter()
					.map(|state| ResolvedState {
						title: state.title.clone(),
						widget: state
							.renderable
							.as_ref()
							.map(|renderable: &Renderable| renderable.resolve(close.clone())),
						wrapper_style: state.wrapper_style,
					})
					.collect();
				(None, states)
			}
		};
		Overlay::Open {
			key,
			item,
			scene,
			states,
			close,
			scroll: 0,
		}
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		matches!(self, Overlay::Open { .. })
	}

	/// Key of the open item, if any.
	#[must_use]
	pub fn open_key(&self) -> Option<&str> {
		match self {
			Overlay::Open { key, .. } => Some(key),
			Overlay::Closed => None,
		}
	}

	pub(crate) fn scroll_up(&mut self, lines: u16) {
		if let Overlay::Open { scroll, .. } = self {
			*scroll = scroll.saturating_sub(lines);
		}
	}

	pub(crate) fn scroll_down(&mut self, lines: u16, max: u16) {
		if let Overlay::Open { scroll, .. } = self {
			*scroll = scroll.saturating_add(lines).min(max);
		}
	}
}

impl App {
	/// Open the item registered under `key`.
	///
	/// The item must currently exist: selection reads a live item at the
	/// instant of the press, not a stale handle from an earlier list render.
	/// Unknown keys leave the overlay closed.
	pub fn select_item(&mut self, key: &str) {
		let Some(item) = self.registry.borrow().get(key).cloned() else {
			debug!(key, "ignoring selection of unregistered item");
			return;
		};
		self.overlay = Overlay::open(key.to_string(), item);
	}

	/// Dismiss the overlay, discarding the retained selection.
	pub fn close_overlay(&mut self) {
		self.overlay = Overlay::Closed;
	}

	/// The item currently displayed, if the overlay is open.
	#[must_use]
	pub fn displayed_item(&self) -> Option<&GalleryItem> {
		match &self.overlay {
			Overlay::Open { item, .. } => Some(item),
			Overlay::Closed => None,
		}
	}

	/// Swap in refreshed content when a change batch touches the open item,
	/// without changing state. This is what makes hot-reloaded edits to an
	/// open item visible without closing and reopening it.
	pub(crate) fn refresh_overlay(&mut self, changed: &[String]) {
		let Overlay::Open { key, scroll, .. } = &self.overlay else {
			return;
		};
		if !changed.iter().any(|changed_key| changed_key == key) {
			return;
		}
		let key = key.clone();
		let retained_scroll = *scroll;

		match self.registry.borrow().get(&key).cloned() {
			Some(item) => {
				let mut reopened = Overlay::open(key, item);
				if let Overlay::Open { scroll, .. } = &mut reopened {
					*scroll = retained_scroll;
				}
				self.overlay = reopened;
			}
			// The key vanished from the registry; keep the last-known item on
			// screen rather than tearing the overlay down. Closing stays
			// available as the escape hatch.
			None => debug!(key, "open item no longer registered; keeping stale content"),
		}
	}

	/// Close the overlay when displayed content requested dismissal through
	/// its [`CloseHandle`].
	pub(crate) fn pump_close_requests(&mut self) {
		if let Overlay::Open { close, .. } = &self.overlay
			&& close.take()
		{
			self.close_overlay();
		}
	}
}
