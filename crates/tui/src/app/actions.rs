//! Keyboard handling for the list view and the overlay.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::overlay::Overlay;
use super::state::App;

/// Rows scrolled by PageUp/PageDown in a component overlay.
const PAGE_SCROLL: u16 = 10;

impl App {
	/// Process a keyboard event. Returns `true` when the user asked to leave
	/// the catalog entirely.
	pub fn handle_key(&mut self, key: KeyEvent) -> bool {
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return true;
		}
		if self.overlay.is_open() {
			self.handle_overlay_key(key);
			return false;
		}
		match key.code {
			KeyCode::Esc => return true,
			KeyCode::Enter => {
				if let Some(item) = self.selected_item() {
					let key = item.key.clone();
					self.select_item(&key);
				}
			}
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ => {
				if self.search_input.input(key) {
					self.refilter();
				}
			}
		}
		false
	}

	fn handle_overlay_key(&mut self, key: KeyEvent) {
		let max = self.overlay_scroll_max();
		match key.code {
			KeyCode::Esc | KeyCode::Enter => self.close_overlay(),
			KeyCode::Up => self.overlay.scroll_up(1),
			KeyCode::Down => self.overlay.scroll_down(1, max),
			KeyCode::PageUp => self.overlay.scroll_up(PAGE_SCROLL),
			KeyCode::PageDown => self.overlay.scroll_down(PAGE_SCROLL, max),
			_ => {}
		}
	}
}
