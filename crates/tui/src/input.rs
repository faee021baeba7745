//! Single-line text input for the search filter.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Minimal cursor-editing text field.
///
/// The cursor is tracked as a character index; byte offsets are derived when
/// mutating the underlying string so multi-byte input behaves.
#[derive(Debug, Default)]
pub struct QueryInput {
	text: String,
	cursor: usize,
}

impl QueryInput {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let text = initial.into();
		let cursor = text.chars().count();
		Self { text, cursor }
	}

	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Replace the contents, placing the cursor at the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		self.text = text.into();
		self.cursor = self.text.chars().count();
	}

	/// Display width of the text left of the cursor, for terminal cursor
	/// positioning.
	#[must_use]
	pub fn cursor_width(&self) -> usize {
		self.text[..self.byte_offset(self.cursor)].width()
	}

	/// Apply a key event; returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		match key.code {
			KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				if self.text.is_empty() {
					return false;
				}
				self.text.clear();
				self.cursor = 0;
				true
			}
			KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
				let offset = self.byte_offset(self.cursor);
				self.text.insert(offset, c);
				self.cursor += 1;
				true
			}
			KeyCode::Backspace => {
				if self.cursor == 0 {
					return false;
				}
				self.cursor -= 1;
				let offset = self.byte_offset(self.cursor);
				self.text.remove(offset);
				true
			}
			KeyCode::Delete => {
				if self.cursor >= self.text.chars().count() {
					return false;
				}
				let offset = self.byte_offset(self.cursor);
				self.text.remove(offset);
				true
			}
			KeyCode::Left => {
				self.cursor = self.cursor.saturating_sub(1);
				false
			}
			KeyCode::Right => {
				self.cursor = (self.cursor + 1).min(self.text.chars().count());
				false
			}
			KeyCode::Home => {
				self.cursor = 0;
				false
			}
			KeyCode::End => {
				self.cursor = self.text.chars().count();
				false
			}
			_ => false,
		}
	}

	/// Byte offset of the given character index.
	fn byte_offset(&self, char_index: usize) -> usize {
		self.text
			.char_indices()
			.nth(char_index)
			.map_or(self.text.len(), |(offset, _)| offset)
	}
}
