//! Reusable widgets for the catalog browser.

pub mod rows;
pub mod tables;

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::input::QueryInput;
use crate::style::Theme;

/// Render the filter input with its placeholder and position the terminal
/// cursor at the edit point.
pub fn render_input(
	frame: &mut Frame,
	area: Rect,
	input: &QueryInput,
	placeholder: &str,
	theme: &Theme,
) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.input_border);
	let inner = block.inner(area);

	let line = if input.text().is_empty() {
		Line::from(Span::styled(placeholder.to_string(), theme.placeholder))
	} else {
		Line::from(Span::styled(input.text().to_string(), theme.input_text))
	};
	frame.render_widget(Paragraph::new(line).block(block), area);

	if inner.width > 0 {
		let x = inner.x + (input.cursor_width() as u16).min(inner.width - 1);
		frame.set_cursor_position(Position::new(x, inner.y));
	}
}
