//! Frame composition for the list view and the overlay.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;
use vitrine_registry::ItemKind;

use super::overlay::Overlay;
use super::state::App;
use crate::components::{render_input, rows::build_item_rows, tables::item_table};

/// Rows given to each component state in the overlay's scroll stack,
/// excluding its title line.
pub(crate) const STATE_ROWS: u16 = 6;

impl App {
	pub fn draw(&mut self, frame: &mut Frame) {
		if self.overlay.is_open() {
			self.draw_overlay(frame);
		} else {
			self.draw_list(frame);
		}
	}

	fn draw_list(&mut self, frame: &mut Frame) {
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(3), Constraint::Min(1)])
			.split(frame.area());

		render_input(
			frame,
			layout[0],
			&self.search_input,
			&self.ui.filter_label,
			&self.style.theme,
		);

		let title = format!(
			"{} ({} {})",
			self.ui.table_title,
			self.filtered.len(),
			self.ui.count_label
		);
		let rows = build_item_rows(&self.filtered, &self.all, &self.style.theme);
		let table = item_table(rows, &title, &self.style.theme);
		frame.render_stateful_widget(table, layout[1], &mut self.table_state);
	}

	fn draw_overlay(&mut self, frame: &mut Frame) {
		let area = frame.area();
		frame.render_widget(Clear, area);

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Min(1), Constraint::Length(1)])
			.split(area);
		let content_area = layout[0];
		self.overlay_viewport = content_area.height;

		let Overlay::Open {
			item,
			scene,
			states,
			scroll,
			..
		} = &self.overlay
		else {
			return;
		};

		match item.kind {
			ItemKind::Scene => {
				let inner = match item.wrapper_style {
					Some(style) => {
						let block = Block::default().style(style);
						let inner = block.inner(content_area);
						frame.render_widget(block, content_area);
						inner
					}
					None => content_area,
				};
				if let Some(widget) = scene {
					widget.render(frame, inner);
				}
			}
			ItemKind::Component => {
				let scroll = *scroll;
				let mut y = 0u16;
				for state in states {
					// Title label line.
					let label_row = y;
					y = y.saturating_add(1);
					let widget_top = y;
					y = y.saturating_add(STATE_ROWS);

					if let Some(row) = visible_row(label_row, scroll, content_area) {
						let label = Line::from(Span::styled(
							state.title.clone().unwrap_or_default(),
							self.style.theme.state_label,
						));
						frame.render_widget(
							Paragraph::new(label),
							Rect::new(content_area.x, row, content_area.width, 1),
						);
					}

					// Only draw a state whose full slot fits the viewport;
					// partially clipped widgets would paint out of bounds.
					let Some(top) = visible_row(widget_top, scroll, content_area) else {
						continue;
					};
					if top + STATE_ROWS > content_area.y + content_area.height {
						continue;
					}
					let slot = Rect::new(content_area.x, top, content_area.width, STATE_ROWS);
					let inner = match state.wrapper_style {
						Some(style) => {
							let block = Block::default().style(style);
							let inner = block.inner(slot);
							frame.render_widget(block, slot);
							inner
						}
						None => slot,
					};
					if let Some(widget) = &state.widget {
						widget.render(frame, inner);
					}
				}
			}
		}

		self.draw_close_bar(frame, layout[1]);
	}

	fn draw_close_bar(&self, frame: &mut Frame, area: Rect) {
		let label = &self.ui.close_label;
		let width = (label.width() as u16 + 2).min(area.width);
		let bar = Rect::new(area.x, area.y, width, 1);
		frame.render_widget(
			Paragraph::new(Line::from(format!(" {label} "))).style(self.style.theme.close_bar),
			bar,
		);
	}

	/// Upper bound for the overlay's scroll offset, derived from the state
	/// stack height and the viewport measured at the last draw.
	pub(crate) fn overlay_scroll_max(&self) -> u16 {
		let Overlay::Open { states, .. } = &self.overlay else {
			return 0;
		};
		let total = (states.len() as u16).saturating_mul(STATE_ROWS + 1);
		total.saturating_sub(self.overlay_viewport.max(1))
	}
}

/// Map a content row to a screen row, if it falls inside the viewport after
/// scrolling.
fn visible_row(content_row: u16, scroll: u16, viewport: Rect) -> Option<u16> {
	let offset = content_row.checked_sub(scroll)?;
	if offset >= viewport.height {
		return None;
	}
	Some(viewport.y + offset)
}
