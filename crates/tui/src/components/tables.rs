use ratatui::layout::Constraint;
use ratatui::widgets::{Block, Borders, HighlightSpacing, Row, Table};

use crate::style::Theme;

/// Marker drawn next to the selected row.
pub const HIGHLIGHT_SYMBOL: &str = "> ";

/// Spacing between the name and subtitle columns.
pub const TABLE_COLUMN_SPACING: u16 = 2;

/// Assemble the catalog list table from prebuilt rows.
#[must_use]
pub fn item_table<'a>(rows: Vec<Row<'a>>, title: &'a str, theme: &Theme) -> Table<'a> {
	Table::new(
		rows,
		[Constraint::Percentage(60), Constraint::Percentage(40)],
	)
	.column_spacing(TABLE_COLUMN_SPACING)
	.block(
		Block::default()
			.borders(Borders::ALL)
			.border_style(theme.table_border)
			.title(title),
	)
	.row_highlight_style(theme.selection)
	.highlight_symbol(HIGHLIGHT_SYMBOL)
	.highlight_spacing(HighlightSpacing::Always)
}
