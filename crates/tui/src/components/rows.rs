use ratatui::widgets::{Cell, Row};
use vitrine_registry::GalleryItem;

use crate::style::Theme;

/// Build table rows for the filtered catalog entries: the item name next to
/// its subtitle (a scene's title, or a component's derived `"N tests"`).
#[must_use]
pub fn build_item_rows<'a>(
	filtered: &[usize],
	items: &'a [GalleryItem],
	theme: &Theme,
) -> Vec<Row<'a>> {
	filtered
		.iter()
		.filter_map(|&index| {
			let item = items.get(index)?;
			Some(Row::new([
				Cell::from(item.name.as_str()).style(theme.row_name),
				Cell::from(item.subtitle()).style(theme.row_subtitle),
			]))
		})
		.collect()
}
