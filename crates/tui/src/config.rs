/// Textual labels rendered around the catalog list and overlay.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Placeholder text shown in the empty filter input.
	pub filter_label: String,
	/// Title rendered above the table of registered items.
	pub table_title: String,
	/// Label summarizing the number of visible entries.
	pub count_label: String,
	/// Text on the overlay's close bar.
	pub close_label: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			filter_label: "Filter tests".to_string(),
			table_title: "Registered tests".to_string(),
			count_label: "shown".to_string(),
			close_label: "Close (Esc)".to_string(),
		}
	}
}
