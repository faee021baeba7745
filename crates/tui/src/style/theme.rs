//! Built-in color schemes for the catalog UI.

use ratatui::style::{Color, Modifier, Style};

/// Color scheme applied to the catalog UI.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub input_border: Style,
	pub input_text: Style,
	pub placeholder: Style,
	pub table_border: Style,
	pub row_name: Style,
	pub row_subtitle: Style,
	pub selection: Style,
	/// Overlay close bar: translucent gray with white text in the original
	/// palette; the nearest terminal equivalent.
	pub close_bar: Style,
	pub state_label: Style,
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// The theme used when nothing else is configured.
#[must_use]
pub fn default_theme() -> Theme {
	Theme {
		name: "dark",
		input_border: Style::default().fg(Color::DarkGray),
		input_text: Style::default().fg(Color::White),
		placeholder: Style::default().fg(Color::DarkGray),
		table_border: Style::default().fg(Color::DarkGray),
		row_name: Style::default().fg(Color::White),
		row_subtitle: Style::default().fg(Color::Gray),
		selection: Style::default()
			.bg(Color::DarkGray)
			.add_modifier(Modifier::BOLD),
		close_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
		state_label: Style::default()
			.fg(Color::Yellow)
			.add_modifier(Modifier::BOLD),
	}
}

fn light_theme() -> Theme {
	Theme {
		name: "light",
		input_border: Style::default().fg(Color::Gray),
		input_text: Style::default().fg(Color::Black),
		placeholder: Style::default().fg(Color::Gray),
		table_border: Style::default().fg(Color::Gray),
		row_name: Style::default().fg(Color::Black),
		row_subtitle: Style::default().fg(Color::DarkGray),
		selection: Style::default()
			.bg(Color::Gray)
			.add_modifier(Modifier::BOLD),
		close_bar: Style::default().bg(Color::Gray).fg(Color::Black),
		state_label: Style::default()
			.fg(Color::Blue)
			.add_modifier(Modifier::BOLD),
	}
}

/// All built-in themes.
#[must_use]
pub fn builtin_themes() -> Vec<Theme> {
	vec![default_theme(), light_theme()]
}

/// Names of the built-in themes, for `--list-themes` style output.
#[must_use]
pub fn names() -> Vec<&'static str> {
	builtin_themes().iter().map(|theme| theme.name).collect()
}

/// Look up a built-in theme by name.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	builtin_themes().into_iter().find(|theme| theme.name == name)
}
