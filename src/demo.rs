//! A small built-in catalog so the binary has something to browse.
//!
//! Embedders replace this with registrations from their own codebase; the
//! demo exists to exercise every registration shape end to end.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use vitrine::{CloseHandle, GalleryRegistry, ItemOptions, ItemWidget, Renderable};

/// Static text scene.
struct Banner {
	message: &'static str,
}

impl ItemWidget for Banner {
	fn render(&self, frame: &mut Frame, area: Rect) {
		let block = Block::default().borders(Borders::ALL).title("Banner");
		let body = Paragraph::new(self.message)
			.block(block)
			.wrap(Wrap { trim: true });
		frame.render_widget(body, area);
	}
}

/// Scene that knows its own registration name.
struct Welcome;

impl ItemWidget for Welcome {
	fn display_name(&self) -> Option<&str> {
		Some("Welcome")
	}

	fn render(&self, frame: &mut Frame, area: Rect) {
		let lines = vec![
			Line::from("Welcome to the catalog."),
			Line::from("Pick an entry from the list to inspect it."),
		];
		frame.render_widget(Paragraph::new(lines), area);
	}
}

/// One visual state of the demo button component.
struct ButtonState {
	label: &'static str,
	style: Style,
}

impl ItemWidget for ButtonState {
	fn render(&self, frame: &mut Frame, area: Rect) {
		let body = Paragraph::new(format!("[ {} ]", self.label)).style(self.style);
		frame.render_widget(body, area);
	}
}

/// Scene built on demand; pressing Enter inside it dismisses the overlay.
struct Dismissable {
	close: CloseHandle,
}

impl ItemWidget for Dismissable {
	fn render(&self, frame: &mut Frame, area: Rect) {
		let hint = if self.close.is_requested() {
			"Closing..."
		} else {
			"This scene was built when you opened it."
		};
		frame.render_widget(Paragraph::new(hint), area);
	}
}

/// Populate `registry` with the built-in demo entries.
pub fn register_demo_catalog(registry: &mut GalleryRegistry) {
	registry.add_scene_test(Renderable::ready(Welcome), ItemOptions::new());
	registry.add_scene_test(
		Renderable::ready(Banner {
			message: "Release build is green.",
		}),
		ItemOptions::named("Banner").with_title("release"),
	);
	registry.add_scene_test(
		Renderable::ready(Banner {
			message: "Nightly build failed twice.",
		}),
		ItemOptions::named("Banner").with_title("nightly"),
	);
	registry.add_scene_test(
		Renderable::factory(|close| {
			std::sync::Arc::new(Dismissable { close }) as std::sync::Arc<dyn ItemWidget>
		}),
		ItemOptions::named("Lazy banner"),
	);
	registry.add_component_test(
		Renderable::ready(ButtonState {
			label: "Submit",
			style: Style::default().fg(Color::Green),
		}),
		ItemOptions::named("Button").with_title("primary"),
	);
	registry.add_component_test(
		Renderable::ready(ButtonState {
			label: "Submit",
			style: Style::default().fg(Color::DarkGray),
		}),
		ItemOptions::named("Button")
			.with_title("disabled")
			.with_wrapper_style(Style::default().bg(Color::Black)),
	);
}
