use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use vitrine_registry::{GalleryRegistry, ItemOptions, ItemWidget, Renderable, SharedRegistry};

use crate::App;

/// Fixture widget painting a fixed line of text.
struct Caption(&'static str);

impl ItemWidget for Caption {
	fn display_name(&self) -> Option<&str> {
		Some(self.0)
	}

	fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
		frame.render_widget(Paragraph::new(self.0), area);
	}
}

fn sample_registry() -> SharedRegistry {
	let registry = GalleryRegistry::shared();
	{
		let mut reg = registry.borrow_mut();
		reg.add_scene_test(Renderable::ready(Caption("welcome screen")), ItemOptions::named("Welcome"));
		reg.add_scene_test(Renderable::ready(Caption("banner v1")), ItemOptions::named("Banner").with_title("v1"));
		reg.add_component_test(
			Renderable::ready(Caption("primary button")),
			ItemOptions::named("Button").with_title("Primary"),
		);
		reg.add_component_test(
			Renderable::ready(Caption("disabled button")),
			ItemOptions::named("Button").with_title("Disabled"),
		);
	}
	registry
}

fn draw(app: &mut App, width: u16, height: u16) -> String {
	let backend = TestBackend::new(width, height);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal
		.draw(|frame| app.draw(frame))
		.expect("draw frame");
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn list_view_shows_names_subtitles_and_count() {
	let mut app = App::new(sample_registry());
	let screen = draw(&mut app, 60, 16);

	assert!(screen.contains("Welcome"), "missing scene name:\n{screen}");
	assert!(screen.contains("Banner"));
	assert!(screen.contains("v1"), "scene subtitle should render");
	assert!(screen.contains("Button"));
	assert!(
		screen.contains("2 tests"),
		"component subtitle should be the derived summary:\n{screen}"
	);
	assert!(screen.contains("(3 shown)"), "count label:\n{screen}");
}

#[test]
fn filtering_narrows_the_rendered_rows() {
	let mut app = App::new(sample_registry());
	app.handle_key(key(KeyCode::Char('b')));
	app.handle_key(key(KeyCode::Char('u')));
	app.handle_key(key(KeyCode::Char('t')));

	let screen = draw(&mut app, 60, 16);
	assert!(screen.contains("Button"));
	assert!(!screen.contains("Welcome"));
	assert!(screen.contains("(1 shown)"));
	assert!(screen.contains("but"), "query text should be visible");
}

#[test]
fn scene_overlay_renders_content_and_close_bar() {
	let mut app = App::new(sample_registry());
	app.select_item("Banner_v1");

	let screen = draw(&mut app, 60, 16);
	assert!(screen.contains("banner v1"), "scene content:\n{screen}");
	assert!(screen.contains("Close (Esc)"));
	assert!(
		!screen.contains("Registered tests"),
		"list should be hidden behind the overlay"
	);
}

#[test]
fn component_overlay_labels_each_state() {
	let mut app = App::new(sample_registry());
	app.select_item("Button");

	let screen = draw(&mut app, 60, 20);
	assert!(screen.contains("Disabled"), "state label:\n{screen}");
	assert!(screen.contains("disabled button"));
	assert!(screen.contains("Primary"));
	assert!(screen.contains("primary button"));
}

#[test]
fn empty_filter_result_renders_an_empty_table() {
	let mut app = App::new(sample_registry());
	app.set_query("zz");

	let screen = draw(&mut app, 60, 12);
	assert!(screen.contains("(0 shown)"));
	assert!(!screen.contains("Welcome"));
}
