mod cli;
mod demo;
mod settings;

use anyhow::Result;
use cli::parse_cli;
use vitrine::{App, FileQueryStore, GalleryRegistry, app_dirs, logging, run};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in vitrine::style::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	// Logging is best-effort; a missing cache dir must not block the catalog.
	let _ = logging::init();

	let resolved = settings::load(&cli)?;

	let registry = GalleryRegistry::shared();
	demo::register_demo_catalog(&mut registry.borrow_mut());

	if cli.list {
		for item in registry.borrow().list() {
			println!("{}\t{}\t{}", item.key, item.name, item.subtitle());
		}
		return Ok(());
	}

	let mut app = App::new(registry);
	app.set_theme(resolved.theme);
	if resolved.persist_last_query {
		let store = FileQueryStore::new(app_dirs::get_data_dir()?.join("last_query"));
		app.set_query_store(Box::new(store));
	}
	if let Some(query) = resolved.initial_query {
		app.set_query(query);
	}

	run(&mut app)
}
