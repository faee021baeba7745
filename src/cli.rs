use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the catalog binary.
#[derive(Debug, Parser)]
#[command(
	name = "vitrine",
	about = "Browse registered UI widgets in a searchable terminal catalog"
)]
pub struct CliArgs {
	/// Initial search text, overriding the persisted last query.
	#[arg(long)]
	pub query: Option<String>,

	/// Theme name (see --list-themes).
	#[arg(long, env = "VITRINE_THEME")]
	pub theme: Option<String>,

	/// List built-in theme names and exit.
	#[arg(long)]
	pub list_themes: bool,

	/// Print registered items as "key<TAB>name<TAB>title" and exit.
	#[arg(long)]
	pub list: bool,

	/// Disable loading and saving of the last search text.
	#[arg(long)]
	pub no_persist: bool,

	/// Skip the default configuration files.
	#[arg(long)]
	pub no_config: bool,

	/// Additional configuration file, read after the defaults. Repeatable.
	#[arg(long, value_name = "PATH")]
	pub config: Vec<PathBuf>,
}

pub fn parse_cli() -> CliArgs {
	CliArgs::parse()
}
