use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};
use config::{Config, ConfigError, File};
use serde::Deserialize;
use vitrine::app_dirs;
use vitrine::style::theme::{by_name, default_theme, names};
use vitrine::Theme;

use crate::cli::CliArgs;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	theme: Option<String>,
	persist_last_query: Option<bool>,
	query: Option<String>,
}

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub theme: Theme,
	pub persist_last_query: bool,
	pub initial_query: Option<String>,
}

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = &cli.theme {
			self.theme = Some(theme.clone());
		}
		if let Some(query) = &cli.query {
			self.query = Some(query.clone());
		}
		if cli.no_persist {
			self.persist_last_query = Some(false);
		}
	}

	fn resolve(self) -> Result<ResolvedConfig> {
		let theme = match self.theme.as_deref() {
			None => default_theme(),
			Some(name) => by_name(name).ok_or_else(|| {
				anyhow!("unknown theme {name:?} (available: {})", names().join(", "))
			})?,
		};
		Ok(ResolvedConfig {
			theme,
			persist_last_query: self.persist_last_query.unwrap_or(true),
			initial_query: self.query.filter(|query| !query.is_empty()),
		})
	}
}

/// Build a [`Config`] instance by combining default locations with CLI overrides.
fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		if !path.exists() {
			bail!("configuration file {} does not exist", path.display());
		}
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("vitrine")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join("vitrine.toml"));
	}

	files
}
