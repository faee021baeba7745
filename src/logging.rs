//! Logging bootstrap for the terminal binary.
//!
//! The UI owns the terminal, so log output goes to a file under the cache
//! directory instead of stderr. Filtering follows the `VITRINE_LOG`
//! environment variable with the usual `tracing` directive syntax.

use std::fs::{self, File};
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "VITRINE_LOG";

/// Install the global subscriber writing to `vitrine.log` in the cache dir.
///
/// Callers treat failure as best-effort: a catalog that cannot log is still a
/// working catalog.
pub fn init() -> Result<()> {
	let dir = crate::app_dirs::get_cache_dir()?;
	fs::create_dir_all(&dir)?;
	let file = File::create(dir.join("vitrine.log"))?;

	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.init();
	Ok(())
}
