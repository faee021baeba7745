//! Filesystem locations for configuration, saved state, and logs.
//!
//! Each directory can be pinned through an environment variable, which keeps
//! tests and packaged installs away from the real platform paths; otherwise
//! the `directories` crate picks the conventional location for the OS.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const CONFIG_DIR_ENV: &str = "VITRINE_CONFIG_DIR";
const DATA_DIR_ENV: &str = "VITRINE_DATA_DIR";
const CACHE_DIR_ENV: &str = "VITRINE_CACHE_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from("io", "vitrine", "vitrine")
		.ok_or_else(|| anyhow!("no home directory available to derive vitrine paths from"))
}

/// Environment override for a directory. Unset and empty both mean "use the
/// platform default".
fn env_override(name: &str) -> Option<PathBuf> {
	env::var_os(name)
		.filter(|value| !value.is_empty())
		.map(PathBuf::from)
}

/// Where `config.toml` is looked up.
pub fn get_config_dir() -> Result<PathBuf> {
	match env_override(CONFIG_DIR_ENV) {
		Some(dir) => Ok(dir),
		None => Ok(project_dirs()?.config_local_dir().to_path_buf()),
	}
}

/// Where the last search text is saved between runs.
pub fn get_data_dir() -> Result<PathBuf> {
	match env_override(DATA_DIR_ENV) {
		Some(dir) => Ok(dir),
		None => Ok(project_dirs()?.data_local_dir().to_path_buf()),
	}
}

/// Where `vitrine.log` is written.
pub fn get_cache_dir() -> Result<PathBuf> {
	match env_override(CACHE_DIR_ENV) {
		Some(dir) => Ok(dir),
		None => Ok(project_dirs()?.cache_dir().to_path_buf()),
	}
}
