//! Best-effort persistence of the last search text.
//!
//! The catalog treats this as an external key-value string service: load once
//! at startup, save on exit, and swallow every failure. A broken store must
//! never affect the browsing session.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

/// External string store for the last search text.
pub trait QueryStore {
	fn load(&self) -> Option<String>;
	fn save(&self, query: &str);
}

/// Stores the query in a single file.
pub struct FileQueryStore {
	path: PathBuf,
}

impl FileQueryStore {
	#[must_use]
	pub fn new(path: PathBuf) -> Self {
		Self { path }
	}
}

impl QueryStore for FileQueryStore {
	fn load(&self) -> Option<String> {
		match fs::read_to_string(&self.path) {
			Ok(text) => Some(text.trim_end_matches(['\n', '\r']).to_string()),
			Err(err) => {
				debug!("no saved query loaded from {}: {err}", self.path.display());
				None
			}
		}
	}

	fn save(&self, query: &str) {
		if let Some(parent) = self.path.parent() {
			let _ = fs::create_dir_all(parent);
		}
		if let Err(err) = fs::write(&self.path, query) {
			debug!("failed to persist last query to {}: {err}", self.path.display());
		}
	}
}
