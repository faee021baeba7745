//! Filter coordination between the query input, the registry snapshot, and
//! the list selection.

use std::sync::mpsc::TryRecvError;

use vitrine_registry::filter_indices;

use super::state::App;

impl App {
	/// Rebuild the snapshot from the live registry and re-run the filter.
	pub(crate) fn reload_items(&mut self) {
		self.all = self
			.registry
			.borrow()
			.list()
			.into_iter()
			.cloned()
			.collect();
		self.refilter();
	}

	/// Re-run the filter against the current snapshot, keeping row selection
	/// valid. Called on every query edit and after every snapshot reload.
	pub(crate) fn refilter(&mut self) {
		self.filtered = filter_indices(&self.all, self.search_input.text());
		self.ensure_selection();
	}

	/// Drain change batches delivered by the notifier, then reconcile the
	/// visible set and the open overlay against the refreshed registry.
	pub(crate) fn pump_changes(&mut self) {
		let mut changed_keys: Vec<String> = Vec::new();
		loop {
			match self.changes.try_recv() {
				Ok(keys) => changed_keys.extend(keys),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
		if changed_keys.is_empty() {
			return;
		}
		self.reload_items();
		self.refresh_overlay(&changed_keys);
	}
}
