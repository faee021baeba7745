use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::RegistryError;
use crate::item::{GalleryItem, ItemKind, ItemOptions, Renderable};
use crate::notifier::{ChangeListener, ChangeNotifier};

/// Shared single-threaded handle to the process-wide registry.
///
/// The registry is constructed once at process start and passed by shared
/// reference to whichever component reads or subscribes to it; there is no
/// module-level global.
pub type SharedRegistry = Rc<RefCell<GalleryRegistry>>;

/// Registry of every renderable item contributed to the catalog.
///
/// Owns the mapping from stable key to registered item, applies the dedup and
/// merge rules for multi-state components, and records every successful write
/// with its debounced [`ChangeNotifier`].
pub struct GalleryRegistry {
    items: IndexMap<String, GalleryItem>,
    notifier: ChangeNotifier,
}

impl GalleryRegistry {
    /// Create an empty registry without any items registered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
            notifier: ChangeNotifier::new(),
        }
    }

    /// Construct a registry behind the shared handle handed to the UI.
    #[must_use]
    pub fn shared() -> SharedRegistry {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Register a full-screen scene.
    ///
    /// The key is `"<name>_<title>"` when a title is present, else `name`, so
    /// scene registrations sharing a name but differing by title do not
    /// collide. Re-registering an existing key overwrites the prior entry
    /// entirely.
    pub fn add_scene_test(&mut self, renderable: Renderable, options: impl Into<ItemOptions>) {
        self.add_test(renderable, ItemKind::Scene, options.into());
    }

    /// Register one state variant of a component.
    ///
    /// Variants registered under the same name collapse onto a single entry
    /// keyed by `name`, holding one state per distinct title; the newest
    /// registration for a title wins.
    pub fn add_component_test(&mut self, renderable: Renderable, options: impl Into<ItemOptions>) {
        self.add_test(renderable, ItemKind::Component, options.into());
    }

    /// Registration never reports failure to the caller: call sites run
    /// unconditionally at load time and must not be able to crash the host by
    /// mis-registering. Rejected writes are logged and dropped.
    fn add_test(&mut self, renderable: Renderable, kind: ItemKind, options: ItemOptions) {
        match self.try_add(renderable, kind, options) {
            Ok(key) => self.notifier.record_change(key, Instant::now()),
            Err(RegistryError::MissingIdentity) => {
                debug!("dropping registration without a resolvable name");
            }
            Err(err @ RegistryError::KindConflict { .. }) => warn!("{err}"),
        }
    }

    fn try_add(
        &mut self,
        renderable: Renderable,
        kind: ItemKind,
        options: ItemOptions,
    ) -> Result<String, RegistryError> {
        let name = options
            .name
            .clone()
            .or_else(|| renderable.declared_name().map(str::to_owned))
            .filter(|name| !name.is_empty())
            .ok_or(RegistryError::MissingIdentity)?;
        let title = options.title.clone();

        let key = match kind {
            ItemKind::Component => name.clone(),
            ItemKind::Scene => qualified_key(&name, title.as_deref()),
        };

        let item = GalleryItem {
            // A component state is not itself a registry entry, but it still
            // gets a deterministic per-title key for display-layer use.
            key: match kind {
                ItemKind::Component => qualified_key(&name, title.as_deref()),
                ItemKind::Scene => key.clone(),
            },
            name,
            title,
            kind,
            renderable: Some(renderable),
            wrapper_style: options.wrapper_style,
            states: Vec::new(),
        };

        match kind {
            ItemKind::Component => self.merge_component_state(key, item),
            ItemKind::Scene => {
                if self.items.insert(key.clone(), item).is_some() {
                    warn!("item already registered at key '{key}'; overwriting with scene");
                }
                Ok(key)
            }
        }
    }

    /// Fold a new state variant into the component entry at `key`, creating a
    /// placeholder parent when none exists yet.
    fn merge_component_state(
        &mut self,
        key: String,
        state: GalleryItem,
    ) -> Result<String, RegistryError> {
        match self.items.get_mut(&key) {
            Some(existing) if existing.kind == ItemKind::Scene => Err(RegistryError::KindConflict {
                key,
                existing: ItemKind::Scene,
                attempted: ItemKind::Component,
            }),
            Some(existing) => {
                // Newest registration wins on a title collision and survives
                // at the front of `states`.
                let mut states = Vec::with_capacity(existing.states.len() + 1);
                states.push(state);
                states.append(&mut existing.states);
                dedupe_by_title(&mut states);
                existing.states = states;
                existing.title = Some(test_count_label(existing.states.len()));
                Ok(key)
            }
            None => {
                // Placeholder parent: it only groups the states, so it has no
                // renderable of its own.
                let parent = GalleryItem {
                    key: key.clone(),
                    name: state.name.clone(),
                    title: Some(test_count_label(1)),
                    kind: ItemKind::Component,
                    renderable: None,
                    wrapper_style: None,
                    states: vec![state],
                };
                self.items.insert(key.clone(), parent);
                Ok(key)
            }
        }
    }

    /// Current entry for `key`, always reflecting the latest registration.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&GalleryItem> {
        self.items.get(key)
    }

    /// All entries sorted by name ascending, ties broken by key so the order
    /// does not depend on registration order.
    #[must_use]
    pub fn list(&self) -> Vec<&GalleryItem> {
        let mut entries: Vec<&GalleryItem> = self.items.values().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.key.cmp(&b.key)));
        entries
    }

    /// Remove every entry, recording each removed key with the notifier.
    pub fn clear(&mut self) {
        let now = Instant::now();
        for (key, _) in self.items.drain(..) {
            self.notifier.record_change(key, now);
        }
    }

    /// Return the number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Subscribe a listener to batched change notifications.
    pub fn subscribe(&mut self, listener: Arc<dyn ChangeListener>) {
        self.notifier.subscribe(listener);
    }

    /// Remove a previously subscribed listener.
    pub fn unsubscribe(&mut self, listener: &Arc<dyn ChangeListener>) {
        self.notifier.unsubscribe(listener);
    }

    /// Deliver any change batch whose quiescence window has elapsed.
    ///
    /// Returns `true` when a batch was delivered.
    pub fn pump_notifications(&mut self, now: Instant) -> bool {
        self.notifier.pump(now)
    }
}

impl Default for GalleryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Key for a registration: `"<name>_<title>"` when titled, else the name.
fn qualified_key(name: &str, title: Option<&str>) -> String {
    match title {
        Some(title) => format!("{name}_{title}"),
        None => name.to_string(),
    }
}

/// Keep the first occurrence of every distinct title, preserving order.
fn dedupe_by_title(states: &mut Vec<GalleryItem>) {
    let mut seen: Vec<Option<String>> = Vec::with_capacity(states.len());
    states.retain(|state| {
        if seen.contains(&state.title) {
            false
        } else {
            seen.push(state.title.clone());
            true
        }
    });
}

/// Derived summary title for a component entry: `"1 test"`, `"2 tests"`, ...
fn test_count_label(count: usize) -> String {
    if count == 1 {
        "1 test".to_string()
    } else {
        format!("{count} tests")
    }
}
