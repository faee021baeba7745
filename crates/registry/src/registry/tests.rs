use std::sync::{Arc, Mutex};
use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

use super::*;
use crate::item::{ItemKind, ItemOptions, ItemWidget, Renderable};
use crate::notifier::{ChangeListener, QUIESCENCE_WINDOW};

/// Fixture widget carrying a declared display name and a content marker so
/// tests can tell registrations apart after a hot-reload overwrite.
struct Placard {
    name: &'static str,
}

impl ItemWidget for Placard {
    fn display_name(&self) -> Option<&str> {
        Some(self.name)
    }

    fn render(&self, _frame: &mut Frame, _area: Rect) {}
}

/// Fixture widget declaring no name of its own.
struct Anonymous;

impl ItemWidget for Anonymous {
    fn render(&self, _frame: &mut Frame, _area: Rect) {}
}

fn widget(name: &'static str) -> Renderable {
    Renderable::ready(Placard { name })
}

#[derive(Default)]
struct Recorder {
    batches: Mutex<Vec<Vec<String>>>,
}

impl Recorder {
    fn batches(&self) -> Vec<Vec<String>> {
        self.batches.lock().unwrap().clone()
    }
}

impl ChangeListener for Recorder {
    fn on_items_changed(&self, keys: &[String]) {
        self.batches.lock().unwrap().push(keys.to_vec());
    }
}

#[test]
fn titled_scene_is_keyed_by_name_and_title() {
    let mut registry = GalleryRegistry::new();
    registry.add_scene_test(widget("A"), "v1");

    let entries = registry.list();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].key, "A_v1");
    assert_eq!(entries[0].name, "A");
    assert_eq!(entries[0].title.as_deref(), Some("v1"));
    assert_eq!(entries[0].kind, ItemKind::Scene);
}

#[test]
fn untitled_scene_is_keyed_by_name_alone() {
    let mut registry = GalleryRegistry::new();
    registry.add_scene_test(widget("Home"), ItemOptions::default());

    assert!(registry.get("Home").is_some());
}

#[test]
fn scenes_sharing_a_name_with_distinct_titles_do_not_collide() {
    let mut registry = GalleryRegistry::new();
    registry.add_scene_test(widget("A"), "v1");
    registry.add_scene_test(widget("A"), "v2");

    assert_eq!(registry.len(), 2);
    assert!(registry.get("A_v1").is_some());
    assert!(registry.get("A_v2").is_some());
}

#[test]
fn explicit_name_overrides_the_declared_one() {
    let mut registry = GalleryRegistry::new();
    registry.add_scene_test(widget("Declared"), ItemOptions::named("Explicit"));

    assert!(registry.get("Explicit").is_some());
    assert!(registry.get("Declared").is_none());
}

#[test]
fn registration_without_identity_is_silently_dropped() {
    let mut registry = GalleryRegistry::new();
    registry.add_scene_test(Renderable::ready(Anonymous), ItemOptions::default());
    registry.add_component_test(Renderable::ready(Anonymous), "titled but nameless");

    assert!(registry.is_empty());
}

#[test]
fn factory_registration_requires_an_explicit_name() {
    let mut registry = GalleryRegistry::new();
    let factory = Renderable::factory(|_| Arc::new(Anonymous) as Arc<dyn ItemWidget>);
    registry.add_scene_test(factory.clone(), ItemOptions::default());
    assert!(registry.is_empty());

    registry.add_scene_test(factory, ItemOptions::named("Built"));
    assert!(registry.get("Built").is_some());
}

#[test]
fn component_variants_accumulate_under_one_key() {
    let mut registry = GalleryRegistry::new();
    registry.add_component_test(widget("B"), "short");
    registry.add_component_test(widget("B"), "long");

    let entry = registry.get("B").expect("component entry");
    assert_eq!(entry.kind, ItemKind::Component);
    assert_eq!(entry.states.len(), 2);
    assert_eq!(entry.title.as_deref(), Some("2 tests"));
    assert!(entry.renderable.is_none(), "parent is a placeholder");

    // The newer variant sits at the front.
    let titles: Vec<_> = entry.states.iter().map(|s| s.subtitle()).collect();
    assert_eq!(titles, vec!["long", "short"]);
}

#[test]
fn single_variant_component_uses_the_singular_label() {
    let mut registry = GalleryRegistry::new();
    registry.add_component_test(widget("B"), "only");

    let entry = registry.get("B").unwrap();
    assert_eq!(entry.title.as_deref(), Some("1 test"));
}

#[test]
fn reregistered_title_replaces_the_variant_without_duplicating_it() {
    let mut registry = GalleryRegistry::new();
    registry.add_component_test(widget("B"), "short");
    registry.add_component_test(widget("B"), "long");
    registry.add_component_test(
        widget("B-reloaded"),
        ItemOptions::named("B").with_title("short"),
    );

    let entry = registry.get("B").unwrap();
    assert_eq!(entry.states.len(), 2);
    assert_eq!(entry.title.as_deref(), Some("2 tests"));

    let short = &entry.states[0];
    assert_eq!(short.subtitle(), "short");
    let renderable = short.renderable.as_ref().unwrap();
    assert_eq!(
        renderable.declared_name(),
        Some("B-reloaded"),
        "the newest registration's content should replace the stale variant"
    );
}

#[test]
fn component_variant_title_dedup_is_per_name() {
    let mut registry = GalleryRegistry::new();
    registry.add_component_test(widget("B"), "shared");
    registry.add_component_test(widget("C"), "shared");

    assert_eq!(registry.get("B").unwrap().states.len(), 1);
    assert_eq!(registry.get("C").unwrap().states.len(), 1);
}

#[test]
fn component_onto_scene_key_is_a_rejected_no_op() {
    let mut registry = GalleryRegistry::new();
    registry.add_scene_test(widget("C"), ItemOptions::default());
    registry.add_component_test(widget("C"), "state");

    let entry = registry.get("C").unwrap();
    assert_eq!(entry.kind, ItemKind::Scene);
    assert!(entry.states.is_empty());
    assert_eq!(registry.len(), 1);
}

#[test]
fn scene_overwrites_a_component_entirely() {
    let mut registry = GalleryRegistry::new();
    registry.add_component_test(widget("D"), "one");
    registry.add_component_test(widget("D"), "two");
    registry.add_scene_test(widget("D-scene"), ItemOptions::named("D"));

    let entry = registry.get("D").unwrap();
    assert_eq!(entry.kind, ItemKind::Scene);
    assert!(entry.states.is_empty(), "prior states are gone");
}

#[test]
fn scene_overwrite_replaces_content_in_place() {
    let mut registry = GalleryRegistry::new();
    registry.add_scene_test(widget("old"), ItemOptions::named("A").with_title("v1"));
    registry.add_scene_test(widget("new"), ItemOptions::named("A").with_title("v1"));

    assert_eq!(registry.len(), 1);
    let entry = registry.get("A_v1").unwrap();
    let renderable = entry.renderable.as_ref().unwrap();
    assert_eq!(renderable.declared_name(), Some("new"));
}

#[test]
fn wrapper_style_passes_through_unmodified() {
    let style = Style::default().bg(Color::Blue);
    let mut registry = GalleryRegistry::new();
    registry.add_scene_test(widget("A"), ItemOptions::titled("v1").with_wrapper_style(style));

    assert_eq!(registry.get("A_v1").unwrap().wrapper_style, Some(style));
}

#[test]
fn list_is_sorted_by_name_and_deterministic() {
    let mut registry = GalleryRegistry::new();
    registry.add_scene_test(widget("zebra"), ItemOptions::default());
    registry.add_scene_test(widget("Alpha"), ItemOptions::default());
    registry.add_component_test(widget("mango"), "ripe");

    let names: Vec<_> = registry.list().iter().map(|i| i.name.clone()).collect();
    assert_eq!(names, vec!["Alpha", "mango", "zebra"]);

    let again: Vec<_> = registry.list().iter().map(|i| i.name.clone()).collect();
    assert_eq!(names, again, "repeated calls must agree with no writes between");
}

#[test]
fn list_breaks_name_ties_by_key_independent_of_registration_order() {
    let mut registry = GalleryRegistry::new();
    registry.add_scene_test(widget("A"), "v2");
    registry.add_scene_test(widget("A"), "v1");

    let keys: Vec<_> = registry.list().iter().map(|i| i.key.clone()).collect();
    assert_eq!(keys, vec!["A_v1", "A_v2"]);
}

#[test]
fn get_reflects_the_latest_registration() {
    let mut registry = GalleryRegistry::new();
    registry.add_scene_test(widget("v1"), ItemOptions::named("A").with_title("t"));

    assert_eq!(
        registry
            .get("A_t")
            .and_then(|i| i.renderable.as_ref())
            .and_then(Renderable::declared_name),
        Some("v1")
    );

    registry.add_scene_test(widget("v2"), ItemOptions::named("A").with_title("t"));
    assert_eq!(
        registry
            .get("A_t")
            .and_then(|i| i.renderable.as_ref())
            .and_then(Renderable::declared_name),
        Some("v2")
    );
}

#[test]
fn burst_of_registrations_notifies_once_with_all_keys() {
    let recorder = Arc::new(Recorder::default());
    let mut registry = GalleryRegistry::new();
    registry.subscribe(recorder.clone());

    registry.add_scene_test(widget("A"), "v1");
    registry.add_scene_test(widget("A"), "v2");
    registry.add_component_test(widget("B"), "state");

    // Still inside the quiescence window: nothing delivered yet.
    assert!(!registry.pump_notifications(Instant::now()));
    assert!(recorder.batches().is_empty());

    assert!(registry.pump_notifications(Instant::now() + QUIESCENCE_WINDOW));
    let batches = recorder.batches();
    assert_eq!(batches.len(), 1);
    assert_eq!(
        batches[0],
        vec!["A_v1".to_string(), "A_v2".to_string(), "B".to_string()]
    );
}

#[test]
fn rejected_writes_do_not_notify() {
    let recorder = Arc::new(Recorder::default());
    let mut registry = GalleryRegistry::new();
    registry.subscribe(recorder.clone());

    registry.add_scene_test(Renderable::ready(Anonymous), ItemOptions::default());
    assert!(!registry.pump_notifications(Instant::now() + QUIESCENCE_WINDOW));

    registry.add_scene_test(widget("S"), ItemOptions::default());
    registry.add_component_test(widget("S"), "state");
    registry.pump_notifications(Instant::now() + QUIESCENCE_WINDOW);

    let batches = recorder.batches();
    assert_eq!(batches.len(), 1);
    assert_eq!(
        batches[0],
        vec!["S".to_string()],
        "the rejected component write must not appear in the batch"
    );
}

#[test]
fn clear_empties_the_registry_and_notifies_removed_keys() {
    let recorder = Arc::new(Recorder::default());
    let mut registry = GalleryRegistry::new();
    registry.add_scene_test(widget("A"), "v1");
    registry.add_component_test(widget("B"), "state");
    registry.pump_notifications(Instant::now() + QUIESCENCE_WINDOW);

    registry.subscribe(recorder.clone());
    registry.clear();

    assert!(registry.is_empty());
    registry.pump_notifications(Instant::now() + QUIESCENCE_WINDOW);
    assert_eq!(
        recorder.batches(),
        vec![vec!["A_v1".to_string(), "B".to_string()]]
    );
}
