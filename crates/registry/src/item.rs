//! Data model for registered catalog items.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;

/// Seam between the registry and user-supplied visual content.
///
/// The registry never inspects a widget beyond the optional
/// [`display_name`](ItemWidget::display_name) capability query; rendering is
/// the display layer's concern.
pub trait ItemWidget: Send + Sync {
    /// Declared display name, consulted when no explicit name is registered.
    fn display_name(&self) -> Option<&str> {
        None
    }

    /// Draw the widget into `area`.
    fn render(&self, frame: &mut Frame, area: Rect);
}

/// Capability handed to factory renderables so displayed content can dismiss
/// the overlay itself.
#[derive(Clone, Debug, Default)]
pub struct CloseHandle(Arc<AtomicBool>);

impl CloseHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the display layer to close the overlay on its next tick.
    pub fn request_close(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once per request, clearing the flag.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::Relaxed)
    }

    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Deferred widget construction, invoked at display time with a close
/// capability.
pub type WidgetFactory = dyn Fn(CloseHandle) -> Arc<dyn ItemWidget> + Send + Sync;

/// A registered piece of visual content.
///
/// Either a ready-made element shown unmodified, or a factory resolved when
/// the item is opened so the produced widget can capture the overlay's
/// [`CloseHandle`].
#[derive(Clone)]
pub enum Renderable {
    Ready(Arc<dyn ItemWidget>),
    Factory(Arc<WidgetFactory>),
}

impl Renderable {
    /// Wrap a ready-made widget.
    pub fn ready(widget: impl ItemWidget + 'static) -> Self {
        Self::Ready(Arc::new(widget))
    }

    /// Wrap a factory function.
    pub fn factory<F>(build: F) -> Self
    where
        F: Fn(CloseHandle) -> Arc<dyn ItemWidget> + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(build))
    }

    /// Resolve to a concrete widget for display.
    #[must_use]
    pub fn resolve(&self, close: CloseHandle) -> Arc<dyn ItemWidget> {
        match self {
            Self::Ready(widget) => Arc::clone(widget),
            Self::Factory(build) => build(close),
        }
    }

    /// Capability query: does this renderable declare its own display name?
    ///
    /// Only ready-made widgets can; a factory has no identity until invoked,
    /// so factory registrations need an explicit name in their options.
    #[must_use]
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            Self::Ready(widget) => widget.display_name(),
            Self::Factory(_) => None,
        }
    }
}

impl fmt::Debug for Renderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(_) => f.write_str("Renderable::Ready(..)"),
            Self::Factory(_) => f.write_str("Renderable::Factory(..)"),
        }
    }
}

/// Whether an item renders full-screen as a single unit or accumulates named
/// state variants shown together in one scroll view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Scene,
    Component,
}

/// Caller-supplied options for a registration.
///
/// A bare string converts to `{ title }`, matching the historical shorthand
/// form of the registration API.
#[derive(Clone, Debug, Default)]
pub struct ItemOptions {
    /// Explicit logical name, overriding the renderable's declared name.
    pub name: Option<String>,
    /// Human subtitle distinguishing registrations that share a name.
    pub title: Option<String>,
    /// Opaque style payload applied around the rendered content.
    pub wrapper_style: Option<Style>,
}

impl ItemOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::new().with_name(name)
    }

    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self::new().with_title(title)
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_wrapper_style(mut self, style: Style) -> Self {
        self.wrapper_style = Some(style);
        self
    }
}

impl From<&str> for ItemOptions {
    fn from(title: &str) -> Self {
        Self::titled(title)
    }
}

impl From<String> for ItemOptions {
    fn from(title: String) -> Self {
        Self::titled(title)
    }
}

/// The unit stored in the registry.
///
/// `key` is the stable dedup/merge identity a consumer can hold across
/// hot-reload. For [`ItemKind::Component`] entries, `renderable` is `None` on
/// the parent (it only groups `states`) and `title` holds the derived
/// `"N tests"` summary maintained by the registry.
#[derive(Clone, Debug)]
pub struct GalleryItem {
    pub key: String,
    pub name: String,
    pub title: Option<String>,
    pub kind: ItemKind,
    pub renderable: Option<Renderable>,
    pub wrapper_style: Option<Style>,
    pub states: Vec<GalleryItem>,
}

impl GalleryItem {
    /// Subtitle text shown beneath the name in the list, empty when absent.
    #[must_use]
    pub fn subtitle(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}
