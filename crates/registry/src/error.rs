use thiserror::Error;

use crate::item::ItemKind;

/// Errors raised by [`GalleryRegistry`](crate::GalleryRegistry) write
/// attempts.
///
/// The public registration surface never surfaces these to the caller; bad
/// registrations are logged and dropped so one broken load-time call site
/// cannot take down the rest of the catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No explicit name was supplied and the renderable declares none.
    #[error("registration has no resolvable name")]
    MissingIdentity,

    /// The key already holds an entry of an incompatible kind.
    #[error("key '{key}' already holds a {existing:?} item; rejecting {attempted:?} registration")]
    KindConflict {
        key: String,
        existing: ItemKind,
        attempted: ItemKind,
    },
}
