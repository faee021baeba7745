mod store;

#[cfg(test)]
mod tests;

pub use store::{GalleryRegistry, SharedRegistry};
