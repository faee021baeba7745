//! Application state and behavior for the catalog browser.

mod actions;
mod overlay;
mod render;
mod search;
mod state;

pub use overlay::{Overlay, ResolvedState};
pub use state::App;
