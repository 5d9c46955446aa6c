//! Checkbox widget - a square toggle showing a symbol when checked.

mod events;
mod render;
mod state;

pub use state::Checkbox;
