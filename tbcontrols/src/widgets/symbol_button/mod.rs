//! SymbolButton widget - a tappable symbol with hover and press feedback.

mod events;
mod render;
mod state;

pub use state::SymbolButton;
