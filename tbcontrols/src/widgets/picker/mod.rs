//! SegmentedPicker widget - a row or column of mutually exclusive segments.

mod events;
mod render;
mod state;

pub use state::SegmentedPicker;
