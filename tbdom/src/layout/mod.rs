mod rect;
pub mod segments;

pub use rect::{Point, Rect, Size};
pub use segments::{corner_radius, segment_frame, segment_frames, CORNER_RATIO};
