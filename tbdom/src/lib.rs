pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod types;

pub use event::{HoverTracker, MouseButton, PointerEvent};
pub use hit::{hit_test, hit_test_segments};
pub use layout::{corner_radius, segment_frame, segment_frames, Point, Rect, Size, CORNER_RATIO};
pub use render::{Primitive, Scene};
pub use types::*;
