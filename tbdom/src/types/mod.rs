mod color;
mod enums;

pub use color::{Color, Fill, Rgb};
pub use enums::Orientation;
