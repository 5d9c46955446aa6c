pub mod checkbox;
pub mod events;
pub mod picker;
pub mod symbol_button;
mod traits;

pub use checkbox::Checkbox;
pub use events::{EventResult, WidgetEvents};
pub use picker::SegmentedPicker;
pub use symbol_button::SymbolButton;
pub use traits::Widget;
