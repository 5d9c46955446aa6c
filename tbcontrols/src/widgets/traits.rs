use tbdom::{Scene, Size};

use super::events::WidgetEvents;

/// A control the host can lay out, paint and feed pointer events to.
pub trait Widget: WidgetEvents {
    /// Describe what to paint at the given size, back to front.
    fn render(&self, size: Size) -> Scene;

    /// Whether the bound value changed since the last `clear_dirty`.
    fn is_dirty(&self) -> bool;

    fn clear_dirty(&self);
}
