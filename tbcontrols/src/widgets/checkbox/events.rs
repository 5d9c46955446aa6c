//! Event handling for the Checkbox widget.

use tbdom::{MouseButton, Point, Scene, Size};

use crate::widgets::events::{EventResult, WidgetEvents};
use crate::widgets::traits::Widget;

use super::Checkbox;

impl WidgetEvents for Checkbox {
    fn on_enter(&mut self) -> EventResult {
        self.set_hover(true);
        EventResult::Consumed
    }

    fn on_exit(&mut self) -> EventResult {
        self.set_hover(false);
        EventResult::Consumed
    }

    fn on_up(&mut self, position: Point, button: MouseButton, size: Size) -> EventResult {
        if button != MouseButton::Left || !self.frame(size).contains(position) {
            return EventResult::Ignored;
        }
        self.toggle();
        EventResult::Committed
    }
}

impl Widget for Checkbox {
    fn render(&self, size: Size) -> Scene {
        super::render::render_checkbox(self, size)
    }

    fn is_dirty(&self) -> bool {
        self.binding().is_dirty()
    }

    fn clear_dirty(&self) {
        self.binding().clear_dirty()
    }
}
