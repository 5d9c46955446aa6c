//! Event handling for the SymbolButton widget.

use tbdom::{MouseButton, Point, Rect, Scene, Size};

use crate::widgets::events::{EventResult, WidgetEvents};
use crate::widgets::traits::Widget;

use super::SymbolButton;

impl WidgetEvents for SymbolButton {
    fn on_enter(&mut self) -> EventResult {
        self.set_hover(true);
        EventResult::Consumed
    }

    fn on_exit(&mut self) -> EventResult {
        // Leaving cancels a press in progress
        self.set_hover(false);
        self.set_pressed(false);
        EventResult::Consumed
    }

    fn on_down(&mut self, position: Point, button: MouseButton, size: Size) -> EventResult {
        if button != MouseButton::Left || !Rect::from_size(size).contains(position) {
            return EventResult::Ignored;
        }
        self.set_pressed(true);
        EventResult::Consumed
    }

    fn on_up(&mut self, position: Point, button: MouseButton, size: Size) -> EventResult {
        let was_pressed = self.is_pressed();
        self.set_pressed(false);

        if button == MouseButton::Left && Rect::from_size(size).contains(position) {
            self.tap();
            EventResult::Committed
        } else if was_pressed {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

impl Widget for SymbolButton {
    fn render(&self, size: Size) -> Scene {
        super::render::render_symbol_button(self, size)
    }

    // A button has no bound value
    fn is_dirty(&self) -> bool {
        false
    }

    fn clear_dirty(&self) {}
}
