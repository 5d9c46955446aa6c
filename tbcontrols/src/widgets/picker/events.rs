//! Event handling for the SegmentedPicker widget.

use tbdom::{MouseButton, Point, Scene, Size};

use crate::widgets::events::{EventResult, WidgetEvents};
use crate::widgets::traits::Widget;

use super::SegmentedPicker;

impl<C, S: Clone + PartialEq> WidgetEvents for SegmentedPicker<C, S> {
    fn on_enter(&mut self) -> EventResult {
        self.pointer_enter();
        EventResult::Consumed
    }

    fn on_exit(&mut self) -> EventResult {
        self.pointer_exit();
        EventResult::Consumed
    }

    fn on_down(&mut self, position: Point, button: MouseButton, size: Size) -> EventResult {
        if button != MouseButton::Left {
            return EventResult::Ignored;
        }
        // A press implies the pointer is over the control, even on hosts
        // that never report hover
        match self.segment_at(position, size) {
            Some(index) => {
                self.press(index);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    fn on_up(&mut self, position: Point, button: MouseButton, size: Size) -> EventResult {
        if button != MouseButton::Left || self.interaction().is_idle() {
            return EventResult::Ignored;
        }

        let pressed = self.interaction().pressed();
        let result = match self.segment_at(position, size) {
            // Releasing over a different segment than the press cancels the tap
            Some(index) if pressed.is_none_or(|p| p == index) => self.commit_tap(index),
            _ => EventResult::Ignored,
        };

        if result.is_committed() || pressed.is_none() {
            return result;
        }
        self.release();
        EventResult::Consumed
    }
}

impl<C, S: Clone + PartialEq> Widget for SegmentedPicker<C, S> {
    fn render(&self, size: Size) -> Scene {
        super::render::render_picker(self, size)
    }

    fn is_dirty(&self) -> bool {
        self.selection().is_dirty()
    }

    fn clear_dirty(&self) {
        self.selection().clear_dirty()
    }
}
