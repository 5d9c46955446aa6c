//! Widget event handling types and traits.
//!
//! Hosts deliver already-targeted pointer events in control-local
//! coordinates, together with the size the control was laid out at. Each
//! widget handles its own events; `WidgetEvents::dispatch` routes a
//! [`PointerEvent`] to the matching handler.

use tbdom::{MouseButton, Point, PointerEvent, Size};

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event changed interaction state only.
    Consumed,
    /// Event committed a change: a binding was written or an action ran.
    Committed,
}

impl EventResult {
    /// Check if the event was handled (consumed or committed).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, EventResult::Committed)
    }
}

/// Trait for widgets that react to pointer input.
///
/// All handlers default to `EventResult::Ignored`, so widgets only implement
/// the events they care about.
pub trait WidgetEvents {
    /// Pointer entered the widget's region.
    fn on_enter(&mut self) -> EventResult {
        EventResult::Ignored
    }

    /// Pointer left the widget's region.
    fn on_exit(&mut self) -> EventResult {
        EventResult::Ignored
    }

    /// Pointer moved within the widget.
    fn on_move(&mut self, _position: Point, _size: Size) -> EventResult {
        EventResult::Ignored
    }

    /// Button pressed within the widget.
    fn on_down(&mut self, _position: Point, _button: MouseButton, _size: Size) -> EventResult {
        EventResult::Ignored
    }

    /// Button released within the widget. A left-button release inside the
    /// widget is a tap.
    fn on_up(&mut self, _position: Point, _button: MouseButton, _size: Size) -> EventResult {
        EventResult::Ignored
    }

    /// Route a pointer event to the matching handler.
    fn dispatch(&mut self, event: PointerEvent, size: Size) -> EventResult {
        match event {
            PointerEvent::Enter => self.on_enter(),
            PointerEvent::Exit => self.on_exit(),
            PointerEvent::Move { position } => self.on_move(position, size),
            PointerEvent::Down { position, button } => self.on_down(position, button, size),
            PointerEvent::Up { position, button } => self.on_up(position, button, size),
        }
    }
}
