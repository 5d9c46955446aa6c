use crate::layout::{Point, Rect};

/// Pointer events delivered to a control, in control-local coordinates.
///
/// `Up` inside the control completes a tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer entered the control's region
    Enter,
    /// Pointer left the control's region
    Exit,
    /// Pointer moved within the control
    Move { position: Point },
    /// Button pressed within the control
    Down { position: Point, button: MouseButton },
    /// Button released within the control
    Up { position: Point, button: MouseButton },
}

impl PointerEvent {
    /// Position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::Enter | Self::Exit => None,
            Self::Move { position } | Self::Down { position, .. } | Self::Up { position, .. } => {
                Some(*position)
            }
        }
    }

    /// The same event shifted into a coordinate space whose origin is `origin`.
    pub fn relative_to(self, origin: Point) -> Self {
        let shift = |p: Point| p.offset(-origin.x, -origin.y);
        match self {
            Self::Move { position } => Self::Move {
                position: shift(position),
            },
            Self::Down { position, button } => Self::Down {
                position: shift(position),
                button,
            },
            Self::Up { position, button } => Self::Up {
                position: shift(position),
                button,
            },
            other => other,
        }
    }

    /// Convert a terminal mouse event. Cell coordinates become points.
    ///
    /// Scroll events have no pointer counterpart and yield `None`.
    pub fn from_crossterm(event: &crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::MouseEventKind;

        let position = Point::new(event.column as f32, event.row as f32);
        match event.kind {
            MouseEventKind::Down(button) => Some(Self::Down {
                position,
                button: button.into(),
            }),
            MouseEventKind::Up(button) => Some(Self::Up {
                position,
                button: button.into(),
            }),
            MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(Self::Move { position }),
            _ => None,
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

/// Synthesizes `Enter`/`Exit` for hosts that only report raw positions.
///
/// Feed every host-space pointer event through [`HoverTracker::track`]
/// together with the control's bounds; the returned events are what the
/// control should see, already translated into its local coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoverTracker {
    inside: bool,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the pointer is currently over the tracked region.
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    pub fn track(&mut self, event: PointerEvent, bounds: Rect) -> Vec<PointerEvent> {
        let Some(position) = event.position() else {
            // Host-level enter/exit: pass exits through, let moves decide enters
            if event == PointerEvent::Exit && self.inside {
                self.inside = false;
                return vec![PointerEvent::Exit];
            }
            return Vec::new();
        };

        let local = event.relative_to(bounds.origin());
        match (self.inside, bounds.contains(position)) {
            (false, true) => {
                self.inside = true;
                log::trace!("pointer entered {:?}", bounds);
                vec![PointerEvent::Enter, local]
            }
            (true, true) => vec![local],
            (true, false) => {
                self.inside = false;
                log::trace!("pointer left {:?}", bounds);
                vec![PointerEvent::Exit]
            }
            (false, false) => Vec::new(),
        }
    }
}
