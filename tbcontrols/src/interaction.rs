//! Ephemeral pointer interaction state.
//!
//! Each control instance owns one [`InteractionState`]. It lives exactly as
//! long as the instance and is never persisted.

use crate::binding::Binding;

/// Pointer interaction with a control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InteractionState {
    /// Pointer is elsewhere.
    #[default]
    Idle,
    /// Pointer is over the control.
    Hovering,
    /// A button went down over part `index` and has not been released.
    Pressed(usize),
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        *self == Self::Idle
    }

    /// Whether the control should draw its hover treatment.
    pub fn is_hovering(&self) -> bool {
        !self.is_idle()
    }

    pub fn pressed(&self) -> Option<usize> {
        match self {
            Self::Pressed(index) => Some(*index),
            _ => None,
        }
    }

    /// Pointer entered the control. Only leaves `Idle`; a repeated enter
    /// keeps any press in progress.
    pub fn enter(&mut self) {
        if self.is_idle() {
            self.transition(Self::Hovering);
        }
    }

    /// Pointer left the control. Cancels any press.
    pub fn exit(&mut self) {
        self.transition(Self::Idle);
    }

    /// Button went down over part `index`.
    pub fn press(&mut self, index: usize) {
        self.transition(Self::Pressed(index));
    }

    /// Button released without committing anything.
    pub fn release(&mut self) {
        if self.pressed().is_some() {
            self.transition(Self::Hovering);
        }
    }

    /// Commit a tap whose target resolved to `value`.
    ///
    /// Only a non-idle control can commit. A present value is written
    /// through `binding` and hover is cleared; an absent value leaves the
    /// state untouched. Returns whether anything was written.
    pub fn commit<S: Clone>(&mut self, value: Option<&S>, binding: &Binding<S>) -> bool {
        if self.is_idle() {
            log::trace!("tap ignored: control is idle");
            return false;
        }
        let Some(value) = value else {
            return false;
        };

        binding.set(value.clone());
        self.transition(Self::Idle);
        true
    }

    fn transition(&mut self, next: Self) {
        if *self != next {
            log::trace!("interaction {:?} -> {:?}", self, next);
            *self = next;
        }
    }
}
