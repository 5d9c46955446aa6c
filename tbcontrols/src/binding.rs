//! Two-way binding between caller-owned state and a control.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The bound value together with its written-since-cleared flag. Both live
/// under one lock so a write and its dirty mark are never observed apart.
#[derive(Debug)]
struct Slot<T> {
    value: T,
    dirty: bool,
}

/// Two-way binding to caller-owned state.
///
/// A control reads its value through the binding on every render and writes
/// back through it when the user commits a change. Clones share the same
/// slot: the caller keeps one handle and passes another to the control.
///
/// A panic while the slot is locked does not lose the binding. Later reads
/// and writes go through to the value as it was left.
///
/// # Example
///
/// ```
/// use tbcontrols::Binding;
///
/// let mode = Binding::new("light".to_string());
/// let handle = mode.clone();
/// handle.set("dark".to_string());
///
/// assert_eq!(mode.get(), "dark");
/// assert!(mode.is_dirty());
/// ```
#[derive(Debug)]
pub struct Binding<T> {
    slot: Arc<RwLock<Slot<T>>>,
}

impl<T> Binding<T> {
    pub fn new(value: T) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Slot {
                value,
                dirty: false,
            })),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Slot<T>> {
        self.slot.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Slot<T>> {
        self.slot.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current value, cloned.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.read().value.clone()
    }

    /// Read the current value in place.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.read().value)
    }

    /// Replace the value and mark the binding dirty.
    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    /// Modify the value in place and mark the binding dirty.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut slot = self.write();
        f(&mut slot.value);
        slot.dirty = true;
    }

    /// Whether the value was written since the last `clear_dirty`.
    pub fn is_dirty(&self) -> bool {
        self.read().dirty
    }

    pub fn clear_dirty(&self) {
        self.write().dirty = false;
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T: Default> Default for Binding<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
