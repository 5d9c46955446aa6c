//! Tags: selection values attached directly to segment content.
//!
//! A control resolving selection by tag asks each child for its tag through
//! the [`Taggable`] capability. Children opt in explicitly, either by being
//! wrapped in a [`Segment`](crate::segments::Segment) with a tag or by
//! implementing the trait on their own element type.

use std::rc::Rc;
use std::sync::Arc;

/// An element that may carry an attached selection value.
pub trait Taggable<S> {
    /// The attached tag, or `None` if nothing was attached.
    fn tag(&self) -> Option<&S>;
}

impl<S, T: Taggable<S> + ?Sized> Taggable<S> for &T {
    fn tag(&self) -> Option<&S> {
        (**self).tag()
    }
}

impl<S, T: Taggable<S> + ?Sized> Taggable<S> for Box<T> {
    fn tag(&self) -> Option<&S> {
        (**self).tag()
    }
}

impl<S, T: Taggable<S> + ?Sized> Taggable<S> for Rc<T> {
    fn tag(&self) -> Option<&S> {
        (**self).tag()
    }
}

impl<S, T: Taggable<S> + ?Sized> Taggable<S> for Arc<T> {
    fn tag(&self) -> Option<&S> {
        (**self).tag()
    }
}

/// Read the tag attached to `child`.
///
/// Total over all children: an untagged child yields `None`.
pub fn extract_tag<S, T: Taggable<S> + ?Sized>(child: &T) -> Option<&S> {
    child.tag()
}
