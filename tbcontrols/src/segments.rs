//! Ordered segment collections.
//!
//! A [`Segments`] collection is what a segmented picker is built from. Order
//! is declaration order: it is the display order, and in value-list mode it
//! is also the index into the value list.

use crate::error::PickerError;
use crate::tag::Taggable;

/// Smallest number of segments a picker accepts.
pub const MIN_SEGMENTS: usize = 2;

/// One segment's content, optionally tagged with its selection value.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<C, S> {
    content: C,
    tag: Option<S>,
}

impl<C, S> Segment<C, S> {
    /// An untagged segment.
    pub fn new(content: C) -> Self {
        Self { content, tag: None }
    }

    /// A segment carrying `tag` as its selection value.
    pub fn tagged(content: C, tag: S) -> Self {
        Self {
            content,
            tag: Some(tag),
        }
    }

    /// Attach (or replace) the tag.
    pub fn with_tag(mut self, tag: S) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn into_content(self) -> C {
        self.content
    }

    pub fn is_tagged(&self) -> bool {
        self.tag.is_some()
    }
}

impl<C, S> Taggable<S> for Segment<C, S> {
    fn tag(&self) -> Option<&S> {
        self.tag.as_ref()
    }
}

/// Ordered collection of segments.
///
/// # Example
///
/// ```
/// use tbcontrols::segments::Segments;
/// use tbcontrols::segments;
///
/// let plain: Segments<&str, u8> = Segments::new().push("Day").push("Week");
/// assert_eq!(plain.len(), 2);
///
/// let tagged = segments!["Day" => 1u8, "Week" => 7, "Month" => 30];
/// assert_eq!(tagged.first_tagged(), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Segments<C, S> {
    items: Vec<Segment<C, S>>,
}

impl<C, S> Default for Segments<C, S> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<C, S> Segments<C, S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect untagged children, keeping their order.
    pub fn from_children(children: impl IntoIterator<Item = C>) -> Self {
        children.into_iter().map(Segment::new).collect()
    }

    /// Collect `(child, tag)` pairs, keeping their order.
    pub fn tagged(children: impl IntoIterator<Item = (C, S)>) -> Self {
        children
            .into_iter()
            .map(|(content, tag)| Segment::tagged(content, tag))
            .collect()
    }

    /// Append an untagged child.
    pub fn push(mut self, content: C) -> Self {
        self.items.push(Segment::new(content));
        self
    }

    /// Append a tagged child.
    pub fn push_tagged(mut self, content: C, tag: S) -> Self {
        self.items.push(Segment::tagged(content, tag));
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Segment<C, S>> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[Segment<C, S>] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment<C, S>> {
        self.items.iter()
    }

    /// Index of the first segment carrying a tag, if any.
    pub fn first_tagged(&self) -> Option<usize> {
        self.items.iter().position(Segment::is_tagged)
    }

    /// Check the collection is large enough to build a picker from.
    pub fn validate(&self) -> Result<(), PickerError> {
        if self.items.len() < MIN_SEGMENTS {
            return Err(PickerError::TooFewSegments {
                count: self.items.len(),
            });
        }
        Ok(())
    }
}

impl<C, S> FromIterator<Segment<C, S>> for Segments<C, S> {
    fn from_iter<I: IntoIterator<Item = Segment<C, S>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<C, S> IntoIterator for Segments<C, S> {
    type Item = Segment<C, S>;
    type IntoIter = std::vec::IntoIter<Segment<C, S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, C, S> IntoIterator for &'a Segments<C, S> {
    type Item = &'a Segment<C, S>;
    type IntoIter = std::slice::Iter<'a, Segment<C, S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Declare segments inline, in display order.
///
/// `segments![a, b, c]` builds untagged segments for value-list pickers;
/// `segments![a => tag_a, b => tag_b]` builds tagged segments.
#[macro_export]
macro_rules! segments {
    ($($content:expr => $tag:expr),+ $(,)?) => {
        $crate::segments::Segments::tagged([$(($content, $tag)),+])
    };
    ($($content:expr),+ $(,)?) => {
        $crate::segments::Segments::from_children([$($content),+])
    };
}
