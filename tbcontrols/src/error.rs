//! Error types for control construction and value lookup.

use thiserror::Error;

/// Errors that can occur when constructing a segmented picker.
///
/// These are caller bugs, so they are reported at construction instead of
/// being papered over at render time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    /// Fewer segments than a picker can meaningfully offer.
    #[error("a segmented picker needs at least 2 segments, got {count}")]
    TooFewSegments {
        /// Number of segments supplied.
        count: usize,
    },

    /// The value list and the segment list differ in length.
    #[error("value list has {values} entries but there are {children} segments")]
    ArityMismatch {
        /// Number of segments supplied.
        children: usize,
        /// Number of values supplied.
        values: usize,
    },

    /// A value list was supplied while segments also carry tags.
    #[error("segment {index} carries a tag but selection is resolved by value list")]
    MixedResolution {
        /// First tagged segment.
        index: usize,
    },
}

/// Why a segment index did not map to a selection value.
///
/// Never fatal: an unresolvable tap is a no-op and an unresolvable
/// selection renders with no highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupMiss {
    #[error("segment {index} has no tag")]
    TagNotFound { index: usize },

    #[error("index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}
