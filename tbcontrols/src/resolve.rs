//! Selection resolution: which segment does the current value select, and
//! which value does a segment stand for.
//!
//! Both directions work in one of two modes, fixed when a picker is built:
//! against an explicit list of values parallel to the segments, or against
//! the tag each segment carries.

use crate::error::LookupMiss;
use crate::tag::{extract_tag, Taggable};

/// How segment indices map to selection values.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionMode<S> {
    /// `values[i]` is the value of segment `i`.
    ByValues(Vec<S>),
    /// Each segment's own tag is its value.
    ByTag,
}

impl<S> ResolutionMode<S> {
    /// The explicit value list, if resolving by values.
    pub fn values(&self) -> Option<&[S]> {
        match self {
            Self::ByValues(values) => Some(values),
            Self::ByTag => None,
        }
    }

    pub fn is_by_tag(&self) -> bool {
        matches!(self, Self::ByTag)
    }
}

/// Index of the segment selected by `current`.
///
/// The first match wins, so duplicate values select the earliest segment.
/// Returns `None` when nothing matches.
pub fn resolve_selected_index<S, T>(
    children: &[T],
    mode: &ResolutionMode<S>,
    current: &S,
) -> Option<usize>
where
    S: PartialEq,
    T: Taggable<S>,
{
    match mode {
        ResolutionMode::ByValues(values) => values.iter().position(|value| value == current),
        ResolutionMode::ByTag => children
            .iter()
            .position(|child| extract_tag(child) == Some(current)),
    }
}

/// Value that segment `index` stands for, or why there is none.
pub fn lookup_value<'a, S, T>(
    children: &'a [T],
    mode: &'a ResolutionMode<S>,
    index: usize,
) -> Result<&'a S, LookupMiss>
where
    T: Taggable<S>,
{
    match mode {
        ResolutionMode::ByValues(values) => values.get(index).ok_or(LookupMiss::IndexOutOfRange {
            index,
            len: values.len(),
        }),
        ResolutionMode::ByTag => {
            let child = children.get(index).ok_or(LookupMiss::IndexOutOfRange {
                index,
                len: children.len(),
            })?;
            extract_tag(child).ok_or(LookupMiss::TagNotFound { index })
        }
    }
}

/// Value that segment `index` stands for.
///
/// Out-of-range indices and untagged segments yield `None`.
pub fn resolve_value_for_index<'a, S, T>(
    children: &'a [T],
    mode: &'a ResolutionMode<S>,
    index: usize,
) -> Option<&'a S>
where
    T: Taggable<S>,
{
    match lookup_value(children, mode, index) {
        Ok(value) => Some(value),
        Err(miss) => {
            log::trace!("no value for segment: {}", miss);
            None
        }
    }
}
