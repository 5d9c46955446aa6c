//! SegmentedPicker widget state.

use tbdom::{Orientation, Point, Rect, Size};

use crate::binding::Binding;
use crate::error::PickerError;
use crate::interaction::InteractionState;
use crate::resolve::{resolve_selected_index, resolve_value_for_index, ResolutionMode};
use crate::segments::Segments;
use crate::theme::PickerStyle;
use crate::widgets::events::EventResult;

/// A segmented picker bound to a caller-owned selection value.
///
/// Segments split the picker evenly along its orientation. The segment
/// whose value equals the bound selection is highlighted; tapping a segment
/// writes its value through the binding. Segment values come either from a
/// value list parallel to the segments or from tags on the segments, chosen
/// once at construction.
///
/// # Example
///
/// ```
/// use tbcontrols::{Binding, SegmentedPicker};
/// use tbdom::Orientation;
///
/// let period = Binding::new("week");
/// let picker = SegmentedPicker::with_values(
///     Orientation::Horizontal,
///     &period,
///     ["Day", "Week", "Month"],
///     ["day", "week", "month"],
/// )
/// .unwrap();
///
/// assert_eq!(picker.selected_index(), Some(1));
/// ```
#[derive(Debug)]
pub struct SegmentedPicker<C, S> {
    orientation: Orientation,
    selection: Binding<S>,
    segments: Segments<C, S>,
    mode: ResolutionMode<S>,
    interaction: InteractionState,
    style: PickerStyle,
}

impl<C, S: Clone + PartialEq> SegmentedPicker<C, S> {
    /// Create a picker from segments and an explicit resolution mode.
    ///
    /// Fails if there are fewer than two segments, if a value list does not
    /// match the segment count, or if a value list is combined with tagged
    /// segments.
    pub fn new(
        orientation: Orientation,
        selection: &Binding<S>,
        segments: Segments<C, S>,
        mode: ResolutionMode<S>,
    ) -> Result<Self, PickerError> {
        if let Err(err) = validate(&segments, &mode) {
            log::debug!("rejecting segmented picker: {}", err);
            return Err(err);
        }

        Ok(Self {
            orientation,
            selection: selection.clone(),
            segments,
            mode,
            interaction: InteractionState::default(),
            style: PickerStyle::default(),
        })
    }

    /// Create a picker whose segment `i` selects `values[i]`.
    pub fn with_values(
        orientation: Orientation,
        selection: &Binding<S>,
        children: impl IntoIterator<Item = C>,
        values: impl IntoIterator<Item = S>,
    ) -> Result<Self, PickerError> {
        Self::new(
            orientation,
            selection,
            Segments::from_children(children),
            ResolutionMode::ByValues(values.into_iter().collect()),
        )
    }

    /// Create a picker whose segments select their own tags.
    pub fn tagged(
        orientation: Orientation,
        selection: &Binding<S>,
        segments: Segments<C, S>,
    ) -> Result<Self, PickerError> {
        Self::new(orientation, selection, segments, ResolutionMode::ByTag)
    }

    /// Set the visual style.
    pub fn style(mut self, style: PickerStyle) -> Self {
        self.style = style;
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false once constructed.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &Segments<C, S> {
        &self.segments
    }

    pub fn mode(&self) -> &ResolutionMode<S> {
        &self.mode
    }

    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    pub fn is_hovering(&self) -> bool {
        self.interaction.is_hovering()
    }

    pub fn selection(&self) -> &Binding<S> {
        &self.selection
    }

    pub(super) fn style_ref(&self) -> &PickerStyle {
        &self.style
    }

    /// Index of the segment matching the bound selection.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection
            .with(|current| resolve_selected_index(self.segments.as_slice(), &self.mode, current))
    }

    /// Value segment `index` stands for.
    pub fn value_for_index(&self, index: usize) -> Option<&S> {
        resolve_value_for_index(self.segments.as_slice(), &self.mode, index)
    }

    pub fn segment_frame(&self, index: usize, size: Size) -> Rect {
        tbdom::segment_frame(index, self.len(), size, self.orientation)
    }

    pub fn segment_frames(&self, size: Size) -> Vec<Rect> {
        tbdom::segment_frames(self.len(), size, self.orientation)
    }

    pub fn corner_radius(&self, size: Size) -> f32 {
        tbdom::corner_radius(size, self.orientation)
    }

    /// Segment under `position`, using the same frames as rendering.
    pub fn segment_at(&self, position: Point, size: Size) -> Option<usize> {
        tbdom::hit_test_segments(position, self.len(), size, self.orientation)
    }

    pub fn background_opacity(&self) -> f32 {
        self.style.background_fill(self.is_hovering()).opacity
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    pub fn pointer_enter(&mut self) {
        self.interaction.enter();
    }

    pub fn pointer_exit(&mut self) {
        self.interaction.exit();
    }

    pub(super) fn press(&mut self, index: usize) {
        self.interaction.enter();
        self.interaction.press(index);
    }

    pub(super) fn release(&mut self) {
        self.interaction.release();
    }

    /// Commit a tap on segment `index`.
    ///
    /// Writes the segment's value through the binding and clears hover.
    /// Ignored while idle, and a no-op for segments without a value.
    pub fn commit_tap(&mut self, index: usize) -> EventResult {
        let value = resolve_value_for_index(self.segments.as_slice(), &self.mode, index);
        if self.interaction.commit(value, &self.selection) {
            log::debug!("segmented picker: segment {} selected", index);
            EventResult::Committed
        } else {
            EventResult::Ignored
        }
    }

    /// Commit a tap at `position` in a picker laid out at `size`.
    pub fn tap_at(&mut self, position: Point, size: Size) -> EventResult {
        match self.segment_at(position, size) {
            Some(index) => self.commit_tap(index),
            None => EventResult::Ignored,
        }
    }
}

fn validate<C, S>(segments: &Segments<C, S>, mode: &ResolutionMode<S>) -> Result<(), PickerError> {
    segments.validate()?;

    if let ResolutionMode::ByValues(values) = mode {
        if values.len() != segments.len() {
            return Err(PickerError::ArityMismatch {
                children: segments.len(),
                values: values.len(),
            });
        }
        if let Some(index) = segments.first_tagged() {
            return Err(PickerError::MixedResolution { index });
        }
    }
    Ok(())
}
