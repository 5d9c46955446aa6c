//! Scene building for the SegmentedPicker widget.

use tbdom::{Primitive, Rect, Scene, Size};

use super::SegmentedPicker;

/// Track, then the selection highlight, then one content slot per segment.
pub(super) fn render_picker<C, S: Clone + PartialEq>(
    picker: &SegmentedPicker<C, S>,
    size: Size,
) -> Scene {
    let style = picker.style_ref();
    let radius = picker.corner_radius(size);

    let mut scene = Scene::new();
    scene.push(Primitive::RoundedRect {
        rect: Rect::from_size(size),
        radius,
        fill: style.background_fill(picker.is_hovering()),
    });

    if let Some(selected) = picker.selected_index() {
        scene.push(Primitive::RoundedRect {
            rect: picker.segment_frame(selected, size),
            radius,
            fill: style.highlight_fill(),
        });
    }

    for (index, rect) in picker.segment_frames(size).into_iter().enumerate() {
        scene.push(Primitive::Content { index, rect });
    }
    scene
}
