use crate::layout::{segment_frames, Point, Rect, Size};
use crate::types::Orientation;

/// Find the frame containing the given point.
/// Returns the index of the topmost (last) frame, or None if no frame
/// contains the point.
pub fn hit_test(frames: &[Rect], point: Point) -> Option<usize> {
    // Check frames in reverse order (last rendered = on top)
    frames.iter().rposition(|frame| frame.contains(point))
}

/// Map a point inside a segmented control to the segment under it.
///
/// Uses the exact frames the layout engine produces, so the hit region of a
/// segment is always identical to its visual region.
pub fn hit_test_segments(
    point: Point,
    total: usize,
    size: Size,
    orientation: Orientation,
) -> Option<usize> {
    if total == 0 || size.is_empty() {
        return None;
    }

    let frames = segment_frames(total, size, orientation);
    let hit = hit_test(&frames, point);
    log::trace!("hit_test_segments {:?} -> {:?}", point, hit);
    hit
}
