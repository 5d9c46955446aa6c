//! Equal-division layout for segmented controls.
//!
//! A segmented control splits its container into `total` equal spans along
//! its orientation axis. Every segment takes the full container extent on the
//! cross axis. The same frames are used for painting and for hit testing.

use super::{Rect, Size};
use crate::types::Orientation;

/// Corner radius as a fraction of the cross-axis extent.
pub const CORNER_RATIO: f32 = 0.2;

/// Compute the frame of segment `index` out of `total`.
///
/// Returns `Rect::ZERO` when there are no segments or `index` is past the
/// end. The last segment absorbs floating-point remainder.
pub fn segment_frame(index: usize, total: usize, size: Size, orientation: Orientation) -> Rect {
    if total == 0 || index >= total {
        return Rect::ZERO;
    }

    match orientation {
        Orientation::Horizontal => {
            let (x, width) = span_at(index, total, size.width);
            Rect::new(x, 0.0, width, size.height)
        }
        Orientation::Vertical => {
            let (y, height) = span_at(index, total, size.height);
            Rect::new(0.0, y, size.width, height)
        }
    }
}

/// Start and length of span `index` along an axis of length `extent`.
///
/// The length is measured to the next span's start, and the last span ends
/// on `extent` itself.
fn span_at(index: usize, total: usize, extent: f32) -> (f32, f32) {
    let span = extent / total as f32;
    let start = index as f32 * span;
    let end = if index + 1 == total {
        extent
    } else {
        (index + 1) as f32 * span
    };
    (start, end - start)
}

/// Frames for all `total` segments, in display order.
pub fn segment_frames(total: usize, size: Size, orientation: Orientation) -> Vec<Rect> {
    (0..total)
        .map(|i| segment_frame(i, total, size, orientation))
        .collect()
}

/// Shared corner radius for the container, its highlight and its segments.
///
/// Tied to the cross-axis extent so horizontal and vertical controls of the
/// same thickness look alike.
pub fn corner_radius(size: Size, orientation: Orientation) -> f32 {
    match orientation {
        Orientation::Horizontal => size.height * CORNER_RATIO,
        Orientation::Vertical => size.width * CORNER_RATIO,
    }
}
