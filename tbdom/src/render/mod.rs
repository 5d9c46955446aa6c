//! Draw primitives produced by controls.
//!
//! Controls never paint. Each render pass yields a [`Scene`]: an ordered list
//! of primitives, back to front, which the host paints with whatever backend
//! it has.

use crate::layout::{Point, Rect};
use crate::types::{Fill, Rgb};

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A filled rectangle with rounded corners.
    RoundedRect { rect: Rect, radius: f32, fill: Fill },
    /// A named symbol glyph centered on `center`, shifted by `offset`.
    Glyph {
        symbol: String,
        center: Point,
        size: f32,
        fill: Fill,
        offset: Point,
    },
    /// Slot where the host draws caller-supplied content number `index`.
    Content { index: usize, rect: Rect },
}

impl Primitive {
    /// Bounding rectangle of the primitive. Glyphs report a square of their
    /// point size around the shifted center.
    pub fn bounds(&self) -> Rect {
        match self {
            Self::RoundedRect { rect, .. } | Self::Content { rect, .. } => *rect,
            Self::Glyph {
                center, size, offset, ..
            } => Rect::new(
                center.x + offset.x - size / 2.0,
                center.y + offset.y - size / 2.0,
                *size,
                *size,
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a primitive on top of everything pushed so far.
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter()
    }

    /// All rounded rectangles, back to front.
    pub fn rounded_rects(&self) -> impl Iterator<Item = (&Rect, f32, &Fill)> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::RoundedRect { rect, radius, fill } => Some((rect, *radius, fill)),
            _ => None,
        })
    }

    /// All content slots, in display order.
    pub fn content_slots(&self) -> impl Iterator<Item = (usize, &Rect)> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Content { index, rect } => Some((*index, rect)),
            _ => None,
        })
    }

    /// Flatten the rectangle fills covering `point` over `background`.
    ///
    /// Corner rounding is ignored; this is meant for coarse backends such as
    /// terminals that paint whole cells.
    pub fn color_at(&self, point: Point, background: Rgb) -> Rgb {
        self.rounded_rects()
            .filter(|(rect, _, _)| rect.contains(point))
            .fold(background, |below, (_, _, fill)| fill.composite_over(below))
    }
}

impl IntoIterator for Scene {
    type Item = Primitive;
    type IntoIter = std::vec::IntoIter<Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.into_iter()
    }
}
