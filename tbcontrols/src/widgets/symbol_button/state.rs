//! SymbolButton widget state.

use tbdom::{Point, Size};

use crate::theme::SymbolButtonStyle;

/// A button drawn as a single symbol glyph.
///
/// The action runs once per committed tap. The glyph size is a fraction of
/// the button's smaller side unless an absolute size is configured.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use tbcontrols::SymbolButton;
///
/// let clicks = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&clicks);
/// let mut button = SymbolButton::new("plus", move || counter.set(counter.get() + 1));
///
/// button.tap();
/// assert_eq!(clicks.get(), 1);
/// ```
pub struct SymbolButton {
    symbol: String,
    font_scale: f32,
    offset: Point,
    action: Box<dyn FnMut()>,
    hover: bool,
    pressed: bool,
    style: SymbolButtonStyle,
}

impl SymbolButton {
    /// Default glyph size as a fraction of the smaller side.
    pub const DEFAULT_FONT_SCALE: f32 = 0.6;

    pub fn new(symbol: impl Into<String>, action: impl FnMut() + 'static) -> Self {
        Self {
            symbol: symbol.into(),
            font_scale: Self::DEFAULT_FONT_SCALE,
            offset: Point::ZERO,
            action: Box::new(action),
            hover: false,
            pressed: false,
            style: SymbolButtonStyle::default(),
        }
    }

    /// Glyph size. Values in `0..=1` scale with the smaller side, values
    /// above 1 are an absolute point size, negative values hide the glyph.
    pub fn font_scale(mut self, scale: f32) -> Self {
        self.font_scale = scale;
        self
    }

    /// Shift the glyph by a fixed offset, for optically off-center symbols.
    pub fn offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    /// Set the visual style.
    pub fn style(mut self, style: SymbolButtonStyle) -> Self {
        self.style = style;
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn symbol_name(&self) -> &str {
        &self.symbol
    }

    pub fn glyph_offset(&self) -> Point {
        self.offset
    }

    pub fn is_hovering(&self) -> bool {
        self.hover
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub(super) fn style_ref(&self) -> &SymbolButtonStyle {
        &self.style
    }

    /// Glyph point size for a button of the given size.
    pub fn font_size(&self, size: Size) -> f32 {
        if self.font_scale > 1.0 {
            self.font_scale
        } else if self.font_scale < 0.0 {
            0.0
        } else {
            size.min_side() * self.font_scale
        }
    }

    pub fn corner_radius(&self, size: Size) -> f32 {
        size.min_side() * self.style.corner_ratio
    }

    pub fn background_opacity(&self) -> f32 {
        self.style.background.resolve(self.pressed, self.hover)
    }

    pub fn symbol_opacity(&self) -> f32 {
        self.style.glyph.resolve(self.pressed, self.hover)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    pub fn set_hover(&mut self, hover: bool) {
        self.hover = hover;
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Run the action, as a committed tap does.
    pub fn tap(&mut self) {
        log::debug!("symbol button '{}' tapped", self.symbol);
        (self.action)();
    }
}

impl std::fmt::Debug for SymbolButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolButton")
            .field("symbol", &self.symbol)
            .field("font_scale", &self.font_scale)
            .field("offset", &self.offset)
            .field("hover", &self.hover)
            .field("pressed", &self.pressed)
            .finish_non_exhaustive()
    }
}
