//! Checkbox widget state.

use tbdom::{Rect, Size};

use crate::binding::Binding;
use crate::theme::CheckboxStyle;

/// A square checkbox bound to a caller-owned `bool`.
///
/// The box is `size` points on each side. The symbol is drawn faintly on
/// hover and clearly once checked. Unchecking always drops the hover
/// treatment, so the box reads as empty straight after the tap.
///
/// # Example
///
/// ```
/// use tbcontrols::{Binding, Checkbox};
///
/// let agree = Binding::new(false);
/// let mut checkbox = Checkbox::new(30.0, &agree).symbol("checkmark");
///
/// checkbox.toggle();
/// assert!(agree.get());
/// ```
#[derive(Debug)]
pub struct Checkbox {
    size: f32,
    symbol: String,
    checked: Binding<bool>,
    hover: bool,
    style: CheckboxStyle,
}

impl Checkbox {
    /// Symbol shown when no other is configured.
    pub const DEFAULT_SYMBOL: &'static str = "checkmark";

    /// Create a checkbox of side `size` bound to `checked`.
    pub fn new(size: f32, checked: &Binding<bool>) -> Self {
        Self {
            size,
            symbol: Self::DEFAULT_SYMBOL.to_string(),
            checked: checked.clone(),
            hover: false,
            style: CheckboxStyle::default(),
        }
    }

    /// Set the symbol identifier shown inside the box.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Set the visual style.
    pub fn style(mut self, style: CheckboxStyle) -> Self {
        self.style = style;
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }

    pub fn is_hovering(&self) -> bool {
        self.hover
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn symbol_name(&self) -> &str {
        &self.symbol
    }

    pub(super) fn style_ref(&self) -> &CheckboxStyle {
        &self.style
    }

    pub(super) fn binding(&self) -> &Binding<bool> {
        &self.checked
    }

    /// The box, centered in an area of the given size.
    pub fn frame(&self, area: Size) -> Rect {
        Rect::new(
            (area.width - self.size) / 2.0,
            (area.height - self.size) / 2.0,
            self.size,
            self.size,
        )
    }

    pub fn background_opacity(&self) -> f32 {
        self.style.background.resolve(self.is_checked(), self.hover)
    }

    pub fn symbol_opacity(&self) -> f32 {
        self.style.glyph.resolve(self.is_checked(), self.hover)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    pub fn set_hover(&mut self, hover: bool) {
        self.hover = hover;
    }

    /// Flip the bound value. Unchecking clears hover.
    pub fn toggle(&mut self) {
        self.checked.update(|checked| *checked = !*checked);
        let checked = self.is_checked();
        if !checked {
            self.hover = false;
        }
        log::debug!("checkbox toggled -> {}", checked);
    }
}
