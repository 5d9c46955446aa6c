//! Scene building for the SymbolButton widget.

use tbdom::{Primitive, Rect, Scene, Size};

use super::SymbolButton;

pub(super) fn render_symbol_button(button: &SymbolButton, size: Size) -> Scene {
    let style = button.style_ref();
    let frame = Rect::from_size(size);
    let (pressed, hover) = (button.is_pressed(), button.is_hovering());

    let mut scene = Scene::new();
    scene.push(Primitive::RoundedRect {
        rect: frame,
        radius: button.corner_radius(size),
        fill: style.background_fill(pressed, hover),
    });
    scene.push(Primitive::Glyph {
        symbol: button.symbol_name().to_string(),
        center: frame.center(),
        size: button.font_size(size),
        fill: style.glyph_fill(pressed, hover),
        offset: button.glyph_offset(),
    });
    scene
}
