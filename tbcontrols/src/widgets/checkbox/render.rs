//! Scene building for the Checkbox widget.

use tbdom::{Point, Primitive, Scene, Size};

use super::Checkbox;

pub(super) fn render_checkbox(checkbox: &Checkbox, area: Size) -> Scene {
    let style = checkbox.style_ref();
    let checked = checkbox.is_checked();
    let hover = checkbox.is_hovering();
    let frame = checkbox.frame(area);

    let mut scene = Scene::new();
    scene.push(Primitive::RoundedRect {
        rect: frame,
        radius: checkbox.size() * style.corner_ratio,
        fill: style.background_fill(checked, hover),
    });
    scene.push(Primitive::Glyph {
        symbol: checkbox.symbol_name().to_string(),
        center: frame.center(),
        size: checkbox.size() * style.glyph_ratio,
        fill: style.glyph_fill(checked, hover),
        offset: Point::ZERO,
    });
    scene
}
