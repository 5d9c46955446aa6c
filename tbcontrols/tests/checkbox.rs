use tbcontrols::{Binding, Checkbox, CheckboxStyle, EventResult, Widget, WidgetEvents};
use tbdom::{Color, MouseButton, Point, PointerEvent, Primitive, Rect, Size};

const AREA: Size = Size::square(30.0);

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn tap(checkbox: &mut Checkbox) -> EventResult {
    checkbox.dispatch(
        PointerEvent::Up {
            position: Point::new(15.0, 15.0),
            button: MouseButton::Left,
        },
        AREA,
    )
}

// ============================================================================
// Toggling
// ============================================================================

#[test]
fn test_tap_toggles_binding() {
    let checked = Binding::new(false);
    let mut checkbox = Checkbox::new(30.0, &checked);

    assert_eq!(tap(&mut checkbox), EventResult::Committed);
    assert!(checked.get());
    assert_eq!(tap(&mut checkbox), EventResult::Committed);
    assert!(!checked.get());
}

#[test]
fn test_tap_outside_box_is_ignored() {
    let checked = Binding::new(false);
    let mut checkbox = Checkbox::new(20.0, &checked);

    // 20pt box centered in a 40pt area spans 10..30
    let outside = PointerEvent::Up {
        position: Point::new(5.0, 5.0),
        button: MouseButton::Left,
    };
    assert_eq!(checkbox.dispatch(outside, Size::square(40.0)), EventResult::Ignored);
    assert!(!checked.get());
}

#[test]
fn test_external_write_is_reflected() {
    let checked = Binding::new(false);
    let checkbox = Checkbox::new(30.0, &checked);

    checked.set(true);
    assert!(checkbox.is_checked());
    assert!(checkbox.is_dirty());
}

#[test]
fn test_unchecking_clears_hover() {
    let checked = Binding::new(true);
    let mut checkbox = Checkbox::new(30.0, &checked);

    checkbox.dispatch(PointerEvent::Enter, AREA);
    assert!(checkbox.is_hovering());

    tap(&mut checkbox);
    assert!(!checked.get());
    assert!(!checkbox.is_hovering(), "box reads as empty after unchecking");
    assert!(approx(checkbox.background_opacity(), 0.1));
    assert!(approx(checkbox.symbol_opacity(), 0.0));
}

#[test]
fn test_checking_keeps_hover() {
    let checked = Binding::new(false);
    let mut checkbox = Checkbox::new(30.0, &checked);

    checkbox.dispatch(PointerEvent::Enter, AREA);
    tap(&mut checkbox);
    assert!(checkbox.is_hovering());
}

// ============================================================================
// Opacity
// ============================================================================

#[test]
fn test_opacity_states() {
    let checked = Binding::new(false);
    let mut checkbox = Checkbox::new(30.0, &checked);

    assert!(approx(checkbox.background_opacity(), 0.1));
    assert!(approx(checkbox.symbol_opacity(), 0.0));

    checkbox.set_hover(true);
    assert!(approx(checkbox.background_opacity(), 0.15));
    assert!(approx(checkbox.symbol_opacity(), 0.15));

    checked.set(true);
    assert!(approx(checkbox.background_opacity(), 0.4));
    assert!(approx(checkbox.symbol_opacity(), 0.85));

    checkbox.set_hover(false);
    assert!(approx(checkbox.background_opacity(), 0.4), "checked wins over hover");
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_box_and_glyph() {
    let checked = Binding::new(true);
    let checkbox = Checkbox::new(20.0, &checked).symbol("xmark");
    let scene = checkbox.render(Size::new(40.0, 20.0));

    match &scene.primitives()[0] {
        Primitive::RoundedRect { rect, radius, fill } => {
            assert_eq!(*rect, Rect::new(10.0, 0.0, 20.0, 20.0));
            assert!(approx(*radius, 4.0));
            assert!(approx(fill.opacity, 0.4));
        }
        other => panic!("expected box, got {:?}", other),
    }
    match &scene.primitives()[1] {
        Primitive::Glyph {
            symbol,
            center,
            size,
            fill,
            ..
        } => {
            assert_eq!(symbol, "xmark");
            assert_eq!(*center, Point::new(20.0, 10.0));
            assert!(approx(*size, 12.0));
            assert!(approx(fill.opacity, 0.85));
        }
        other => panic!("expected glyph, got {:?}", other),
    }
}

#[test]
fn test_default_symbol() {
    let checked = Binding::new(false);
    let checkbox = Checkbox::new(30.0, &checked);
    assert_eq!(checkbox.symbol_name(), Checkbox::DEFAULT_SYMBOL);
}

#[test]
fn test_style_tint() {
    let checked = Binding::new(false);
    let style = CheckboxStyle {
        color: Color::rgb(0, 122, 255),
        ..CheckboxStyle::default()
    };
    let checkbox = Checkbox::new(30.0, &checked).style(style);
    let scene = checkbox.render(AREA);

    let (_, _, fill) = scene.rounded_rects().next().expect("box");
    assert_eq!(fill.color, Color::rgb(0, 122, 255));
}
