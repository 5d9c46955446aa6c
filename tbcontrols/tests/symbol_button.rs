use std::cell::Cell;
use std::rc::Rc;

use tbcontrols::{EventResult, SymbolButton, Widget, WidgetEvents};
use tbdom::{MouseButton, Point, PointerEvent, Primitive, Size};

const SIZE: Size = Size::new(60.0, 40.0);

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn counting_button() -> (SymbolButton, Rc<Cell<u32>>) {
    let count = Rc::new(Cell::new(0));
    let counter = Rc::clone(&count);
    let button = SymbolButton::new("plus", move || counter.set(counter.get() + 1));
    (button, count)
}

fn left(kind: fn(Point, MouseButton) -> PointerEvent, x: f32, y: f32) -> PointerEvent {
    kind(Point::new(x, y), MouseButton::Left)
}

fn down(position: Point, button: MouseButton) -> PointerEvent {
    PointerEvent::Down { position, button }
}

fn up(position: Point, button: MouseButton) -> PointerEvent {
    PointerEvent::Up { position, button }
}

// ============================================================================
// Action
// ============================================================================

#[test]
fn test_tap_runs_action_once() {
    let (mut button, count) = counting_button();

    button.dispatch(PointerEvent::Enter, SIZE);
    assert_eq!(button.dispatch(left(down, 30.0, 20.0), SIZE), EventResult::Consumed);
    assert_eq!(count.get(), 0, "nothing runs on press");
    assert_eq!(button.dispatch(left(up, 30.0, 20.0), SIZE), EventResult::Committed);
    assert_eq!(count.get(), 1);
}

#[test]
fn test_release_outside_runs_nothing() {
    let (mut button, count) = counting_button();

    button.dispatch(left(down, 30.0, 20.0), SIZE);
    assert_eq!(button.dispatch(left(up, 70.0, 20.0), SIZE), EventResult::Consumed);
    assert_eq!(count.get(), 0);
    assert!(!button.is_pressed());
}

#[test]
fn test_exit_cancels_press() {
    let (mut button, count) = counting_button();

    button.dispatch(PointerEvent::Enter, SIZE);
    button.dispatch(left(down, 30.0, 20.0), SIZE);
    button.dispatch(PointerEvent::Exit, SIZE);
    assert!(!button.is_pressed());
    assert!(!button.is_hovering());
    assert_eq!(count.get(), 0);
}

#[test]
fn test_secondary_button_runs_nothing() {
    let (mut button, count) = counting_button();

    button.dispatch(up(Point::new(30.0, 20.0), MouseButton::Right), SIZE);
    assert_eq!(count.get(), 0);
}

#[test]
fn test_repeated_taps_run_repeatedly() {
    let (mut button, count) = counting_button();

    for _ in 0..3 {
        button.dispatch(left(down, 10.0, 10.0), SIZE);
        button.dispatch(left(up, 10.0, 10.0), SIZE);
    }
    assert_eq!(count.get(), 3);
}

// ============================================================================
// Visual State
// ============================================================================

#[test]
fn test_opacity_states() {
    let (mut button, _) = counting_button();

    assert!(approx(button.background_opacity(), 0.0));
    assert!(approx(button.symbol_opacity(), 0.7));

    button.set_hover(true);
    assert!(approx(button.background_opacity(), 0.15));

    button.set_pressed(true);
    assert!(approx(button.background_opacity(), 0.3));
    assert!(approx(button.symbol_opacity(), 1.0));
}

#[test]
fn test_font_size_scales_with_smaller_side() {
    let (button, _) = counting_button();
    assert!(approx(button.font_size(SIZE), 24.0));

    let button = button.font_scale(0.5);
    assert!(approx(button.font_size(SIZE), 20.0));
}

#[test]
fn test_font_size_absolute_and_hidden() {
    let (button, _) = counting_button();
    let button = button.font_scale(18.0);
    assert!(approx(button.font_size(SIZE), 18.0), "above 1 is a point size");

    let button = button.font_scale(-1.0);
    assert_eq!(button.font_size(SIZE), 0.0);
}

#[test]
fn test_render_applies_offset() {
    let (button, _) = counting_button();
    let button = button.offset(Point::new(1.0, -2.0));
    let scene = button.render(SIZE);

    assert_eq!(scene.len(), 2);
    match &scene.primitives()[1] {
        Primitive::Glyph {
            symbol,
            center,
            offset,
            ..
        } => {
            assert_eq!(symbol, "plus");
            assert_eq!(*center, Point::new(30.0, 20.0));
            assert_eq!(*offset, Point::new(1.0, -2.0));
        }
        other => panic!("expected glyph, got {:?}", other),
    }
    assert!(!button.is_dirty());
}
