use std::fs::File;

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use simplelog::{Config, LevelFilter, WriteLogger};
use tbcontrols::prelude::*;
use tbdom::{HoverTracker, Rect, Rgb};

const BACKDROP: Rgb = Rgb::new(28, 28, 30);

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Shade each cell of the picker by the composited track and highlight.
fn draw(scene: &Scene, size: Size) {
    for row in 0..size.height as u16 {
        let line: String = (0..size.width as u16)
            .map(|col| {
                let center = Point::new(col as f32 + 0.5, row as f32 + 0.5);
                let Rgb { r, .. } = scene.color_at(center, BACKDROP);
                match r {
                    0..=50 => ' ',
                    51..=80 => '░',
                    _ => '▓',
                }
            })
            .collect();
        println!("  |{}|", line);
    }
}

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("picker.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let period = Binding::new("week");
    let mut picker = SegmentedPicker::with_values(
        Orientation::Horizontal,
        &period,
        ["Day", "Week", "Month"],
        ["day", "week", "month"],
    )
    .expect("three segments with three values");

    // Where the host placed the picker, in terminal cells
    let bounds = Rect::new(10.0, 2.0, 30.0, 3.0);
    let mut hover = HoverTracker::new();

    let script = [
        mouse(MouseEventKind::Moved, 2, 3),
        mouse(MouseEventKind::Moved, 15, 3),
        mouse(MouseEventKind::Down(MouseButton::Left), 35, 3),
        mouse(MouseEventKind::Up(MouseButton::Left), 35, 3),
        mouse(MouseEventKind::Down(MouseButton::Left), 12, 3),
        mouse(MouseEventKind::Up(MouseButton::Left), 25, 3),
        mouse(MouseEventKind::Moved, 50, 9),
    ];

    println!("initial: {}", period.get());
    draw(&picker.render(bounds.size()), bounds.size());

    for raw in &script {
        let Some(event) = PointerEvent::from_crossterm(raw) else {
            continue;
        };
        for local in hover.track(event, bounds) {
            let result = picker.dispatch(local, bounds.size());
            log::info!("{:?} -> {:?}", local, result);
        }

        if picker.is_dirty() {
            picker.clear_dirty();
            println!("selected: {}", period.get());
            draw(&picker.render(bounds.size()), bounds.size());
        }
    }

    println!("final: {} (see picker.log)", period.get());
    Ok(())
}
