use macroquad::prelude::*;

use crate::core::{Canvas, CellId};
use crate::state::UiEvent;

/// Left mouse button state for one frame
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub position: Vec2,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
    /// Pointer is over a control, not the canvas
    pub over_ui: bool,
}

impl PointerSample {
    pub fn capture(over_ui: impl Fn(Vec2) -> bool) -> Self {
        let position = Vec2::from(mouse_position());
        PointerSample {
            position,
            pressed: is_mouse_button_pressed(MouseButton::Left),
            down: is_mouse_button_down(MouseButton::Left),
            released: is_mouse_button_released(MouseButton::Left),
            over_ui: over_ui(position),
        }
    }
}

/// Bresenham line algorithm - returns all grid cells between two points
fn bresenham(from: (i64, i64), to: (i64, i64)) -> Vec<(i64, i64)> {
    let mut cells = Vec::new();
    let (mut x0, mut y0) = from;
    let (x1, y1) = to;

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        cells.push((x0, y0));

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }

    cells
}

/// Turns per-frame mouse samples into cell enter/press/release events.
///
/// A cell is "entered" once when the pointer moves onto it with the button
/// held. Cells skipped between two frames are entered too, in line order.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last_cell: Option<CellId>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, sample: &PointerSample, canvas: &Canvas) -> Vec<UiEvent> {
        let mut events = Vec::new();
        let hovered = if sample.over_ui { None } else { canvas.cell_at(sample.position) };

        if sample.pressed {
            if let Some(cell) = hovered {
                events.push(UiEvent::PointerDown(cell));
            }
            self.last_cell = hovered;
        } else if sample.down {
            match (self.last_cell, hovered) {
                (_, None) => self.last_cell = None,
                (Some(last), Some(cell)) if last == cell => {}
                (Some(last), Some(cell)) => {
                    events.extend(cells_between(last, cell).map(UiEvent::PointerOver));
                    self.last_cell = Some(cell);
                }
                (None, Some(cell)) => {
                    events.push(UiEvent::PointerOver(cell));
                    self.last_cell = Some(cell);
                }
            }
        }

        // a release anywhere ends the session, even over the controls
        if sample.released {
            events.push(UiEvent::PointerUp);
            self.last_cell = None;
        }

        events
    }
}

/// Cells on the line from `from` (exclusive) to `to` (inclusive)
fn cells_between(from: CellId, to: CellId) -> impl Iterator<Item = CellId> {
    bresenham(
        (from.col as i64, from.row as i64),
        (to.col as i64, to.row as i64),
    )
    .into_iter()
    .skip(1)
    .map(|(col, row)| CellId::new(row as u32, col as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Resolution, DEFAULT_PIXEL_COLOR};

    // 10 x 10 grid of 10px cells at the origin
    fn canvas() -> Canvas {
        Canvas::new(Rect::new(0.0, 0.0, 100.0, 100.0), Resolution::new(10), DEFAULT_PIXEL_COLOR)
    }

    fn at(x: f32, y: f32) -> PointerSample {
        PointerSample { position: vec2(x, y), ..Default::default() }
    }

    fn press(x: f32, y: f32) -> PointerSample {
        PointerSample { pressed: true, down: true, ..at(x, y) }
    }

    fn hold(x: f32, y: f32) -> PointerSample {
        PointerSample { down: true, ..at(x, y) }
    }

    fn release(x: f32, y: f32) -> PointerSample {
        PointerSample { released: true, ..at(x, y) }
    }

    #[test]
    fn bresenham_walks_diagonal() {
        assert_eq!(bresenham((0, 0), (3, 3)), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert_eq!(bresenham((2, 0), (0, 0)), vec![(2, 0), (1, 0), (0, 0)]);
    }

    #[test]
    fn press_over_cell_emits_down() {
        let c = canvas();
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.track(&press(15.0, 25.0), &c), vec![UiEvent::PointerDown(CellId::new(2, 1))]);
    }

    #[test]
    fn holding_inside_one_cell_is_quiet() {
        let c = canvas();
        let mut tracker = PointerTracker::new();
        tracker.track(&press(15.0, 25.0), &c);
        assert!(tracker.track(&hold(16.0, 26.0), &c).is_empty());
    }

    #[test]
    fn fast_drag_enters_skipped_cells() {
        let c = canvas();
        let mut tracker = PointerTracker::new();
        tracker.track(&press(5.0, 5.0), &c);
        let events = tracker.track(&hold(35.0, 5.0), &c);
        assert_eq!(
            events,
            vec![
                UiEvent::PointerOver(CellId::new(0, 1)),
                UiEvent::PointerOver(CellId::new(0, 2)),
                UiEvent::PointerOver(CellId::new(0, 3)),
            ]
        );
    }

    #[test]
    fn leaving_and_reentering_enters_only_the_entry_cell() {
        let c = canvas();
        let mut tracker = PointerTracker::new();
        tracker.track(&press(5.0, 5.0), &c);
        assert!(tracker.track(&hold(150.0, 5.0), &c).is_empty());
        assert_eq!(
            tracker.track(&hold(95.0, 5.0), &c),
            vec![UiEvent::PointerOver(CellId::new(0, 9))]
        );
    }

    #[test]
    fn release_anywhere_emits_up() {
        let c = canvas();
        let mut tracker = PointerTracker::new();
        tracker.track(&press(5.0, 5.0), &c);
        let mut outside = release(500.0, 500.0);
        outside.over_ui = true;
        assert_eq!(tracker.track(&outside, &c), vec![UiEvent::PointerUp]);
    }

    #[test]
    fn press_over_controls_never_reaches_grid() {
        let c = canvas();
        let mut tracker = PointerTracker::new();
        let mut sample = press(5.0, 5.0);
        sample.over_ui = true;
        assert!(tracker.track(&sample, &c).is_empty());
    }
}
