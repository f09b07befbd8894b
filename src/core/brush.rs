use super::cell::Cell;
use super::color::{Rgb, DEFAULT_BRUSH_COLOR};

pub const DEFAULT_DARKEN_STEP: u8 = 15;

/// How a paint stroke changes the cells it touches
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum BrushMode {
    /// Fill with the brush color
    #[default]
    Colorize,
    /// Fill with a random color on every touch
    Rainbow,
    /// Subtract a fixed step from every channel
    Darken,
}

impl BrushMode {
    pub const ALL: [BrushMode; 3] = [BrushMode::Colorize, BrushMode::Rainbow, BrushMode::Darken];

    pub fn label(self) -> &'static str {
        match self {
            BrushMode::Colorize => "Color",
            BrushMode::Rainbow => "Rainbow",
            BrushMode::Darken => "Darken",
        }
    }
}

/// Source of random color channels for the rainbow brush
pub trait ChannelSource {
    /// A uniform value in `0..255`
    fn channel(&mut self) -> u8;
}

/// macroquad's global generator; seed it with `macroquad::rand::srand`
pub struct QuadRand;

impl ChannelSource for QuadRand {
    fn channel(&mut self) -> u8 {
        macroquad::rand::gen_range(0i32, 255i32) as u8
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BrushState {
    pub mode: BrushMode,
    /// Only read in colorize mode
    pub color: Rgb,
    pub darken_step: u8,
}

impl Default for BrushState {
    fn default() -> Self {
        Self {
            mode: BrushMode::default(),
            color: DEFAULT_BRUSH_COLOR,
            darken_step: DEFAULT_DARKEN_STEP,
        }
    }
}

impl BrushState {
    pub fn paint(&self, cell: &mut Cell, rng: &mut impl ChannelSource) {
        cell.color = match self.mode {
            BrushMode::Colorize => self.color,
            BrushMode::Rainbow => {
                let r = rng.channel();
                let g = rng.channel();
                let b = rng.channel();
                Rgb::new(r, g, b)
            }
            BrushMode::Darken => cell.color.darkened(self.darken_step),
        };

        log::trace!("{:?} painted ({}, {}) {}", self.mode, cell.id.row, cell.id.col, cell.color);
    }
}

/// Replays a fixed channel sequence, cycling at the end
#[cfg(test)]
pub(crate) struct Scripted {
    values: Vec<u8>,
    next: usize,
}

#[cfg(test)]
impl Scripted {
    pub(crate) fn new(values: &[u8]) -> Self {
        Scripted { values: values.to_vec(), next: 0 }
    }
}

#[cfg(test)]
impl ChannelSource for Scripted {
    fn channel(&mut self) -> u8 {
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cell::CellId;
    use crate::core::color::DEFAULT_PIXEL_COLOR;

    fn white_cell() -> Cell {
        Cell::new(CellId::new(0, 0), DEFAULT_PIXEL_COLOR)
    }

    #[test]
    fn colorize_uses_brush_color() {
        let brush = BrushState::default();
        let mut cell = white_cell();
        brush.paint(&mut cell, &mut Scripted::new(&[0]));
        assert_eq!(cell.color, DEFAULT_BRUSH_COLOR);
    }

    #[test]
    fn rainbow_draws_channels_in_order() {
        let brush = BrushState { mode: BrushMode::Rainbow, ..BrushState::default() };
        let mut cell = white_cell();
        let mut rng = Scripted::new(&[10, 20, 30, 40, 50, 60]);

        brush.paint(&mut cell, &mut rng);
        assert_eq!(cell.color, Rgb::new(10, 20, 30));

        // a second touch is not required to give the same color
        brush.paint(&mut cell, &mut rng);
        assert_eq!(cell.color, Rgb::new(40, 50, 60));
    }

    #[test]
    fn rainbow_channels_stay_below_255() {
        let brush = BrushState { mode: BrushMode::Rainbow, ..BrushState::default() };
        let mut cell = white_cell();
        macroquad::rand::srand(7);
        for _ in 0..500 {
            brush.paint(&mut cell, &mut QuadRand);
            assert!(cell.color.r < 255 && cell.color.g < 255 && cell.color.b < 255);
        }
    }

    #[test]
    fn darken_steps_down_and_stops_at_black() {
        let brush = BrushState { mode: BrushMode::Darken, ..BrushState::default() };
        let mut cell = white_cell();
        let mut rng = Scripted::new(&[0]);

        brush.paint(&mut cell, &mut rng);
        assert_eq!(cell.color, Rgb::new(240, 240, 240));

        for _ in 0..20 {
            brush.paint(&mut cell, &mut rng);
        }
        assert_eq!(cell.color, Rgb::new(0, 0, 0));
    }

    #[test]
    fn darken_ignores_brush_color() {
        let brush = BrushState {
            mode: BrushMode::Darken,
            color: Rgb::new(1, 1, 1),
            darken_step: 50,
        };
        let mut cell = Cell::new(CellId::new(1, 1), Rgb::new(100, 40, 200));
        brush.paint(&mut cell, &mut Scripted::new(&[0]));
        assert_eq!(cell.color, Rgb::new(50, 0, 150));
    }
}
