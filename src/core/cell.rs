use super::color::Rgb;

/// Row-major position of a cell in the grid
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellId {
    pub row: u32,
    pub col: u32,
}

impl CellId {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    pub fn index(self, side: u32) -> usize {
        self.row as usize * side as usize + self.col as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub id: CellId,
    pub color: Rgb,
}

impl Cell {
    pub fn new(id: CellId, color: Rgb) -> Self {
        Cell { id, color }
    }
}

/// Convert a position relative to the container origin into cell
/// coordinates (col, row), which may lie outside the grid.
pub fn position_to_cell_coords(x: f32, y: f32, cell_width: f32, cell_height: f32) -> (i64, i64) {
    (
        (x / cell_width).floor() as i64,
        (y / cell_height).floor() as i64,
    )
}
