use super::cell::{Cell, CellId};
use super::color::Rgb;
use super::resolution::Resolution;

/// Dense square grid of cells, stored row-major
#[derive(Clone, Debug)]
pub struct Grid {
    resolution: Resolution,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(resolution: Resolution, color: Rgb) -> Self {
        let side = resolution.side();
        let cells = (0..side)
            .flat_map(|row| (0..side).map(move |col| Cell::new(CellId::new(row, col), color)))
            .collect();

        Grid { resolution, cells }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn side(&self) -> u32 {
        self.resolution.side()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, id: CellId) -> bool {
        id.row < self.side() && id.col < self.side()
    }

    #[allow(dead_code)]
    pub fn get(&self, id: CellId) -> Option<&Cell> {
        if !self.contains(id) {
            return None;
        }
        self.cells.get(id.index(self.side()))
    }

    pub fn get_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        if !self.contains(id) {
            return None;
        }
        let side = self.side();
        self.cells.get_mut(id.index(side))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}
