use macroquad::math::{Rect, Vec2};

use super::cell::{position_to_cell_coords, Cell, CellId};
use super::color::Rgb;
use super::grid::Grid;
use super::resolution::Resolution;

/// The grid laid out inside its container.
///
/// Owns the [`Grid`]; every resolution change discards the old cells and
/// builds new ones in the default pixel color.
pub struct Canvas {
    container: Rect,
    pixel_color: Rgb,
    cell_size: Vec2,
    grid: Grid,
}

impl Canvas {
    pub fn new(container: Rect, resolution: Resolution, pixel_color: Rgb) -> Self {
        let mut canvas = Canvas {
            container,
            pixel_color,
            cell_size: Vec2::ZERO,
            grid: Grid::new(resolution, pixel_color),
        };
        canvas.build(resolution);
        canvas
    }

    /// Discard all cells and lay out `resolution²` fresh ones
    pub fn build(&mut self, resolution: Resolution) {
        self.grid = Grid::new(resolution, self.pixel_color);
        self.cell_size = cell_size_for(self.container, resolution);
        debug_assert_eq!(self.grid.len(), resolution.cell_count());

        log::info!(
            "built {} grid: cell {:.2}x{:.2}px, {} cells",
            resolution,
            self.cell_size.x,
            self.cell_size.y,
            self.grid.len()
        );
    }

    pub fn rebuild(&mut self, resolution: Resolution) {
        self.build(resolution);
    }

    /// Follow a container resize, keeping the painted cells
    pub fn set_container(&mut self, container: Rect) {
        if container == self.container {
            return;
        }
        self.container = container;
        self.cell_size = cell_size_for(container, self.grid.resolution());
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    pub fn resolution(&self) -> Resolution {
        self.grid.resolution()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.grid.get_mut(id)
    }

    /// Which cell, if any, lies under a screen position
    pub fn cell_at(&self, point: Vec2) -> Option<CellId> {
        if !self.container.contains(point) {
            return None;
        }

        let local = point - self.container.point();
        let (col, row) = position_to_cell_coords(local.x, local.y, self.cell_size.x, self.cell_size.y);
        let side = self.grid.side() as i64;

        // float rounding can land one past the last cell
        let col = col.clamp(0, side - 1) as u32;
        let row = row.clamp(0, side - 1) as u32;
        Some(CellId::new(row, col))
    }

    /// Screen rectangle covered by a cell
    pub fn cell_rect(&self, id: CellId) -> Rect {
        Rect::new(
            self.container.x + id.col as f32 * self.cell_size.x,
            self.container.y + id.row as f32 * self.cell_size.y,
            self.cell_size.x,
            self.cell_size.y,
        )
    }
}

fn cell_size_for(container: Rect, resolution: Resolution) -> Vec2 {
    let side = resolution.side() as f32;
    Vec2::new(container.w / side, container.h / side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::DEFAULT_PIXEL_COLOR;

    fn canvas(side: u32) -> Canvas {
        Canvas::new(Rect::new(100.0, 50.0, 400.0, 400.0), Resolution::new(side), DEFAULT_PIXEL_COLOR)
    }

    #[test]
    fn build_lays_out_default_cells() {
        let c = canvas(16);
        assert_eq!(c.grid().len(), 256);
        assert!(c.grid().iter().all(|cell| cell.color == DEFAULT_PIXEL_COLOR));
        assert_eq!(c.cell_size(), Vec2::new(25.0, 25.0));
    }

    #[test]
    fn rebuild_discards_painted_cells() {
        let mut c = canvas(4);
        if let Some(cell) = c.cell_mut(CellId::new(1, 1)) {
            cell.color = Rgb::new(0, 0, 0);
        }
        c.rebuild(Resolution::new(8));
        assert_eq!(c.grid().len(), 64);
        assert!(c.grid().iter().all(|cell| cell.color == DEFAULT_PIXEL_COLOR));
        assert_eq!(c.cell_size(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn hit_test_maps_points_to_cells() {
        let c = canvas(4);
        assert_eq!(c.cell_at(Vec2::new(100.0, 50.0)), Some(CellId::new(0, 0)));
        assert_eq!(c.cell_at(Vec2::new(210.0, 360.0)), Some(CellId::new(3, 1)));
        assert_eq!(c.cell_at(Vec2::new(499.5, 449.5)), Some(CellId::new(3, 3)));
        assert_eq!(c.cell_at(Vec2::new(99.0, 60.0)), None);
        assert_eq!(c.cell_at(Vec2::new(150.0, 451.0)), None);
    }

    #[test]
    fn cell_rect_matches_hit_test() {
        let c = canvas(5);
        let id = CellId::new(2, 4);
        let rect = c.cell_rect(id);
        assert_eq!(c.cell_at(rect.center()), Some(id));
    }

    #[test]
    fn resize_keeps_colors() {
        let mut c = canvas(2);
        if let Some(cell) = c.cell_mut(CellId::new(0, 1)) {
            cell.color = Rgb::new(1, 2, 3);
        }
        c.set_container(Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(c.cell_size(), Vec2::new(100.0, 50.0));
        assert_eq!(c.grid().get(CellId::new(0, 1)).map(|cell| cell.color), Some(Rgb::new(1, 2, 3)));
    }
}
