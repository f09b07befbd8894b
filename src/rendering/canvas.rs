use macroquad::prelude::*;

use crate::core::*;

/// Draws the canvas cells, optional grid lines and the container frame
pub struct CanvasRenderer;

impl CanvasRenderer {
    pub fn new() -> Self {
        CanvasRenderer
    }

    pub fn draw(&self, canvas: &Canvas, show_grid_lines: bool) {
        // Cells are drawn edge to edge so a 100 x 100 grid shows no seams
        for cell in canvas.grid().iter() {
            let rect = canvas.cell_rect(cell.id);
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, cell.color.to_mq_color());
        }

        if show_grid_lines {
            self.draw_grid_lines(canvas);
        }

        let frame = canvas.container();
        draw_rectangle_lines(frame.x, frame.y, frame.w, frame.h, 2.0, DARKGRAY);
    }

    fn draw_grid_lines(&self, canvas: &Canvas) {
        let frame = canvas.container();
        let step = canvas.cell_size();
        let side = canvas.resolution().side();
        let color = grid_color();

        for i in 1..side {
            let x = frame.x + i as f32 * step.x;
            draw_line(x, frame.top(), x, frame.bottom(), 1.0, color);

            let y = frame.y + i as f32 * step.y;
            draw_line(frame.left(), y, frame.right(), y, 1.0, color);
        }
    }
}
