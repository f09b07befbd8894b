use macroquad::prelude::*;

use crate::core::*;

/// Outline the cell under the pointer in a color that hints the brush mode
pub fn draw_cursor_based_on_mode(brush: &BrushState, canvas: &Canvas, screen_mouse: Vec2) {
    let Some(id) = canvas.cell_at(screen_mouse) else {
        return;
    };
    let rect = canvas.cell_rect(id);

    match brush.mode {
        BrushMode::Colorize => {
            draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, Color::from_rgba(0, 0, 0, 150));
            draw_circle(screen_mouse.x, screen_mouse.y, 3.0, brush.color.to_mq_color());
        }
        BrushMode::Rainbow => {
            let hue = (get_time() as f32 * 0.5).fract();
            let outline = macroquad::color::hsl_to_rgb(hue, 0.9, 0.5);
            draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, outline);
        }
        BrushMode::Darken => {
            draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, Color::from_rgba(40, 40, 40, 220));
            draw_rectangle(screen_mouse.x - 4.0, screen_mouse.y - 4.0, 8.0, 8.0, Color::from_rgba(0, 0, 0, 120));
        }
    }
}
