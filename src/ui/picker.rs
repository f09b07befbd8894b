use macroquad::prelude::*;

use super::layout::{PanelLayout, PICKER_TITLE_HEIGHT};
use crate::core::*;
use crate::state::UiState;

pub fn draw_picker(layout: &PanelLayout, state: &UiState) {
    let window = layout.picker_window;

    // Title bar
    draw_rectangle(window.x, window.y, window.w, PICKER_TITLE_HEIGHT, Color::from_rgba(80, 80, 150, 255));
    let title = format!("Color {}", state.preview_color.to_hex());
    let title_size = measure_text(&title, None, 16, 1.0);
    draw_text(
        &title,
        window.x + (window.w - title_size.width) / 2.0,
        window.y + (PICKER_TITLE_HEIGHT + title_size.height) / 2.0,
        16.0,
        WHITE,
    );

    // Swatch area
    let content_y = window.y + PICKER_TITLE_HEIGHT;
    let content_h = window.h - PICKER_TITLE_HEIGHT;
    draw_rectangle(window.x, content_y, window.w, content_h, Color::from_rgba(230, 230, 230, 255));
    draw_rectangle_lines(window.x, window.y, window.w, window.h, 2.0, BLACK);

    for (row, swatches) in PICKER_SWATCHES.iter().enumerate() {
        for (col, swatch) in swatches.iter().enumerate() {
            let rect = layout.swatch_rect(row, col);
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, swatch.to_mq_color());

            if *swatch == state.preview_color {
                draw_rectangle_lines(rect.x - 2.0, rect.y - 2.0, rect.w + 4.0, rect.h + 4.0, 3.0, BLACK);
            } else {
                draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, DARKGRAY);
            }
        }
    }
}
