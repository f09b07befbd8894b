use macroquad::prelude::*;

use crate::core::PANEL_PADDING;
use crate::state::UiState;

const HUD_FONT_SIZE: f32 = 18.0;
const HUD_LINE_HEIGHT: f32 = 20.0;

/// Status lines drawn under the panel controls
pub fn status_lines(state: &UiState) -> [String; 2] {
    [
        format!("Grid: {}", state.resolution),
        format!("Brush: {} {}", state.brush.mode.label(), state.brush.color.to_hex()),
    ]
}

pub fn draw_status(state: &UiState) {
    let bottom = screen_height() - PANEL_PADDING;
    let lines = status_lines(state);
    let top = bottom - HUD_LINE_HEIGHT * (lines.len() - 1) as f32;

    for (i, line) in lines.iter().enumerate() {
        draw_text(line, PANEL_PADDING, top + HUD_LINE_HEIGHT * i as f32, HUD_FONT_SIZE, DARKGRAY);
    }
}
