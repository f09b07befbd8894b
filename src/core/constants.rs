// Layout constants for the window
pub const PANEL_WIDTH: f32 = 200.0;
pub const PANEL_PADDING: f32 = 12.0;
pub const CANVAS_MARGIN: f32 = 16.0;

pub const DEFAULT_WINDOW_WIDTH: i32 = 960;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 720;

// Grid color helper function (since Color::from_rgba is not const)
pub fn grid_color() -> macroquad::prelude::Color {
    macroquad::prelude::Color::from_rgba(210, 225, 255, 255)
}
