pub mod canvas;
pub mod cursor;
pub mod hud;

pub use canvas::CanvasRenderer;
pub use cursor::draw_cursor_based_on_mode;
pub use hud::draw_status;
