pub mod layout;
pub mod panel;
pub mod picker;

pub use layout::canvas_container;
pub use panel::Panel;
