pub mod brush;
pub mod canvas;
pub mod cell;
pub mod color;
pub mod constants;
pub mod grid;
pub mod resolution;

pub use brush::*;
pub use canvas::*;
pub use cell::*;
pub use color::*;
pub use constants::*;
pub use resolution::*;
