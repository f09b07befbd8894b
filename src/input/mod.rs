pub mod dispatcher;
pub mod pointer;

pub use dispatcher::{hotkey_events, Dispatcher};
pub use pointer::{PointerSample, PointerTracker};
