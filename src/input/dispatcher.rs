use macroquad::prelude::*;

use crate::core::*;
use crate::state::{reduce, Command, UiEvent, UiState};

/// Owns the UI state and the canvas and applies events to both
pub struct Dispatcher<R: ChannelSource> {
    pub state: UiState,
    pub canvas: Canvas,
    rng: R,
}

impl<R: ChannelSource> Dispatcher<R> {
    pub fn new(state: UiState, canvas: Canvas, rng: R) -> Self {
        Dispatcher { state, canvas, rng }
    }

    pub fn dispatch(&mut self, event: UiEvent) {
        if let Some(command) = reduce(&mut self.state, event) {
            self.apply(command);
        }
    }

    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = UiEvent>) {
        for event in events {
            self.dispatch(event);
        }
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Paint(id) => {
                if let Some(cell) = self.canvas.cell_mut(id) {
                    self.state.brush.paint(cell, &mut self.rng);
                }
            }
            Command::Rebuild(resolution) => self.canvas.rebuild(resolution),
        }
    }
}

/// Keyboard shortcuts for the panel controls
pub fn hotkey_events(state: &UiState) -> Vec<UiEvent> {
    let mut events = Vec::new();

    if is_key_pressed(KeyCode::C) {
        events.push(UiEvent::SelectMode(BrushMode::Colorize));
    }
    if is_key_pressed(KeyCode::R) {
        events.push(UiEvent::SelectMode(BrushMode::Rainbow));
    }
    if is_key_pressed(KeyCode::D) {
        events.push(UiEvent::SelectMode(BrushMode::Darken));
    }
    if is_key_pressed(KeyCode::G) {
        events.push(UiEvent::ToggleGridLines);
    }
    if is_key_pressed(KeyCode::F5) || is_key_pressed(KeyCode::Enter) {
        events.push(UiEvent::Reload);
    }
    if is_key_pressed(KeyCode::Escape) && state.picker_open {
        events.push(UiEvent::ColorCommit);
    }

    events
}
