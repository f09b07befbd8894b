//! Application State Module
//!
//! Holds everything the controls can change: the brush, the painting
//! session, the pending slider value and the color picker. Raw input is
//! turned into [`UiEvent`]s elsewhere; [`reduce`] folds one event into the
//! state and answers with the [`Command`] (if any) that must be applied to
//! the canvas. Nothing in here touches the window, so the whole flow runs
//! in tests.

use crate::core::*;

/// Painting session
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Idle,
    /// Pointer held down since a press on a cell
    Painting,
}

/// Everything a control or pointer gesture can report
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    /// Button pressed over a cell
    PointerDown(CellId),
    /// Pointer entered a cell
    PointerOver(CellId),
    /// Button released, anywhere
    PointerUp,
    SelectMode(BrushMode),
    OpenPicker,
    /// Live picker value; previews without changing the brush
    ColorInput(Rgb),
    /// Picker closed; its value becomes the brush color
    ColorCommit,
    /// Slider moved; only the readout follows
    SliderInput(String),
    /// Slider released
    SliderCommit,
    Reload,
    ToggleGridLines,
}

/// Work the canvas has to do after an event
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Paint(CellId),
    Rebuild(Resolution),
}

#[derive(Clone, Debug)]
pub struct UiState {
    pub brush: BrushState,
    pub session: Session,
    /// Raw slider value, as the slider reports it
    pub slider_value: String,
    /// Color shown on the colorize button
    pub preview_color: Rgb,
    pub picker_open: bool,
    /// Resolution of the last rebuild
    pub resolution: Resolution,
    pub show_grid_lines: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Resolution::default(), BrushState::default())
    }
}

impl UiState {
    pub fn new(resolution: Resolution, brush: BrushState) -> Self {
        UiState {
            brush,
            session: Session::Idle,
            slider_value: resolution.side().to_string(),
            preview_color: brush.color,
            picker_open: false,
            resolution,
            show_grid_lines: false,
        }
    }

    /// Text next to the slider, e.g. `16 x 16`
    pub fn readout(&self) -> String {
        format!("{0} x {0}", self.slider_value)
    }

    pub fn is_highlighted(&self, mode: BrushMode) -> bool {
        self.brush.mode == mode
    }
}

/// Fold one event into the state
pub fn reduce(state: &mut UiState, event: UiEvent) -> Option<Command> {
    match event {
        UiEvent::PointerDown(cell) => {
            state.session = Session::Painting;
            Some(Command::Paint(cell))
        }
        UiEvent::PointerOver(cell) => match state.session {
            Session::Painting => Some(Command::Paint(cell)),
            Session::Idle => None,
        },
        UiEvent::PointerUp => {
            state.session = Session::Idle;
            None
        }
        UiEvent::SelectMode(mode) => {
            if state.brush.mode != mode {
                log::debug!("brush mode {:?} -> {:?}", state.brush.mode, mode);
            }
            state.brush.mode = mode;
            None
        }
        UiEvent::OpenPicker => {
            state.picker_open = true;
            None
        }
        UiEvent::ColorInput(color) => {
            state.preview_color = color;
            None
        }
        UiEvent::ColorCommit => {
            if state.picker_open {
                state.picker_open = false;
                state.brush.color = state.preview_color;
                log::debug!("brush color set to {}", state.brush.color.to_hex());
            }
            None
        }
        UiEvent::SliderInput(value) => {
            state.slider_value = value;
            None
        }
        UiEvent::SliderCommit | UiEvent::Reload => {
            state.resolution = Resolution::from_input(&state.slider_value);
            Some(Command::Rebuild(state.resolution))
        }
        UiEvent::ToggleGridLines => {
            state.show_grid_lines = !state.show_grid_lines;
            None
        }
    }
}
