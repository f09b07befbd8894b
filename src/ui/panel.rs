use macroquad::prelude::*;

use super::layout::PanelLayout;
use super::picker;
use crate::core::*;
use crate::input::PointerSample;
use crate::state::{UiEvent, UiState};

const HIGHLIGHT: Color = Color::new(0.98, 0.75, 0.18, 1.0);

/// Left-hand control panel: brush modes, color picker, resolution slider
pub struct Panel {
    layout: PanelLayout,
    dragging_slider: bool,
}

impl Panel {
    pub fn new(screen_height: f32) -> Self {
        Panel {
            layout: PanelLayout::new(screen_height),
            dragging_slider: false,
        }
    }

    pub fn resize(&mut self, screen_height: f32) {
        if self.layout.panel.h != screen_height {
            self.layout = PanelLayout::new(screen_height);
        }
    }

    /// Is a point over the panel or the open picker window
    pub fn covers(&self, point: Vec2, state: &UiState) -> bool {
        self.layout.panel.contains(point) || (state.picker_open && self.layout.picker_window.contains(point))
    }

    pub fn handle(&mut self, sample: &PointerSample, state: &UiState) -> Vec<UiEvent> {
        let mut events = Vec::new();
        let layout = &self.layout;
        let pos = sample.position;

        if sample.pressed {
            // clicking anywhere but the picker closes it
            if state.picker_open && !layout.picker_window.contains(pos) && !layout.picker_button.contains(pos) {
                events.push(UiEvent::ColorCommit);
            }

            if let Some((mode, _)) = layout.mode_buttons.iter().find(|(_, rect)| rect.contains(pos)) {
                events.push(UiEvent::SelectMode(*mode));
            } else if layout.picker_button.contains(pos) {
                events.push(if state.picker_open { UiEvent::ColorCommit } else { UiEvent::OpenPicker });
            } else if state.picker_open && layout.picker_window.contains(pos) {
                if let Some(color) = layout.swatch_at(pos) {
                    events.push(UiEvent::ColorInput(color));
                }
            } else if layout.slider_track.contains(pos) {
                self.dragging_slider = true;
                events.push(UiEvent::SliderInput(layout.slider_value_at(pos.x).to_string()));
            } else if layout.reload_button.contains(pos) {
                events.push(UiEvent::Reload);
            }
        } else if sample.down && self.dragging_slider {
            let value = layout.slider_value_at(pos.x).to_string();
            if value != state.slider_value {
                events.push(UiEvent::SliderInput(value));
            }
        }

        if sample.released && self.dragging_slider {
            self.dragging_slider = false;
            events.push(UiEvent::SliderCommit);
        }

        events
    }

    pub fn draw(&self, state: &UiState) {
        let layout = &self.layout;
        let panel = layout.panel;

        draw_rectangle(panel.x, panel.y, panel.w, panel.h, Color::from_rgba(235, 235, 240, 255));
        draw_line(panel.right(), panel.y, panel.right(), panel.bottom(), 2.0, GRAY);
        draw_text("Brush", PANEL_PADDING, PANEL_PADDING + 14.0, 20.0, BLACK);

        for (mode, rect) in &layout.mode_buttons {
            let fill = match mode {
                BrushMode::Colorize => state.preview_color,
                _ => Rgb::new(200, 200, 200),
            };
            draw_button(mode.label(), *rect, fill, state.is_highlighted(*mode));
        }

        let picker_label = if state.picker_open { "Done" } else { "Pick color" };
        draw_button(picker_label, layout.picker_button, Rgb::new(200, 200, 200), state.picker_open);

        self.draw_slider(state);
        draw_button("Reload", layout.reload_button, Rgb::new(200, 200, 200), false);

        if state.picker_open {
            picker::draw_picker(layout, state);
        }
    }

    fn draw_slider(&self, state: &UiState) {
        let layout = &self.layout;
        let track = layout.slider_track;
        let mid_y = track.y + track.h / 2.0;

        draw_line(track.left(), mid_y, track.right(), mid_y, 4.0, DARKGRAY);

        // the text might not be numeric if the slider was never touched
        let value = Resolution::from_input(&state.slider_value).side();
        let handle_x = layout.slider_handle_x(value);
        draw_line(track.left(), mid_y, handle_x, mid_y, 4.0, Color::from_rgba(76, 171, 230, 255));
        draw_circle(handle_x, mid_y, track.h / 2.0, WHITE);
        draw_circle_lines(handle_x, mid_y, track.h / 2.0, 2.0, DARKGRAY);

        draw_text(&state.readout(), layout.readout.x, layout.readout.y, 20.0, BLACK);
    }
}

pub fn draw_button(text: &str, rect: Rect, fill: Rgb, is_active: bool) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill.to_mq_color());
    if is_active {
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 4.0, HIGHLIGHT);
    } else {
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, BLACK);
    }

    let text_color = if fill.is_light() { BLACK } else { WHITE };
    let text_size = measure_text(text, None, 20, 1.0);
    let text_x = rect.x + (rect.w - text_size.width) / 2.0;
    let text_y = rect.y + (rect.h + text_size.height) / 2.0;
    draw_text(text, text_x, text_y, 20.0, text_color);
}
