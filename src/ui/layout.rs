use macroquad::math::{Rect, Vec2};

use crate::core::*;

const BUTTON_HEIGHT: f32 = 32.0;
const BUTTON_SPACING: f32 = 8.0;
const SECTION_SPACING: f32 = 28.0;
const SLIDER_HEIGHT: f32 = 16.0;

pub const SWATCH_SIZE: f32 = 26.0;
pub const SWATCH_GAP: f32 = 6.0;
pub const PICKER_TITLE_HEIGHT: f32 = 24.0;

/// Screen rectangles of the control panel widgets
#[derive(Clone, Debug, PartialEq)]
pub struct PanelLayout {
    pub panel: Rect,
    pub mode_buttons: [(BrushMode, Rect); 3],
    pub picker_button: Rect,
    pub slider_track: Rect,
    pub readout: Vec2,
    pub reload_button: Rect,
    pub picker_window: Rect,
}

impl PanelLayout {
    pub fn new(screen_height: f32) -> Self {
        let x = PANEL_PADDING;
        let width = PANEL_WIDTH - 2.0 * PANEL_PADDING;
        let mut y = PANEL_PADDING + 24.0;

        let mut next_button = |gap: f32| {
            let rect = Rect::new(x, y, width, BUTTON_HEIGHT);
            y += BUTTON_HEIGHT + gap;
            rect
        };

        let mode_buttons = BrushMode::ALL.map(|mode| {
            let gap = if mode == BrushMode::Darken { SECTION_SPACING } else { BUTTON_SPACING };
            (mode, next_button(gap))
        });
        let picker_button = next_button(SECTION_SPACING);

        let slider_track = Rect::new(x, y, width, SLIDER_HEIGHT);
        y += SLIDER_HEIGHT + 24.0;
        let readout = Vec2::new(x, y);
        y += SECTION_SPACING - 8.0;
        let reload_button = Rect::new(x, y, width, BUTTON_HEIGHT);

        let picker_width = PICKER_COLS as f32 * (SWATCH_SIZE + SWATCH_GAP) + SWATCH_GAP;
        let picker_height =
            PICKER_TITLE_HEIGHT + PICKER_ROWS as f32 * (SWATCH_SIZE + SWATCH_GAP) + SWATCH_GAP;
        let picker_window = Rect::new(PANEL_WIDTH + 8.0, picker_button.y, picker_width, picker_height);

        PanelLayout {
            panel: Rect::new(0.0, 0.0, PANEL_WIDTH, screen_height),
            mode_buttons,
            picker_button,
            slider_track,
            readout,
            reload_button,
            picker_window,
        }
    }

    /// Slider value for a pointer x, clamped to the track
    pub fn slider_value_at(&self, x: f32) -> u32 {
        let track = self.slider_track;
        let t = ((x - track.x) / track.w).clamp(0.0, 1.0);
        let span = (MAX_RESOLUTION - MIN_RESOLUTION) as f32;
        MIN_RESOLUTION + (t * span).round() as u32
    }

    pub fn slider_handle_x(&self, value: u32) -> f32 {
        let track = self.slider_track;
        let value = value.clamp(MIN_RESOLUTION, MAX_RESOLUTION);
        let t = (value - MIN_RESOLUTION) as f32 / (MAX_RESOLUTION - MIN_RESOLUTION) as f32;
        track.x + t * track.w
    }

    /// Swatch under a point inside the picker window
    pub fn swatch_at(&self, point: Vec2) -> Option<Rgb> {
        (0..PICKER_ROWS)
            .flat_map(|row| (0..PICKER_COLS).map(move |col| (row, col)))
            .find(|&(row, col)| self.swatch_rect(row, col).contains(point))
            .map(|(row, col)| PICKER_SWATCHES[row][col])
    }

    pub fn swatch_rect(&self, row: usize, col: usize) -> Rect {
        let origin = self.picker_window.point();
        Rect::new(
            origin.x + SWATCH_GAP + col as f32 * (SWATCH_SIZE + SWATCH_GAP),
            origin.y + PICKER_TITLE_HEIGHT + SWATCH_GAP + row as f32 * (SWATCH_SIZE + SWATCH_GAP),
            SWATCH_SIZE,
            SWATCH_SIZE,
        )
    }
}

/// Largest square that fits right of the panel, centered vertically
pub fn canvas_container(screen_width: f32, screen_height: f32) -> Rect {
    let avail_w = (screen_width - PANEL_WIDTH - 2.0 * CANVAS_MARGIN).max(1.0);
    let avail_h = (screen_height - 2.0 * CANVAS_MARGIN).max(1.0);
    let side = avail_w.min(avail_h);

    let x = PANEL_WIDTH + CANVAS_MARGIN + (avail_w - side) / 2.0;
    let y = CANVAS_MARGIN + (avail_h - side) / 2.0;
    Rect::new(x, y, side, side)
}
