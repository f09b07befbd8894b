use macroquad::prelude::*;

use crate::config::Settings;
use crate::core::*;
use crate::input::{hotkey_events, Dispatcher, PointerSample, PointerTracker};
use crate::rendering::{draw_cursor_based_on_mode, draw_status, CanvasRenderer};
use crate::state::UiState;
use crate::ui::{canvas_container, Panel};

pub async fn run(settings: Settings) {
    if let Some(seed) = settings.seed {
        macroquad::rand::srand(seed);
    } else {
        macroquad::rand::srand((macroquad::miniquad::date::now() * 1000.0) as u64);
    }

    let container = canvas_container(screen_width(), screen_height());
    let canvas = Canvas::new(container, settings.resolution, settings.pixel_color);
    let state = UiState::new(settings.resolution, settings.brush());

    let mut dispatcher = Dispatcher::new(state, canvas, QuadRand);
    let mut panel = Panel::new(screen_height());
    let mut tracker = PointerTracker::new();
    let renderer = CanvasRenderer::new();

    loop {
        panel.resize(screen_height());
        dispatcher
            .canvas
            .set_container(canvas_container(screen_width(), screen_height()));

        // Controls first so a picker commit lands before a paint in the same frame
        let sample = PointerSample::capture(|point| panel.covers(point, &dispatcher.state));
        let mut events = panel.handle(&sample, &dispatcher.state);
        events.extend(tracker.track(&sample, &dispatcher.canvas));
        events.extend(hotkey_events(&dispatcher.state));
        dispatcher.dispatch_all(events);

        clear_background(Color::from_rgba(250, 250, 250, 255));
        renderer.draw(&dispatcher.canvas, dispatcher.state.show_grid_lines);
        if !sample.over_ui {
            draw_cursor_based_on_mode(&dispatcher.state.brush, &dispatcher.canvas, sample.position);
        }
        panel.draw(&dispatcher.state);
        draw_status(&dispatcher.state);

        next_frame().await
    }
}
