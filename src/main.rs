mod app;
mod config;
mod core;
mod input;
mod logging;
mod rendering;
mod state;
mod ui;

use anyhow::Context;
use clap::Parser;
use macroquad::window::Conf;
use macroquad::Window;

use crate::config::{Args, Settings};
use crate::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = Settings::load(&args).context("could not load settings")?;

    init_logging(settings.log_filter.as_deref());
    log::info!(
        "starting: {} grid, brush {}, pixels {}",
        settings.resolution,
        settings.brush_color.to_hex(),
        settings.pixel_color.to_hex()
    );

    let conf = Conf {
        window_title: "sketch-grid".to_owned(),
        window_width: settings.window_width,
        window_height: settings.window_height,
        ..Default::default()
    };

    Window::from_config(conf, app::run(settings));
    Ok(())
}
