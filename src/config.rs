use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

use crate::core::*;

#[derive(Parser, Debug, Default)]
#[command(name = "sketch-grid")]
#[command(version)]
#[command(about = "Paint a pixel grid with colorize, rainbow and darken brushes", long_about = None)]
pub struct Args {
    /// Initial grid side length (1-100, invalid values fall back to 16)
    #[arg(short, long, allow_hyphen_values = true)]
    pub resolution: Option<String>,

    /// Brush color as #RRGGBB
    #[arg(short, long)]
    pub brush_color: Option<String>,

    /// Color of untouched cells as #RRGGBB
    #[arg(short, long)]
    pub pixel_color: Option<String>,

    /// Amount the darken brush removes from each channel
    #[arg(long)]
    pub darken_step: Option<u8>,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Seed for the rainbow brush
    #[arg(long)]
    pub seed: Option<u64>,

    /// YAML settings file; command line flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log filter in env_logger syntax, e.g. "debug" or "sketch_grid=trace"
    #[arg(long)]
    pub log: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("window {field} {value} is too large")]
    WindowSize { field: &'static str, value: u32 },
    #[error("invalid {field}")]
    Color {
        field: &'static str,
        #[source]
        source: ColorParseError,
    },
}

/// Settings file contents. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct FileSettings {
    resolution: Option<serde_yaml::Value>,
    brush_color: Option<String>,
    pixel_color: Option<String>,
    darken_step: Option<u8>,
    width: Option<u32>,
    height: Option<u32>,
    seed: Option<u64>,
    log: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub resolution: Resolution,
    pub brush_color: Rgb,
    pub pixel_color: Rgb,
    pub darken_step: u8,
    pub window_width: i32,
    pub window_height: i32,
    pub seed: Option<u64>,
    pub log_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            resolution: Resolution::default(),
            brush_color: DEFAULT_BRUSH_COLOR,
            pixel_color: DEFAULT_PIXEL_COLOR,
            darken_step: DEFAULT_DARKEN_STEP,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            seed: None,
            log_filter: None,
        }
    }
}

impl Settings {
    /// Defaults, then the settings file named by `--config`, then flags
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => read_file(path)?,
            None => FileSettings::default(),
        };
        Self::merge(file, args)
    }

    fn merge(file: FileSettings, args: &Args) -> Result<Self, ConfigError> {
        let defaults = Settings::default();

        // yaml numbers and strings both go through slider validation
        let file_resolution = file.resolution.map(|value| match value {
            serde_yaml::Value::String(s) => s,
            other => serde_yaml::to_string(&other).unwrap_or_default().trim().to_string(),
        });
        let resolution = args
            .resolution
            .clone()
            .or(file_resolution)
            .map(|raw| Resolution::from_input(&raw))
            .unwrap_or(defaults.resolution);

        Ok(Settings {
            resolution,
            brush_color: color_setting("brush color", args.brush_color.as_ref().or(file.brush_color.as_ref()))?
                .unwrap_or(defaults.brush_color),
            pixel_color: color_setting("pixel color", args.pixel_color.as_ref().or(file.pixel_color.as_ref()))?
                .unwrap_or(defaults.pixel_color),
            darken_step: args.darken_step.or(file.darken_step).unwrap_or(defaults.darken_step),
            window_width: window_setting("width", args.width.or(file.width))?.unwrap_or(defaults.window_width),
            window_height: window_setting("height", args.height.or(file.height))?
                .unwrap_or(defaults.window_height),
            seed: args.seed.or(file.seed),
            log_filter: args.log.clone().or(file.log),
        })
    }

    pub fn brush(&self) -> BrushState {
        BrushState {
            mode: BrushMode::default(),
            color: self.brush_color,
            darken_step: self.darken_step,
        }
    }
}

fn read_file(path: &Path) -> Result<FileSettings, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_file(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_file(text: &str) -> Result<FileSettings, serde_yaml::Error> {
    if text.trim().is_empty() {
        return Ok(FileSettings::default());
    }
    serde_yaml::from_str(text)
}

fn color_setting(field: &'static str, value: Option<&String>) -> Result<Option<Rgb>, ConfigError> {
    value
        .map(|raw| Rgb::from_hex(raw).map_err(|source| ConfigError::Color { field, source }))
        .transpose()
}

fn window_setting(field: &'static str, value: Option<u32>) -> Result<Option<i32>, ConfigError> {
    value
        .map(|v| i32::try_from(v).map_err(|_| ConfigError::WindowSize { field, value: v }))
        .transpose()
}
