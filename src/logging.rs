//! Logger setup.
//!
//! Everything logs through the `log` facade. `env_logger` is installed once
//! from `main`, reading `SKETCH_GRID_LOG` (or `RUST_LOG`) unless the settings
//! carry their own filter.

use env_logger::{Builder, Env};

pub const LOG_ENV: &str = "SKETCH_GRID_LOG";
const DEFAULT_FILTER: &str = "info";

/// Builder for the app logger. An explicit `filter` (env_logger syntax, e.g.
/// "sketch_grid=debug") wins over the environment.
pub fn logger_builder(filter: Option<&str>) -> Builder {
    let env = Env::new()
        .filter_or(LOG_ENV, std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_owned()));
    let mut builder = Builder::from_env(env);
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    }
    builder.format_timestamp_millis();
    builder
}

/// Install the global logger. A second call leaves the first logger in place.
pub fn init_logging(filter: Option<&str>) {
    match logger_builder(filter).try_init() {
        Ok(()) => log::debug!("logging initialized"),
        Err(err) => log::debug!("logger already set: {err}"),
    }
}
