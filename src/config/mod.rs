//! Configuration loading for the flipbook viewer.
//!
//! All tunables are centralized here and loaded from `conf/config.toml` if
//! present. Any missing or invalid entries fall back to sensible defaults
//! so the viewer can still launch.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{load_config, parse_config};
pub use models::{AppConfig, LogLevel};
