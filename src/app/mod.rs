mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use iced::{Size, window};
use std::path::PathBuf;

/// Helper to launch the viewer on the provided image directory.
pub fn run_app(config: AppConfig, image_dir: PathBuf) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("Flipbook Viewer", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .run_with(move || App::bootstrap(config, image_dir))
}
