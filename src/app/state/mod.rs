mod book;
mod constants;
mod viewer;

use crate::assets;
use crate::audio::FlipSound;
use crate::config::AppConfig;
use crate::layout::plan_sheets;
use iced::Task;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::messages::Message;

pub(in crate::app) use book::{BookState, FrameOutcome};
pub(crate) use constants::*;
pub(in crate::app) use viewer::{ViewerState, next_zoom};

/// Core application state composed of sub-models.
pub struct App {
    pub(super) book: BookState,
    pub(super) viewer: ViewerState,
    pub(super) config: AppConfig,
    pub(super) image_dir: PathBuf,
    pub(super) flip_sound: Option<FlipSound>,
}

impl App {
    /// Build the initial state: plan the sheets, open the flip sound if the
    /// environment allows it, show the front cover.
    pub fn bootstrap(config: AppConfig, image_dir: PathBuf) -> (App, Task<Message>) {
        let sheets = plan_sheets(config.page_count);
        info!(
            pages = config.page_count,
            sheets = sheets.len(),
            image_dir = %image_dir.display(),
            "Book ready"
        );
        let book = BookState::new(sheets, config.peel_style());
        let flip_sound = match FlipSound::open(Path::new(&config.flip_sound_path)) {
            Ok(sound) => Some(sound),
            Err(err) => {
                // Missing file or no audio device; turning pages must keep
                // working either way.
                warn!("Flip sound unavailable: {err:#}");
                None
            }
        };
        let viewer = ViewerState::new(config.sound_enabled);
        (
            App {
                book,
                viewer,
                config,
                image_dir,
                flip_sound,
            },
            Task::none(),
        )
    }

    pub(super) fn page_image(&self, page: usize) -> PathBuf {
        assets::page_image_path(&self.image_dir, page, &self.config.image_extension)
    }
}
