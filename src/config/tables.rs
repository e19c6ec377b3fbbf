use super::defaults;
use super::models::{AppConfig, LogLevel};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    book: BookConfig,
    #[serde(default)]
    animation: AnimationConfig,
    #[serde(default)]
    input: InputConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    audio: AudioConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            page_count: tables.book.page_count,
            image_dir: tables.book.image_dir,
            image_extension: tables.book.image_extension,
            flip_duration_ms: tables.animation.flip_duration_ms,
            curl_x: tables.animation.curl_x,
            curl_y: tables.animation.curl_y,
            curl_angle_deg: tables.animation.curl_angle_deg,
            drag_threshold: tables.input.drag_threshold,
            key_next_page: tables.input.key_next_page,
            key_prev_page: tables.input.key_prev_page,
            window_width: tables.window.width,
            window_height: tables.window.height,
            sound_enabled: tables.audio.sound_enabled,
            flip_sound_path: tables.audio.flip_sound_path,
            log_level: tables.logging.log_level,
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub(super) struct BookConfig {
    #[serde(default = "defaults::default_page_count")]
    page_count: usize,
    #[serde(default = "defaults::default_image_dir")]
    image_dir: String,
    #[serde(default = "defaults::default_image_extension")]
    image_extension: String,
}

impl Default for BookConfig {
    fn default() -> Self {
        BookConfig {
            page_count: defaults::default_page_count(),
            image_dir: defaults::default_image_dir(),
            image_extension: defaults::default_image_extension(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub(super) struct AnimationConfig {
    #[serde(default = "defaults::default_flip_duration_ms")]
    flip_duration_ms: u64,
    #[serde(default = "defaults::default_curl_x")]
    curl_x: f32,
    #[serde(default = "defaults::default_curl_y")]
    curl_y: f32,
    #[serde(default = "defaults::default_curl_angle_deg")]
    curl_angle_deg: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            flip_duration_ms: defaults::default_flip_duration_ms(),
            curl_x: defaults::default_curl_x(),
            curl_y: defaults::default_curl_y(),
            curl_angle_deg: defaults::default_curl_angle_deg(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub(super) struct InputConfig {
    #[serde(default = "defaults::default_drag_threshold")]
    drag_threshold: f32,
    #[serde(default = "defaults::default_key_next_page")]
    key_next_page: String,
    #[serde(default = "defaults::default_key_prev_page")]
    key_prev_page: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            drag_threshold: defaults::default_drag_threshold(),
            key_next_page: defaults::default_key_next_page(),
            key_prev_page: defaults::default_key_prev_page(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub(super) struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub(super) struct AudioConfig {
    #[serde(default = "defaults::default_sound_enabled")]
    sound_enabled: bool,
    #[serde(default = "defaults::default_flip_sound_path")]
    flip_sound_path: String,
}

impl Default for AudioConfig {
    fn default() -> Self {
        AudioConfig {
            sound_enabled: defaults::default_sound_enabled(),
            flip_sound_path: defaults::default_flip_sound_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub(super) struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
