use crate::animation::PeelStyle;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default = "crate::config::defaults::default_page_count")]
    pub page_count: usize,
    #[serde(default = "crate::config::defaults::default_image_dir")]
    pub image_dir: String,
    #[serde(default = "crate::config::defaults::default_image_extension")]
    pub image_extension: String,
    #[serde(default = "crate::config::defaults::default_flip_duration_ms")]
    pub flip_duration_ms: u64,
    #[serde(default = "crate::config::defaults::default_curl_x")]
    pub curl_x: f32,
    #[serde(default = "crate::config::defaults::default_curl_y")]
    pub curl_y: f32,
    #[serde(default = "crate::config::defaults::default_curl_angle_deg")]
    pub curl_angle_deg: f32,
    #[serde(default = "crate::config::defaults::default_drag_threshold")]
    pub drag_threshold: f32,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "crate::config::defaults::default_sound_enabled")]
    pub sound_enabled: bool,
    #[serde(default = "crate::config::defaults::default_flip_sound_path")]
    pub flip_sound_path: String,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_key_next_page")]
    pub key_next_page: String,
    #[serde(default = "crate::config::defaults::default_key_prev_page")]
    pub key_prev_page: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            page_count: crate::config::defaults::default_page_count(),
            image_dir: crate::config::defaults::default_image_dir(),
            image_extension: crate::config::defaults::default_image_extension(),
            flip_duration_ms: crate::config::defaults::default_flip_duration_ms(),
            curl_x: crate::config::defaults::default_curl_x(),
            curl_y: crate::config::defaults::default_curl_y(),
            curl_angle_deg: crate::config::defaults::default_curl_angle_deg(),
            drag_threshold: crate::config::defaults::default_drag_threshold(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            sound_enabled: crate::config::defaults::default_sound_enabled(),
            flip_sound_path: crate::config::defaults::default_flip_sound_path(),
            log_level: crate::config::defaults::default_log_level(),
            key_next_page: crate::config::defaults::default_key_next_page(),
            key_prev_page: crate::config::defaults::default_key_prev_page(),
        }
    }
}

impl AppConfig {
    /// Animation constants bundled for the peel animator.
    pub fn peel_style(&self) -> PeelStyle {
        PeelStyle {
            duration: Duration::from_millis(self.flip_duration_ms),
            curl_x: self.curl_x,
            curl_y: self.curl_y,
            curl_angle_deg: self.curl_angle_deg,
        }
    }

    /// Bring every field back into its supported range.
    ///
    /// The sheet planner requires an even page count of at least 2; an odd
    /// configured count is rounded up rather than rejected.
    pub fn normalize(&mut self) {
        if self.page_count < 2 {
            warn!(page_count = self.page_count, "Page count too small; using 2");
            self.page_count = 2;
        }
        if self.page_count % 2 != 0 {
            warn!(
                page_count = self.page_count,
                "Odd page count; rounding up to even"
            );
            self.page_count += 1;
        }
        self.curl_x = self.curl_x.max(0.0);
        self.curl_y = self.curl_y.max(0.0);
        self.curl_angle_deg = self.curl_angle_deg.max(0.0);
        self.drag_threshold = self.drag_threshold.max(1.0);
        self.window_width = self.window_width.max(320.0);
        self.window_height = self.window_height.max(240.0);
    }
}

/// Log verbosity, mapped onto a tracing filter.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl LogLevel {
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}
