pub(crate) fn default_page_count() -> usize {
    10
}

pub(crate) fn default_image_dir() -> String {
    "img".to_string()
}

pub(crate) fn default_image_extension() -> String {
    ".jpg".to_string()
}

pub(crate) fn default_flip_duration_ms() -> u64 {
    650
}

pub(crate) fn default_curl_x() -> f32 {
    220.0
}

pub(crate) fn default_curl_y() -> f32 {
    220.0
}

pub(crate) fn default_curl_angle_deg() -> f32 {
    25.0
}

pub(crate) fn default_drag_threshold() -> f32 {
    30.0
}

pub(crate) fn default_window_width() -> f32 {
    1024.0
}

pub(crate) fn default_window_height() -> f32 {
    768.0
}

pub(crate) fn default_sound_enabled() -> bool {
    true
}

pub(crate) fn default_flip_sound_path() -> String {
    "assets/flip.wav".to_string()
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_key_next_page() -> String {
    "right".to_string()
}

pub(crate) fn default_key_prev_page() -> String {
    "left".to_string()
}
