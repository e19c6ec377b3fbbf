use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load configuration from `path`, falling back to defaults if the file is
/// missing or malformed.
pub fn load_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(raw) => match parse_config(&raw) {
            Ok(config) => {
                info!(path = %path.display(), "Loaded configuration");
                config
            }
            Err(err) => {
                warn!(path = %path.display(), "Invalid configuration, using defaults: {err}");
                default_normalized()
            }
        },
        Err(_) => {
            info!(path = %path.display(), "No configuration file, using defaults");
            default_normalized()
        }
    }
}

/// Parse a TOML configuration document into a normalized `AppConfig`.
pub fn parse_config(raw: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(raw).context("Parsing configuration TOML")?;
    let mut config = AppConfig::from(tables);
    config.normalize();
    Ok(config)
}

fn default_normalized() -> AppConfig {
    let mut config = AppConfig::default();
    config.normalize();
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse_config("").expect("empty config");
        assert_eq!(config.page_count, 10);
        assert_eq!(config.flip_duration_ms, 650);
        assert_eq!(config.curl_x, 220.0);
        assert_eq!(config.drag_threshold, 30.0);
        assert!(config.sound_enabled);
    }

    #[test]
    fn tables_map_onto_the_flat_config() {
        let raw = r#"
            [book]
            page_count = 24
            image_dir = "scans"
            image_extension = ".png"

            [animation]
            flip_duration_ms = 400
            curl_angle_deg = 30.0

            [input]
            drag_threshold = 50.0
            key_next_page = "n"

            [audio]
            sound_enabled = false

            [logging]
            log_level = "trace"
        "#;
        let config = parse_config(raw).expect("full config");
        assert_eq!(config.page_count, 24);
        assert_eq!(config.image_dir, "scans");
        assert_eq!(config.image_extension, ".png");
        assert_eq!(config.flip_duration_ms, 400);
        assert_eq!(config.curl_angle_deg, 30.0);
        assert_eq!(config.drag_threshold, 50.0);
        assert_eq!(config.key_next_page, "n");
        assert!(!config.sound_enabled);
        assert_eq!(config.log_level.as_filter_str(), "trace");
        // Untouched sections keep their defaults.
        assert_eq!(config.curl_x, 220.0);
        assert_eq!(config.key_prev_page, "left");
    }

    #[test]
    fn odd_page_count_is_rounded_up() {
        let config = parse_config("[book]\npage_count = 7\n").expect("odd config");
        assert_eq!(config.page_count, 8);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(parse_config("[book\npage_count = ").is_err());
    }
}
