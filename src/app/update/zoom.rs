use super::super::state::{App, next_zoom};
use tracing::{debug, info};

impl App {
    pub(super) fn handle_zoom_changed(&mut self, zoom: f32) {
        self.viewer.set_zoom_clamped(zoom);
        debug!(zoom = self.viewer.zoom, "Zoom changed");
    }

    pub(super) fn handle_cycle_zoom(&mut self) {
        self.viewer.zoom = next_zoom(self.viewer.zoom);
        info!(zoom = self.viewer.zoom, "Zoom cycled");
    }

    pub(super) fn handle_sound_toggled(&mut self, enabled: bool) {
        self.viewer.sound_enabled = enabled;
        info!(enabled, "Flip sound toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::{App, MAX_ZOOM};
    use crate::config::AppConfig;
    use std::path::PathBuf;

    fn build_test_app() -> App {
        let (app, _task) = App::bootstrap(AppConfig::default(), PathBuf::from("img"));
        app
    }

    #[test]
    fn cycle_steps_until_the_cap_then_resets() {
        let mut app = build_test_app();
        app.reduce(Message::CycleZoom);
        assert!((app.viewer.zoom - 1.2).abs() < 1e-6);
        app.reduce(Message::CycleZoom);
        assert!((app.viewer.zoom - MAX_ZOOM).abs() < 1e-6);
        app.reduce(Message::CycleZoom);
        assert_eq!(app.viewer.zoom, 1.0);
    }

    #[test]
    fn slider_value_is_clamped() {
        let mut app = build_test_app();
        app.reduce(Message::ZoomChanged(3.0));
        assert_eq!(app.viewer.zoom, MAX_ZOOM);
    }

    #[test]
    fn sound_toggle_is_recorded() {
        let mut app = build_test_app();
        app.reduce(Message::SoundToggled(false));
        assert!(!app.viewer.sound_enabled);
    }
}
