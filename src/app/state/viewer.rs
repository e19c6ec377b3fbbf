use super::constants::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use std::time::Instant;

/// Zoom, sound and pointer sub-model.
pub(in crate::app) struct ViewerState {
    pub(in crate::app) zoom: f32,
    pub(in crate::app) sound_enabled: bool,
    /// Last known cursor position; pressed/released mouse events carry no
    /// coordinates of their own.
    pub(in crate::app) cursor_x: f32,
    pub(in crate::app) drag_start_x: Option<f32>,
    /// Previous left press, for double-activation detection.
    pub(in crate::app) last_press: Option<(Instant, f32)>,
}

impl ViewerState {
    pub(in crate::app) fn new(sound_enabled: bool) -> Self {
        ViewerState {
            zoom: 1.0,
            sound_enabled,
            cursor_x: 0.0,
            drag_start_x: None,
            last_press: None,
        }
    }

    pub(in crate::app) fn set_zoom_clamped(&mut self, zoom: f32) {
        self.zoom = if zoom.is_finite() {
            zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        } else {
            1.0
        };
    }
}

/// Zoom value after one double-activation: step up until the cap, then
/// reset to 1.
pub(in crate::app) fn next_zoom(current: f32) -> f32 {
    if current < MAX_ZOOM {
        (current + ZOOM_STEP).min(MAX_ZOOM)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_up_in_steps_then_resets() {
        let mut zoom = 1.0f32;
        zoom = next_zoom(zoom);
        assert!((zoom - 1.2).abs() < 1e-6);
        zoom = next_zoom(zoom);
        assert!((zoom - 1.4).abs() < 1e-6);
        zoom = next_zoom(zoom);
        assert_eq!(zoom, 1.0);
    }

    #[test]
    fn clamps_to_the_cap_before_resetting() {
        let near_cap = next_zoom(1.3);
        assert!((near_cap - MAX_ZOOM).abs() < 1e-6);
        assert_eq!(next_zoom(near_cap), 1.0);
    }

    #[test]
    fn set_zoom_rejects_non_finite_values() {
        let mut viewer = ViewerState::new(true);
        viewer.set_zoom_clamped(f32::NAN);
        assert_eq!(viewer.zoom, 1.0);
        viewer.set_zoom_clamped(9.0);
        assert_eq!(viewer.zoom, MAX_ZOOM);
        viewer.set_zoom_clamped(0.1);
        assert_eq!(viewer.zoom, MIN_ZOOM);
    }
}
