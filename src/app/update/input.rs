//! Pointer gestures: horizontal drag to turn, double-activation to zoom.
//!
//! Mouse button events carry no coordinates, so the last cursor position is
//! tracked separately and read back when a press or release arrives.

use super::super::state::{App, DOUBLE_CLICK_SLOP_PX, DOUBLE_CLICK_WINDOW};
use std::time::Instant;
use tracing::debug;

impl App {
    pub(super) fn handle_cursor_moved(&mut self, x: f32) {
        self.viewer.cursor_x = x;
    }

    pub(super) fn handle_pointer_pressed(&mut self) {
        let now = Instant::now();
        let x = self.viewer.cursor_x;
        let double_click = self.viewer.last_press.take().is_some_and(|(at, press_x)| {
            now.saturating_duration_since(at) <= DOUBLE_CLICK_WINDOW
                && (x - press_x).abs() <= DOUBLE_CLICK_SLOP_PX
        });
        if double_click {
            self.handle_cycle_zoom();
        } else {
            self.viewer.last_press = Some((now, x));
        }
        self.viewer.drag_start_x = Some(x);
    }

    pub(super) fn handle_pointer_released(&mut self) {
        let Some(start_x) = self.viewer.drag_start_x.take() else {
            return;
        };
        let dx = self.viewer.cursor_x - start_x;
        if dx < -self.config.drag_threshold {
            debug!(dx, "Drag left; turning forward");
            self.handle_next_page();
        } else if dx > self.config.drag_threshold {
            debug!(dx, "Drag right; turning backward");
            self.handle_previous_page();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::App;
    use crate::config::AppConfig;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    fn build_test_app() -> App {
        let (app, _task) = App::bootstrap(AppConfig::default(), PathBuf::from("img"));
        app
    }

    fn drag(app: &mut App, from: f32, to: f32) {
        app.reduce(Message::CursorMoved { x: from });
        app.reduce(Message::PointerPressed);
        app.reduce(Message::CursorMoved { x: to });
        app.reduce(Message::PointerReleased);
    }

    #[test]
    fn left_drag_past_the_threshold_turns_forward() {
        let mut app = build_test_app();
        drag(&mut app, 300.0, 240.0);
        assert!(app.book.is_animating());
    }

    #[test]
    fn right_drag_past_the_threshold_turns_backward() {
        let mut app = build_test_app();
        // On the front cover a backward turn is a no-op; the gesture maps,
        // the guard drops it.
        drag(&mut app, 240.0, 300.0);
        assert!(!app.book.is_animating());
        assert_eq!(app.book.current(), 0);
    }

    #[test]
    fn short_drag_is_ignored() {
        let mut app = build_test_app();
        drag(&mut app, 300.0, 280.0);
        assert!(!app.book.is_animating());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut app = build_test_app();
        app.reduce(Message::CursorMoved { x: 500.0 });
        app.reduce(Message::PointerReleased);
        assert!(!app.book.is_animating());
    }

    #[test]
    fn quick_second_press_cycles_zoom() {
        let mut app = build_test_app();
        app.reduce(Message::CursorMoved { x: 100.0 });
        app.reduce(Message::PointerPressed);
        app.reduce(Message::PointerReleased);
        app.reduce(Message::PointerPressed);
        app.reduce(Message::PointerReleased);
        assert!((app.viewer.zoom - 1.2).abs() < 1e-6);
    }

    #[test]
    fn slow_second_press_does_not_cycle_zoom() {
        let mut app = build_test_app();
        app.reduce(Message::CursorMoved { x: 100.0 });
        app.reduce(Message::PointerPressed);
        app.reduce(Message::PointerReleased);
        // Age the stored press past the double-click window.
        app.viewer.last_press = Some((
            Instant::now() - Duration::from_millis(600),
            100.0,
        ));
        app.reduce(Message::PointerPressed);
        app.reduce(Message::PointerReleased);
        assert_eq!(app.viewer.zoom, 1.0);
    }

    #[test]
    fn distant_second_press_does_not_cycle_zoom() {
        let mut app = build_test_app();
        app.reduce(Message::CursorMoved { x: 100.0 });
        app.reduce(Message::PointerPressed);
        app.reduce(Message::PointerReleased);
        app.reduce(Message::CursorMoved { x: 180.0 });
        app.reduce(Message::PointerPressed);
        app.reduce(Message::PointerReleased);
        assert_eq!(app.viewer.zoom, 1.0);
    }
}
