use super::super::state::App;
use std::time::Instant;

impl App {
    pub(super) fn handle_next_page(&mut self) {
        self.book.request_next(Instant::now());
    }

    pub(super) fn handle_previous_page(&mut self) {
        self.book.request_prev(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::App;
    use super::super::Effect;
    use crate::animation::CornerGeometry;
    use crate::config::AppConfig;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    fn build_test_app() -> App {
        let config = AppConfig::default();
        let (app, _task) = App::bootstrap(config, PathBuf::from("img"));
        app
    }

    /// Drive the frame ticks of the in-flight turn to completion, returning
    /// the effects the settling frame produced.
    fn finish_turn(app: &mut App) -> Vec<Effect> {
        assert!(app.book.is_animating(), "no turn in flight");
        let past_end = Instant::now() + Duration::from_secs(2);
        let mut effects = Vec::new();
        app.handle_animation_tick(past_end, &mut effects);
        assert!(effects.is_empty(), "nothing settles before the final frame");
        app.handle_animation_tick(past_end + Duration::from_millis(16), &mut effects);
        assert!(!app.book.is_animating());
        effects
    }

    #[test]
    fn five_turns_walk_to_the_back_cover() {
        let mut app = build_test_app();
        for _ in 0..5 {
            app.reduce(Message::NextPage);
            let effects = finish_turn(&mut app);
            assert!(
                effects
                    .iter()
                    .any(|effect| matches!(effect, Effect::PlayFlipSound))
            );
        }
        assert_eq!(app.book.current(), 5);
        assert_eq!(app.book.current(), app.book.last());
        assert!(!app.book.can_go_forward());
        assert!(app.book.back_cover());
    }

    #[test]
    fn next_at_the_back_cover_changes_nothing() {
        let mut app = build_test_app();
        for _ in 0..5 {
            app.reduce(Message::NextPage);
            finish_turn(&mut app);
        }
        let effects = app.reduce(Message::NextPage);
        assert!(effects.is_empty());
        assert_eq!(app.book.current(), 5);
        assert!(!app.book.is_animating());
    }

    #[test]
    fn prev_at_the_front_cover_changes_nothing() {
        let mut app = build_test_app();
        let effects = app.reduce(Message::PreviousPage);
        assert!(effects.is_empty());
        assert_eq!(app.book.current(), 0);
        assert!(!app.book.is_animating());
    }

    #[test]
    fn next_while_animating_is_dropped() {
        let mut app = build_test_app();
        app.reduce(Message::NextPage);
        assert!(app.book.is_animating());
        app.reduce(Message::NextPage);
        app.reduce(Message::PreviousPage);
        assert_eq!(app.book.current(), 0);
        finish_turn(&mut app);
        // Only the one accepted turn committed.
        assert_eq!(app.book.current(), 1);
    }

    #[test]
    fn prev_from_the_back_cover_restores_sheet_four() {
        let mut app = build_test_app();
        for _ in 0..5 {
            app.reduce(Message::NextPage);
            finish_turn(&mut app);
        }
        let base_order = app.book.stack_order(4);

        app.reduce(Message::PreviousPage);
        assert!(app.book.stack_order(4) > base_order);
        finish_turn(&mut app);

        assert_eq!(app.book.current(), 4);
        assert_eq!(app.book.stack_order(4), base_order);
        let visible: Vec<usize> = app
            .book
            .views()
            .iter()
            .enumerate()
            .filter(|(_, view)| view.visible)
            .map(|(idx, _)| idx)
            .collect();
        assert_eq!(visible, vec![4]);
    }

    #[test]
    fn settled_turns_leave_geometry_zeroed() {
        let mut app = build_test_app();
        app.reduce(Message::NextPage);
        finish_turn(&mut app);
        app.reduce(Message::PreviousPage);
        finish_turn(&mut app);
        for view in app.book.views() {
            assert_eq!(view.left_curl, CornerGeometry::ZERO);
            assert_eq!(view.right_curl, CornerGeometry::ZERO);
        }
    }

    #[test]
    fn sound_plays_once_per_settled_turn() {
        let mut app = build_test_app();
        app.reduce(Message::NextPage);
        let effects = finish_turn(&mut app);
        assert_eq!(effects.len(), 1);
        assert!(matches!(effects[0], Effect::PlayFlipSound));
    }

    #[test]
    fn arrow_keys_map_to_turns() {
        use iced::keyboard::{Key, Modifiers, key};

        let mut app = build_test_app();
        app.reduce(Message::KeyPressed {
            key: Key::Named(key::Named::ArrowRight),
            modifiers: Modifiers::empty(),
        });
        assert!(app.book.is_animating());
        finish_turn(&mut app);
        assert_eq!(app.book.current(), 1);

        app.reduce(Message::KeyPressed {
            key: Key::Named(key::Named::ArrowLeft),
            modifiers: Modifiers::empty(),
        });
        assert!(app.book.is_animating());
        finish_turn(&mut app);
        assert_eq!(app.book.current(), 0);
    }
}
