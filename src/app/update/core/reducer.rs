use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;

impl App {
    pub(in crate::app::update) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::NextPage => self.handle_next_page(),
            Message::PreviousPage => self.handle_previous_page(),
            Message::AnimationTick(now) => self.handle_animation_tick(now, &mut effects),
            Message::ZoomChanged(zoom) => self.handle_zoom_changed(zoom),
            Message::CycleZoom => self.handle_cycle_zoom(),
            Message::SoundToggled(enabled) => self.handle_sound_toggled(enabled),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::CursorMoved { x } => self.handle_cursor_moved(x),
            Message::PointerPressed => self.handle_pointer_pressed(),
            Message::PointerReleased => self.handle_pointer_released(),
        }

        effects
    }
}
