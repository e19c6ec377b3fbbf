use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::mouse;
use iced::window;

impl App {
    pub(in crate::app::update) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::PlayFlipSound => {
                // Best-effort: playback problems never reach the state
                // machine.
                if self.viewer.sound_enabled {
                    if let Some(sound) = &self.flip_sound {
                        sound.play();
                    }
                }
                Task::none()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved { x: position.x })
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::PointerPressed)
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        _ => None,
    }
}
