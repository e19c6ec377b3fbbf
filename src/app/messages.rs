use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Messages emitted by the UI and the runtime event stream.
#[derive(Debug, Clone)]
pub enum Message {
    NextPage,
    PreviousPage,
    /// One animation-frame tick while a page turn is in flight.
    AnimationTick(Instant),
    ZoomChanged(f32),
    /// Double-activation: step the zoom, wrapping at the cap.
    CycleZoom,
    SoundToggled(bool),
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    CursorMoved {
        x: f32,
    },
    PointerPressed,
    PointerReleased,
}
