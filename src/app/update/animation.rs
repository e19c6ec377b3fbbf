use super::Effect;
use super::super::state::{App, FrameOutcome};
use std::time::Instant;

impl App {
    /// One animation-frame tick. The flip sound fires on the settling
    /// frame, strictly after the peel has completed.
    pub(super) fn handle_animation_tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if self.book.advance_frame(now) == FrameOutcome::Settled {
            effects.push(Effect::PlayFlipSound);
        }
    }
}
