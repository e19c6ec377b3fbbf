mod animation;
mod core;
mod input;
mod navigation;
mod zoom;

/// Describes work that must be performed outside the pure reducer. The flip
/// sound is the only side effect the page-turn machinery produces.
pub(super) enum Effect {
    PlayFlipSound,
}
