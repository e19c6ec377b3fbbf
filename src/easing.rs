//! Easing for the corner-peel animation.

/// Cubic ease-in-out: slow start, slow end, symmetric about `t = 0.5`.
///
/// Maps `[0, 1]` onto `[0, 1]` monotonically with zero slope at both
/// endpoints. Input outside the unit interval is clamped first.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
