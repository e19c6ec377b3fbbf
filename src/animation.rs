//! The corner-peel animator.
//!
//! One `PeelAnimation` exists per page turn. It is a poll-based object: the
//! frame driver samples it with a monotonic timestamp and receives the
//! geometry to publish to the render surface, plus a completion flag. The
//! animator owns no clock and schedules nothing itself; the navigation
//! state machine decides when sampling starts and stops, and it is also the
//! one enforcing that only a single animation is in flight.

use crate::easing::ease_in_out_cubic;
use std::time::{Duration, Instant};
use tracing::trace;

/// Which page corner is being peeled. Fixes the sign of the fold angle:
/// a right-hand corner folds with a positive angle, a left-hand one with a
/// negative angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    Left,
    Right,
}

impl Corner {
    pub fn angle_sign(self) -> f32 {
        match self {
            Corner::Right => 1.0,
            Corner::Left => -1.0,
        }
    }
}

/// Geometry published to the render surface for one page corner.
///
/// `ex`/`ey` are how far the curl reaches horizontally and vertically from
/// the corner (pixels), `ang` is the fold inclination (degrees, signed by
/// corner side), and `progress` is the eased fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerGeometry {
    pub ex: f32,
    pub ey: f32,
    pub ang: f32,
    pub progress: f32,
}

impl CornerGeometry {
    pub const ZERO: CornerGeometry = CornerGeometry {
        ex: 0.0,
        ey: 0.0,
        ang: 0.0,
        progress: 0.0,
    };
}

/// Peak values the peel grows toward, plus how long it takes to get there.
#[derive(Debug, Clone, Copy)]
pub struct PeelStyle {
    pub duration: Duration,
    pub curl_x: f32,
    pub curl_y: f32,
    pub curl_angle_deg: f32,
}

/// One frame of the animation as seen by the driver.
#[derive(Debug, Clone, Copy)]
pub struct PeelFrame {
    pub geometry: CornerGeometry,
    pub finished: bool,
}

/// A single in-flight corner peel.
pub struct PeelAnimation {
    corner: Corner,
    style: PeelStyle,
    started_at: Instant,
}

impl PeelAnimation {
    pub fn new(corner: Corner, style: PeelStyle, started_at: Instant) -> Self {
        PeelAnimation {
            corner,
            style,
            started_at,
        }
    }

    pub fn corner(&self) -> Corner {
        self.corner
    }

    /// Sample the animation at `now`.
    ///
    /// Geometry grows monotonically from zero toward the style's peak
    /// values; once the elapsed fraction reaches 1 the frame reports
    /// `finished` and every later sample repeats the peak frame. Zeroing
    /// the geometry after the final frame is the caller's job, so the peak
    /// frame gets a chance to paint before the reset.
    pub fn sample(&self, now: Instant) -> PeelFrame {
        let elapsed = now.saturating_duration_since(self.started_at);
        let t = if self.style.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.style.duration.as_secs_f32()).min(1.0)
        };
        let k = ease_in_out_cubic(t);

        let geometry = CornerGeometry {
            ex: self.style.curl_x * k,
            ey: self.style.curl_y * k,
            ang: self.corner.angle_sign() * self.style.curl_angle_deg * k,
            progress: k,
        };
        trace!(
            ex = geometry.ex,
            ey = geometry.ey,
            ang = geometry.ang,
            t,
            "Peel frame"
        );
        PeelFrame {
            geometry,
            finished: t >= 1.0,
        }
    }
}
