//! Smooth scrolling toward an anchor.

use std::time::{Duration, Instant};

pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(450);

/// An eased scroll from one content offset to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, started: Instant) -> Self {
        Self {
            from,
            to,
            started,
            duration: SMOOTH_SCROLL_DURATION,
        }
    }

    /// Offset to show at `now`.
    pub fn offset_at(&self, now: Instant) -> f32 {
        let t = self.fraction(now);
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.fraction(now) >= 1.0
    }

    fn fraction(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

/// Cubic ease-in-out.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
