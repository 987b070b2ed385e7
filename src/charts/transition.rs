//! Domain Transition Module
//! Timed interpolation of the x-scale domain when the metric changes.

/// Fixed animation length for axis, point, and label movement.
pub const TRANSITION_SECS: f64 = 1.0;

/// An in-flight animation of the x-scale domain from an old extent to a new
/// one. Fire-and-forget: a later transition simply takes over from wherever
/// this one currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainTransition {
    from: (f64, f64),
    to: (f64, f64),
    started_at: f64,
}

impl DomainTransition {
    pub fn new(from: (f64, f64), to: (f64, f64), now: f64) -> Self {
        Self {
            from,
            to,
            started_at: now,
        }
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: f64) -> f64 {
        ((now - self.started_at) / TRANSITION_SECS).clamp(0.0, 1.0)
    }

    /// The interpolated domain at the given time, with cubic ease-in-out.
    pub fn domain_at(&self, now: f64) -> (f64, f64) {
        let k = ease_cubic_in_out(self.progress(now));
        (
            lerp(self.from.0, self.to.0, k),
            lerp(self.from.1, self.to.1, k),
        )
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn ease_cubic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
