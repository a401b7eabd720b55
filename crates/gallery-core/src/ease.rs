//! Easing curves and fixed-duration tweens.
//!
//! The choreography layer composes these into staged transitions; each tween
//! is a time-bounded task advanced by the frame loop, so a transition always
//! reaches its terminal state.

use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    PowerIn(u8),
    PowerOut(u8),
    PowerInOut(u8),
    /// Overshooting ease-out; the parameter controls the overshoot amount.
    BackOut(f32),
    BackIn(f32),
    /// Decaying oscillation toward the end value: amplitude, period.
    ElasticOut(f32, f32),
    SineInOut,
}

impl Ease {
    /// Map normalized time `t ∈ [0, 1]` to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::PowerIn(n) => t.powi(n as i32),
            Ease::PowerOut(n) => 1.0 - (1.0 - t).powi(n as i32),
            Ease::PowerInOut(n) => {
                if t < 0.5 {
                    0.5 * (2.0 * t).powi(n as i32)
                } else {
                    1.0 - 0.5 * (2.0 - 2.0 * t).powi(n as i32)
                }
            }
            Ease::BackOut(s) => {
                let u = t - 1.0;
                1.0 + u * u * ((s + 1.0) * u + s)
            }
            Ease::BackIn(s) => t * t * ((s + 1.0) * t - s),
            Ease::ElasticOut(amplitude, period) => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else {
                    let a = amplitude.max(1.0);
                    let p = period.max(1e-3);
                    let s = p / TAU * (1.0 / a).asin();
                    a * 2f32.powf(-10.0 * t) * ((t - s) * TAU / p).sin() + 1.0
                }
            }
            Ease::SineInOut => 0.5 - 0.5 * (PI * t).cos(),
        }
    }
}

/// A value animated between two endpoints over a fixed duration.
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    delay: f32,
    elapsed: f32,
    ease: Ease,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, ease: Ease) -> Self {
        debug_assert!(duration >= 0.0);
        Self {
            from,
            to,
            duration,
            delay: 0.0,
            elapsed: 0.0,
            ease,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(self.delay + self.duration);
    }

    /// Normalized progress, 0 before the delay has elapsed.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            if self.elapsed >= self.delay {
                1.0
            } else {
                0.0
            }
        } else {
            ((self.elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.ease.apply(self.progress())
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }
}

/// Plain countdown used for holds between stages.
#[derive(Clone, Debug)]
pub struct Timer {
    duration: f32,
    elapsed: f32,
}

impl Timer {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_hit_endpoints() {
        let eases = [
            Ease::Linear,
            Ease::PowerIn(3),
            Ease::PowerOut(4),
            Ease::PowerInOut(4),
            Ease::BackOut(1.7),
            Ease::BackIn(1.7),
            Ease::ElasticOut(1.0, 0.8),
            Ease::SineInOut,
        ];
        for e in eases {
            assert!((e.apply(0.0)).abs() < 1e-5, "{e:?} at 0");
            assert!((e.apply(1.0) - 1.0).abs() < 1e-5, "{e:?} at 1");
        }
    }

    #[test]
    fn tween_respects_delay_and_duration() {
        let mut tw = Tween::new(0.0, 10.0, 1.0, Ease::Linear).with_delay(0.5);
        tw.advance(0.5);
        assert_eq!(tw.value(), 0.0);
        assert!(!tw.finished());
        tw.advance(0.5);
        assert!((tw.value() - 5.0).abs() < 1e-4);
        tw.advance(10.0);
        assert!(tw.finished());
        assert_eq!(tw.value(), 10.0);
    }

    #[test]
    fn back_out_overshoots_then_settles() {
        let e = Ease::BackOut(1.7);
        assert!(e.apply(0.7) > 1.0);
        assert!((e.apply(1.0) - 1.0).abs() < 1e-5);
    }
}
