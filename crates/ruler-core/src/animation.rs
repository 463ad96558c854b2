//! Time-based transitions for the pointer fade and accent colour
//!
//! Transitions are linear over a fixed duration and are evaluated against a
//! clock supplied by the caller (seconds, e.g. the toolkit's frame time).
//! Starting a new transition replaces the running one, beginning from
//! whatever value is on screen at that moment.

use crate::color::Argb;
use crate::constants::{ALPHA_HIDDEN, ALPHA_OPAQUE, ANIMATION_DURATION};
use std::time::Duration;

/// Values that can be linearly interpolated
pub trait Interpolate: Copy + PartialEq {
    /// Value at `fraction` (0.0..=1.0) of the way from `start` to `end`
    fn interpolate(start: Self, end: Self, fraction: f32) -> Self;
}

/// Linear interpolation with `fraction` clamped to `[0, 1]`
pub fn interpolate<T: Interpolate>(start: T, end: T, fraction: f32) -> T {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    T::interpolate(start, end, fraction)
}

impl Interpolate for f32 {
    fn interpolate(start: Self, end: Self, fraction: f32) -> Self {
        start + (end - start) * fraction
    }
}

impl Interpolate for u8 {
    fn interpolate(start: Self, end: Self, fraction: f32) -> Self {
        let value = start as f32 + (end as f32 - start as f32) * fraction;
        value.round().clamp(0.0, 255.0) as u8
    }
}

impl Interpolate for Argb {
    /// Each channel, alpha included, is interpolated independently
    fn interpolate(start: Self, end: Self, fraction: f32) -> Self {
        Argb::from_channels(
            u8::interpolate(start.alpha(), end.alpha(), fraction),
            u8::interpolate(start.red(), end.red(), fraction),
            u8::interpolate(start.green(), end.green(), fraction),
            u8::interpolate(start.blue(), end.blue(), fraction),
        )
    }
}

/// Alpha the pointer should fade towards when its visibility is toggled
pub fn target_alpha(current: u8) -> u8 {
    if current > 0 {
        ALPHA_HIDDEN
    } else {
        ALPHA_OPAQUE
    }
}

/// A running transition between two values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition<T> {
    pub from: T,
    pub to: T,
    /// Clock reading when the transition started (seconds)
    pub started_at: f64,
    pub duration: Duration,
}

impl<T: Interpolate> Transition<T> {
    pub fn new(from: T, to: T, started_at: f64) -> Self {
        Self::with_duration(from, to, started_at, ANIMATION_DURATION)
    }

    pub fn with_duration(from: T, to: T, started_at: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    /// Elapsed share of the duration, clamped to `[0, 1]`
    pub fn fraction(&self, now: f64) -> f32 {
        let total = self.duration.as_secs_f64();
        if total <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / total).clamp(0.0, 1.0) as f32
    }

    pub fn value_at(&self, now: f64) -> T {
        interpolate(self.from, self.to, self.fraction(now))
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.fraction(now) >= 1.0
    }
}

/// A value that may be transitioning towards a target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animated<T> {
    current: T,
    transition: Option<Transition<T>>,
}

impl<T: Interpolate> Animated<T> {
    pub fn new(value: T) -> Self {
        Self {
            current: value,
            transition: None,
        }
    }

    /// Jump to `value`, cancelling any running transition
    pub fn set(&mut self, value: T) {
        self.current = value;
        self.transition = None;
    }

    /// Start a transition from the value shown at `now` towards `target`
    pub fn animate_to(&mut self, target: T, now: f64) {
        let from = self.value(now);
        if from == target {
            self.set(target);
            return;
        }
        self.transition = Some(Transition::new(from, target, now));
    }

    /// Value at `now`; a finished transition is retired
    pub fn value(&mut self, now: f64) -> T {
        if let Some(transition) = self.transition {
            self.current = transition.value_at(now);
            if transition.is_finished(now) {
                self.current = transition.to;
                self.transition = None;
            }
        }
        self.current
    }

    /// The value the transition is heading for, or the current value
    pub fn target(&self) -> T {
        self.transition.map_or(self.current, |t| t.to)
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }
}
