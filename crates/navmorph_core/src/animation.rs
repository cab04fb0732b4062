//! Retargetable tweens.
//!
//! An [`Animation`] holds one scalar. Setting a new target never queues:
//! the tween restarts from wherever the value currently is, so interrupted
//! motion stays continuous.

use serde::{Deserialize, Serialize};

use crate::easing::{Easing, Spring};

/// Timing for one transition: how long, how late, which curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Duration in seconds.
    pub duration: f32,
    /// Delay before motion starts, in seconds.
    #[serde(default)]
    pub delay: f32,
    /// Easing curve.
    pub easing: Easing,
}

impl Transition {
    /// Creates a transition without delay.
    #[must_use]
    pub const fn new(duration: f32, easing: Easing) -> Self {
        Self {
            duration,
            delay: 0.0,
            easing,
        }
    }

    /// Creates a spring transition lasting as long as the spring takes to settle.
    #[must_use]
    pub fn spring(spring: Spring) -> Self {
        Self::new(spring.settle_duration(), Easing::Spring(spring))
    }

    /// Returns a copy with a different delay.
    #[must_use]
    pub const fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Delay plus duration.
    #[must_use]
    pub fn total(&self) -> f32 {
        self.delay.max(0.0) + self.duration.max(0.0)
    }
}

/// Result of handing an animation a new target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retarget {
    /// Motion started from rest.
    Started,
    /// In-flight motion was interrupted and now heads somewhere else.
    Retargeted,
    /// Already heading to (or resting at) that target.
    Unchanged,
    /// No such track is mounted; nothing happened.
    Missing,
}

/// A single animated value.
#[derive(Debug, Clone)]
pub struct Animation {
    /// Current value.
    current: f32,
    /// Target value.
    target: f32,
    /// Value when the current transition began.
    start: f32,
    /// Seconds since the current transition began (delay included).
    elapsed: f32,
    /// Timing of the current transition.
    transition: Transition,
    /// True while a transition is running or waiting on its delay.
    running: bool,
}

impl Animation {
    /// Values closer than this are the same target.
    pub const TARGET_EPSILON: f32 = 1e-4;

    /// Creates an animation resting at the given value.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            current: value,
            target: value,
            start: value,
            elapsed: 0.0,
            transition: Transition::new(0.0, Easing::Instant),
            running: false,
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Returns the value this animation is heading to.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Returns true if the animation is at rest.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.running
    }

    /// Returns the transition that is running (or last ran).
    #[must_use]
    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Heads toward `target` from the current value.
    ///
    /// A target equal to the one already pursued is ignored, so repeated
    /// identical requests never restart motion.
    pub fn set_target(&mut self, target: f32, transition: Transition) -> Retarget {
        if (target - self.target).abs() <= Self::TARGET_EPSILON {
            return Retarget::Unchanged;
        }

        let outcome = if self.running {
            Retarget::Retargeted
        } else {
            Retarget::Started
        };

        self.start = self.current;
        self.target = target;
        self.elapsed = 0.0;
        self.transition = transition;
        self.running = true;

        // Zero-length transitions land immediately.
        if transition.total() <= 0.0 {
            self.finish();
        }
        outcome
    }

    /// Immediately sets the value without animation.
    pub fn set_immediate(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.start = value;
        self.elapsed = 0.0;
        self.running = false;
    }

    fn finish(&mut self) {
        self.current = self.target;
        self.start = self.target;
        self.running = false;
    }

    /// Updates the animation.
    ///
    /// `dt` is delta time in seconds. Returns true on the frame the
    /// animation comes to rest.
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }

        self.elapsed += dt.max(0.0);
        let delay = self.transition.delay.max(0.0);
        if self.elapsed < delay {
            return false;
        }

        let duration = self.transition.duration;
        let progress = if duration > 0.0 {
            ((self.elapsed - delay) / duration).min(1.0)
        } else {
            1.0
        };

        if progress >= 1.0 {
            self.finish();
            return true;
        }

        let eased = self.transition.easing.apply(progress);
        self.current = self.start + (self.target - self.start) * eased;
        false
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(duration: f32) -> Transition {
        Transition::new(duration, Easing::Linear)
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut anim = Animation::new(0.0);
        assert_eq!(anim.set_target(100.0, linear(0.3)), Retarget::Started);

        let mut finished = false;
        for _ in 0..40 {
            finished |= anim.update(0.016);
        }

        assert!(finished);
        assert!((anim.value() - 100.0).abs() < 0.01);
        assert!(anim.is_complete());
    }

    #[test]
    fn test_delay_holds_start_value() {
        let mut anim = Animation::new(1.0);
        anim.set_target(0.0, linear(0.5).with_delay(0.2));

        anim.update(0.1);
        assert_eq!(anim.value(), 1.0);
        anim.update(0.2);
        assert!(anim.value() < 1.0);
    }

    #[test]
    fn test_retarget_continues_from_current_value() {
        let mut anim = Animation::new(0.0);
        anim.set_target(1.0, linear(1.0));
        anim.update(0.5);
        let midway = anim.value();
        assert!((midway - 0.5).abs() < 1e-3);

        assert_eq!(anim.set_target(0.0, linear(1.0)), Retarget::Retargeted);
        anim.update(0.0);
        assert!((anim.value() - midway).abs() < 1e-3, "no jump on retarget");

        anim.update(0.5);
        assert!((anim.value() - midway * 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_same_target_does_not_restart() {
        let mut anim = Animation::new(0.0);
        anim.set_target(1.0, linear(1.0));
        anim.update(0.4);
        let before = anim.value();

        assert_eq!(anim.set_target(1.0, linear(1.0)), Retarget::Unchanged);
        anim.update(0.0);
        assert!((anim.value() - before).abs() < 1e-6);
    }

    #[test]
    fn test_zero_duration_lands_immediately() {
        let mut anim = Animation::new(0.0);
        anim.set_target(3.0, Transition::new(0.0, Easing::Instant));
        assert_eq!(anim.value(), 3.0);
        assert!(anim.is_complete());
    }
}
