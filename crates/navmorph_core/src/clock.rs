//! Frame clock.
//!
//! Produces the `dt` fed to [`Timeline::tick`](crate::Timeline::tick),
//! either a fixed step for deterministic replay or wall-clock deltas clamped
//! so a stalled frame cannot skip whole transitions.

use std::time::{Duration, Instant};

/// Target frame time for 60 FPS.
pub const TARGET_FRAME_TIME: Duration = Duration::from_micros(16_666);

/// Source of per-frame time steps.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Fixed step in seconds, or `None` for wall-clock.
    fixed_step: Option<f32>,
    /// Largest step ever returned (seconds).
    max_step: f32,
    /// Previous wall-clock sample.
    last: Option<Instant>,
}

impl FrameClock {
    /// Default clamp for wall-clock steps (seconds).
    pub const DEFAULT_MAX_STEP: f32 = 0.1;

    /// Clock that advances by exactly `1 / fps` every frame.
    #[must_use]
    pub fn fixed(fps: u32) -> Self {
        Self {
            fixed_step: Some(1.0 / fps.max(1) as f32),
            max_step: Self::DEFAULT_MAX_STEP,
            last: None,
        }
    }

    /// Clock driven by the monotonic system clock.
    #[must_use]
    pub fn realtime() -> Self {
        Self {
            fixed_step: None,
            max_step: Self::DEFAULT_MAX_STEP,
            last: None,
        }
    }

    /// Sets the clamp for wall-clock steps.
    #[must_use]
    pub fn with_max_step(mut self, max_step: f32) -> Self {
        self.max_step = max_step.max(0.0);
        self
    }

    /// Returns the fixed step, if this clock has one.
    #[must_use]
    pub fn fixed_step(&self) -> Option<f32> {
        self.fixed_step
    }

    /// Returns the time step for the next frame.
    pub fn next_step(&mut self) -> f32 {
        if let Some(step) = self.fixed_step {
            return step;
        }
        let now = Instant::now();
        let dt = self
            .last
            .map_or(0.0, |last| now.saturating_duration_since(last).as_secs_f32());
        self.last = Some(now);
        dt.min(self.max_step)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::fixed(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_constant() {
        let mut clock = FrameClock::fixed(50);
        assert!((clock.next_step() - 0.02).abs() < 1e-6);
        assert!((clock.next_step() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_realtime_clock_is_clamped() {
        let mut clock = FrameClock::realtime().with_max_step(0.0);
        assert_eq!(clock.next_step(), 0.0);
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(clock.next_step(), 0.0);
    }
}
