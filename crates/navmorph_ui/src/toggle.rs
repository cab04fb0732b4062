//! Toggle control.
//!
//! Owns the open/closed state. Each activation flips it, publishes the new
//! value, and retargets the icon morph: two stroked paths whose visible
//! ranges slide between a collapsed and an expanded window, plus the
//! backing circle.

use navmorph_core::{Easing, PropertyKind, Signal, Spring, Subscription, Timeline, Transition};
use serde::{Deserialize, Serialize};

use crate::track::TrackKey;

/// One of the two deformable icon strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPath {
    /// Lower stroke.
    A,
    /// Upper stroke.
    B,
}

impl IconPath {
    /// Both paths, in render order.
    pub const ALL: [Self; 2] = [Self::A, Self::B];
}

/// Visible window of a stroked path, as fractions of its length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawRange {
    /// Where the visible stroke begins.
    pub start: f32,
    /// Where the visible stroke ends.
    pub end: f32,
}

impl DrawRange {
    /// Resting icon: `36% 0%`.
    pub const COLLAPSED: Self = Self::new(0.36, 0.0);
    /// Open icon: `56% 100%`.
    pub const EXPANDED: Self = Self::new(0.56, 1.0);

    /// Creates a range.
    #[must_use]
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }
}

/// Timing and shape parameters for the toggle icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconMotion {
    /// Path morph timing. Its delay is applied to one path only.
    pub morph: Transition,
    /// Path that waits for the delay when opening.
    pub open_delayed: IconPath,
    /// Path that waits for the delay when closing.
    pub close_delayed: IconPath,
    /// Draw range while closed.
    pub collapsed: DrawRange,
    /// Draw range while open.
    pub expanded: DrawRange,
    /// Backing circle timing.
    pub circle: Transition,
    /// Circle diameter while closed (rem).
    pub circle_closed: f32,
    /// Circle diameter while open (rem).
    pub circle_open: f32,
    /// Spring for the one-shot entrance at mount.
    pub entrance: Spring,
    /// Entrance starts this far below its resting place (px).
    pub entrance_offset: f32,
}

impl Default for IconMotion {
    fn default() -> Self {
        Self {
            morph: Transition::new(0.6, Easing::bezier(0.7, 0.0, 0.0, 0.94)).with_delay(0.1),
            open_delayed: IconPath::A,
            close_delayed: IconPath::A,
            collapsed: DrawRange::COLLAPSED,
            expanded: DrawRange::EXPANDED,
            circle: Transition::new(0.6, Easing::bezier(0.7, 0.0, 0.0, 1.0)),
            circle_closed: 3.0,
            circle_open: 6.5,
            entrance: Spring::with_stiffness(180.0),
            entrance_offset: 10.0,
        }
    }
}

/// Planned motion for one path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathMotion {
    /// Which path.
    pub path: IconPath,
    /// Target draw range.
    pub range: DrawRange,
    /// Timing, delay included.
    pub transition: Transition,
}

/// What a toggle activation did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleOutcome {
    /// State after the toggle.
    pub is_open: bool,
    /// Motion started for each path.
    pub paths: [PathMotion; 2],
}

/// Open/closed state plus the icon morph it drives.
#[derive(Debug)]
pub struct ToggleController {
    state: Signal<bool>,
    motion: IconMotion,
}

impl ToggleController {
    /// Creates a closed toggle.
    #[must_use]
    pub fn new(motion: IconMotion) -> Self {
        Self {
            state: Signal::new(false),
            motion,
        }
    }

    /// Mounts the icon tracks and starts the entrance.
    pub fn mount(&self, timeline: &mut Timeline<TrackKey>) {
        let resting = if self.is_open() {
            self.motion.expanded
        } else {
            self.motion.collapsed
        };
        for path in IconPath::ALL {
            timeline.mount(TrackKey::PathStart(path), PropertyKind::StrokeDraw, resting.start);
            timeline.mount(TrackKey::PathEnd(path), PropertyKind::StrokeDraw, resting.end);
        }
        timeline.mount(TrackKey::Circle, PropertyKind::Size, self.motion.circle_closed);
        timeline.mount(
            TrackKey::IconOffset,
            PropertyKind::TranslateY,
            self.motion.entrance_offset,
        );
        timeline.mount(TrackKey::IconOpacity, PropertyKind::Opacity, 0.0);

        let entrance = Transition::spring(self.motion.entrance);
        timeline.animate(&TrackKey::IconOffset, 0.0, entrance);
        timeline.animate(&TrackKey::IconOpacity, 1.0, entrance);
    }

    /// Returns true while the menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        *self.state.get()
    }

    /// Icon timing in use.
    #[must_use]
    pub fn motion(&self) -> &IconMotion {
        &self.motion
    }

    /// Subscribes to open/closed changes.
    pub fn subscribe(&mut self) -> Subscription<bool> {
        self.state.subscribe()
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.state.listener_count()
    }

    /// Path motion for a transition into `opening` (true) or closing.
    ///
    /// The delay lands on the path configured for that direction.
    #[must_use]
    pub fn plan(&self, opening: bool) -> [PathMotion; 2] {
        let (range, delayed) = if opening {
            (self.motion.expanded, self.motion.open_delayed)
        } else {
            (self.motion.collapsed, self.motion.close_delayed)
        };
        let delay = self.motion.morph.delay;

        IconPath::ALL.map(|path| PathMotion {
            path,
            range,
            transition: self
                .motion
                .morph
                .with_delay(if path == delayed { delay } else { 0.0 }),
        })
    }

    /// Flips the state and retargets the icon morph.
    ///
    /// In-flight motion from a previous toggle is interrupted and redirected,
    /// never queued.
    pub fn toggle(&mut self, timeline: &mut Timeline<TrackKey>) -> ToggleOutcome {
        let opening = !self.is_open();
        let paths = self.plan(opening);

        for motion in &paths {
            timeline.animate(
                &TrackKey::PathStart(motion.path),
                motion.range.start,
                motion.transition,
            );
            timeline.animate(
                &TrackKey::PathEnd(motion.path),
                motion.range.end,
                motion.transition,
            );
        }

        let diameter = if opening {
            self.motion.circle_open
        } else {
            self.motion.circle_closed
        };
        timeline.animate(&TrackKey::Circle, diameter, self.motion.circle);

        self.state.set(opening);
        tracing::info!(open = opening, "menu toggled");

        ToggleOutcome {
            is_open: opening,
            paths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted() -> (ToggleController, Timeline<TrackKey>) {
        navmorph_core::init();
        let toggle = ToggleController::new(IconMotion::default());
        let mut timeline = Timeline::new();
        toggle.mount(&mut timeline);
        (toggle, timeline)
    }

    #[test]
    fn test_open_delays_path_a_only() {
        let (toggle, _) = mounted();
        let [a, b] = toggle.plan(true);
        assert_eq!(a.path, IconPath::A);
        assert!((a.transition.delay - 0.1).abs() < 1e-6);
        assert_eq!(b.transition.delay, 0.0);
        assert_eq!(a.range, DrawRange::EXPANDED);
    }

    #[test]
    fn test_delayed_path_follows_direction_config() {
        let motion = IconMotion {
            open_delayed: IconPath::A,
            close_delayed: IconPath::B,
            ..IconMotion::default()
        };
        let toggle = ToggleController::new(motion);
        let [a, b] = toggle.plan(false);
        assert_eq!(a.transition.delay, 0.0);
        assert!(b.transition.delay > 0.0);
        assert_eq!(b.range, DrawRange::COLLAPSED);
    }

    #[test]
    fn test_toggle_alternates_and_targets_range() {
        let (mut toggle, mut timeline) = mounted();
        for round in 0..6 {
            let outcome = toggle.toggle(&mut timeline);
            let expect_open = round % 2 == 0;
            assert_eq!(outcome.is_open, expect_open);
            assert_eq!(toggle.is_open(), expect_open);

            let range = if expect_open {
                DrawRange::EXPANDED
            } else {
                DrawRange::COLLAPSED
            };
            for path in IconPath::ALL {
                assert_eq!(timeline.target(&TrackKey::PathStart(path)), Some(range.start));
                assert_eq!(timeline.target(&TrackKey::PathEnd(path)), Some(range.end));
            }
        }
    }

    #[test]
    fn test_toggle_publishes_state() {
        let (mut toggle, mut timeline) = mounted();
        let subscription = toggle.subscribe();
        toggle.toggle(&mut timeline);
        toggle.toggle(&mut timeline);

        let states: Vec<bool> = subscription.drain().into_iter().map(|c| c.current).collect();
        assert_eq!(states, vec![true, false]);
    }

    #[test]
    fn test_entrance_settles() {
        let (_, mut timeline) = mounted();
        for _ in 0..200 {
            timeline.tick(1.0 / 60.0);
        }
        assert_eq!(timeline.value(&TrackKey::IconOffset), Some(0.0));
        assert_eq!(timeline.value(&TrackKey::IconOpacity), Some(1.0));
    }
}
