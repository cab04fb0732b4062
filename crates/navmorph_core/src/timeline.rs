//! The shared timeline.
//!
//! Every animated property of the overlay is one keyed track on a single
//! [`Timeline`]. Tracks tick independently; each writes only its own value,
//! so concurrent motion needs no coordination beyond the key space.

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::animation::{Animation, Retarget, Transition};
use crate::registry::{self, PropertyKind};

/// One mounted track.
#[derive(Debug, Clone)]
struct Track {
    kind: PropertyKind,
    animation: Animation,
}

/// Keyed collection of animated scalars advanced by frame ticks.
#[derive(Debug, Clone)]
pub struct Timeline<K> {
    /// Mounted tracks, ordered by key for deterministic ticking.
    tracks: BTreeMap<K, Track>,
    /// Total seconds ticked.
    elapsed: f32,
    /// Number of ticks.
    frames: u64,
}

impl<K: Ord + Clone + Debug> Timeline<K> {
    /// Creates an empty timeline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tracks: BTreeMap::new(),
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Mounts a track resting at `value`, replacing any track under the same key.
    ///
    /// Returns false (and mounts nothing) if the property kind needs a
    /// plugin that was never registered.
    pub fn mount(&mut self, key: K, kind: PropertyKind, value: f32) -> bool {
        if !registry::supports(kind) {
            tracing::warn!(?key, ?kind, "property kind not registered, track ignored");
            return false;
        }
        self.tracks.insert(
            key,
            Track {
                kind,
                animation: Animation::new(value),
            },
        );
        true
    }

    /// Removes a track. Returns true if it existed.
    pub fn unmount(&mut self, key: &K) -> bool {
        self.tracks.remove(key).is_some()
    }

    /// Removes every track whose key matches. Returns how many were removed.
    pub fn unmount_where(&mut self, mut predicate: impl FnMut(&K) -> bool) -> usize {
        let before = self.tracks.len();
        self.tracks.retain(|key, _| !predicate(key));
        before - self.tracks.len()
    }

    /// Returns true if the track is mounted.
    #[must_use]
    pub fn is_mounted(&self, key: &K) -> bool {
        self.tracks.contains_key(key)
    }

    /// Sends a track toward `target`, interrupting whatever it was doing.
    ///
    /// Unmounted tracks are a no-op: visual side effects are best-effort
    /// relative to mount timing.
    pub fn animate(&mut self, key: &K, target: f32, transition: Transition) -> Retarget {
        match self.tracks.get_mut(key) {
            Some(track) => track.animation.set_target(target, transition),
            None => {
                tracing::debug!(?key, "animate on unmounted track ignored");
                Retarget::Missing
            }
        }
    }

    /// Snaps a mounted track to `value`. Returns false if unmounted.
    pub fn set_immediate(&mut self, key: &K, value: f32) -> bool {
        match self.tracks.get_mut(key) {
            Some(track) => {
                track.animation.set_immediate(value);
                true
            }
            None => false,
        }
    }

    /// Current value of a track.
    #[must_use]
    pub fn value(&self, key: &K) -> Option<f32> {
        self.tracks.get(key).map(|track| track.animation.value())
    }

    /// Target of a track.
    #[must_use]
    pub fn target(&self, key: &K) -> Option<f32> {
        self.tracks.get(key).map(|track| track.animation.target())
    }

    /// Transition a track is running (or last ran).
    #[must_use]
    pub fn transition(&self, key: &K) -> Option<Transition> {
        self.tracks.get(key).map(|track| track.animation.transition())
    }

    /// Property kind of a track.
    #[must_use]
    pub fn kind(&self, key: &K) -> Option<PropertyKind> {
        self.tracks.get(key).map(|track| track.kind)
    }

    /// Returns true if the track is mounted and still moving.
    #[must_use]
    pub fn is_animating(&self, key: &K) -> bool {
        self.tracks
            .get(key)
            .is_some_and(|track| !track.animation.is_complete())
    }

    /// Number of tracks still moving.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.tracks
            .values()
            .filter(|track| !track.animation.is_complete())
            .count()
    }

    /// Returns true if nothing is moving.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of mounted tracks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Returns true if no track is mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Mounted keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.tracks.keys()
    }

    /// Seconds ticked since creation.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Ticks since creation.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advances every track by `dt` seconds.
    ///
    /// Returns the keys whose animation came to rest during this tick.
    pub fn tick(&mut self, dt: f32) -> Vec<K> {
        let dt = dt.max(0.0);
        self.elapsed += dt;
        self.frames += 1;

        let mut completed = Vec::new();
        for (key, track) in &mut self.tracks {
            if track.animation.update(dt) {
                completed.push(key.clone());
            }
        }
        completed
    }
}

impl<K: Ord + Clone + Debug> Default for Timeline<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;

    fn linear(duration: f32) -> Transition {
        Transition::new(duration, Easing::Linear)
    }

    #[test]
    fn test_tracks_run_concurrently() {
        let mut timeline: Timeline<&str> = Timeline::new();
        timeline.mount("a", PropertyKind::TranslateY, 0.0);
        timeline.mount("b", PropertyKind::Opacity, 0.0);

        timeline.animate(&"a", 1.0, linear(0.5));
        timeline.animate(&"b", 1.0, linear(1.0).with_delay(0.25));

        let mut completed = Vec::new();
        for _ in 0..100 {
            completed.extend(timeline.tick(0.016));
        }

        assert_eq!(completed, vec!["a", "b"]);
        assert!(timeline.is_idle());
        assert_eq!(timeline.value(&"a"), Some(1.0));
        assert_eq!(timeline.value(&"b"), Some(1.0));
    }

    #[test]
    fn test_animate_unmounted_is_noop() {
        let mut timeline: Timeline<u32> = Timeline::new();
        assert_eq!(timeline.animate(&7, 1.0, linear(1.0)), Retarget::Missing);
        assert!(timeline.is_empty());
        assert!(timeline.tick(0.1).is_empty());
    }

    #[test]
    fn test_unmount_where() {
        let mut timeline: Timeline<(u8, u8)> = Timeline::new();
        for item in 0..3 {
            for cell in 0..4 {
                timeline.mount((item, cell), PropertyKind::TranslateY, 1.0);
            }
        }
        assert_eq!(timeline.unmount_where(|&(item, _)| item == 1), 4);
        assert_eq!(timeline.len(), 8);
        assert!(!timeline.is_mounted(&(1, 0)));
    }

    #[test]
    fn test_stroke_draw_mounts_after_init() {
        registry::init();
        let mut timeline: Timeline<&str> = Timeline::new();
        assert!(timeline.mount("path", PropertyKind::StrokeDraw, 0.36));
        assert_eq!(timeline.kind(&"path"), Some(PropertyKind::StrokeDraw));
    }
}
