//! Overlay panel.
//!
//! Follows the toggle's open state through four phases:
//!
//! ```text
//!            open                 clip reaches 1
//!   Hidden ───────> Entering ─────────────────────> Visible
//!     ^               │  ^                             │
//!     │          close│  │open                         │close
//!     │               v  │                             │
//!     └───────────── Exiting <─────────────────────────┘
//!     clip reaches 0
//! ```
//!
//! Items and their letter tracks exist from the moment the panel opens until
//! the exit reveal has fully run. Nothing is unmounted early.

use navmorph_core::{PropertyKind, Subscription, Timeline, Transition};

use crate::config::{MotionConfig, NavConfig};
use crate::hover::HoverTracker;
use crate::item::MenuItem;
use crate::letters::LetterTiming;
use crate::toggle::ToggleController;
use crate::track::TrackKey;

/// Lifecycle of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelPhase {
    /// Not mounted.
    #[default]
    Hidden,
    /// Mounted, clip growing.
    Entering,
    /// Mounted, fully revealed.
    Visible,
    /// Mounted, clip shrinking. Unmounts when it reaches zero.
    Exiting,
}

impl PanelPhase {
    /// Returns true while anything is on screen.
    #[must_use]
    pub const fn is_mounted(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// The full-bleed menu.
#[derive(Debug)]
pub struct OverlayPanel {
    phase: PanelPhase,
    toggle_events: Subscription<bool>,
    hover_events: Option<Subscription<Option<usize>>>,
    items: Vec<MenuItem>,
    transition: Transition,
    timing: LetterTiming,
}

impl OverlayPanel {
    /// Creates a hidden panel listening to `toggle`.
    #[must_use]
    pub fn new(toggle: &mut ToggleController, motion: &MotionConfig) -> Self {
        Self {
            phase: PanelPhase::Hidden,
            toggle_events: toggle.subscribe(),
            hover_events: None,
            items: Vec::new(),
            transition: motion.panel,
            timing: motion.letters.clone(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// Mounted items, in render order.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Revealed fraction of the panel.
    #[must_use]
    pub fn clip_coverage(&self, timeline: &Timeline<TrackKey>) -> f32 {
        timeline.value(&TrackKey::PanelClip).unwrap_or(0.0)
    }

    /// Applies every pending toggle and hover change.
    pub fn sync(
        &mut self,
        timeline: &mut Timeline<TrackKey>,
        hover: &mut HoverTracker,
        social: &mut HoverTracker,
        config: &NavConfig,
        route: &str,
    ) {
        for change in self.toggle_events.drain() {
            if change.current {
                self.open(timeline, hover, social, config, route);
            } else {
                self.close(timeline, hover, social);
            }
        }

        let changes = self
            .hover_events
            .as_ref()
            .map(Subscription::drain)
            .unwrap_or_default();
        for change in changes {
            for (index, hovered) in [(change.previous, false), (change.current, true)] {
                let Some(index) = index else {
                    continue;
                };
                if let Some(item) = self.items.get_mut(index) {
                    item.set_hovered(hovered, timeline, &self.timing);
                }
            }
        }
    }

    /// Reacts to tracks that finished this frame.
    pub fn on_completed(
        &mut self,
        timeline: &mut Timeline<TrackKey>,
        completed: &[TrackKey],
        hover: &mut HoverTracker,
        social: &mut HoverTracker,
    ) {
        if !completed.contains(&TrackKey::PanelClip) {
            return;
        }
        match self.phase {
            PanelPhase::Entering => self.set_phase(PanelPhase::Visible),
            PanelPhase::Exiting => self.unmount(timeline, hover, social),
            PanelPhase::Hidden | PanelPhase::Visible => {}
        }
    }

    /// Recomputes the active marker of every mounted item.
    pub fn refresh_route(&mut self, route: &str) {
        for item in &mut self.items {
            item.refresh_route(route);
        }
    }

    fn open(
        &mut self,
        timeline: &mut Timeline<TrackKey>,
        hover: &mut HoverTracker,
        social: &mut HoverTracker,
        config: &NavConfig,
        route: &str,
    ) {
        match self.phase {
            PanelPhase::Hidden => {
                timeline.mount(TrackKey::PanelClip, PropertyKind::ClipReveal, 0.0);
                timeline.animate(&TrackKey::PanelClip, 1.0, self.transition);

                self.items = config
                    .nav
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| MenuItem::from_entry(index, entry, config, route, &self.timing))
                    .collect();
                for item in &mut self.items {
                    item.mount(timeline, &self.timing);
                }

                hover.set_rendered(self.items.len());
                social.set_rendered(config.social.len());
                self.hover_events = Some(hover.subscribe());
                self.set_phase(PanelPhase::Entering);
            }
            PanelPhase::Exiting => {
                timeline.animate(&TrackKey::PanelClip, 1.0, self.transition);
                self.set_phase(PanelPhase::Entering);
            }
            PanelPhase::Entering | PanelPhase::Visible => return,
        }

        if !timeline.is_animating(&TrackKey::PanelClip) {
            self.set_phase(PanelPhase::Visible);
        }
    }

    fn close(&mut self, timeline: &mut Timeline<TrackKey>, hover: &mut HoverTracker, social: &mut HoverTracker) {
        if !matches!(self.phase, PanelPhase::Entering | PanelPhase::Visible) {
            return;
        }
        timeline.animate(&TrackKey::PanelClip, 0.0, self.transition);
        self.set_phase(PanelPhase::Exiting);

        if !timeline.is_animating(&TrackKey::PanelClip) {
            self.unmount(timeline, hover, social);
        }
    }

    fn unmount(&mut self, timeline: &mut Timeline<TrackKey>, hover: &mut HoverTracker, social: &mut HoverTracker) {
        let mut removed = 0;
        for item in &mut self.items {
            removed += item.unmount(timeline);
        }
        timeline.unmount(&TrackKey::PanelClip);
        self.items.clear();

        // Drop the subscription before resetting so the reset is not replayed.
        self.hover_events = None;
        hover.set_rendered(0);
        social.set_rendered(0);

        tracing::debug!(tracks = removed, "menu items unmounted");
        self.set_phase(PanelPhase::Hidden);
    }

    fn set_phase(&mut self, phase: PanelPhase) {
        if self.phase != phase {
            tracing::info!(from = ?self.phase, to = ?phase, "panel phase");
            self.phase = phase;
        }
    }
}
