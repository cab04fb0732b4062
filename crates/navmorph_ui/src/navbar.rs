//! The navigation overlay as one unit.
//!
//! [`Navbar`] owns the timeline and every piece of state. Each operation
//! flushes pending changes before returning, so state is observable right
//! after the call.

use navmorph_core::Timeline;

use crate::config::NavConfig;
use crate::hover::HoverTracker;
use crate::input::{PointerEvent, PointerTracker, Target, UiAction};
use crate::item::MenuItem;
use crate::layout::{MenuLayout, GLYPH_RATIO};
use crate::letters::Layer;
use crate::panel::{OverlayPanel, PanelPhase};
use crate::render::{CommandBuffer, RenderCommand};
use crate::toggle::{DrawRange, IconPath, ToggleController, ToggleOutcome};
use crate::track::TrackKey;

/// Animated navigation overlay.
#[derive(Debug)]
pub struct Navbar {
    config: NavConfig,
    route: String,
    layout: MenuLayout,
    timeline: Timeline<TrackKey>,
    toggle: ToggleController,
    hover: HoverTracker,
    social_hover: HoverTracker,
    panel: OverlayPanel,
    pointer: PointerTracker,
}

impl Navbar {
    /// Mounts the toggle and starts its entrance.
    #[must_use]
    pub fn new(config: NavConfig, route: impl Into<String>) -> Self {
        navmorph_core::init();

        let mut toggle = ToggleController::new(config.motion.icon.clone());
        let panel = OverlayPanel::new(&mut toggle, &config.motion);
        let mut timeline = Timeline::new();
        toggle.mount(&mut timeline);

        Self {
            layout: MenuLayout::compute(&config),
            route: route.into(),
            config,
            timeline,
            toggle,
            hover: HoverTracker::new("nav"),
            social_hover: HoverTracker::new("social"),
            panel,
            pointer: PointerTracker::new(),
        }
    }

    /// Opens or closes the menu.
    pub fn toggle(&mut self) -> ToggleOutcome {
        let outcome = self.toggle.toggle(&mut self.timeline);
        self.sync();
        outcome
    }

    /// Pointer entered nav item `index`.
    pub fn hover_start(&mut self, index: usize) -> bool {
        let changed = self.hover.on_hover_start(index);
        self.sync();
        changed
    }

    /// Pointer left nav item `index`.
    pub fn hover_end(&mut self, index: usize) -> bool {
        let changed = self.hover.on_hover_end(index);
        self.sync();
        changed
    }

    /// Pointer entered social link `index`.
    pub fn social_hover_start(&mut self, index: usize) -> bool {
        self.social_hover.on_hover_start(index)
    }

    /// Pointer left social link `index`.
    pub fn social_hover_end(&mut self, index: usize) -> bool {
        self.social_hover.on_hover_end(index)
    }

    /// Feeds a raw pointer event through hit testing and applies the result.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Vec<UiAction> {
        let mounted = self.panel.phase().is_mounted();
        let actions = self.pointer.handle(event, &self.layout, mounted);
        for action in &actions {
            self.apply(*action);
        }
        actions
    }

    /// Applies one action.
    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::Toggle => {
                self.toggle();
            }
            UiAction::HoverStart(Target::Nav(index)) => {
                self.hover_start(index);
            }
            UiAction::HoverEnd(Target::Nav(index)) => {
                self.hover_end(index);
            }
            UiAction::HoverStart(Target::Social(index)) => {
                self.social_hover_start(index);
            }
            UiAction::HoverEnd(Target::Social(index)) => {
                self.social_hover_end(index);
            }
            UiAction::HoverStart(Target::Toggle) | UiAction::HoverEnd(Target::Toggle) => {}
            UiAction::Follow(target) => self.follow(target),
        }
    }

    fn follow(&mut self, target: Target) {
        match target {
            Target::Toggle => {
                self.toggle();
            }
            Target::Nav(index) => {
                let Some(path) = self.config.nav.get(index).map(|entry| entry.path.clone()) else {
                    return;
                };
                tracing::info!(%path, "nav link followed");
                self.set_route(path);
                if self.is_open() {
                    self.toggle();
                }
            }
            Target::Social(index) => {
                if let Some(entry) = self.config.social.get(index) {
                    tracing::info!(url = %entry.url, "social link followed");
                }
            }
        }
    }

    /// Changes the current route and refreshes active markers.
    pub fn set_route(&mut self, route: impl Into<String>) {
        self.route = route.into();
        self.panel.refresh_route(&self.route);
    }

    /// Advances every animation by `dt` seconds.
    ///
    /// Returns the number of tracks that came to rest.
    pub fn tick(&mut self, dt: f32) -> usize {
        let completed = self.timeline.tick(dt);
        self.panel.on_completed(
            &mut self.timeline,
            &completed,
            &mut self.hover,
            &mut self.social_hover,
        );
        self.sync();
        if !self.panel.phase().is_mounted() {
            self.pointer.reset();
        }
        completed.len()
    }

    /// Ticks until nothing moves or `max_frames` is reached.
    ///
    /// Returns the number of frames ticked.
    pub fn settle(&mut self, dt: f32, max_frames: u32) -> u32 {
        let mut frames = 0;
        while frames < max_frames && !self.timeline.is_idle() {
            self.tick(dt);
            frames += 1;
        }
        frames
    }

    fn sync(&mut self) {
        self.panel.sync(
            &mut self.timeline,
            &mut self.hover,
            &mut self.social_hover,
            &self.config,
            &self.route,
        );
    }

    fn value(&self, key: TrackKey, fallback: f32) -> f32 {
        self.timeline.value(&key).unwrap_or(fallback)
    }

    /// Renders the current frame.
    #[must_use]
    pub fn render(&self) -> Vec<RenderCommand> {
        let motion = self.toggle.motion();
        let mut buffer = CommandBuffer::new();

        buffer.push(RenderCommand::Toggle {
            bounds: self.layout.toggle,
            circle_diameter: self.value(TrackKey::Circle, motion.circle_closed),
            offset_y: self.value(TrackKey::IconOffset, 0.0),
            opacity: self.value(TrackKey::IconOpacity, 1.0),
        });
        for path in IconPath::ALL {
            buffer.push(RenderCommand::StrokePath {
                path,
                draw: DrawRange::new(
                    self.value(TrackKey::PathStart(path), motion.collapsed.start),
                    self.value(TrackKey::PathEnd(path), motion.collapsed.end),
                ),
            });
        }

        if !self.panel.phase().is_mounted() {
            return buffer.finish();
        }

        buffer.push_clip(self.layout.clip_rect(self.panel.clip_coverage(&self.timeline)));
        for item in self.panel.items() {
            self.render_item(&mut buffer, item);
        }
        for (index, (entry, bounds)) in self.config.social.iter().zip(&self.layout.socials).enumerate() {
            buffer.push(RenderCommand::SocialLink {
                index,
                href: entry.url.clone(),
                label: entry.title.clone(),
                bounds: *bounds,
                hovered: self.social_hover.hovered() == Some(index),
            });
        }
        buffer.pop_clip();
        buffer.finish()
    }

    fn render_item(&self, buffer: &mut CommandBuffer, item: &MenuItem) {
        let bounds = self.layout.items.get(item.index).copied().unwrap_or_default();
        let advance = bounds.height * GLYPH_RATIO;
        let rest = self.config.motion.letters.swap_offset;

        buffer.push(RenderCommand::BeginItem {
            index: item.index,
            href: item.href.clone(),
            flags: item.flags,
            bounds,
        });
        for (cell, letter) in item.cells.iter().enumerate() {
            for layer in Layer::ALL {
                let fallback = match layer {
                    Layer::Primary => 0.0,
                    Layer::Shadow => rest,
                };
                buffer.push(RenderCommand::Glyph {
                    text: letter.display.clone(),
                    layer,
                    x: bounds.x + cell as f32 * advance,
                    y: bounds.y,
                    offset: self.value(item.key(cell, layer), fallback),
                });
            }
        }
        buffer.push(RenderCommand::EndItem);
    }

    /// Returns true while the menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.toggle.is_open()
    }

    /// Hovered nav item.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hover.hovered()
    }

    /// Hovered social link.
    #[must_use]
    pub fn social_hovered(&self) -> Option<usize> {
        self.social_hover.hovered()
    }

    /// Panel lifecycle phase.
    #[must_use]
    pub fn panel_phase(&self) -> PanelPhase {
        self.panel.phase()
    }

    /// Current value of one track.
    #[must_use]
    pub fn track_value(&self, key: TrackKey) -> Option<f32> {
        self.timeline.value(&key)
    }

    /// The timeline, for inspection.
    #[must_use]
    pub fn timeline(&self) -> &Timeline<TrackKey> {
        &self.timeline
    }

    /// Mounted menu items.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        self.panel.items()
    }

    /// Live subscriptions on the nav hover state.
    #[must_use]
    pub fn hover_listener_count(&self) -> usize {
        self.hover.listener_count()
    }

    /// Loaded configuration.
    #[must_use]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Current route.
    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Computed layout.
    #[must_use]
    pub fn layout(&self) -> &MenuLayout {
        &self.layout
    }
}
