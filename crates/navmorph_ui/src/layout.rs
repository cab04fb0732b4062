//! Layout of the toggle and the overlay contents.
//!
//! Positions are computed once per config and viewport; animation never
//! moves a hit area, only what is drawn inside it.

use unicode_segmentation::UnicodeSegmentation;

use crate::config::NavConfig;
use crate::input::Target;

/// Outer margin around everything (px).
pub const PADDING: f32 = 48.0;
/// Side of the toggle's hit area (px).
pub const TOGGLE_SIZE: f32 = 48.0;
/// Line height of a regular menu item (px).
pub const LINE_HEIGHT: f32 = 96.0;
/// Line height of a compact menu item (px).
pub const COMPACT_LINE_HEIGHT: f32 = 48.0;
/// Line height of a social link (px).
pub const SOCIAL_LINE_HEIGHT: f32 = 24.0;
/// Glyph advance as a fraction of line height.
pub const GLYPH_RATIO: f32 = 0.6;
/// Space between stacked items (px).
pub const ITEM_GAP: f32 = 8.0;
/// Space between social links (px).
pub const SOCIAL_GAP: f32 = 32.0;

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Returns true if the point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Keeps the top `fraction` of the rectangle.
    #[must_use]
    pub fn top_fraction(&self, fraction: f32) -> Self {
        Self::new(self.x, self.y, self.width, self.height * fraction.clamp(0.0, 1.0))
    }
}

/// Width of a label set at `line_height`.
#[must_use]
pub fn text_width(label: &str, line_height: f32) -> f32 {
    label.graphemes(true).count() as f32 * line_height * GLYPH_RATIO
}

/// Rectangles of everything interactive.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuLayout {
    /// Whole screen.
    pub viewport: Rect,
    /// Toggle control, top right.
    pub toggle: Rect,
    /// Full-bleed panel.
    pub panel: Rect,
    /// One rect per nav entry, stacked from the top.
    pub items: Vec<Rect>,
    /// One rect per social link, in a row along the bottom.
    pub socials: Vec<Rect>,
}

impl MenuLayout {
    /// Lays out the config's entries in its viewport.
    #[must_use]
    pub fn compute(config: &NavConfig) -> Self {
        let viewport = Rect::new(0.0, 0.0, config.viewport.width, config.viewport.height);
        let toggle = Rect::new(
            viewport.right() - PADDING - TOGGLE_SIZE,
            PADDING,
            TOGGLE_SIZE,
            TOGGLE_SIZE,
        );

        let mut y = toggle.bottom() + PADDING;
        let items = config
            .nav
            .iter()
            .map(|entry| {
                let line = if config.is_compact(entry) {
                    COMPACT_LINE_HEIGHT
                } else {
                    LINE_HEIGHT
                };
                let rect = Rect::new(PADDING, y, text_width(&entry.title, line), line);
                y += line + ITEM_GAP;
                rect
            })
            .collect();

        let social_y = viewport.bottom() - PADDING - SOCIAL_LINE_HEIGHT;
        let mut x = PADDING;
        let socials = config
            .social
            .iter()
            .map(|entry| {
                let rect = Rect::new(
                    x,
                    social_y,
                    text_width(&entry.title, SOCIAL_LINE_HEIGHT),
                    SOCIAL_LINE_HEIGHT,
                );
                x = rect.right() + SOCIAL_GAP;
                rect
            })
            .collect();

        Self {
            viewport,
            toggle,
            panel: viewport,
            items,
            socials,
        }
    }

    /// Panel region revealed at `coverage` (0 = zero-height band, 1 = full).
    #[must_use]
    pub fn clip_rect(&self, coverage: f32) -> Rect {
        self.panel.top_fraction(coverage)
    }

    /// What is under the pointer.
    ///
    /// The toggle always wins. Items and social links only count while the
    /// menu is mounted.
    #[must_use]
    pub fn hit_test(&self, x: f32, y: f32, menu_mounted: bool) -> Option<Target> {
        if self.toggle.contains(x, y) {
            return Some(Target::Toggle);
        }
        if !menu_mounted {
            return None;
        }
        if let Some(index) = self.items.iter().position(|rect| rect.contains(x, y)) {
            return Some(Target::Nav(index));
        }
        self.socials
            .iter()
            .position(|rect| rect.contains(x, y))
            .map(Target::Social)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(50.0, 30.0));
        assert!(!rect.contains(5.0, 30.0));
        assert!(!rect.contains(50.0, 80.0));
    }

    #[test]
    fn test_compact_entry_is_shorter() {
        let config = NavConfig::builtin().unwrap();
        let layout = MenuLayout::compute(&config);
        assert_eq!(layout.items.len(), 5);
        assert_eq!(layout.items[2].height, COMPACT_LINE_HEIGHT);
        assert_eq!(layout.items[1].height, LINE_HEIGHT);
        assert!(layout.items[3].y > layout.items[2].bottom());
    }

    #[test]
    fn test_hit_test_respects_mount() {
        let config = NavConfig::builtin().unwrap();
        let layout = MenuLayout::compute(&config);
        let (x, y) = layout.items[1].center();
        assert_eq!(layout.hit_test(x, y, false), None);
        assert_eq!(layout.hit_test(x, y, true), Some(Target::Nav(1)));

        let (x, y) = layout.toggle.center();
        assert_eq!(layout.hit_test(x, y, true), Some(Target::Toggle));

        let (x, y) = layout.socials[0].center();
        assert_eq!(layout.hit_test(x, y, true), Some(Target::Social(0)));
    }

    #[test]
    fn test_clip_rect_grows_from_top() {
        let layout = MenuLayout::compute(&NavConfig::default());
        assert_eq!(layout.clip_rect(0.0).height, 0.0);
        assert_eq!(layout.clip_rect(0.5).height, 450.0);
        assert_eq!(layout.clip_rect(2.0), layout.panel);
    }
}
