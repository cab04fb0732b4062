//! Pointer input.
//!
//! Turns raw pointer events into overlay actions by hit-testing against the
//! layout. Hover enter/leave pairs come out in the order a fast pointer
//! produces them: the new item's enter before the old item's leave.

use crate::layout::MenuLayout;

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

/// Something the pointer can be over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The menu toggle.
    Toggle,
    /// A nav entry, by index.
    Nav(usize),
    /// A social link, by index.
    Social(usize),
}

impl Target {
    /// Returns true for targets with a hover effect.
    #[must_use]
    pub const fn is_hoverable(self) -> bool {
        matches!(self, Self::Nav(_) | Self::Social(_))
    }
}

/// Raw pointer input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved to a position.
    Moved {
        /// X position.
        x: f32,
        /// Y position.
        y: f32,
    },
    /// A button was pressed at a position.
    Pressed {
        /// X position.
        x: f32,
        /// Y position.
        y: f32,
        /// Which button.
        button: MouseButton,
    },
    /// Pointer left the window.
    Left,
}

/// What the overlay should do in response to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Open or close the menu.
    Toggle,
    /// Pointer entered a target.
    HoverStart(Target),
    /// Pointer left a target.
    HoverEnd(Target),
    /// A link was activated.
    Follow(Target),
}

/// Pointer state between events.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    /// Last known position.
    pub position: Option<(f32, f32)>,
    hovered: Option<Target>,
}

impl PointerTracker {
    /// Creates a tracker with no pointer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Target the pointer is currently over, if it has a hover effect.
    #[must_use]
    pub fn hovered(&self) -> Option<Target> {
        self.hovered
    }

    /// Forgets the hovered target without emitting a leave.
    pub fn reset(&mut self) {
        self.hovered = None;
    }

    /// Processes one event.
    pub fn handle(&mut self, event: PointerEvent, layout: &MenuLayout, mounted: bool) -> Vec<UiAction> {
        match event {
            PointerEvent::Moved { x, y } => {
                self.position = Some((x, y));
                let next = layout
                    .hit_test(x, y, mounted)
                    .filter(|target| target.is_hoverable());
                self.retarget(next)
            }
            PointerEvent::Pressed { x, y, button } => {
                self.position = Some((x, y));
                if button != MouseButton::Left {
                    return Vec::new();
                }
                match layout.hit_test(x, y, mounted) {
                    Some(Target::Toggle) => vec![UiAction::Toggle],
                    Some(target) => vec![UiAction::Follow(target)],
                    None => Vec::new(),
                }
            }
            PointerEvent::Left => {
                self.position = None;
                self.retarget(None)
            }
        }
    }

    fn retarget(&mut self, next: Option<Target>) -> Vec<UiAction> {
        if next == self.hovered {
            return Vec::new();
        }
        let mut actions = Vec::with_capacity(2);
        if let Some(target) = next {
            actions.push(UiAction::HoverStart(target));
        }
        if let Some(previous) = self.hovered {
            actions.push(UiAction::HoverEnd(previous));
        }
        self.hovered = next;
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavConfig;

    fn layout() -> MenuLayout {
        MenuLayout::compute(&NavConfig::builtin().unwrap())
    }

    fn moved((x, y): (f32, f32)) -> PointerEvent {
        PointerEvent::Moved { x, y }
    }

    #[test]
    fn test_fast_move_enters_before_leaving() {
        let layout = layout();
        let mut pointer = PointerTracker::new();

        let first = pointer.handle(moved(layout.items[0].center()), &layout, true);
        assert_eq!(first, vec![UiAction::HoverStart(Target::Nav(0))]);

        let second = pointer.handle(moved(layout.items[1].center()), &layout, true);
        assert_eq!(
            second,
            vec![
                UiAction::HoverStart(Target::Nav(1)),
                UiAction::HoverEnd(Target::Nav(0)),
            ]
        );
    }

    #[test]
    fn test_moving_within_item_is_quiet() {
        let layout = layout();
        let mut pointer = PointerTracker::new();
        let rect = layout.items[0];
        pointer.handle(moved((rect.x + 1.0, rect.y + 1.0)), &layout, true);
        let actions = pointer.handle(moved((rect.x + 2.0, rect.y + 2.0)), &layout, true);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_leaving_window_ends_hover() {
        let layout = layout();
        let mut pointer = PointerTracker::new();
        pointer.handle(moved(layout.socials[1].center()), &layout, true);
        let actions = pointer.handle(PointerEvent::Left, &layout, true);
        assert_eq!(actions, vec![UiAction::HoverEnd(Target::Social(1))]);
        assert_eq!(pointer.hovered(), None);
    }

    #[test]
    fn test_press_on_toggle() {
        let layout = layout();
        let mut pointer = PointerTracker::new();
        let (x, y) = layout.toggle.center();
        let press = PointerEvent::Pressed {
            x,
            y,
            button: MouseButton::Left,
        };
        assert_eq!(pointer.handle(press, &layout, false), vec![UiAction::Toggle]);

        let right = PointerEvent::Pressed {
            x,
            y,
            button: MouseButton::Right,
        };
        assert!(pointer.handle(right, &layout, false).is_empty());
    }

    #[test]
    fn test_items_inert_while_unmounted() {
        let layout = layout();
        let mut pointer = PointerTracker::new();
        let actions = pointer.handle(moved(layout.items[0].center()), &layout, false);
        assert!(actions.is_empty());
    }
}
