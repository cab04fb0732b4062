//! Hover tracking.
//!
//! Holds which item, if any, the pointer is over. At most one index is set
//! at a time and it always refers to a rendered item.

use navmorph_core::{Signal, Subscription};

/// Owner of the "currently hovered index" state for one list.
#[derive(Debug)]
pub struct HoverTracker {
    state: Signal<Option<usize>>,
    rendered: usize,
    name: &'static str,
}

impl HoverTracker {
    /// Creates a tracker with nothing rendered.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            state: Signal::new(None),
            rendered: 0,
            name,
        }
    }

    /// Currently hovered index.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        *self.state.get()
    }

    /// Number of rendered items the index is bounded by.
    #[must_use]
    pub fn rendered(&self) -> usize {
        self.rendered
    }

    /// Pointer entered item `index`.
    ///
    /// Returns true if the hovered index changed.
    pub fn on_hover_start(&mut self, index: usize) -> bool {
        if index >= self.rendered {
            tracing::debug!(list = self.name, index, rendered = self.rendered, "hover outside rendered list ignored");
            return false;
        }
        let changed = self.state.set(Some(index));
        if changed {
            tracing::debug!(list = self.name, index, "hover start");
        }
        changed
    }

    /// Pointer left item `index`.
    ///
    /// Only clears the state while `index` still owns it; a late leave from
    /// an item the pointer already moved away from changes nothing.
    pub fn on_hover_end(&mut self, index: usize) -> bool {
        if self.hovered() != Some(index) {
            return false;
        }
        tracing::debug!(list = self.name, index, "hover end");
        self.state.set(None)
    }

    /// Updates the rendered item count, dropping an index that fell out of range.
    pub fn set_rendered(&mut self, count: usize) {
        self.rendered = count;
        if self.hovered().is_some_and(|index| index >= count) {
            self.state.set(None);
        }
    }

    /// Forgets the hovered index.
    pub fn clear(&mut self) -> bool {
        self.state.set(None)
    }

    /// Subscribes to hover changes.
    pub fn subscribe(&mut self) -> Subscription<Option<usize>> {
        self.state.subscribe()
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.state.listener_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(count: usize) -> HoverTracker {
        let mut tracker = HoverTracker::new("nav");
        tracker.set_rendered(count);
        tracker
    }

    #[test]
    fn test_start_then_end_clears() {
        let mut hover = tracker(3);
        assert!(hover.on_hover_start(1));
        assert_eq!(hover.hovered(), Some(1));
        assert!(hover.on_hover_end(1));
        assert_eq!(hover.hovered(), None);
    }

    #[test]
    fn test_repeat_start_is_noop() {
        let mut hover = tracker(3);
        let events = hover.subscribe();
        assert!(hover.on_hover_start(2));
        assert!(!hover.on_hover_start(2));
        assert_eq!(events.drain().len(), 1);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut hover = tracker(2);
        assert!(!hover.on_hover_start(2));
        assert_eq!(hover.hovered(), None);

        let mut empty = tracker(0);
        assert!(!empty.on_hover_start(0));
    }

    #[test]
    fn test_stale_end_ignored() {
        let mut hover = tracker(3);
        hover.on_hover_start(0);
        hover.on_hover_start(1);
        assert!(!hover.on_hover_end(0));
        assert_eq!(hover.hovered(), Some(1));
    }

    #[test]
    fn test_shrinking_list_drops_index() {
        let mut hover = tracker(5);
        hover.on_hover_start(4);
        hover.set_rendered(4);
        assert_eq!(hover.hovered(), None);
    }
}
