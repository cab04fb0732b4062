//! Menu items.
//!
//! A [`MenuItem`] is one rendered nav entry: its variant flags, its glyph
//! cells, and the letter targets last sent to the timeline. New targets are
//! diffed against those before anything is retargeted.

use navmorph_core::{PropertyKind, Timeline};

use crate::config::{NavConfig, NavEntry};
use crate::letters::{self, Layer, LetterCell, LetterDescriptor, LetterTiming};
use crate::track::TrackKey;

/// Item variant flags (bitfield).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemFlags(u32);

impl ItemFlags {
    /// Entry route equals the current route.
    pub const ACTIVE: u32 = 1 << 0;
    /// Entry renders in the smaller secondary style.
    pub const COMPACT: u32 = 1 << 1;
    /// Pointer is over the entry.
    pub const HOVERED: u32 = 1 << 2;

    /// Creates empty flags.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Returns true if the flag is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    /// Sets a flag.
    #[inline]
    pub fn set(&mut self, flag: u32) {
        self.0 |= flag;
    }

    /// Clears a flag.
    #[inline]
    pub fn clear(&mut self, flag: u32) {
        self.0 &= !flag;
    }

    /// Sets or clears a flag.
    #[inline]
    pub fn assign(&mut self, flag: u32, on: bool) {
        if on {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }
}

/// One rendered nav entry.
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// Position in the rendered list.
    pub index: usize,
    /// Entry identifier.
    pub id: String,
    /// Label text.
    pub label: String,
    /// Link destination.
    pub href: String,
    /// Variant flags.
    pub flags: ItemFlags,
    /// Glyph cells of the label.
    pub cells: Vec<LetterCell>,
    /// Targets last applied to the timeline, one per cell.
    applied: Vec<LetterDescriptor>,
}

impl MenuItem {
    /// Builds the item for `entry` at `index`.
    #[must_use]
    pub fn from_entry(
        index: usize,
        entry: &NavEntry,
        config: &NavConfig,
        route: &str,
        timing: &LetterTiming,
    ) -> Self {
        let mut flags = ItemFlags::new();
        flags.assign(ItemFlags::ACTIVE, entry.is_active(route));
        flags.assign(ItemFlags::COMPACT, config.is_compact(entry));

        Self {
            index,
            id: entry.id.clone(),
            label: entry.title.clone(),
            href: entry.path.clone(),
            flags,
            cells: letters::split_letters(&entry.title, index, timing),
            applied: Vec::new(),
        }
    }

    /// Returns true if the entry matches the current route.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.flags.has(ItemFlags::ACTIVE)
    }

    /// Returns true if the entry uses the compact variant.
    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.flags.has(ItemFlags::COMPACT)
    }

    /// Returns true while hovered.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.flags.has(ItemFlags::HOVERED)
    }

    /// Timeline key of one glyph layer.
    #[must_use]
    pub fn key(&self, cell: usize, layer: Layer) -> TrackKey {
        TrackKey::Letter {
            item: self.index,
            cell,
            layer,
        }
    }

    /// Mounts every glyph one line below the baseline and starts the entrance.
    pub fn mount(&mut self, timeline: &mut Timeline<TrackKey>, timing: &LetterTiming) {
        for cell in 0..self.cells.len() {
            for layer in Layer::ALL {
                timeline.mount(self.key(cell, layer), PropertyKind::TranslateY, timing.swap_offset);
            }
        }
        self.applied.clear();
        let burst = letters::entrance(&self.label, self.index, timing);
        self.apply(timeline, &burst);
    }

    /// Removes every glyph track of this item.
    pub fn unmount(&mut self, timeline: &mut Timeline<TrackKey>) -> usize {
        let index = self.index;
        self.applied.clear();
        timeline.unmount_where(|key| key.item() == Some(index))
    }

    /// Retargets the glyph layers whose target changed.
    ///
    /// Returns the number of tracks retargeted.
    pub fn apply(&mut self, timeline: &mut Timeline<TrackKey>, burst: &[LetterDescriptor]) -> usize {
        let mut retargeted = 0;
        for descriptor in burst {
            let previous = self.applied.get(descriptor.cell).copied();
            for layer in Layer::ALL {
                let next = descriptor.layer(layer);
                let unchanged = previous
                    .map(|prev| prev.layer(layer))
                    .is_some_and(|prev| (prev.y - next.y).abs() <= f32::EPSILON);
                if unchanged {
                    continue;
                }
                timeline.animate(&self.key(descriptor.cell, layer), next.y, next.transition);
                retargeted += 1;
            }
        }

        for descriptor in burst {
            if descriptor.cell < self.applied.len() {
                self.applied[descriptor.cell] = *descriptor;
            } else if descriptor.cell == self.applied.len() {
                self.applied.push(*descriptor);
            }
        }
        retargeted
    }

    /// Switches the hover burst on or off.
    pub fn set_hovered(
        &mut self,
        hovered: bool,
        timeline: &mut Timeline<TrackKey>,
        timing: &LetterTiming,
    ) -> usize {
        self.flags.assign(ItemFlags::HOVERED, hovered);
        let burst = letters::hover(&self.label, self.index, hovered, timing);
        let retargeted = self.apply(timeline, &burst);
        tracing::debug!(item = self.index, hovered, retargeted, "hover burst");
        retargeted
    }

    /// Recomputes the active flag for a new route.
    pub fn refresh_route(&mut self, route: &str) {
        let active = self.href == route;
        self.flags.assign(ItemFlags::ACTIVE, active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, title: &str, path: &str) -> NavEntry {
        NavEntry {
            id: id.to_string(),
            title: title.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_flags() {
        let mut flags = ItemFlags::new();
        flags.set(ItemFlags::ACTIVE);
        flags.assign(ItemFlags::COMPACT, true);
        assert!(flags.has(ItemFlags::ACTIVE));
        assert!(flags.has(ItemFlags::COMPACT));
        flags.clear(ItemFlags::ACTIVE);
        assert!(!flags.has(ItemFlags::ACTIVE));
    }

    #[test]
    fn test_compact_and_active_together() {
        let config = NavConfig::default();
        let item = MenuItem::from_entry(
            2,
            &entry("discography", "Discography", "/discography"),
            &config,
            "/discography",
            &LetterTiming::default(),
        );
        assert!(item.is_active());
        assert!(item.is_compact());
    }

    #[test]
    fn test_repeated_hover_retargets_nothing() {
        let timing = LetterTiming::default();
        let mut timeline = Timeline::new();
        let mut item = MenuItem::from_entry(
            0,
            &entry("tour", "Tour", "/tour"),
            &NavConfig::default(),
            "/",
            &timing,
        );
        item.mount(&mut timeline, &timing);
        assert_eq!(timeline.len(), 8);

        assert_eq!(item.set_hovered(true, &mut timeline, &timing), 8);
        assert_eq!(item.set_hovered(true, &mut timeline, &timing), 0);
        assert_eq!(item.set_hovered(false, &mut timeline, &timing), 8);
    }

    #[test]
    fn test_unmount_removes_only_own_tracks() {
        let timing = LetterTiming::default();
        let config = NavConfig::default();
        let mut timeline = Timeline::new();
        let mut first = MenuItem::from_entry(0, &entry("a", "Ab", "/a"), &config, "/", &timing);
        let mut second = MenuItem::from_entry(1, &entry("b", "Cd", "/b"), &config, "/", &timing);
        first.mount(&mut timeline, &timing);
        second.mount(&mut timeline, &timing);

        assert_eq!(first.unmount(&mut timeline), 4);
        assert_eq!(timeline.len(), 4);
    }
}
