//! Per-letter animation descriptors.
//!
//! Every label is split into glyph cells. Each cell has two stacked tracks:
//! the primary layer sits on the baseline, the shadow layer waits one line
//! below it. On hover the primary glyphs slide up out of view while the
//! shadow glyphs slide into their place, one letter after another.
//!
//! Offsets are in line heights: `0` is the baseline, `+1` one line below,
//! `-1` one line above.
//!
//! These functions are pure. Diffing against what is already running and
//! retargeting the timeline is the caller's job.

use navmorph_core::{Easing, Transition};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Non-breaking space, rendered in place of whitespace so cells keep their width.
pub const NBSP: char = '\u{00A0}';

/// Which of the two stacked glyph layers a track drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    /// Visible at rest.
    Primary,
    /// Hidden below at rest, revealed on hover.
    Shadow,
}

impl Layer {
    /// Both layers, bottom first.
    pub const ALL: [Self; 2] = [Self::Primary, Self::Shadow];
}

/// Timing shared by both layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterTiming {
    /// Duration of every glyph move (seconds).
    pub duration: f32,
    /// Curve of every glyph move.
    pub easing: Easing,
    /// Entrance delay of the first item (seconds).
    pub base_delay: f32,
    /// Extra entrance delay per item (seconds).
    pub item_step: f32,
    /// Delay between consecutive letters (seconds).
    pub stagger: f32,
    /// Distance between the layers (line heights).
    pub swap_offset: f32,
}

impl Default for LetterTiming {
    fn default() -> Self {
        Self {
            duration: 0.6,
            easing: Easing::bezier(0.63, 0.0, 0.0, 0.97),
            base_delay: 0.2,
            item_step: 0.05,
            stagger: 0.05,
            swap_offset: 1.0,
        }
    }
}

impl LetterTiming {
    /// Entrance delay of a whole item.
    #[must_use]
    pub fn item_delay(&self, item: usize) -> f32 {
        self.base_delay + item as f32 * self.item_step
    }

    /// Delay of one letter relative to its burst.
    #[must_use]
    pub fn letter_delay(&self, cell: usize) -> f32 {
        cell as f32 * self.stagger
    }

    fn transition(&self, delay: f32) -> Transition {
        Transition::new(self.duration, self.easing).with_delay(delay)
    }
}

/// One glyph of a label.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterCell {
    /// The grapheme as it appears in the label.
    pub glyph: String,
    /// What gets drawn: whitespace becomes [`NBSP`].
    pub display: String,
    /// Entrance delay of the owning item.
    pub base_delay: f32,
    /// Delay of this letter within a burst.
    pub stagger: f32,
    /// Distance between the layers.
    pub swap_offset: f32,
}

impl LetterCell {
    /// Returns true if the glyph is whitespace.
    #[must_use]
    pub fn is_space(&self) -> bool {
        self.glyph.chars().all(char::is_whitespace)
    }
}

/// Where one layer of a glyph should go, and how.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphTarget {
    /// Target offset in line heights.
    pub y: f32,
    /// Timing of the move.
    pub transition: Transition,
}

/// Targets for both layers of one glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterDescriptor {
    /// Glyph index within the label.
    pub cell: usize,
    /// Primary layer target.
    pub primary: GlyphTarget,
    /// Shadow layer target.
    pub shadow: GlyphTarget,
}

impl LetterDescriptor {
    /// Target for one layer.
    #[must_use]
    pub fn layer(&self, layer: Layer) -> GlyphTarget {
        match layer {
            Layer::Primary => self.primary,
            Layer::Shadow => self.shadow,
        }
    }
}

/// Splits a label into glyph cells, keeping order and length.
#[must_use]
pub fn split_letters(label: &str, item: usize, timing: &LetterTiming) -> Vec<LetterCell> {
    let base_delay = timing.item_delay(item);
    label
        .graphemes(true)
        .enumerate()
        .map(|(index, glyph)| {
            let display = if glyph.chars().all(char::is_whitespace) {
                NBSP.to_string()
            } else {
                glyph.to_string()
            };
            LetterCell {
                glyph: glyph.to_string(),
                display,
                base_delay,
                stagger: timing.letter_delay(index),
                swap_offset: timing.swap_offset,
            }
        })
        .collect()
}

/// Rebuilds the label from its cells.
#[must_use]
pub fn join_letters(cells: &[LetterCell]) -> String {
    cells.iter().map(|cell| cell.glyph.as_str()).collect()
}

/// Rebuilds the drawn text, reading [`NBSP`] back as a plain space.
#[must_use]
pub fn join_display(cells: &[LetterCell]) -> String {
    cells
        .iter()
        .flat_map(|cell| cell.display.chars())
        .map(|c| if c == NBSP { ' ' } else { c })
        .collect()
}

/// Entrance burst: primary glyphs rise from one line below to the baseline.
///
/// Each letter waits for the item's base delay plus its own stagger.
#[must_use]
pub fn entrance(label: &str, item: usize, timing: &LetterTiming) -> Vec<LetterDescriptor> {
    split_letters(label, item, timing)
        .iter()
        .enumerate()
        .map(|(cell, letter)| LetterDescriptor {
            cell,
            primary: GlyphTarget {
                y: 0.0,
                transition: timing.transition(letter.base_delay + letter.stagger),
            },
            shadow: GlyphTarget {
                y: letter.swap_offset,
                transition: timing.transition(letter.stagger),
            },
        })
        .collect()
}

/// Hover burst for one item.
///
/// Hovered: primary glyphs leave upward, shadow glyphs rise to the baseline.
/// Not hovered: both return to rest. Only the per-letter stagger applies;
/// the entrance base delay does not.
#[must_use]
pub fn hover(label: &str, item: usize, hovered: bool, timing: &LetterTiming) -> Vec<LetterDescriptor> {
    let swap = timing.swap_offset;
    let (primary_y, shadow_y) = if hovered { (-swap, 0.0) } else { (0.0, swap) };

    split_letters(label, item, timing)
        .iter()
        .enumerate()
        .map(|(cell, letter)| {
            let transition = timing.transition(letter.stagger);
            LetterDescriptor {
                cell,
                primary: GlyphTarget {
                    y: primary_y,
                    transition,
                },
                shadow: GlyphTarget {
                    y: shadow_y,
                    transition,
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_renders_as_nbsp() {
        let cells = split_letters("AB C", 0, &LetterTiming::default());
        let glyphs: Vec<&str> = cells.iter().map(|c| c.glyph.as_str()).collect();
        assert_eq!(glyphs, vec!["A", "B", " ", "C"]);
        assert_eq!(cells[2].display, NBSP.to_string());
        assert!(cells[2].is_space());
        assert_eq!(join_display(&cells), "AB C");
        assert_eq!(join_letters(&cells), "AB C");
    }

    #[test]
    fn test_empty_label_has_no_glyphs() {
        let timing = LetterTiming::default();
        assert!(split_letters("", 3, &timing).is_empty());
        assert!(entrance("", 3, &timing).is_empty());
        assert!(hover("", 3, true, &timing).is_empty());
    }

    #[test]
    fn test_graphemes_stay_whole() {
        let cells = split_letters("Cafe\u{301}", 0, &LetterTiming::default());
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[3].glyph, "e\u{301}");
    }

    #[test]
    fn test_entrance_delay_includes_item_base() {
        let timing = LetterTiming::default();
        let burst = entrance("Tour", 2, &timing);
        // 0.2 + 2 * 0.05 + 3 * 0.05
        assert!((burst[3].primary.transition.delay - 0.45).abs() < 1e-5);
        assert_eq!(burst[0].primary.y, 0.0);
        assert_eq!(burst[0].shadow.y, 1.0);
    }

    #[test]
    fn test_hover_drops_base_delay() {
        let timing = LetterTiming::default();
        let burst = hover("Tour", 4, true, &timing);
        assert_eq!(burst[0].primary.transition.delay, 0.0);
        assert!((burst[2].shadow.transition.delay - 0.1).abs() < 1e-6);
        assert_eq!(burst[1].primary.y, -1.0);
        assert_eq!(burst[1].shadow.y, 0.0);
    }

    #[test]
    fn test_unhover_returns_to_rest() {
        let burst = hover("Tour", 0, false, &LetterTiming::default());
        assert!(burst.iter().all(|d| d.primary.y == 0.0 && d.shadow.y == 1.0));
    }

    #[test]
    fn test_layers_share_timing() {
        let burst = hover("About", 1, true, &LetterTiming::default());
        for descriptor in burst {
            assert_eq!(descriptor.primary.transition, descriptor.shadow.transition);
        }
    }
}
