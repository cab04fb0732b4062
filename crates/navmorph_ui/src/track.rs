//! Timeline keys for every animated property of the overlay.

use crate::letters::Layer;
use crate::toggle::IconPath;

/// Identifies one track on the overlay's timeline.
///
/// Each key has exactly one writer, so concurrent animations never fight
/// over a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TrackKey {
    /// Start of a path's visible window.
    PathStart(IconPath),
    /// End of a path's visible window.
    PathEnd(IconPath),
    /// Diameter of the toggle's backing circle.
    Circle,
    /// Entrance offset of the toggle.
    IconOffset,
    /// Entrance opacity of the toggle.
    IconOpacity,
    /// Revealed fraction of the overlay panel.
    PanelClip,
    /// Vertical offset of one glyph on one layer.
    Letter {
        /// Menu item index.
        item: usize,
        /// Glyph index within the label.
        cell: usize,
        /// Primary or shadow layer.
        layer: Layer,
    },
}

impl TrackKey {
    /// Returns true for glyph tracks.
    #[must_use]
    pub const fn is_letter(&self) -> bool {
        matches!(self, Self::Letter { .. })
    }

    /// Returns the item a glyph track belongs to.
    #[must_use]
    pub const fn item(&self) -> Option<usize> {
        match self {
            Self::Letter { item, .. } => Some(*item),
            _ => None,
        }
    }
}
