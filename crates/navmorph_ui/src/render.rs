//! Render output.
//!
//! The overlay renders to a flat, ordered command list. Nesting is expressed
//! with begin/end and push/pop pairs, so the list reads like a small DOM.

use crate::input::Target;
use crate::item::ItemFlags;
use crate::layout::Rect;
use crate::letters::Layer;
use crate::toggle::{DrawRange, IconPath};

/// A render command for the overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// The toggle control's backing circle.
    Toggle {
        /// Hit area.
        bounds: Rect,
        /// Circle diameter (rem).
        circle_diameter: f32,
        /// Entrance offset (px, positive is down).
        offset_y: f32,
        /// Entrance opacity.
        opacity: f32,
    },
    /// One stroked icon path.
    StrokePath {
        /// Which path.
        path: IconPath,
        /// Visible window of the stroke.
        draw: DrawRange,
    },
    /// Clip children to a rect.
    PushClip {
        /// Clip bounds.
        bounds: Rect,
    },
    /// Pop the clip rect.
    PopClip,
    /// Start of a nav link.
    BeginItem {
        /// Item index.
        index: usize,
        /// Link target.
        href: String,
        /// Active / compact / hovered.
        flags: ItemFlags,
        /// Hit area.
        bounds: Rect,
    },
    /// One glyph on one layer.
    Glyph {
        /// Text to draw (whitespace already replaced).
        text: String,
        /// Primary or shadow.
        layer: Layer,
        /// Left edge (px).
        x: f32,
        /// Baseline top (px).
        y: f32,
        /// Vertical offset in line heights.
        offset: f32,
    },
    /// End of a nav link.
    EndItem,
    /// A social link.
    SocialLink {
        /// Link index.
        index: usize,
        /// Link target.
        href: String,
        /// Label.
        label: String,
        /// Hit area.
        bounds: Rect,
        /// Pointer is over the link.
        hovered: bool,
    },
}

impl RenderCommand {
    /// Link target this command activates, if any.
    #[must_use]
    pub fn target(&self) -> Option<Target> {
        match self {
            Self::Toggle { .. } => Some(Target::Toggle),
            Self::BeginItem { index, .. } => Some(Target::Nav(*index)),
            Self::SocialLink { index, .. } => Some(Target::Social(*index)),
            _ => None,
        }
    }
}

/// Collects one frame of commands.
#[derive(Debug, Default)]
pub struct CommandBuffer {
    commands: Vec<RenderCommand>,
    clip_stack: Vec<Rect>,
}

impl CommandBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
            clip_stack: Vec::with_capacity(4),
        }
    }

    /// Adds a command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Pushes a clip rect.
    pub fn push_clip(&mut self, bounds: Rect) {
        self.clip_stack.push(bounds);
        self.commands.push(RenderCommand::PushClip { bounds });
    }

    /// Pops the current clip rect. Unbalanced pops are ignored.
    pub fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_some() {
            self.commands.push(RenderCommand::PopClip);
        }
    }

    /// Innermost clip rect.
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Number of commands so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if nothing was pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Closes open clips and returns the frame.
    #[must_use]
    pub fn finish(mut self) -> Vec<RenderCommand> {
        while self.clip_stack.pop().is_some() {
            self.commands.push(RenderCommand::PopClip);
        }
        self.commands
    }
}
