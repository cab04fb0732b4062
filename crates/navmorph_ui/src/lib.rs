//! # NAVMORPH Navigation Overlay
//!
//! A toggle that morphs its icon and reveals a full-bleed menu:
//! - Icon paths retarget mid-flight, never queue
//! - Letters rise in one after another, item by item
//! - Hover flips each label to its shadow copy, per item, independently
//! - The menu stays mounted until its exit reveal has fully run
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      OVERLAY PIPELINE                       │
//! ├────────────────────────────────────────────────────────────┤
//! │  PointerEvent → PointerTracker → UiAction                   │
//! │                                     ↓                       │
//! │  ToggleController ──Signal<bool>──> OverlayPanel            │
//! │  HoverTracker ──Signal<Option<usize>>──> MenuItem bursts    │
//! │                                     ↓                       │
//! │                Timeline<TrackKey>::tick → render()          │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut navbar = Navbar::new(NavConfig::builtin()?, "/");
//! navbar.toggle();
//! navbar.hover_start(0);
//! navbar.settle(1.0 / 60.0, 600);
//! let frame = navbar.render();
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod hover;
pub mod input;
pub mod item;
pub mod layout;
pub mod letters;
pub mod navbar;
pub mod panel;
pub mod render;
pub mod toggle;
pub mod track;

pub use config::{MotionConfig, NavConfig, NavEntry, SocialEntry, Viewport};
pub use error::{NavError, NavResult};
pub use hover::HoverTracker;
pub use input::{MouseButton, PointerEvent, PointerTracker, Target, UiAction};
pub use item::{ItemFlags, MenuItem};
pub use layout::{MenuLayout, Rect};
pub use letters::{Layer, LetterCell, LetterDescriptor, LetterTiming};
pub use navbar::Navbar;
pub use panel::{OverlayPanel, PanelPhase};
pub use render::{CommandBuffer, RenderCommand};
pub use toggle::{DrawRange, IconMotion, IconPath, PathMotion, ToggleController, ToggleOutcome};
pub use track::TrackKey;
