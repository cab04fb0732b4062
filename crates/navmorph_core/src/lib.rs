//! # NAVMORPH Core
//!
//! Animation engine for the navigation overlay:
//! - Stylesheet-style cubic bezier and spring easing
//! - Tweens that retarget from their current value instead of queueing
//! - One shared timeline of keyed tracks, advanced by frame ticks
//! - Observable state with channel-backed subscriptions
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Signal::set ──> Subscription::drain ──> Timeline::animate│
//! │                                               │           │
//! │  FrameClock::next_step ──────────────> Timeline::tick     │
//! │                                               │           │
//! │                                      completed track keys │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything is single-threaded. Call [`init`] once at startup to register
//! plugin-backed properties (stroke drawing); repeated calls are harmless.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod clock;
pub mod easing;
pub mod registry;
pub mod signal;
pub mod timeline;

pub use animation::{Animation, Retarget, Transition};
pub use clock::FrameClock;
pub use easing::{CubicBezier, Easing, Spring};
pub use registry::{init, is_initialized, PropertyKind};
pub use signal::{Change, Signal, Subscription};
pub use timeline::Timeline;
