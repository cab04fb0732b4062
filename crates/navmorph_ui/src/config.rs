//! Navigation data and motion settings.
//!
//! Loaded once at startup from TOML:
//!
//! ```toml
//! compact_ids = ["discography"]
//!
//! [[nav]]
//! id = "home"
//! title = "Home"
//! path = "/"
//!
//! [[social]]
//! id = "instagram"
//! title = "Instagram"
//! url = "https://www.instagram.com/"
//!
//! [motion.panel]
//! duration = 1.0
//! easing = { cubic_bezier = [0.7, 0.0, 0.0, 1.0] }
//! ```
//!
//! Every motion value has a default, so a file only needs the lists.

use std::collections::HashSet;
use std::path::Path;

use navmorph_core::{Easing, Transition};
use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};
use crate::letters::LetterTiming;
use crate::toggle::IconMotion;

const BUILTIN: &str = include_str!("../data/nav.toml");

/// One navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Stable identifier.
    pub id: String,
    /// Display label.
    pub title: String,
    /// Target route.
    pub path: String,
}

impl NavEntry {
    /// Exact route match; no prefix matching.
    #[must_use]
    pub fn is_active(&self, route: &str) -> bool {
        self.path == route
    }
}

/// One social link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialEntry {
    /// Stable identifier.
    pub id: String,
    /// Display label.
    pub title: String,
    /// External link.
    pub url: String,
}

/// Screen size the layout is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    /// Width in px.
    pub width: f32,
    /// Height in px.
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1440.0,
            height: 900.0,
        }
    }
}

/// All animation timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Toggle icon.
    pub icon: IconMotion,
    /// Panel clip reveal.
    pub panel: Transition,
    /// Letter bursts.
    pub letters: LetterTiming,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            icon: IconMotion::default(),
            panel: Transition::new(1.0, Easing::bezier(0.7, 0.0, 0.0, 1.0)),
            letters: LetterTiming::default(),
        }
    }
}

impl MotionConfig {
    /// Rejects negative or non-finite timing.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidMotion`] naming the first bad value.
    pub fn validate(&self) -> NavResult<()> {
        let icon = &self.icon;
        let checks = [
            ("icon.morph.duration", icon.morph.duration),
            ("icon.morph.delay", icon.morph.delay),
            ("icon.circle.duration", icon.circle.duration),
            ("icon.circle.delay", icon.circle.delay),
            ("icon.circle_closed", icon.circle_closed),
            ("icon.circle_open", icon.circle_open),
            ("panel.duration", self.panel.duration),
            ("panel.delay", self.panel.delay),
            ("letters.duration", self.letters.duration),
            ("letters.base_delay", self.letters.base_delay),
            ("letters.item_step", self.letters.item_step),
            ("letters.stagger", self.letters.stagger),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(NavError::InvalidMotion(format!("{name} = {value}")));
            }
        }

        let spring = icon.entrance;
        if !(spring.stiffness > 0.0 && spring.mass > 0.0 && spring.damping >= 0.0) {
            return Err(NavError::InvalidMotion(format!(
                "icon.entrance = {spring:?}"
            )));
        }
        if !self.letters.swap_offset.is_finite() {
            return Err(NavError::InvalidMotion(format!(
                "letters.swap_offset = {}",
                self.letters.swap_offset
            )));
        }
        Ok(())
    }
}

fn default_compact_ids() -> Vec<String> {
    vec!["discography".to_string()]
}

/// Everything the overlay renders, plus its timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Navigation entries in render order.
    #[serde(default)]
    pub nav: Vec<NavEntry>,
    /// Social links in render order.
    #[serde(default)]
    pub social: Vec<SocialEntry>,
    /// Entries rendered in the compact variant.
    #[serde(default = "default_compact_ids")]
    pub compact_ids: Vec<String>,
    /// Animation timing.
    #[serde(default)]
    pub motion: MotionConfig,
    /// Layout viewport.
    #[serde(default)]
    pub viewport: Viewport,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            nav: Vec::new(),
            social: Vec::new(),
            compact_ids: default_compact_ids(),
            motion: MotionConfig::default(),
            viewport: Viewport::default(),
        }
    }
}

impl NavConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Parse`] for malformed input, or a validation error.
    pub fn from_toml_str(source: &str) -> NavResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Io`] if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> NavResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| NavError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!(
            path = %path.display(),
            nav = config.nav.len(),
            social = config.social.len(),
            "navigation config loaded"
        );
        Ok(config)
    }

    /// The navigation data shipped with the crate.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled file is broken.
    pub fn builtin() -> NavResult<Self> {
        Self::from_toml_str(BUILTIN)
    }

    /// Checks ids are unique and required fields are present.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> NavResult<()> {
        let mut seen = HashSet::new();
        for (index, entry) in self.nav.iter().enumerate() {
            for (field, value) in [("id", &entry.id), ("title", &entry.title), ("path", &entry.path)] {
                if value.trim().is_empty() {
                    return Err(NavError::EmptyField {
                        list: "nav",
                        index,
                        field,
                    });
                }
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(NavError::DuplicateId {
                    list: "nav",
                    id: entry.id.clone(),
                });
            }
        }

        seen.clear();
        for (index, entry) in self.social.iter().enumerate() {
            for (field, value) in [("id", &entry.id), ("title", &entry.title), ("url", &entry.url)] {
                if value.trim().is_empty() {
                    return Err(NavError::EmptyField {
                        list: "social",
                        index,
                        field,
                    });
                }
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(NavError::DuplicateId {
                    list: "social",
                    id: entry.id.clone(),
                });
            }
        }

        self.motion.validate()
    }

    /// Returns true if the entry renders in the compact variant.
    #[must_use]
    pub fn is_compact(&self, entry: &NavEntry) -> bool {
        self.compact_ids.iter().any(|id| *id == entry.id)
    }
}
