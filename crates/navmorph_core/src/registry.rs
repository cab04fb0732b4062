//! Process-wide registration of animatable properties.
//!
//! Plain transforms work out of the box. Stroke drawing needs its plugin,
//! which [`init`] registers once per process; later calls are no-ops.

use parking_lot::{const_rwlock, Once, RwLock};

/// Kind of visual property a timeline track drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyKind {
    /// Vertical offset.
    TranslateY,
    /// Opacity (0-1).
    Opacity,
    /// Width/height of a shape.
    Size,
    /// Visible portion of a stroked path. Needs the stroke-draw plugin.
    StrokeDraw,
    /// Revealed fraction of a clip region.
    ClipReveal,
}

impl PropertyKind {
    /// Returns true if the kind works without any plugin.
    #[must_use]
    pub const fn is_builtin(self) -> bool {
        !matches!(self, Self::StrokeDraw)
    }
}

static INIT: Once = Once::new();
static PLUGINS: RwLock<Vec<PropertyKind>> = const_rwlock(Vec::new());

/// Registers the built-in plugins.
///
/// Returns true only for the call that actually performed the setup.
pub fn init() -> bool {
    let mut performed = false;
    INIT.call_once(|| {
        register(PropertyKind::StrokeDraw);
        performed = true;
        tracing::debug!("animation plugins registered");
    });
    performed
}

/// Returns true once [`init`] has completed.
#[must_use]
pub fn is_initialized() -> bool {
    INIT.state().done()
}

fn register(kind: PropertyKind) {
    let mut plugins = PLUGINS.write();
    if !plugins.contains(&kind) {
        plugins.push(kind);
    }
}

/// Returns true if tracks of this kind can be animated.
#[must_use]
pub fn supports(kind: PropertyKind) -> bool {
    kind.is_builtin() || PLUGINS.read().contains(&kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        assert!(is_initialized());
        assert!(!init(), "second init must not redo setup");
        assert!(supports(PropertyKind::StrokeDraw));
    }

    #[test]
    fn test_builtin_kinds_always_supported() {
        assert!(supports(PropertyKind::TranslateY));
        assert!(supports(PropertyKind::ClipReveal));
        assert!(!PropertyKind::StrokeDraw.is_builtin());
    }
}
