//! Easing curves.
//!
//! Menu motion decelerates hard into its target. Curves are expressed the
//! way stylesheets express them (`cubic-bezier(x1, y1, x2, y2)`), plus a
//! damped spring for the toggle entrance.

use serde::{Deserialize, Serialize};

/// `ln(1000)`: a spring counts as settled once its envelope is below 0.1%.
const SETTLE_LN: f32 = 6.907_755;

/// Upper bound on how long a spring may take to settle (seconds).
const MAX_SETTLE: f32 = 10.0;

/// A CSS-style cubic bezier timing curve anchored at (0,0) and (1,1).
///
/// Serialized as a four-element array: `[x1, y1, x2, y2]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct CubicBezier {
    /// First control point X (clamped to 0-1 when sampled).
    pub x1: f32,
    /// First control point Y.
    pub y1: f32,
    /// Second control point X (clamped to 0-1 when sampled).
    pub x2: f32,
    /// Second control point Y.
    pub y2: f32,
}

impl CubicBezier {
    const NEWTON_ITERATIONS: usize = 8;
    const BISECTION_ITERATIONS: usize = 48;
    const EPSILON: f32 = 1e-6;

    /// Creates a curve from its two control points.
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Polynomial coefficients `(a, b, c)` for one axis.
    #[inline]
    fn coefficients(p1: f32, p2: f32) -> (f32, f32, f32) {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (a, b, c)
    }

    #[inline]
    fn sample(p1: f32, p2: f32, t: f32) -> f32 {
        let (a, b, c) = Self::coefficients(p1, p2);
        ((a * t + b) * t + c) * t
    }

    #[inline]
    fn sample_derivative(p1: f32, p2: f32, t: f32) -> f32 {
        let (a, b, c) = Self::coefficients(p1, p2);
        (3.0 * a * t + 2.0 * b) * t + c
    }

    /// Finds the curve parameter whose X equals `x`.
    fn solve_parameter(&self, x: f32) -> f32 {
        let x1 = self.x1.clamp(0.0, 1.0);
        let x2 = self.x2.clamp(0.0, 1.0);

        // Newton-Raphson first: converges in a handful of steps for most curves.
        let mut t = x;
        for _ in 0..Self::NEWTON_ITERATIONS {
            let error = Self::sample(x1, x2, t) - x;
            if error.abs() < Self::EPSILON {
                if (0.0..=1.0).contains(&t) {
                    return t;
                }
                break;
            }
            let slope = Self::sample_derivative(x1, x2, t);
            if slope.abs() < Self::EPSILON {
                break;
            }
            t -= error / slope;
        }

        // X is monotone on [0, 1] with clamped control points.
        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..Self::BISECTION_ITERATIONS {
            let value = Self::sample(x1, x2, t);
            if (value - x).abs() < Self::EPSILON {
                break;
            }
            if value < x {
                low = t;
            } else {
                high = t;
            }
            t = (low + high) * 0.5;
        }
        t
    }

    /// Maps linear progress `x` (0-1) to eased progress.
    #[must_use]
    pub fn apply(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let t = self.solve_parameter(x);
        Self::sample(self.y1, self.y2, t)
    }
}

impl From<[f32; 4]> for CubicBezier {
    fn from([x1, y1, x2, y2]: [f32; 4]) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

impl From<CubicBezier> for [f32; 4] {
    fn from(curve: CubicBezier) -> Self {
        [curve.x1, curve.y1, curve.x2, curve.y2]
    }
}

/// Damped harmonic spring, normalized to travel from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    /// Spring constant.
    pub stiffness: f32,
    /// Damping coefficient.
    pub damping: f32,
    /// Attached mass.
    pub mass: f32,
}

impl Spring {
    /// Damping used when only a stiffness is given.
    pub const DEFAULT_DAMPING: f32 = 10.0;

    /// Creates a spring from all three parameters.
    #[must_use]
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Creates a unit-mass spring with the default damping.
    #[must_use]
    pub const fn with_stiffness(stiffness: f32) -> Self {
        Self::new(stiffness, Self::DEFAULT_DAMPING, 1.0)
    }

    fn natural_frequency(&self) -> f32 {
        if self.mass <= 0.0 || self.stiffness <= 0.0 {
            return 0.0;
        }
        (self.stiffness / self.mass).sqrt()
    }

    fn damping_ratio(&self) -> f32 {
        let critical = 2.0 * (self.stiffness * self.mass).sqrt();
        if critical <= 0.0 {
            return 1.0;
        }
        self.damping / critical
    }

    /// Seconds until the oscillation envelope falls below 0.1%.
    #[must_use]
    pub fn settle_duration(&self) -> f32 {
        let omega = self.natural_frequency();
        let zeta = self.damping_ratio();
        if omega <= 0.0 {
            return 0.0;
        }
        let (decay, lead) = if zeta < 1.0 {
            (zeta * omega, 0.0)
        } else {
            (omega, 2.0)
        };
        if decay <= 0.0 {
            return MAX_SETTLE;
        }
        ((SETTLE_LN + lead) / decay).min(MAX_SETTLE)
    }

    /// Position after `seconds`, starting at 0 and resting at 1.
    #[must_use]
    pub fn position(&self, seconds: f32) -> f32 {
        let omega = self.natural_frequency();
        if omega <= 0.0 {
            return 1.0;
        }
        let zeta = self.damping_ratio();
        if zeta < 1.0 {
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega * seconds).exp();
            1.0 - envelope
                * ((damped * seconds).cos() + (zeta * omega / damped) * (damped * seconds).sin())
        } else {
            1.0 - (-omega * seconds).exp() * (1.0 + omega * seconds)
        }
    }
}

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Stylesheet-style cubic bezier.
    CubicBezier(CubicBezier),
    /// Physical spring; the transition duration should be its settle time.
    Spring(Spring),
    /// Instant (no animation).
    Instant,
}

impl Easing {
    /// Shorthand for [`Easing::CubicBezier`].
    #[must_use]
    pub const fn bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::CubicBezier(CubicBezier::new(x1, y1, x2, y2))
    }

    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::CubicBezier(curve) => curve.apply(t),
            Self::Spring(spring) => {
                if t >= 1.0 {
                    1.0
                } else {
                    spring.position(t * spring.settle_duration())
                }
            }
            Self::Instant => 1.0,
        }
    }
}
