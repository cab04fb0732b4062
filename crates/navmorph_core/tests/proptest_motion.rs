//! Property-based tests for easing curves and retargeting.

use navmorph_core::{Animation, CubicBezier, Easing, Spring, Transition};
use proptest::prelude::*;

/// Curves the overlay actually ships with.
const CURVES: [CubicBezier; 3] = [
    CubicBezier::new(0.7, 0.0, 0.0, 0.94),
    CubicBezier::new(0.7, 0.0, 0.0, 1.0),
    CubicBezier::new(0.63, 0.0, 0.0, 0.97),
];

proptest! {
    /// Shipped curves never move backwards.
    #[test]
    fn bezier_is_monotone(a in 0.0f32..=1.0, b in 0.0f32..=1.0, curve in 0usize..3) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let curve = CURVES[curve];
        prop_assert!(curve.apply(lo) <= curve.apply(hi) + 1e-4);
    }

    /// Any easing stays put at the endpoints.
    #[test]
    fn easing_endpoints_exact(x1 in 0.0f32..=1.0, y1 in -1.0f32..2.0, x2 in 0.0f32..=1.0, y2 in -1.0f32..2.0) {
        let easing = Easing::bezier(x1, y1, x2, y2);
        prop_assert_eq!(easing.apply(0.0), 0.0);
        prop_assert_eq!(easing.apply(1.0), 1.0);
    }

    /// Retargeting mid-flight continues from where the value was.
    #[test]
    fn retarget_is_continuous(first in -10.0f32..10.0, second in -10.0f32..10.0, run in 0.0f32..0.6) {
        let transition = Transition::new(0.6, Easing::bezier(0.7, 0.0, 0.0, 0.94));
        let mut animation = Animation::new(0.0);
        animation.set_target(first, transition);
        animation.update(run);
        let before = animation.value();

        animation.set_target(second, transition);
        prop_assert_eq!(animation.value(), before);

        animation.update(0.6);
        prop_assert!(animation.is_complete());
        let expected = if (second - first).abs() <= Animation::TARGET_EPSILON { first } else { second };
        prop_assert!((animation.value() - expected).abs() <= 2.0 * Animation::TARGET_EPSILON);
    }

    /// Springs come to rest at their target.
    #[test]
    fn spring_settles(stiffness in 50.0f32..400.0, damping in 5.0f32..40.0) {
        let spring = Spring::new(stiffness, damping, 1.0);
        let end = spring.position(spring.settle_duration());
        prop_assert!((end - 1.0).abs() < 0.01);
    }
}
