//! Property-based tests for the numeric and time helpers.

use haptickit_utils::{Clamped, PressEvent, PressTracker, TimeInterval};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_clamped_stays_in_range(value in any::<i64>(), a in -1000i64..1000, b in -1000i64..1000) {
        let (lower, upper) = (a.min(b), a.max(b));
        let clamped = value.clamped(lower..=upper);
        prop_assert!((lower..=upper).contains(&clamped));
        if (lower..=upper).contains(&value) {
            prop_assert_eq!(clamped, value);
        }
    }

    #[test]
    fn test_clamped_is_max_then_min(value in any::<i64>(), lower in -1000i64..1000, upper in -1000i64..1000) {
        prop_assert_eq!(value.clamped(lower..=upper), value.max(lower).min(upper));
    }

    #[test]
    fn test_clamped_is_idempotent(value in -1e6f64..1e6, upper in 0.0f64..1e3) {
        let once = value.clamped(0.0..=upper);
        prop_assert_eq!(once.clamped(0.0..=upper), once);
    }

    #[test]
    fn test_in_place_and_returning_conversions_agree(value in -1e9f64..1e9) {
        let mut secs = value;
        secs.millis_to_secs();
        prop_assert_eq!(secs, value.secs_from_millis());

        let mut millis = value;
        millis.secs_to_millis();
        prop_assert_eq!(millis, value.millis_from_secs());
    }

    #[test]
    fn test_round_and_stringify_never_below_value(value in -1e6f64..1e6) {
        let rounded: f64 = value.round_and_stringify().parse().unwrap_or(f64::NAN);
        prop_assert!(rounded >= value);
        prop_assert!(rounded - value < 1.0);
    }

    #[test]
    fn test_press_edges_alternate(samples in prop::collection::vec(any::<bool>(), 0..64)) {
        let mut tracker = PressTracker::new();
        let mut last = None;
        for sample in samples {
            if let Some(event) = tracker.update(sample) {
                prop_assert_ne!(Some(event), last);
                last = Some(event);
            }
        }
        prop_assert_eq!(tracker.is_pressed(), last == Some(PressEvent::Pressed));
    }
}
