//! Property-based tests for pattern validation.

use std::time::Duration;

use haptickit::{CompiledPattern, HapticEvent, HapticPattern, PatternError};
use proptest::prelude::*;

fn in_range_event() -> impl Strategy<Value = HapticEvent> {
    (0.0f32..=1.0, 0.0f32..=1.0, 0u64..2_000).prop_map(|(intensity, sharpness, offset)| {
        HapticEvent::transient(intensity, sharpness).with_delay(Duration::from_millis(offset))
    })
}

proptest! {
    #[test]
    fn test_in_range_events_compile(events in prop::collection::vec(in_range_event(), 1..16)) {
        let expected = events.len();
        let latest = events.iter().map(|event| event.relative_time).max();
        let pattern = CompiledPattern::new(events);
        prop_assert!(pattern.is_ok());
        if let Ok(pattern) = pattern {
            prop_assert_eq!(pattern.len(), expected);
            prop_assert!(Some(pattern.duration()) > latest);
        }
    }

    #[test]
    fn test_out_of_range_intensity_rejected(
        intensity in prop_oneof![-10.0f32..-0.001, 1.001f32..10.0],
        sharpness in 0.0f32..=1.0,
    ) {
        let result = CompiledPattern::new(vec![HapticEvent::transient(intensity, sharpness)]);
        let rejected = matches!(result, Err(PatternError::IntensityOutOfRange { index: 0, .. }));
        prop_assert!(rejected);
    }

    #[test]
    fn test_out_of_range_sharpness_rejected(
        intensity in 0.0f32..=1.0,
        sharpness in prop_oneof![-10.0f32..-0.001, 1.001f32..10.0],
    ) {
        let result = CompiledPattern::new(vec![HapticEvent::transient(intensity, sharpness)]);
        let rejected = matches!(result, Err(PatternError::SharpnessOutOfRange { index: 0, .. }));
        prop_assert!(rejected);
    }

    #[test]
    fn test_unknown_pattern_names_rejected(name in "[a-z]{1,12}") {
        prop_assume!(!matches!(name.as_str(), "single" | "double"));
        let rejected = matches!(name.parse::<HapticPattern>(), Err(PatternError::Unknown(_)));
        prop_assert!(rejected);
    }
}

#[test]
fn test_builtin_patterns_always_compile() {
    for pattern in HapticPattern::ALL {
        assert!(CompiledPattern::try_from(pattern).is_ok_and(|compiled| !compiled.is_empty()));
    }
}
