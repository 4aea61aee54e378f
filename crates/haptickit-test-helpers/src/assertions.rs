//! Assertion macros for haptic tests.

/// Assert that two floating-point values are approximately equal.
///
/// ```rust
/// use haptickit_test_helpers::assert_approx_eq;
///
/// assert_approx_eq!(0.5_f32, 0.5001, 0.001);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if diff > tolerance {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                left, right, diff, tolerance
            );
        }
    };
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if diff > tolerance {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`: {}",
                left, right, diff, tolerance, format_args!($($arg)+)
            );
        }
    };
}

/// Assert that a [`HapticEvent`](haptickit::HapticEvent) has the given
/// intensity, sharpness and offset in milliseconds.
///
/// Intensity and sharpness are compared with a tolerance of `1e-6`.
///
/// ```rust
/// use haptickit::HapticEvent;
/// use haptickit_test_helpers::assert_event;
///
/// let event = HapticEvent::transient(0.5, 0.2);
/// assert_event!(event, 0.5, 0.2, 0);
/// ```
#[macro_export]
macro_rules! assert_event {
    ($event:expr, $intensity:expr, $sharpness:expr, $offset_ms:expr $(,)?) => {
        let event: &::haptickit::HapticEvent = &$event;
        $crate::assert_approx_eq!(event.intensity, $intensity, 1e-6_f32, "intensity");
        $crate::assert_approx_eq!(event.sharpness, $sharpness, 1e-6_f32, "sharpness");
        assert_eq!(
            event.relative_time,
            ::std::time::Duration::from_millis($offset_ms),
            "relative_time"
        );
    };
}
