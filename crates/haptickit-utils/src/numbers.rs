//! Range clamping

use std::ops::RangeInclusive;

/// Constrain a value to an inclusive range.
///
/// Works for any `PartialOrd + Copy` type, unlike the inherent `clamp`
/// methods which need `Ord` or a float.
///
/// # Examples
///
/// ```
/// use haptickit_utils::Clamped;
///
/// assert_eq!(15_i32.clamped(0..=10), 10);
/// assert_eq!((-0.25_f32).clamped(0.0..=1.0), 0.0);
/// assert_eq!('m'.clamped('a'..='f'), 'f');
/// ```
pub trait Clamped: PartialOrd + Copy {
    /// Returns `self` limited to `limits`.
    ///
    /// Computed as `min(max(self, lower), upper)`, so an inverted range
    /// (`lower > upper`) always yields `upper`. Values that compare as
    /// neither below nor above the range (such as `NaN`) are returned
    /// unchanged.
    #[must_use]
    fn clamped(self, limits: RangeInclusive<Self>) -> Self {
        let (lower, upper) = limits.into_inner();
        let raised = if self < lower { lower } else { self };
        if raised > upper { upper } else { raised }
    }
}

impl<T: PartialOrd + Copy> Clamped for T {}
