//! Second and millisecond conversions on plain `f64` durations

/// Unit conversions for a duration held as an `f64`.
///
/// The in-place methods convert the value they are called on. The returning
/// methods are named after the unit they produce.
///
/// # Examples
///
/// ```
/// use haptickit_utils::TimeInterval;
///
/// let mut delay = 250.0_f64;
/// delay.millis_to_secs();
/// assert!((delay - 0.25).abs() < f64::EPSILON);
///
/// assert!((1.5_f64.millis_from_secs() - 1500.0).abs() < f64::EPSILON);
/// assert_eq!(2.01_f64.round_and_stringify(), "3");
/// ```
pub trait TimeInterval {
    /// Treat the value as milliseconds and convert it to seconds in place.
    fn millis_to_secs(&mut self);

    /// Treat the value as seconds and convert it to milliseconds in place.
    fn secs_to_millis(&mut self);

    /// Seconds for a value in milliseconds.
    #[must_use]
    fn secs_from_millis(self) -> f64;

    /// Milliseconds for a value in seconds.
    #[must_use]
    fn millis_from_secs(self) -> f64;

    /// Round up to the next whole number and format it without a fraction.
    ///
    /// Values outside the `i64` range saturate; `NaN` formats as `0`.
    #[must_use]
    fn round_and_stringify(self) -> String;
}

const MILLIS_PER_SEC: f64 = 1000.0;

impl TimeInterval for f64 {
    fn millis_to_secs(&mut self) {
        *self /= MILLIS_PER_SEC;
    }

    fn secs_to_millis(&mut self) {
        *self *= MILLIS_PER_SEC;
    }

    fn secs_from_millis(self) -> f64 {
        self / MILLIS_PER_SEC
    }

    fn millis_from_secs(self) -> f64 {
        self * MILLIS_PER_SEC
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "float to int casts saturate, which is the intended display behaviour"
    )]
    fn round_and_stringify(self) -> String {
        (self.ceil() as i64).to_string()
    }
}
