//! Haptic patterns and transient events

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DOUBLE_PULSE_GAP, FIRST_PULSE_SHARPNESS, MAX_INTENSITY, MAX_SHARPNESS, MIN_INTENSITY,
    MIN_SHARPNESS, PULSE_INTENSITY, SECOND_PULSE_SHARPNESS, TRANSIENT_DURATION,
};
use crate::error::PatternError;

/// Built-in haptic patterns
///
/// # Examples
///
/// ```
/// use haptickit::HapticPattern;
///
/// let pattern: HapticPattern = "double-pulse".parse()?;
/// assert_eq!(pattern, HapticPattern::DoublePulse);
/// assert_eq!(pattern.events().len(), 2);
/// assert_eq!(pattern.to_string(), "double-pulse");
/// # Ok::<(), haptickit::PatternError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HapticPattern {
    /// One soft tap.
    SinglePulse,
    /// A soft tap followed by a sharper one 110 ms later.
    DoublePulse,
}

impl HapticPattern {
    /// Every built-in pattern, in declaration order.
    pub const ALL: [HapticPattern; 2] = [HapticPattern::SinglePulse, HapticPattern::DoublePulse];

    /// Expands the pattern into a fresh event list.
    #[must_use]
    pub fn events(self) -> Vec<HapticEvent> {
        let first = HapticEvent::transient(PULSE_INTENSITY, FIRST_PULSE_SHARPNESS);
        match self {
            HapticPattern::SinglePulse => vec![first],
            HapticPattern::DoublePulse => vec![
                first,
                HapticEvent::transient(PULSE_INTENSITY, SECOND_PULSE_SHARPNESS)
                    .with_delay(DOUBLE_PULSE_GAP),
            ],
        }
    }

    /// Kebab-case name, as accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HapticPattern::SinglePulse => "single-pulse",
            HapticPattern::DoublePulse => "double-pulse",
        }
    }
}

impl fmt::Display for HapticPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HapticPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single-pulse" | "single_pulse" | "single" => Ok(HapticPattern::SinglePulse),
            "double-pulse" | "double_pulse" | "double" => Ok(HapticPattern::DoublePulse),
            _ => Err(PatternError::Unknown(s.to_string())),
        }
    }
}

/// A single transient impulse
///
/// # Examples
///
/// ```
/// use haptickit::HapticEvent;
/// use std::time::Duration;
///
/// let event = HapticEvent::transient(0.5, 0.5).with_delay(Duration::from_millis(110));
/// assert_eq!(event.relative_time, Duration::from_millis(110));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HapticEvent {
    /// Strength of the impulse (0.0–1.0).
    pub intensity: f32,
    /// Feel of the impulse, from round (0.0) to crisp (1.0).
    pub sharpness: f32,
    /// Offset from pattern start.
    pub relative_time: Duration,
}

impl HapticEvent {
    /// Creates a transient event at the start of the pattern.
    #[must_use]
    pub fn transient(intensity: f32, sharpness: f32) -> Self {
        Self {
            intensity,
            sharpness,
            relative_time: Duration::ZERO,
        }
    }

    /// Moves the event to `delay` after pattern start.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.relative_time = delay;
        self
    }

    /// Time at which the impulse has fully played out.
    #[must_use]
    pub fn end_time(&self) -> Duration {
        self.relative_time.saturating_add(TRANSIENT_DURATION)
    }
}

/// Validated, immutable event sequence handed to an engine
///
/// Cloning is cheap; clones share the event buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledPattern {
    events: Arc<[HapticEvent]>,
}

impl CompiledPattern {
    /// Builds a pattern, rejecting empty lists and out-of-range parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the list is empty or an event carries an
    /// intensity or sharpness outside `[0.0, 1.0]`.
    pub fn new(events: Vec<HapticEvent>) -> Result<Self, PatternError> {
        if events.is_empty() {
            return Err(PatternError::Empty);
        }
        for (index, event) in events.iter().enumerate() {
            if !(MIN_INTENSITY..=MAX_INTENSITY).contains(&event.intensity) {
                return Err(PatternError::IntensityOutOfRange {
                    index,
                    value: event.intensity,
                });
            }
            if !(MIN_SHARPNESS..=MAX_SHARPNESS).contains(&event.sharpness) {
                return Err(PatternError::SharpnessOutOfRange {
                    index,
                    value: event.sharpness,
                });
            }
        }
        Ok(Self {
            events: events.into(),
        })
    }

    /// Events in submission order.
    #[must_use]
    pub fn events(&self) -> &[HapticEvent] {
        &self.events
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Always false for a successfully built pattern.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Time from pattern start until the last impulse has played out.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.events
            .iter()
            .map(HapticEvent::end_time)
            .max()
            .unwrap_or(Duration::ZERO)
    }
}

impl TryFrom<HapticPattern> for CompiledPattern {
    type Error = PatternError;

    fn try_from(pattern: HapticPattern) -> Result<Self, Self::Error> {
        Self::new(pattern.events())
    }
}
