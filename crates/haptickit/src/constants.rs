//! Pattern constants and limits

use std::time::Duration;

/// Intensity shared by every pulse in the built-in patterns
pub const PULSE_INTENSITY: f32 = 0.5;

/// Sharpness of the first (or only) pulse
pub const FIRST_PULSE_SHARPNESS: f32 = 0.2;

/// Sharpness of the second pulse in a double pulse
pub const SECOND_PULSE_SHARPNESS: f32 = 0.5;

/// Offset of the second pulse from pattern start
pub const DOUBLE_PULSE_GAP: Duration = Duration::from_millis(110);

/// Lower intensity bound
pub const MIN_INTENSITY: f32 = 0.0;
/// Upper intensity bound
pub const MAX_INTENSITY: f32 = 1.0;

/// Lower sharpness bound
pub const MIN_SHARPNESS: f32 = 0.0;
/// Upper sharpness bound
pub const MAX_SHARPNESS: f32 = 1.0;

/// Nominal length of a single transient impulse
pub const TRANSIENT_DURATION: Duration = Duration::from_millis(20);

/// Default bound on queued play requests per player
pub const DEFAULT_MAX_PENDING: usize = 16;
