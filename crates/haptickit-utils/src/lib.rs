//! Small helpers that sit next to haptic feedback in interactive code
//!
//! - [`numbers`]: clamping any ordered value into an inclusive range
//! - [`time`]: second/millisecond conversion on `f64` durations
//! - [`touch`]: turning raw press samples into press and release callbacks
//! - [`transition`]: edge-based slide-in/slide-out offsets

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod numbers;
pub mod time;
pub mod touch;
pub mod transition;

pub use numbers::Clamped;
pub use time::TimeInterval;
pub use touch::{PressEvent, PressTracker};
pub use transition::{Edge, Offset, SlideTransition};
