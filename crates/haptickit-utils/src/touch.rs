//! Press and release detection from raw touch samples.
//!
//! Input layers usually report "is a finger down" on every frame. A
//! [`PressTracker`] turns that stream into edge events, so a caller can fire
//! haptic feedback once on touch down and once on touch up.

use tracing::trace;

/// An edge in the pressed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressEvent {
    /// The state flipped from released to pressed.
    Pressed,
    /// The state flipped from pressed to released.
    Released,
}

type Callback = Box<dyn FnMut() + Send>;

/// Edge detector with optional press and release callbacks.
///
/// Starts released. Repeated samples with the same state are ignored.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use haptickit_utils::{PressEvent, PressTracker};
///
/// let presses = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&presses);
/// let mut tracker = PressTracker::new().on_press(move || {
///     counter.fetch_add(1, Ordering::Relaxed);
/// });
///
/// assert_eq!(tracker.update(true), Some(PressEvent::Pressed));
/// assert_eq!(tracker.update(true), None);
/// assert_eq!(tracker.update(false), Some(PressEvent::Released));
/// assert_eq!(presses.load(Ordering::Relaxed), 1);
/// ```
pub struct PressTracker {
    pressed: bool,
    on_press: Callback,
    on_release: Callback,
}

impl PressTracker {
    /// A released tracker with no-op callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pressed: false,
            on_press: Box::new(|| {}),
            on_release: Box::new(|| {}),
        }
    }

    /// Run `action` whenever the state flips to pressed.
    #[must_use]
    pub fn on_press(mut self, action: impl FnMut() + Send + 'static) -> Self {
        self.on_press = Box::new(action);
        self
    }

    /// Run `action` whenever the state flips to released.
    #[must_use]
    pub fn on_release(mut self, action: impl FnMut() + Send + 'static) -> Self {
        self.on_release = Box::new(action);
        self
    }

    /// Feed one sample. Returns the edge it produced, if any.
    pub fn update(&mut self, pressed: bool) -> Option<PressEvent> {
        if pressed == self.pressed {
            return None;
        }
        self.pressed = pressed;

        let event = if pressed {
            (self.on_press)();
            PressEvent::Pressed
        } else {
            (self.on_release)();
            PressEvent::Released
        };
        trace!(?event, "press state changed");
        Some(event)
    }

    /// Treat a cancelled or ended gesture as a release.
    pub fn cancel(&mut self) -> Option<PressEvent> {
        self.update(false)
    }

    /// Whether the last sample seen was a press.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

impl Default for PressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PressTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PressTracker")
            .field("pressed", &self.pressed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting() -> (PressTracker, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let presses = Arc::new(AtomicUsize::new(0));
        let releases = Arc::new(AtomicUsize::new(0));
        let (p, r) = (Arc::clone(&presses), Arc::clone(&releases));
        let tracker = PressTracker::new()
            .on_press(move || {
                p.fetch_add(1, Ordering::Relaxed);
            })
            .on_release(move || {
                r.fetch_add(1, Ordering::Relaxed);
            });
        (tracker, presses, releases)
    }

    #[test]
    fn test_starts_released() {
        let mut tracker = PressTracker::default();
        assert!(!tracker.is_pressed());
        assert_eq!(tracker.update(false), None);
    }

    #[test]
    fn test_repeated_samples_fire_once() {
        let (mut tracker, presses, releases) = counting();
        for sample in [true, true, true, false, false, true, false] {
            tracker.update(sample);
        }
        assert_eq!(presses.load(Ordering::Relaxed), 2);
        assert_eq!(releases.load(Ordering::Relaxed), 2);
        assert!(!tracker.is_pressed());
    }

    #[test]
    fn test_cancel_releases_only_when_pressed() {
        let (mut tracker, _, releases) = counting();
        assert_eq!(tracker.cancel(), None);
        tracker.update(true);
        assert_eq!(tracker.cancel(), Some(PressEvent::Released));
        assert_eq!(releases.load(Ordering::Relaxed), 1);
    }
}
