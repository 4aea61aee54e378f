//! Platform engine seam
//!
//! These traits separate the playback logic from the platform haptics API.
//! A backend reports device capability and creates the engine; the engine
//! renders compiled patterns through one-shot players.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::StopPolicy;
use crate::error::{EngineError, EngineResult, PlaybackError};
use crate::pattern::{CompiledPattern, HapticEvent};

/// What the hardware can do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HapticCapabilities {
    /// Whether the device has a haptic actuator at all.
    pub supports_haptics: bool,
}

impl HapticCapabilities {
    /// Capabilities of a device with haptic hardware.
    pub const SUPPORTED: HapticCapabilities = HapticCapabilities {
        supports_haptics: true,
    };

    /// Capabilities of a device without haptic hardware.
    pub const UNSUPPORTED: HapticCapabilities = HapticCapabilities {
        supports_haptics: false,
    };
}

/// When a player should begin rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartTime {
    /// Begin now.
    #[default]
    Immediate,
    /// Begin after the given delay.
    After(Duration),
}

impl StartTime {
    /// Delay before the first event.
    #[must_use]
    pub fn delay(self) -> Duration {
        match self {
            StartTime::Immediate => Duration::ZERO,
            StartTime::After(delay) => delay,
        }
    }
}

/// Returned by a [`FinishedHandler`] to tell the engine what to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishedAction {
    /// Stop the engine and release the actuator.
    StopEngine,
    /// Keep the engine running for the next pattern.
    LeaveRunning,
}

/// Invoked once all active players have finished.
///
/// Receives the error that ended playback early, if any.
pub type FinishedHandler = Box<dyn FnOnce(Option<EngineError>) -> FinishedAction + Send>;

/// Platform entry point
pub trait HapticBackend: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Capability check, consulted once before engine creation.
    fn capabilities(&self) -> HapticCapabilities;

    /// Create the engine resource.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] when the platform refuses to create an engine.
    fn create_engine(&self) -> EngineResult<Box<dyn HapticEngine>>;
}

/// A platform haptic engine
///
/// Calls arrive from a single worker thread, one at a time.
pub trait HapticEngine: Send {
    /// Start the engine. Must succeed without side effects when already running.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] when the actuator cannot be started.
    fn start(&mut self) -> EngineResult;

    /// Stop the engine.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] when the platform reports a failure while stopping.
    fn stop(&mut self) -> EngineResult;

    /// Whether the engine is currently started.
    fn is_running(&self) -> bool;

    /// Create a one-shot player bound to `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] when the engine cannot render the pattern.
    fn make_player(&mut self, pattern: &CompiledPattern) -> EngineResult<Box<dyn PatternPlayer>>;

    /// Register the handler run once every active player has finished.
    ///
    /// A later registration replaces an earlier one that has not fired yet.
    fn notify_when_players_finished(&mut self, handler: FinishedHandler);
}

/// One-shot pattern player
///
/// Dropping the player after a successful start does not cut playback short.
pub trait PatternPlayer: Send {
    /// Begin playback.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] when the engine is not running or rejects the player.
    fn start(&mut self, at: StartTime) -> EngineResult;
}

/// Owns the single engine of a player for its whole lifetime
pub struct EngineHandle {
    engine: Box<dyn HapticEngine>,
    backend: String,
    cycles: u64,
}

impl EngineHandle {
    /// Wrap an engine created by `backend`.
    #[must_use]
    pub fn new(engine: Box<dyn HapticEngine>, backend: impl Into<String>) -> Self {
        Self {
            engine,
            backend: backend.into(),
            cycles: 0,
        }
    }

    /// Name of the backend that created the engine.
    #[must_use]
    pub fn backend(&self) -> &str {
        &self.backend
    }

    /// Number of patterns successfully handed to the engine.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Whether the underlying engine reports itself as running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    /// Run one playback: start engine, build pattern, make player, start it,
    /// then register the finished handler for `policy`.
    ///
    /// # Errors
    ///
    /// Returns the [`PlaybackError`] of the first step that failed. Later steps
    /// are skipped and the engine is left as the failing step left it.
    pub fn play(&mut self, events: Vec<HapticEvent>, policy: StopPolicy) -> Result<(), PlaybackError> {
        self.engine.start().map_err(PlaybackError::EngineStart)?;

        let pattern = CompiledPattern::new(events)?;

        let mut player = self
            .engine
            .make_player(&pattern)
            .map_err(PlaybackError::PlayerCreation)?;

        player
            .start(StartTime::Immediate)
            .map_err(PlaybackError::PlayerStart)?;

        let action = policy.finished_action();
        let backend = self.backend.clone();
        self.engine
            .notify_when_players_finished(Box::new(move |error| {
                if let Some(error) = error {
                    warn!(backend = %backend, error = %error, "haptic players finished with error");
                }
                trace!(backend = %backend, ?action, "haptic players finished");
                action
            }));

        self.cycles = self.cycles.saturating_add(1);
        debug!(
            backend = %self.backend,
            events = pattern.len(),
            duration_ms = pattern.duration().as_millis() as u64,
            "haptic pattern started"
        );
        Ok(())
    }

    /// Stop the engine if it is running. Used when the handle is released.
    pub fn shutdown(&mut self) {
        if !self.engine.is_running() {
            return;
        }
        if let Err(error) = self.engine.stop() {
            warn!(backend = %self.backend, error = %error, "failed to stop haptic engine");
        }
    }
}

impl std::fmt::Debug for EngineHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineHandle")
            .field("backend", &self.backend)
            .field("cycles", &self.cycles)
            .field("running", &self.engine.is_running())
            .finish()
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.shutdown();
        debug!(backend = %self.backend, cycles = self.cycles, "haptic engine released");
    }
}
