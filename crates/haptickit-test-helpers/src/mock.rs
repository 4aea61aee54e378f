//! Recording mock of the haptic platform seam.
//!
//! [`MockBackend`] hands out engines that record every call into a shared
//! [`MockState`]. Tests keep an `Arc<MockState>` and inspect it after the
//! player has processed its queue. Failures can be injected per step and
//! toggled while a player is live.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use haptickit::{
    CompiledPattern, EngineError, EngineResult, FinishedAction, FinishedHandler, HapticBackend,
    HapticCapabilities, HapticEngine, HapticEvent, PatternPlayer, StartTime,
};
use parking_lot::Mutex;

/// Steps that should fail on the next call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MockFailures {
    /// `HapticBackend::create_engine` returns `EngineError::Unavailable`.
    pub engine_creation: bool,
    /// `HapticEngine::start` returns a backend error.
    pub engine_start: bool,
    /// `HapticEngine::make_player` returns a backend error.
    pub make_player: bool,
    /// `PatternPlayer::start` returns a backend error.
    pub player_start: bool,
}

/// When a registered finished handler fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MockFinish {
    /// As soon as it is registered.
    #[default]
    Immediate,
    /// Only when the test calls [`MockState::finish_players`].
    Manual,
}

#[derive(Default)]
struct Recording {
    failures: MockFailures,
    engines_created: usize,
    start_calls: usize,
    stop_calls: usize,
    running: bool,
    submitted: Vec<Vec<HapticEvent>>,
    start_times: Vec<StartTime>,
    handlers_registered: usize,
    handlers_fired: usize,
    actions: Vec<FinishedAction>,
    pending: Option<FinishedHandler>,
}

/// Everything the mock engines observed.
#[derive(Default)]
pub struct MockState {
    inner: Mutex<Recording>,
}

impl std::fmt::Debug for MockState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("MockState")
            .field("failures", &inner.failures)
            .field("engines_created", &inner.engines_created)
            .field("start_calls", &inner.start_calls)
            .field("stop_calls", &inner.stop_calls)
            .field("running", &inner.running)
            .field("submitted", &inner.submitted.len())
            .field("handlers_registered", &inner.handlers_registered)
            .field("handlers_fired", &inner.handlers_fired)
            .finish()
    }
}

impl MockState {
    /// Replace the injected failures.
    pub fn set_failures(&self, failures: MockFailures) {
        self.inner.lock().failures = failures;
    }

    /// Engines handed out by the backend.
    pub fn engines_created(&self) -> usize {
        self.inner.lock().engines_created
    }

    /// Calls to `HapticEngine::start`, including failed ones.
    pub fn start_calls(&self) -> usize {
        self.inner.lock().start_calls
    }

    /// Calls to `HapticEngine::stop`.
    pub fn stop_calls(&self) -> usize {
        self.inner.lock().stop_calls
    }

    /// Whether the most recent engine is running.
    pub fn is_running(&self) -> bool {
        self.inner.lock().running
    }

    /// Event lists of every pattern a player was made for, in order.
    pub fn submitted_patterns(&self) -> Vec<Vec<HapticEvent>> {
        self.inner.lock().submitted.clone()
    }

    /// Start times of every player that started successfully.
    pub fn player_starts(&self) -> Vec<StartTime> {
        self.inner.lock().start_times.clone()
    }

    /// Finished handlers registered through `notify_when_players_finished`.
    pub fn handlers_registered(&self) -> usize {
        self.inner.lock().handlers_registered
    }

    /// Finished handlers that have been invoked.
    pub fn handlers_fired(&self) -> usize {
        self.inner.lock().handlers_fired
    }

    /// Actions returned by fired finished handlers.
    pub fn finished_actions(&self) -> Vec<FinishedAction> {
        self.inner.lock().actions.clone()
    }

    /// Fire the held finished handler, if any, and apply its action.
    pub fn finish_players(&self) -> Option<FinishedAction> {
        let handler = self.inner.lock().pending.take()?;
        Some(self.fire(handler))
    }

    fn fire(&self, handler: FinishedHandler) -> FinishedAction {
        // The handler logs, so it runs without the lock held.
        let action = handler(None);
        let mut inner = self.inner.lock();
        inner.handlers_fired += 1;
        inner.actions.push(action);
        if action == FinishedAction::StopEngine && inner.running {
            inner.running = false;
            inner.stop_calls += 1;
        }
        action
    }
}

/// Backend producing [`MockEngine`]s that share one [`MockState`].
#[derive(Debug, Clone)]
pub struct MockBackend {
    supports_haptics: bool,
    finish: MockFinish,
    start_delay: Duration,
    state: Arc<MockState>,
}

impl MockBackend {
    /// A supported backend with no injected failures that finishes players
    /// immediately.
    pub fn new() -> Self {
        Self {
            supports_haptics: true,
            finish: MockFinish::Immediate,
            start_delay: Duration::ZERO,
            state: Arc::new(MockState::default()),
        }
    }

    /// Report a device without haptic hardware.
    pub fn unsupported(mut self) -> Self {
        self.supports_haptics = false;
        self
    }

    /// Inject `failures` into every engine this backend creates.
    ///
    /// ```rust
    /// use haptickit::HapticBackend;
    /// use haptickit_test_helpers::prelude::*;
    ///
    /// let backend = MockBackend::new().with_failures(MockFailures {
    ///     engine_creation: true,
    ///     ..MockFailures::default()
    /// });
    /// assert!(backend.create_engine().is_err());
    /// assert_eq!(backend.state().engines_created(), 0);
    /// ```
    pub fn with_failures(self, failures: MockFailures) -> Self {
        self.state.set_failures(failures);
        self
    }

    /// Make every engine start take `delay`.
    pub fn with_start_delay(mut self, delay: Duration) -> Self {
        self.start_delay = delay;
        self
    }

    /// Choose when registered finished handlers fire.
    pub fn with_finish(mut self, finish: MockFinish) -> Self {
        self.finish = finish;
        self
    }

    /// Shared recording of everything the engines observed.
    pub fn state(&self) -> Arc<MockState> {
        Arc::clone(&self.state)
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl HapticBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    fn capabilities(&self) -> HapticCapabilities {
        HapticCapabilities {
            supports_haptics: self.supports_haptics,
        }
    }

    fn create_engine(&self) -> EngineResult<Box<dyn HapticEngine>> {
        let mut inner = self.state.inner.lock();
        if inner.failures.engine_creation {
            return Err(EngineError::unavailable("mock engine creation failure"));
        }
        inner.engines_created += 1;
        Ok(Box::new(MockEngine {
            finish: self.finish,
            start_delay: self.start_delay,
            state: Arc::clone(&self.state),
        }))
    }
}

/// Engine that records calls into its backend's [`MockState`].
pub struct MockEngine {
    finish: MockFinish,
    start_delay: Duration,
    state: Arc<MockState>,
}

impl HapticEngine for MockEngine {
    fn start(&mut self) -> EngineResult {
        if !self.start_delay.is_zero() {
            thread::sleep(self.start_delay);
        }
        let mut inner = self.state.inner.lock();
        inner.start_calls += 1;
        if inner.failures.engine_start {
            return Err(EngineError::backend("mock engine start failure"));
        }
        inner.running = true;
        Ok(())
    }

    fn stop(&mut self) -> EngineResult {
        let mut inner = self.state.inner.lock();
        inner.stop_calls += 1;
        inner.running = false;
        inner.pending = None;
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.state.inner.lock().running
    }

    fn make_player(&mut self, pattern: &CompiledPattern) -> EngineResult<Box<dyn PatternPlayer>> {
        let mut inner = self.state.inner.lock();
        if inner.failures.make_player {
            return Err(EngineError::backend("mock player creation failure"));
        }
        if !inner.running {
            return Err(EngineError::NotRunning);
        }
        inner.submitted.push(pattern.events().to_vec());
        Ok(Box::new(MockPlayer {
            state: Arc::clone(&self.state),
        }))
    }

    fn notify_when_players_finished(&mut self, handler: FinishedHandler) {
        self.state.inner.lock().handlers_registered += 1;
        match self.finish {
            MockFinish::Immediate => {
                self.state.fire(handler);
            }
            MockFinish::Manual => self.state.inner.lock().pending = Some(handler),
        }
    }
}

struct MockPlayer {
    state: Arc<MockState>,
}

impl PatternPlayer for MockPlayer {
    fn start(&mut self, at: StartTime) -> EngineResult {
        let mut inner = self.state.inner.lock();
        if inner.failures.player_start {
            return Err(EngineError::backend("mock player start failure"));
        }
        inner.start_times.push(at);
        Ok(())
    }
}
