//! Software haptic backend.
//!
//! Renders transient events to the `tracing` log instead of an actuator and
//! finishes players once the pattern has played out. Used on hosts without
//! haptic hardware and by `hapticctl`.
//!
//! Each engine owns one timer thread. A finished handler registration only
//! updates shared state and wakes that thread, so registering costs no thread
//! spawn and a newer registration replaces the one still waiting.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use parking_lot::{Condvar, Mutex, MutexGuard};
use tracing::{debug, trace, warn};

use crate::engine::{
    FinishedAction, FinishedHandler, HapticBackend, HapticCapabilities, HapticEngine,
    PatternPlayer, StartTime,
};
use crate::error::{EngineError, EngineResult};
use crate::pattern::CompiledPattern;

/// Backend that creates [`SimulatedEngine`]s.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    capabilities: HapticCapabilities,
    creation_failure: Option<String>,
    rendered: Arc<AtomicU64>,
}

impl SimulatedBackend {
    /// A backend reporting haptic support.
    #[must_use]
    pub fn new() -> Self {
        Self {
            capabilities: HapticCapabilities::SUPPORTED,
            creation_failure: None,
            rendered: Arc::new(AtomicU64::new(0)),
        }
    }

    /// A backend for a device without haptic hardware.
    #[must_use]
    pub fn unsupported() -> Self {
        Self {
            capabilities: HapticCapabilities::UNSUPPORTED,
            ..Self::new()
        }
    }

    /// A backend whose engine creation always fails with `reason`.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            creation_failure: Some(reason.into()),
            ..Self::new()
        }
    }

    /// Transient events rendered by every engine this backend created.
    #[must_use]
    pub fn rendered_events(&self) -> u64 {
        self.rendered.load(Ordering::Relaxed)
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl HapticBackend for SimulatedBackend {
    fn name(&self) -> &str {
        "simulated"
    }

    fn capabilities(&self) -> HapticCapabilities {
        self.capabilities
    }

    fn create_engine(&self) -> EngineResult<Box<dyn HapticEngine>> {
        if let Some(reason) = &self.creation_failure {
            return Err(EngineError::unavailable(reason.clone()));
        }

        let shared = Arc::new(Shared::default());
        let timer_shared = Arc::clone(&shared);
        let timer = thread::Builder::new()
            .name("haptic-sim-timer".into())
            .spawn(move || run_timer(&timer_shared))
            .map_err(|err| EngineError::unavailable(format!("timer thread: {err}")))?;

        Ok(Box::new(SimulatedEngine {
            shared,
            timer: Some(timer),
            rendered: Arc::clone(&self.rendered),
        }))
    }
}

#[derive(Default)]
struct SimState {
    running: bool,
    busy_until: Option<Instant>,
    pending: Option<FinishedHandler>,
    closed: bool,
}

#[derive(Default)]
struct Shared {
    state: Mutex<SimState>,
    wake: Condvar,
}

/// Engine that logs what it would render.
pub struct SimulatedEngine {
    shared: Arc<Shared>,
    timer: Option<JoinHandle<()>>,
    rendered: Arc<AtomicU64>,
}

impl Drop for SimulatedEngine {
    fn drop(&mut self) {
        {
            let mut state = self.shared.state.lock();
            state.closed = true;
            state.pending = None;
        }
        self.shared.wake.notify_all();

        if let Some(timer) = self.timer.take() {
            if timer.join().is_err() {
                warn!("simulated haptic timer thread panicked");
            }
        }
    }
}

impl HapticEngine for SimulatedEngine {
    fn start(&mut self) -> EngineResult {
        let mut state = self.shared.state.lock();
        if !state.running {
            state.running = true;
            debug!("simulated haptic engine started");
        }
        Ok(())
    }

    fn stop(&mut self) -> EngineResult {
        let mut state = self.shared.state.lock();
        if state.running {
            state.running = false;
            state.pending = None;
            debug!("simulated haptic engine stopped");
        }
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.shared.state.lock().running
    }

    fn make_player(&mut self, pattern: &CompiledPattern) -> EngineResult<Box<dyn PatternPlayer>> {
        if !self.shared.state.lock().running {
            return Err(EngineError::NotRunning);
        }
        Ok(Box::new(SimulatedPlayer {
            shared: Arc::clone(&self.shared),
            rendered: Arc::clone(&self.rendered),
            pattern: pattern.clone(),
        }))
    }

    fn notify_when_players_finished(&mut self, handler: FinishedHandler) {
        let replaced = self.shared.state.lock().pending.replace(handler).is_some();
        if replaced {
            trace!("replaced pending finished handler");
        }
        self.shared.wake.notify_one();
    }
}

/// Timer loop: fires the pending handler once every started player is done.
fn run_timer(shared: &Shared) {
    let mut state = shared.state.lock();
    loop {
        if state.closed {
            break;
        }
        if state.pending.is_none() {
            shared.wake.wait(&mut state);
            continue;
        }
        if let Some(until) = state.busy_until.filter(|until| Instant::now() < *until) {
            // Woken early by a new registration or a later player; recheck.
            let _timed_out = shared.wake.wait_until(&mut state, until);
            continue;
        }
        let Some(handler) = state.pending.take() else {
            continue;
        };

        let action = MutexGuard::unlocked(&mut state, || handler(None));
        if action == FinishedAction::StopEngine && state.pending.is_none() && state.running {
            state.running = false;
            debug!("simulated haptic engine stopped after players finished");
        }
    }
    trace!("simulated haptic timer exited");
}

struct SimulatedPlayer {
    shared: Arc<Shared>,
    rendered: Arc<AtomicU64>,
    pattern: CompiledPattern,
}

impl PatternPlayer for SimulatedPlayer {
    fn start(&mut self, at: StartTime) -> EngineResult {
        let mut state = self.shared.state.lock();
        if !state.running {
            return Err(EngineError::NotRunning);
        }

        let delay = at.delay();
        for event in self.pattern.events() {
            trace!(
                at_ms = (delay + event.relative_time).as_millis() as u64,
                intensity = event.intensity,
                sharpness = event.sharpness,
                "simulated transient"
            );
        }

        let until = Instant::now() + delay + self.pattern.duration();
        state.busy_until = Some(state.busy_until.map_or(until, |busy| busy.max(until)));
        self.rendered
            .fetch_add(self.pattern.len() as u64, Ordering::Relaxed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::HapticPattern;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_backend_variants() {
        assert!(SimulatedBackend::new().capabilities().supports_haptics);
        assert!(!SimulatedBackend::unsupported().capabilities().supports_haptics);
        assert!(matches!(
            SimulatedBackend::failing("no server").create_engine(),
            Err(EngineError::Unavailable(_))
        ));
    }

    #[test]
    fn test_player_requires_running_engine() -> TestResult {
        let backend = SimulatedBackend::new();
        let mut engine = backend.create_engine()?;
        let pattern = CompiledPattern::try_from(HapticPattern::SinglePulse)?;

        assert!(matches!(
            engine.make_player(&pattern),
            Err(EngineError::NotRunning)
        ));

        engine.start()?;
        let mut player = engine.make_player(&pattern)?;
        player.start(StartTime::Immediate)?;
        assert_eq!(backend.rendered_events(), 1);
        Ok(())
    }

    #[test]
    fn test_finished_handler_stops_engine() -> TestResult {
        let backend = SimulatedBackend::new();
        let mut engine = backend.create_engine()?;
        let pattern = CompiledPattern::try_from(HapticPattern::DoublePulse)?;

        engine.start()?;
        engine.make_player(&pattern)?.start(StartTime::Immediate)?;
        engine.notify_when_players_finished(Box::new(|_| FinishedAction::StopEngine));

        let deadline = Instant::now() + Duration::from_secs(2);
        while engine.is_running() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert!(!engine.is_running());
        assert_eq!(backend.rendered_events(), 2);
        Ok(())
    }

    #[test]
    fn test_keep_warm_leaves_engine_running() -> TestResult {
        let backend = SimulatedBackend::new();
        let mut engine = backend.create_engine()?;
        let pattern = CompiledPattern::try_from(HapticPattern::SinglePulse)?;

        engine.start()?;
        engine.make_player(&pattern)?.start(StartTime::Immediate)?;
        engine.notify_when_players_finished(Box::new(|_| FinishedAction::LeaveRunning));

        thread::sleep(pattern.duration() + Duration::from_millis(50));
        assert!(engine.is_running());
        Ok(())
    }

    #[test]
    fn test_newer_registration_replaces_pending_handler() -> TestResult {
        let backend = SimulatedBackend::new();
        let mut engine = backend.create_engine()?;
        let pattern = CompiledPattern::try_from(HapticPattern::DoublePulse)?;
        let fired = Arc::new(AtomicUsize::new(0));
        let superseded = Arc::new(AtomicUsize::new(0));

        engine.start()?;
        engine.make_player(&pattern)?.start(StartTime::Immediate)?;
        for _ in 0..200 {
            let superseded = Arc::clone(&superseded);
            engine.notify_when_players_finished(Box::new(move |_| {
                superseded.fetch_add(1, Ordering::SeqCst);
                FinishedAction::LeaveRunning
            }));
        }
        let last = Arc::clone(&fired);
        engine.notify_when_players_finished(Box::new(move |_| {
            last.fetch_add(1, Ordering::SeqCst);
            FinishedAction::StopEngine
        }));

        let deadline = Instant::now() + Duration::from_secs(2);
        while engine.is_running() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        thread::sleep(Duration::from_millis(20));

        assert!(!engine.is_running());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(superseded.load(Ordering::SeqCst), 0);
        Ok(())
    }

    #[test]
    fn test_drop_joins_timer_with_pending_handler() -> TestResult {
        let backend = SimulatedBackend::new();
        let mut engine = backend.create_engine()?;
        let pattern = CompiledPattern::try_from(HapticPattern::DoublePulse)?;
        let fired = Arc::new(AtomicUsize::new(0));

        engine.start()?;
        engine
            .make_player(&pattern)?
            .start(StartTime::After(Duration::from_secs(30)))?;
        let counter = Arc::clone(&fired);
        engine.notify_when_players_finished(Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            FinishedAction::StopEngine
        }));

        let started = Instant::now();
        drop(engine);
        assert!(started.elapsed() < Duration::from_secs(1));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        Ok(())
    }
}
