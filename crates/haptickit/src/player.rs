//! Fire-and-forget haptic playback.
//!
//! [`HapticPlayer`] owns one platform engine through a worker task on the
//! tokio runtime. `play` only enqueues the request, so it never blocks the
//! caller, and the worker handles requests one at a time so overlapping calls
//! never race on the engine. Engine calls block, so each one runs on the
//! blocking pool while the worker awaits it. Playback failures are logged and
//! dropped.
//!
//! The worker never outlives the runtime: shutting the runtime down cancels
//! it and releases the engine, and later `play` calls are counted as dropped.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, oneshot};
use tracing::{Instrument, Span, debug, error, info, trace, warn};

use crate::config::{PlayerConfig, StopPolicy};
use crate::engine::{EngineHandle, HapticBackend};
use crate::error::{ErrorSeverity, HapticError, HapticResult, PlaybackError};
use crate::pattern::HapticPattern;
use crate::stats::{PlaybackCounters, PlaybackStats};

#[derive(Debug)]
enum Command {
    Play(HapticPattern),
    Flush(oneshot::Sender<()>),
}

/// Plays built-in haptic patterns without blocking the caller.
///
/// A player only exists when haptics are usable; callers treat `None` from
/// [`HapticPlayer::new`] as "skip haptic feedback".
///
/// # Examples
///
/// ```
/// use haptickit::prelude::*;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let backend = SimulatedBackend::new();
/// if let Some(player) = HapticPlayer::new(&backend, PlayerConfig::default()) {
///     player.play(HapticPattern::DoublePulse);
///     player.flush().await;
///     assert_eq!(player.stats().played, 1);
/// }
/// # }
/// ```
#[derive(Debug)]
pub struct HapticPlayer {
    tx: mpsc::Sender<Command>,
    counters: Arc<PlaybackCounters>,
    config: PlayerConfig,
    backend: String,
}

impl HapticPlayer {
    /// Build a player on the current tokio runtime.
    ///
    /// Returns `None` when haptics are disabled, unsupported, the engine
    /// cannot be created or no runtime is running. The reason is logged.
    #[must_use]
    pub fn new(backend: &dyn HapticBackend, config: PlayerConfig) -> Option<Self> {
        Self::try_new(backend, config)
            .inspect_err(|err| log_unavailable(backend.name(), err))
            .ok()
    }

    /// Build a player whose worker runs on `handle`.
    #[must_use]
    pub fn with_handle(
        backend: &dyn HapticBackend,
        config: PlayerConfig,
        handle: &Handle,
    ) -> Option<Self> {
        Self::try_with_handle(backend, config, handle)
            .inspect_err(|err| log_unavailable(backend.name(), err))
            .ok()
    }

    /// Like [`HapticPlayer::new`], but reports why haptics are unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`HapticError`] when haptics are disabled, the device lacks
    /// haptic hardware, no tokio runtime is running, or engine creation fails.
    pub fn try_new(backend: &dyn HapticBackend, config: PlayerConfig) -> HapticResult<Self> {
        check_available(backend, &config)?;
        let handle = Handle::try_current()
            .map_err(|err| HapticError::RuntimeUnavailable(err.to_string()))?;
        Self::spawn(backend, config, &handle)
    }

    /// Like [`HapticPlayer::with_handle`], but reports why haptics are unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`HapticError`] when haptics are disabled, the device lacks
    /// haptic hardware, or engine creation fails.
    pub fn try_with_handle(
        backend: &dyn HapticBackend,
        config: PlayerConfig,
        handle: &Handle,
    ) -> HapticResult<Self> {
        check_available(backend, &config)?;
        Self::spawn(backend, config, handle)
    }

    fn spawn(
        backend: &dyn HapticBackend,
        config: PlayerConfig,
        handle: &Handle,
    ) -> HapticResult<Self> {
        let engine = backend
            .create_engine()
            .map_err(HapticError::EngineCreationFailed)?;
        let engine = EngineHandle::new(engine, backend.name());

        let (tx, rx) = mpsc::channel(config.max_pending.max(1));
        let counters = Arc::new(PlaybackCounters::default());
        let worker = Worker {
            engine: Some(engine),
            rx,
            policy: config.stop_policy,
            counters: Arc::clone(&counters),
            backend: backend.name().to_string(),
        };

        let _worker = handle.spawn(worker.run().instrument(Span::current()));

        debug!(
            backend = backend.name(),
            policy = ?config.stop_policy,
            max_pending = config.max_pending,
            "haptic player ready"
        );

        Ok(Self {
            tx,
            counters,
            config,
            backend: backend.name().to_string(),
        })
    }

    /// Queue `pattern` for playback and return immediately.
    ///
    /// Failures are logged by the worker and never reported here. Requests
    /// beyond `max_pending` are dropped.
    pub fn play(&self, pattern: HapticPattern) {
        self.counters.record_request();
        match self.tx.try_send(Command::Play(pattern)) {
            Ok(()) => trace!(%pattern, "haptic pattern queued"),
            Err(TrySendError::Full(_)) => {
                self.counters.record_dropped();
                debug!(%pattern, "haptic queue full, dropping request");
            }
            Err(TrySendError::Closed(_)) => {
                self.counters.record_dropped();
                warn!(%pattern, "haptic worker stopped, dropping request");
            }
        }
    }

    /// Wait until every pattern queued before this call has been processed.
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(Command::Flush(done_tx)).await.is_err() {
            return;
        }
        if done_rx.await.is_err() {
            debug!("haptic worker exited before flush completed");
        }
    }

    /// Snapshot of the playback counters.
    #[must_use]
    pub fn stats(&self) -> PlaybackStats {
        self.counters.snapshot()
    }

    /// Configuration the player was built with.
    #[must_use]
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Name of the backend driving this player.
    #[must_use]
    pub fn backend(&self) -> &str {
        &self.backend
    }

    /// Whether the worker is still accepting requests.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.tx.is_closed()
    }
}

fn check_available(backend: &dyn HapticBackend, config: &PlayerConfig) -> HapticResult<()> {
    if !config.enabled {
        return Err(HapticError::Disabled);
    }
    if !backend.capabilities().supports_haptics {
        return Err(HapticError::UnsupportedDevice);
    }
    Ok(())
}

fn log_unavailable(backend: &str, err: &HapticError) {
    match err.severity() {
        ErrorSeverity::Info => info!(backend, reason = %err, "haptics unavailable"),
        ErrorSeverity::Warning => warn!(backend, reason = %err, "haptics unavailable"),
        ErrorSeverity::Error => error!(backend, error = %err, "haptics unavailable"),
    }
}

/// Single consumer of play requests; sole owner of the engine.
struct Worker {
    /// `None` only while a blocking call holds the engine, or after one panicked.
    engine: Option<EngineHandle>,
    rx: mpsc::Receiver<Command>,
    policy: StopPolicy,
    counters: Arc<PlaybackCounters>,
    backend: String,
}

impl Worker {
    async fn run(mut self) {
        debug!(backend = %self.backend, "haptic worker started");
        while let Some(command) = self.rx.recv().await {
            match command {
                Command::Play(pattern) => self.play(pattern).await,
                Command::Flush(done) => {
                    if done.send(()).is_err() {
                        trace!("flush waiter went away");
                    }
                }
            }
        }
        self.release().await;
    }

    async fn play(&mut self, pattern: HapticPattern) {
        let Some(mut engine) = self.engine.take() else {
            self.counters.record_failed();
            warn!(backend = %self.backend, %pattern, "haptic engine lost, skipping pattern");
            return;
        };

        let policy = self.policy;
        let span = Span::current();
        let call = tokio::task::spawn_blocking(move || {
            let _entered = span.enter();
            let result = engine.play(pattern.events(), policy);
            (engine, result)
        });

        match call.await {
            Ok((engine, Ok(()))) => {
                self.engine = Some(engine);
                self.counters.record_played();
            }
            Ok((engine, Err(err))) => {
                self.engine = Some(engine);
                self.counters.record_failed();
                log_playback_failure(&self.backend, pattern, &err);
            }
            Err(err) => {
                self.counters.record_failed();
                error!(backend = %self.backend, %pattern, error = %err, "haptic engine call aborted");
            }
        }
    }

    /// Stop and drop the engine off the async threads.
    async fn release(&mut self) {
        let Some(engine) = self.engine.take() else {
            return;
        };
        let cycles = engine.cycles();
        let span = Span::current();
        let release = tokio::task::spawn_blocking(move || {
            let _entered = span.enter();
            drop(engine);
        });
        if let Err(err) = release.await {
            warn!(backend = %self.backend, error = %err, "haptic engine release aborted");
        }
        debug!(backend = %self.backend, cycles, "haptic worker stopped");
    }
}

fn log_playback_failure(backend: &str, pattern: HapticPattern, err: &PlaybackError) {
    let stage = err.stage();
    match err.severity() {
        ErrorSeverity::Error => {
            error!(backend, %pattern, stage, error = %err, "haptic playback failed");
        }
        ErrorSeverity::Info | ErrorSeverity::Warning => {
            warn!(backend, %pattern, stage, error = %err, "haptic playback failed");
        }
    }
}
