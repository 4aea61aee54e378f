//! Error types for haptic playback.
//!
//! Construction errors ([`HapticError`]) are surfaced to callers that ask for
//! them through [`HapticPlayer::try_new`](crate::HapticPlayer::try_new).
//! Playback errors ([`PlaybackError`]) never leave the worker: they are logged
//! at the level given by [`PlaybackError::severity`] and discarded.

use core::fmt;

use thiserror::Error;

/// Severity used to pick the log level when an error is swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorSeverity {
    /// Expected condition, logged for information only.
    Info,
    /// Degraded behaviour, the caller carries on.
    Warning,
    /// Something the host should look at.
    Error,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
        }
    }
}

/// Failures reported by a platform engine or backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The engine resource could not be acquired.
    #[error("haptic engine unavailable: {0}")]
    Unavailable(String),

    /// An operation needed a running engine.
    #[error("haptic engine is not running")]
    NotRunning,

    /// Any other backend-specific failure.
    #[error("haptic backend error: {0}")]
    Backend(String),
}

impl EngineError {
    /// Create an unavailable error.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    /// Create a backend error.
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

/// Invalid pattern definitions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    /// A pattern needs at least one event.
    #[error("pattern has no events")]
    Empty,

    /// Intensity outside `[0.0, 1.0]` (or NaN).
    #[error("event {index}: intensity {value} outside [0.0, 1.0]")]
    IntensityOutOfRange {
        /// Position of the offending event.
        index: usize,
        /// Rejected value.
        value: f32,
    },

    /// Sharpness outside `[0.0, 1.0]` (or NaN).
    #[error("event {index}: sharpness {value} outside [0.0, 1.0]")]
    SharpnessOutOfRange {
        /// Position of the offending event.
        index: usize,
        /// Rejected value.
        value: f32,
    },

    /// Name that does not match any known pattern.
    #[error("unknown haptic pattern '{0}' (expected single-pulse or double-pulse)")]
    Unknown(String),
}

/// Errors that prevent a [`HapticPlayer`](crate::HapticPlayer) from being built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HapticError {
    /// The device reports no haptic hardware.
    #[error("device does not support haptics")]
    UnsupportedDevice,

    /// The backend failed to create its engine.
    #[error("haptic engine creation failed: {0}")]
    EngineCreationFailed(#[source] EngineError),

    /// No tokio runtime to host the playback worker.
    #[error("no async runtime available for haptic playback: {0}")]
    RuntimeUnavailable(String),

    /// Haptics switched off in configuration.
    #[error("haptics disabled by configuration")]
    Disabled,
}

impl HapticError {
    /// Get the error severity.
    #[must_use]
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            HapticError::UnsupportedDevice | HapticError::Disabled => ErrorSeverity::Info,
            HapticError::EngineCreationFailed(_) => ErrorSeverity::Error,
            HapticError::RuntimeUnavailable(_) => ErrorSeverity::Warning,
        }
    }

    /// Whether the failure is an expected property of the host rather than a fault.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        self.severity() == ErrorSeverity::Info
    }
}

/// Failures inside one playback attempt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    /// Starting the engine failed.
    #[error("failed to start haptic engine: {0}")]
    EngineStart(#[source] EngineError),

    /// The event list could not be turned into a pattern.
    #[error("failed to build haptic pattern: {0}")]
    PatternBuild(#[from] PatternError),

    /// The engine refused to create a player.
    #[error("failed to create pattern player: {0}")]
    PlayerCreation(#[source] EngineError),

    /// The player failed to start.
    #[error("failed to start pattern player: {0}")]
    PlayerStart(#[source] EngineError),
}

impl PlaybackError {
    /// Get the error severity.
    #[must_use]
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PlaybackError::PatternBuild(_) => ErrorSeverity::Error,
            PlaybackError::EngineStart(_)
            | PlaybackError::PlayerCreation(_)
            | PlaybackError::PlayerStart(_) => ErrorSeverity::Warning,
        }
    }

    /// The lifecycle step that failed, for structured logs.
    #[must_use]
    pub fn stage(&self) -> &'static str {
        match self {
            PlaybackError::EngineStart(_) => "engine-start",
            PlaybackError::PatternBuild(_) => "pattern-build",
            PlaybackError::PlayerCreation(_) => "player-create",
            PlaybackError::PlayerStart(_) => "player-start",
        }
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the file failed.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that was being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error.
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parse error.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is not one of yaml, yml or json.
    #[error("unsupported config format '{0}' (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    /// Values parsed but failed validation.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid(reason.into())
    }
}

/// Result of building a player.
pub type HapticResult<T> = std::result::Result<T, HapticError>;

/// Result of an engine operation.
pub type EngineResult<T = ()> = std::result::Result<T, EngineError>;

/// Result of loading configuration.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
