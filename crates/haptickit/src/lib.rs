//! Fire-and-forget haptic feedback
//!
//! This crate plays short, fixed haptic patterns through a platform engine
//! without ever blocking or failing the caller. Haptics are a non-essential
//! enhancement: when the device has no actuator the player simply does not
//! exist, and when playback fails the failure is logged and forgotten.
//!
//! # Architecture
//!
//! - [`pattern`]: the built-in patterns and the events they expand to
//! - [`engine`]: traits a platform backend implements, plus [`EngineHandle`]
//!   which runs the start → build → play → finish lifecycle
//! - [`player`]: [`HapticPlayer`], the non-blocking front end
//! - [`simulated`]: a software backend that logs instead of vibrating
//! - [`config`]: [`PlayerConfig`] and its file loaders
//! - [`error`]: construction, playback, engine and config errors
//!
//! # Example
//!
//! ```
//! use haptickit::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let player = HapticPlayer::new(&SimulatedBackend::unsupported(), PlayerConfig::default());
//! assert!(player.is_none());
//!
//! let backend = SimulatedBackend::new();
//! let player = HapticPlayer::new(&backend, PlayerConfig::default());
//! if let Some(player) = &player {
//!     player.play(HapticPattern::SinglePulse);
//! }
//! # }
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod pattern;
pub mod player;
pub mod prelude;
pub mod simulated;
pub mod stats;

pub use config::{PlayerConfig, PlayerConfigBuilder, StopPolicy};
pub use engine::{
    EngineHandle, FinishedAction, FinishedHandler, HapticBackend, HapticCapabilities,
    HapticEngine, PatternPlayer, StartTime,
};
pub use error::{
    ConfigError, ConfigResult, EngineError, EngineResult, ErrorSeverity, HapticError,
    HapticResult, PatternError, PlaybackError,
};
pub use pattern::{CompiledPattern, HapticEvent, HapticPattern};
pub use player::HapticPlayer;
pub use simulated::{SimulatedBackend, SimulatedEngine};
pub use stats::PlaybackStats;
