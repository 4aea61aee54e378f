//! Prelude for haptickit.
//!
//! ```rust
//! use haptickit::prelude::*;
//!
//! let events = HapticPattern::SinglePulse.events();
//! assert_eq!(events.len(), 1);
//! ```

pub use crate::config::{PlayerConfig, StopPolicy};
pub use crate::engine::{
    FinishedAction, FinishedHandler, HapticBackend, HapticCapabilities, HapticEngine,
    PatternPlayer, StartTime,
};
pub use crate::error::{EngineError, EngineResult, HapticError, PatternError, PlaybackError};
pub use crate::pattern::{CompiledPattern, HapticEvent, HapticPattern};
pub use crate::player::HapticPlayer;
pub use crate::simulated::SimulatedBackend;
pub use crate::stats::PlaybackStats;
