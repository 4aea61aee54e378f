//! Command implementations for hapticctl

pub mod patterns;
pub mod play;

use clap::{Args, ValueEnum};
use haptickit::{HapticPattern, StopPolicy};

/// Upper bound on `--repeat`.
pub const MAX_REPEAT: u32 = 100;
/// Upper bound on `--interval-ms`.
pub const MAX_INTERVAL_MS: u64 = 10_000;

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Pattern to play (single-pulse or double-pulse)
    pub pattern: HapticPattern,

    /// Number of times to play the pattern
    #[arg(short, long, default_value_t = 1)]
    pub repeat: u32,

    /// Pause between repeats in milliseconds
    #[arg(long, default_value_t = 250)]
    pub interval_ms: u64,

    /// Engine behaviour between patterns; overrides the config file
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Stop the engine once each pattern has played
    AutoStop,
    /// Keep the engine running between patterns
    KeepWarm,
}

impl From<PolicyArg> for StopPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::AutoStop => StopPolicy::AutoStop,
            PolicyArg::KeepWarm => StopPolicy::KeepWarm,
        }
    }
}
