//! Error types for hapticctl

use haptickit::{ConfigError, HapticError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Haptics unavailable: {0}")]
    HapticsUnavailable(HapticError),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}
