//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use haptickit_test_helpers::prelude::*;
//! ```

pub use crate::must::{must, must_some, must_with, wait_until};

#[cfg(feature = "mock")]
pub use crate::mock::{MockBackend, MockFailures, MockFinish, MockState};

/// Return type for tests that propagate errors with `?`.
pub type TestResult = Result<(), Box<dyn std::error::Error>>;
