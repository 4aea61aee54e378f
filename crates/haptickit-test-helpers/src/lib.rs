//! Shared test utilities for haptickit.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with good error messages and `#[track_caller]`
//! - [`assertions`] - Assertion macros for floats and haptic events
//! - [`mock`] - Recording mock backend with failure injection
//! - [`prelude`] - Convenience re-exports
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! haptickit-test-helpers = { path = "crates/haptickit-test-helpers" }
//! ```
//!
//! ```rust,ignore
//! use haptickit_test_helpers::prelude::*;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::panic, reason = "test helpers report failures by panicking")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod assertions;
pub mod must;
pub mod prelude;

#[cfg(feature = "mock")]
#[cfg_attr(docsrs, doc(cfg(feature = "mock")))]
pub mod mock;

pub use must::*;
