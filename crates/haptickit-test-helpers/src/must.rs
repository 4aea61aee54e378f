//! Unwrap helpers with good error messages.
//!
//! These replace `unwrap()` and `expect()` in test code. Every helper is
//! `#[track_caller]`, so a failure points at the test line, not this file.

use std::fmt::Debug;
use std::thread;
use std::time::{Duration, Instant};

/// Unwrap a `Result`, panicking with the error on failure.
///
/// ```rust
/// use haptickit_test_helpers::must;
///
/// let result: Result<i32, &str> = Ok(42);
/// assert_eq!(must(result), 42);
/// ```
///
/// # Panics
///
/// Panics if the result is `Err`.
#[track_caller]
pub fn must<T, E: Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must: unexpected Err: {e:?}"),
    }
}

/// Unwrap an `Option`, panicking with `msg` if `None`.
///
/// # Panics
///
/// Panics if the option is `None`.
#[track_caller]
pub fn must_some<T>(option: Option<T>, msg: &str) -> T {
    match option {
        Some(v) => v,
        None => panic!("must_some: {msg}"),
    }
}

/// Unwrap a `Result` with a context message.
///
/// # Panics
///
/// Panics if the result is `Err`, with the context and the error.
#[track_caller]
pub fn must_with<T, E: Debug>(result: Result<T, E>, context: &str) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must_with: {context}: {e:?}"),
    }
}

/// Poll `condition` every few milliseconds until it holds or `timeout` passes.
///
/// Returns the final value of `condition`. Used for state that settles on a
/// background thread, such as an engine stopping after its players finish.
///
/// ```rust
/// use std::time::Duration;
/// use haptickit_test_helpers::wait_until;
///
/// assert!(wait_until(Duration::from_millis(10), || true));
/// ```
pub fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    loop {
        if condition() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        thread::sleep(Duration::from_millis(2));
    }
}
