//! Process-wide shutdown coordination.
//! A flag set by the Ctrl-C handler so the apply loop stops before the next item.
//!
//! Relaxed atomics are sufficient for a one-way "stop" flag.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::errors::TagRenameError;

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Request a cooperative shutdown (idempotent).
#[inline]
pub fn request() {
    SHUTDOWN.store(true, Ordering::Relaxed);
}

/// Check whether a shutdown has been requested.
#[inline]
pub fn is_requested() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

/// Fail with `Interrupted` once a shutdown was requested.
pub fn check() -> Result<(), TagRenameError> {
    if is_requested() {
        Err(TagRenameError::Interrupted)
    } else {
        Ok(())
    }
}

/// Test/utility-only: clear the shutdown flag.
#[cfg(any(test, feature = "test-utils"))]
#[inline]
pub fn reset() {
    SHUTDOWN.store(false, Ordering::Relaxed);
}
