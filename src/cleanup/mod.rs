//! Deferred cleanup.
//!
//! Rust runs `Drop` when a value leaves scope, so "do this on the way out"
//! is a guard value rather than a keyword. Guards drop in reverse order of
//! creation: the last one declared runs first.

pub mod db;

/// Runs a cleanup closure when the enclosing scope exits, on every path out:
/// normal return, `?` early return, or unwinding panic.
pub struct Defer<F: FnOnce()> {
    cleanup: Option<F>,
}

impl<F: FnOnce()> Defer<F> {
    pub fn new(cleanup: F) -> Self {
        Defer {
            cleanup: Some(cleanup),
        }
    }

    /// Disarms the guard so the cleanup never runs.
    pub fn cancel(mut self) {
        self.cleanup = None;
    }
}

impl<F: FnOnce()> Drop for Defer<F> {
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

pub fn defer<F: FnOnce()>(cleanup: F) -> Defer<F> {
    Defer::new(cleanup)
}
