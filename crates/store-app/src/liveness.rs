//! Teardown guards for async completions.
//!
//! A catalog fetch resolves whenever the backend answers; by then the
//! view that asked for it may already be gone. Each view owns a
//! [`Liveness`] and hands a [`LivenessGuard`] to its in-flight
//! fetches; a completion checks the guard before applying state.
//! Dropping the owner flips every outstanding guard dead.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Ownership of a view's lifetime. Dropped on teardown.
#[derive(Debug)]
pub struct Liveness {
    alive: Arc<AtomicBool>,
}

impl Liveness {
    /// Create a live owner.
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Hand out a guard for an in-flight completion to check.
    pub fn guard(&self) -> LivenessGuard {
        LivenessGuard {
            alive: Arc::clone(&self.alive),
        }
    }

    /// Whether the owner is still alive.
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Liveness {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}

/// A check handle held by an async completion.
#[derive(Debug, Clone)]
pub struct LivenessGuard {
    alive: Arc<AtomicBool>,
}

impl LivenessGuard {
    /// Whether the owning view still exists.
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }
}
