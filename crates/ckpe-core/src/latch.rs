//! Save-in-progress latch

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Prevents a second save from starting while one is running.
///
/// Clones share the same flag, so a front-end can hand one to whatever
/// drives saves off its main thread.
#[derive(Debug, Clone, Default)]
pub struct SaveLatch {
    in_flight: Arc<AtomicBool>,
}

impl SaveLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the latch, or `None` if a save is already running.
    pub fn try_acquire(&self) -> Option<SaveGuard> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SaveGuard {
                in_flight: Arc::clone(&self.in_flight),
            })
    }

    pub fn is_held(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Releases the latch on drop.
#[derive(Debug)]
pub struct SaveGuard {
    in_flight: Arc<AtomicBool>,
}

impl Drop for SaveGuard {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}
