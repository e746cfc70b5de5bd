// VigCrack Cancellation
// Cooperative cancel flag polled between candidates

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag
///
/// Cloning yields a handle to the same flag, so a signal handler can cancel a
/// search running on the main thread. The driver polls the flag between
/// candidates only; a request made mid-evaluation takes effect once the
/// current candidate finishes.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
