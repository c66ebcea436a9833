//! Edge-triggered hardware notifications
//!
//! The console raises two kinds of pulses at the core: the once-per-frame
//! vsync and the blit-completion interrupt. Each is a bare "it happened"
//! flag with a single writer (the hardware side) and a single waiter (the
//! frame loop or the renderer), so no generalized event system is needed.

use std::sync::Arc;

use parking_lot::{Condvar, Mutex};

/// A one-bit raise/wait notification.
///
/// `raise` sets the flag and wakes the waiter; `wait` blocks until the flag
/// is set, then consumes it. Clones share the same flag, so the hardware
/// side can keep a handle after the console is moved into the frame loop.
#[derive(Clone, Default)]
pub struct Signal {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    raised: Mutex<bool>,
    cond: Condvar,
}

impl Signal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag and wake the waiter. Raising an already-raised signal
    /// is a no-op; pulses do not queue.
    pub fn raise(&self) {
        let mut raised = self.inner.raised.lock();
        *raised = true;
        self.inner.cond.notify_one();
    }

    /// Block until the signal is raised, then clear it.
    pub fn wait(&self) {
        let mut raised = self.inner.raised.lock();
        while !*raised {
            self.inner.cond.wait(&mut raised);
        }
        *raised = false;
    }

    /// Non-blocking check, leaving the flag untouched.
    pub fn is_raised(&self) -> bool {
        *self.inner.raised.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_wait_consumes_a_prior_raise() {
        let signal = Signal::new();
        signal.raise();
        assert!(signal.is_raised());
        signal.wait();
        assert!(!signal.is_raised());
    }

    #[test]
    fn test_wait_blocks_until_raised() {
        let signal = Signal::new();
        let raiser = signal.clone();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(10));
            raiser.raise();
        });
        signal.wait();
        handle.join().unwrap();
        assert!(!signal.is_raised());
    }

    #[test]
    fn test_pulses_do_not_queue() {
        let signal = Signal::new();
        signal.raise();
        signal.raise();
        signal.wait();
        assert!(!signal.is_raised());
    }
}
