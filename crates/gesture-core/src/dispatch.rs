//! Thread-safe, single-consumer dispatch queue.
//!
//! The queue is the only structure shared between the transport's
//! background task and the consumer tick loop.  The transport enqueues
//! deferred callbacks from its own context; the consumer drains and runs
//! them once per scheduling tick.  Replaces the process-wide singleton
//! dispatcher pattern with an explicitly constructed, explicitly owned
//! instance handed to both sides.
//!
//! # Locking discipline
//!
//! A single mutex protects the pending sequence, and it is held only for
//! the enqueue and the drain swap, never while callbacks run.  Because
//! callbacks execute outside the lock, a callback may itself enqueue more
//! work without deadlocking; that work runs on the *next* drain, which
//! also guarantees a drain always terminates.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

/// A deferred unit of work.  Ownership transfers fully to the queue on
/// enqueue and to the draining consumer on drain.
type Callback = Box<dyn FnOnce() + Send + 'static>;

/// FIFO hand-off queue from any producer context to one consumer context.
#[derive(Default)]
pub struct DispatchQueue {
    pending: Mutex<VecDeque<Callback>>,
}

impl DispatchQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `callback` to the pending sequence.
    ///
    /// May be called from any thread; never blocks waiting for a drain,
    /// only for the (brief) mutex.
    pub fn enqueue(&self, callback: impl FnOnce() + Send + 'static) {
        self.lock_pending().push_back(Box::new(callback));
    }

    /// Drains the entire pending sequence and runs every callback in
    /// enqueue order.  Returns the number of callbacks run.
    ///
    /// Must only be called from the single designated consumer context.
    /// The pending sequence is swapped out under the lock; callbacks are
    /// invoked after the lock is released, so each callback runs exactly
    /// once, in FIFO order, and never concurrently with another.
    pub fn drain_and_run(&self) -> usize {
        let drained = std::mem::take(&mut *self.lock_pending());
        let count = drained.len();
        for callback in drained {
            callback();
        }
        count
    }

    /// Number of callbacks currently waiting to be drained.
    pub fn len(&self) -> usize {
        self.lock_pending().len()
    }

    /// Returns `true` if nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.lock_pending().is_empty()
    }

    /// Acquires the pending-sequence lock.
    ///
    /// A poisoned lock means some thread panicked while *holding* it; the
    /// queue itself only pushes and swaps under the lock, so the data is
    /// still structurally valid and we continue with it.
    fn lock_pending(&self) -> std::sync::MutexGuard<'_, VecDeque<Callback>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
