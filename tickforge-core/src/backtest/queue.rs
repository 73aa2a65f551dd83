//! Thread-safe, timestamp-ordered event queue — the spine of the simulation.
//!
//! Pop order is strictly nondecreasing by event timestamp regardless of push
//! order or pushing thread; ties break arbitrarily. One mutex plus condvar
//! (both push and pop mutate the heap, so there is no reader/writer split).

use crate::domain::Event;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::{Condvar, Mutex};

/// Heap entry ordered so the *earliest* timestamp surfaces first.
struct Earliest(Event);

impl PartialEq for Earliest {
    fn eq(&self, other: &Self) -> bool {
        self.0.timestamp() == other.0.timestamp()
    }
}

impl Eq for Earliest {}

impl PartialOrd for Earliest {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Earliest {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the minimum timestamp.
        other.0.timestamp().cmp(&self.0.timestamp())
    }
}

struct QueueState {
    heap: BinaryHeap<Earliest>,
    stopped: bool,
}

/// Priority queue of events keyed by timestamp, ascending.
pub struct EventQueue {
    state: Mutex<QueueState>,
    available: Condvar,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(QueueState {
                heap: BinaryHeap::new(),
                stopped: false,
            }),
            available: Condvar::new(),
        }
    }

    /// Insert an event and wake one waiter.
    pub fn push(&self, event: Event) {
        {
            let mut state = self.lock_state();
            state.heap.push(Earliest(event));
        }
        self.available.notify_one();
    }

    /// Remove and return the earliest event, blocking while the queue is
    /// empty and not stopped. `None` means stopped with nothing pending.
    pub fn pop(&self) -> Option<Event> {
        let mut state = self.lock_state();
        while state.heap.is_empty() && !state.stopped {
            state = self
                .available
                .wait(state)
                .unwrap_or_else(|e| e.into_inner());
        }
        state.heap.pop().map(|entry| entry.0)
    }

    /// Non-blocking pop.
    pub fn try_pop(&self) -> Option<Event> {
        self.lock_state().heap.pop().map(|entry| entry.0)
    }

    /// Flip the stopped flag and wake all blocked poppers. Pending events
    /// are retained; callers drain or discard them explicitly.
    pub fn stop(&self) {
        {
            let mut state = self.lock_state();
            state.stopped = true;
        }
        self.available.notify_all();
    }

    pub fn is_stopped(&self) -> bool {
        self.lock_state().stopped
    }

    pub fn len(&self) -> usize {
        self.lock_state().heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_state().heap.is_empty()
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, QueueState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
