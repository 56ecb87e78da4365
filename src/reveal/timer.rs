//! Cooperative timer queue.
//!
//! A single-threaded event queue owned by the host event loop. Scheduling a
//! timer returns a [`ScheduledTimer`] handle; dropping the handle removes the
//! pending entry, so a timer can never fire for an owner that no longer exists.
//!
//! Time is an offset from queue creation. The host decides how that offset
//! relates to the wall clock: the TUI feeds it `Instant::elapsed()`, tests
//! feed it exact multiples of the tick period.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Identity of one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Default)]
struct QueueState {
    now: Duration,
    next_id: u64,
    /// Ordered by deadline, then by scheduling order.
    pending: BTreeSet<(Duration, TimerId)>,
}

/// Shared handle to a cooperative timer queue.
///
/// Cloning yields another handle to the same queue.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue(Rc<RefCell<QueueState>>);

impl TimerQueue {
    /// Create an empty queue at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current queue time.
    pub fn now(&self) -> Duration {
        self.0.borrow().now
    }

    /// Schedule a timer to fire `delay` after the current queue time.
    ///
    /// The timer stays pending for as long as the returned handle lives.
    #[must_use = "dropping the handle cancels the timer"]
    pub fn schedule(&self, delay: Duration) -> ScheduledTimer {
        let mut state = self.0.borrow_mut();
        let id = TimerId(state.next_id);
        state.next_id += 1;
        let deadline = state.now + delay;
        state.pending.insert((deadline, id));

        ScheduledTimer {
            id,
            deadline,
            queue: Rc::downgrade(&self.0),
        }
    }

    /// Fire the earliest timer due at or before `until`.
    ///
    /// The fired entry is removed and the queue clock moves to its deadline,
    /// so timers scheduled by the owner in response chain from the exact
    /// deadline rather than from `until`.
    pub fn pop_due(&self, until: Duration) -> Option<TimerId> {
        let mut state = self.0.borrow_mut();
        let &(deadline, id) = state.pending.first()?;
        if deadline > until {
            return None;
        }
        state.pending.remove(&(deadline, id));
        state.now = state.now.max(deadline);
        Some(id)
    }

    /// Move the queue clock forward to `until` (never backwards).
    pub fn settle(&self, until: Duration) {
        let mut state = self.0.borrow_mut();
        state.now = state.now.max(until);
    }

    /// Deadline of the earliest pending timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.0.borrow().pending.first().map(|&(deadline, _)| deadline)
    }

    /// Number of pending timers.
    pub fn pending(&self) -> usize {
        self.0.borrow().pending.len()
    }
}

/// A pending timer. Dropping it cancels the timer.
#[derive(Debug)]
#[must_use = "dropping the handle cancels the timer"]
pub struct ScheduledTimer {
    id: TimerId,
    deadline: Duration,
    queue: Weak<RefCell<QueueState>>,
}

impl ScheduledTimer {
    /// Id the queue reports when this timer fires.
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Queue time at which the timer fires.
    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

impl Drop for ScheduledTimer {
    fn drop(&mut self) {
        // Already fired timers are gone from the set; removing is then a no-op.
        if let Some(queue) = self.queue.upgrade() {
            queue.borrow_mut().pending.remove(&(self.deadline, self.id));
        }
    }
}
