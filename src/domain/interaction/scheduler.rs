// SPDX-License-Identifier: MPL-2.0
//! Cancellable deferred actions.
//!
//! Latches that wait for an animation to settle are queued here instead of
//! being fired from detached timers. The owner drains due actions from its
//! frame callback, so dropping or clearing the scheduler guarantees that no
//! stale action fires against state that has since changed.

use std::time::{Duration, Instant};

/// Handle to a scheduled action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug, Clone)]
struct Pending<A> {
    id: TaskId,
    due: Instant,
    action: A,
}

/// Queue of actions waiting for their due instant.
#[derive(Debug, Clone)]
pub struct Scheduler<A> {
    pending: Vec<Pending<A>>,
    next_id: u64,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 0,
        }
    }
}

impl<A> Scheduler<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `action` to become due `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, action: A) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due: now + delay,
            action,
        });
        id
    }

    /// Cancels one action. Returns `true` if it was still pending.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|task| task.id != id);
        self.pending.len() != before
    }

    /// Cancels every pending action matching `predicate`; returns how many.
    pub fn cancel_matching(&mut self, mut predicate: impl FnMut(&A) -> bool) -> usize {
        let before = self.pending.len();
        self.pending.retain(|task| !predicate(&task.action));
        before - self.pending.len()
    }

    /// Drops every pending action.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Removes and returns the actions due at `now`, earliest first.
    /// Actions with the same due instant keep their scheduling order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<A> {
        let mut due = Vec::new();
        let mut index = 0;
        while index < self.pending.len() {
            if self.pending[index].due <= now {
                due.push(self.pending.remove(index));
            } else {
                index += 1;
            }
        }
        due.sort_by(|a, b| a.due.cmp(&b.due).then(a.id.0.cmp(&b.id.0)));
        due.into_iter().map(|task| task.action).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn nothing_is_due_before_its_delay() {
        let now = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(now, ms(300), "latch");

        assert!(scheduler.drain_due(now + ms(299)).is_empty());
        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.drain_due(now + ms(300)), vec!["latch"]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn due_actions_come_out_in_due_order() {
        let now = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(now, ms(550), "nudge");
        scheduler.schedule(now, ms(300), "latch");
        scheduler.schedule(now, ms(300), "second-latch");

        assert_eq!(
            scheduler.drain_due(now + ms(600)),
            vec!["latch", "second-latch", "nudge"]
        );
    }

    #[test]
    fn cancelled_action_never_fires() {
        let now = Instant::now();
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(now, ms(100), 1);
        scheduler.schedule(now, ms(100), 2);

        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert_eq!(scheduler.drain_due(now + ms(200)), vec![2]);
    }

    #[test]
    fn cancel_matching_filters_by_action() {
        let now = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(now, ms(100), 'a');
        scheduler.schedule(now, ms(100), 'b');
        scheduler.schedule(now, ms(100), 'a');

        assert_eq!(scheduler.cancel_matching(|action| *action == 'a'), 2);
        assert_eq!(scheduler.drain_due(now + ms(100)), vec!['b']);
    }

    #[test]
    fn clear_drops_everything() {
        let now = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(now, ms(10), ());
        scheduler.schedule(now, ms(20), ());
        scheduler.clear();

        assert!(scheduler.is_empty());
        assert!(scheduler.drain_due(now + ms(20)).is_empty());
    }
}
