//! One-shot deferred tasks.
//!
//! A `DelayQueue<T>` holds payloads that become due after a fixed delay.
//! `schedule` hands back a `TaskHandle` that can cancel the task while it is
//! still pending. Ticking returns due payloads in scheduling order; a payload
//! is returned exactly once.

use std::time::Duration;

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct Scheduled<T> {
    handle: TaskHandle,
    timer: Timer,
    task: T,
}

#[derive(Resource, Debug)]
pub struct DelayQueue<T: Send + Sync + 'static> {
    next_id: u64,
    pending: Vec<Scheduled<T>>,
}

impl<T: Send + Sync + 'static> Default for DelayQueue<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<T: Send + Sync + 'static> DelayQueue<T> {
    pub fn schedule(&mut self, delay: Duration, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            handle,
            timer: Timer::new(delay, TimerMode::Once),
            task,
        });
        handle
    }

    /// Drop a pending task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.handle != handle);
        self.pending.len() != before
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.iter().any(|s| s.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advance every pending timer and drain the ones that came due.
    pub fn tick(&mut self, delta: Duration) -> Vec<T> {
        for s in &mut self.pending {
            s.timer.tick(delta);
        }

        let mut due = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].timer.is_finished() {
                due.push(self.pending.remove(i).task);
            } else {
                i += 1;
            }
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_delay() {
        let mut q = DelayQueue::default();
        q.schedule(Duration::from_secs(3), "init");

        assert!(q.tick(Duration::from_millis(2900)).is_empty());
        assert_eq!(q.tick(Duration::from_millis(100)), vec!["init"]);
        assert!(q.tick(Duration::from_secs(10)).is_empty());
        assert!(q.is_empty());
    }

    #[test]
    fn cancelled_task_never_fires() {
        let mut q = DelayQueue::default();
        let h = q.schedule(Duration::from_secs(1), 7u32);

        assert!(q.is_pending(h));
        assert!(q.cancel(h));
        assert!(!q.is_pending(h));
        assert!(!q.cancel(h));
        assert!(q.tick(Duration::from_secs(2)).is_empty());
    }

    #[test]
    fn due_tasks_come_out_in_scheduling_order() {
        let mut q = DelayQueue::default();
        q.schedule(Duration::from_millis(500), 'a');
        q.schedule(Duration::from_millis(100), 'b');
        q.schedule(Duration::from_secs(5), 'c');

        assert_eq!(q.tick(Duration::from_secs(1)), vec!['a', 'b']);
        assert_eq!(q.len(), 1);
    }
}
