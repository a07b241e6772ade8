use std::time::Duration;

/// Deterministic simulated-time task queue. All delayed transitions run
/// through one of these instead of ambient timers, so a fresh game can
/// drop every stale task at once and tests can drive time explicitly.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now: Duration,
    seq: u64,
    queue: Vec<Entry<T>>,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    due: Duration,
    seq: u64,
    task: T,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            seq: 0,
            queue: Vec::new(),
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration, task: T) {
        let entry = Entry {
            due: self.now + delay,
            seq: self.seq,
            task,
        };
        self.seq += 1;
        self.queue.push(entry);
    }

    /// Pops the earliest task due at or before `deadline`, advancing the
    /// clock to its due time. Tasks scheduled while handling the popped
    /// task are therefore measured from the moment it fired.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<T> {
        let index = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= deadline)
            .min_by_key(|(_, entry)| (entry.due, entry.seq))
            .map(|(index, _)| index)?;
        let entry = self.queue.remove(index);
        self.now = self.now.max(entry.due);
        Some(entry.task)
    }

    /// Moves the clock forward to `deadline` once every due task has
    /// been popped.
    pub fn finish(&mut self, deadline: Duration) {
        if deadline > self.now {
            self.now = deadline;
        }
    }

    /// Absolute due time of the next pending task, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.iter().map(|entry| entry.due).min()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
