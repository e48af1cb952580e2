use std::collections::VecDeque;
use std::time::Duration;

use parking_lot::RwLock;

use crate::config::SAMPLE_CAPACITY;

// ─── Public types ────────────────────────────────────────────────

/// Thread-safe ring of the most recent latency observations.
/// The recorder calls `append()`, the chart handler calls `snapshot()`.
///
/// Any number of snapshots may run together; an append takes the
/// write lock and excludes both readers and other writers.
pub struct SampleBuffer {
    inner: RwLock<VecDeque<Duration>>,
    capacity: usize,
}

// ─── SampleBuffer impl ───────────────────────────────────────────

impl SampleBuffer {
    pub fn new() -> Self {
        Self::with_capacity(SAMPLE_CAPACITY)
    }

    /// A capacity of zero is bumped to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: RwLock::new(VecDeque::with_capacity(capacity + 1)),
            capacity,
        }
    }

    /// Push `sample` as the newest entry, evicting the oldest once full.
    pub fn append(&self, sample: Duration) {
        let mut ring = self.inner.write();
        ring.push_back(sample);
        while ring.len() > self.capacity {
            ring.pop_front();
        }
    }

    /// Independent copy of the current contents, oldest first.
    pub fn snapshot(&self) -> Vec<Duration> {
        self.inner.read().iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self::new()
    }
}
