//! Sliding window of frame durations

use std::collections::VecDeque;
use std::time::Duration;

/// Last `capacity` durations with a running total, so the mean is O(1) per
/// frame. Extremes are scanned on demand; they are only read at FPS roll-over.
pub struct SampleWindow {
    samples: VecDeque<Duration>,
    capacity: usize,
    total: Duration,
}

impl SampleWindow {
    /// A zero capacity is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            total: Duration::ZERO,
        }
    }

    pub fn push(&mut self, sample: Duration) {
        if self.samples.len() == self.capacity {
            if let Some(evicted) = self.samples.pop_front() {
                self.total -= evicted;
            }
        }
        self.total += sample;
        self.samples.push_back(sample);
    }

    pub fn mean(&self) -> Duration {
        match u32::try_from(self.samples.len()) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(n) => self.total / n,
        }
    }

    /// (shortest, longest), zero while empty.
    pub fn range(&self) -> (Duration, Duration) {
        self.samples
            .iter()
            .fold(None, |acc: Option<(Duration, Duration)>, &d| {
                Some(acc.map_or((d, d), |(lo, hi)| (lo.min(d), hi.max(d))))
            })
            .unwrap_or_default()
    }
}
