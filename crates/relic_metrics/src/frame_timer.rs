//! CPU frame-time profiling

use super::sample_window::SampleWindow;
use std::time::Instant;

/// CPU time spent inside each `begin`/`end` bracket, over a sliding window.
///
/// FPS is not derived here; the render core reports it from `FrameStats`.
pub struct FrameTimer {
    started: Option<Instant>,
    window: SampleWindow,
    frames: u64,
}

impl FrameTimer {
    pub fn new(window: usize) -> Self {
        Self {
            started: None,
            window: SampleWindow::new(window),
            frames: 0,
        }
    }

    pub fn begin(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Close the bracket. An `end` without a matching `begin` is ignored.
    pub fn end(&mut self) {
        if let Some(started) = self.started.take() {
            self.window.push(started.elapsed());
            self.frames += 1;
        }
    }

    /// Mean frame time over the window, in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        self.window.mean().as_secs_f64() * 1000.0
    }

    pub fn frame_time_range_ms(&self) -> (f64, f64) {
        let (min, max) = self.window.range();
        (min.as_secs_f64() * 1000.0, max.as_secs_f64() * 1000.0)
    }

    /// Brackets closed since creation.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub const fn enabled() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brackets_are_counted() {
        let mut timer = FrameTimer::new(4);
        timer.begin();
        timer.end();
        timer.begin();
        timer.end();

        assert_eq!(timer.frames(), 2);
        let (min, max) = timer.frame_time_range_ms();
        assert!(min <= max);
        assert!(timer.frame_time_ms() >= 0.0);
    }

    #[test]
    fn test_unmatched_end_ignored() {
        let mut timer = FrameTimer::new(4);
        timer.end();
        assert_eq!(timer.frames(), 0);
        assert_eq!(timer.frame_time_ms(), 0.0);
    }
}
