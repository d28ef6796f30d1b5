//! Per-frame draw counters and windowed FPS

/// Length of the FPS sampling window, in milliseconds.
pub const FPS_WINDOW_MS: u64 = 1000;

/// Snapshot emitted when a sampling window rolls over.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameReport {
    /// Frames completed inside the window that just closed.
    pub fps: u32,
    /// Draw calls issued by the frame that closed the window.
    pub draw_calls: u32,
    /// Triangles submitted by the frame that closed the window.
    pub triangles: u32,
}

/// Draw-call / triangle counters plus a 1-second FPS window.
///
/// Counters reset in `start`. `stop` either rolls the window (when its
/// deadline has passed) or counts the frame into the open window. The frame
/// that triggers a rollover opens the next window without being counted.
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    draw_calls: u32,
    triangles: u32,
    frame: u32,
    fps: u32,
    window_deadline_ms: Option<u64>,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset per-frame counters.
    pub fn start(&mut self) {
        self.draw_calls = 0;
        self.triangles = 0;
    }

    pub fn record_draw(&mut self, triangles: u32) {
        self.draw_calls += 1;
        self.triangles += triangles;
    }

    /// Close the frame at wall-clock `now_ms`.
    pub fn stop(&mut self, now_ms: u64) -> Option<FrameReport> {
        let expired = self
            .window_deadline_ms
            .map_or(true, |deadline| deadline < now_ms);

        if expired {
            self.fps = self.frame;
            self.frame = 0;
            self.window_deadline_ms = Some(now_ms + FPS_WINDOW_MS);
            Some(FrameReport {
                fps: self.fps,
                draw_calls: self.draw_calls,
                triangles: self.triangles,
            })
        } else {
            self.frame += 1;
            None
        }
    }

    /// Frames per second reported by the last closed window.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Frames counted so far in the open window.
    pub fn frames_in_window(&self) -> u32 {
        self.frame
    }

    pub fn draw_calls(&self) -> u32 {
        self.draw_calls
    }

    pub fn triangles(&self) -> u32 {
        self.triangles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_reset_on_start() {
        let mut stats = FrameStats::new();
        stats.start();
        stats.record_draw(10);
        stats.record_draw(5);
        assert_eq!(stats.draw_calls(), 2);
        assert_eq!(stats.triangles(), 15);

        stats.start();
        assert_eq!(stats.draw_calls(), 0);
        assert_eq!(stats.triangles(), 0);
    }

    #[test]
    fn test_first_stop_opens_window() {
        let mut stats = FrameStats::new();
        stats.start();
        let report = stats.stop(0).unwrap();
        assert_eq!(report.fps, 0);
        assert_eq!(stats.frames_in_window(), 0);
    }

    #[test]
    fn test_window_rollover() {
        let mut stats = FrameStats::new();
        stats.start();
        stats.stop(0);

        // 30 frames inside [0, 1000]
        for i in 1..=30 {
            stats.start();
            assert_eq!(stats.stop(i * 33), None);
        }
        assert_eq!(stats.frames_in_window(), 30);
        assert_eq!(stats.fps(), 0);

        // Deadline exactly reached still counts into the window
        stats.start();
        assert_eq!(stats.stop(FPS_WINDOW_MS), None);
        assert_eq!(stats.frames_in_window(), 31);

        stats.start();
        stats.record_draw(4);
        let report = stats.stop(FPS_WINDOW_MS + 1).unwrap();
        assert_eq!(report.fps, 31);
        assert_eq!(report.draw_calls, 1);
        assert_eq!(report.triangles, 4);
        assert_eq!(stats.fps(), 31);
        assert_eq!(stats.frames_in_window(), 0);
    }
}
