//! Relic Metrics - per-frame counters and frame-time profiling
//!
//! `FrameStats` (draw calls, triangles, windowed FPS) is always compiled in:
//! the render core reports it once per sampling window.
//!
//! Frame-time profiling (`FrameTimer`) is zero-cost unless the
//! `metrics` feature is enabled.
//!
//! # Feature Flags
//!
//! - `metrics` - Enable frame-time profiling (default: disabled)
//!
//! # Usage
//!
//! ```ignore
//! use relic_metrics::{FrameStats, FrameTimer};
//!
//! let mut stats = FrameStats::new();
//! let mut timer = FrameTimer::new(60);
//! stats.start();
//! timer.begin();
//! stats.record_draw(12);
//! timer.end();
//! if let Some(report) = stats.stop(now_ms) {
//!     tracing::debug!("FPS: {} ({:.2} ms)", report.fps, timer.frame_time_ms());
//! }
//! ```

mod frame_stats;

#[cfg(feature = "metrics")]
mod frame_timer;
#[cfg(feature = "metrics")]
mod sample_window;

pub use frame_stats::{FrameReport, FrameStats, FPS_WINDOW_MS};

#[cfg(feature = "metrics")]
pub use frame_timer::FrameTimer;

// ============================================================================
// No-op stubs when metrics disabled
// ============================================================================

#[cfg(not(feature = "metrics"))]
pub struct FrameTimer;

#[cfg(not(feature = "metrics"))]
impl FrameTimer {
    pub fn new(_window: usize) -> Self { Self }
    pub fn begin(&mut self) {}
    pub fn end(&mut self) {}
    pub fn frame_time_ms(&self) -> f64 { 0.0 }
    pub fn frame_time_range_ms(&self) -> (f64, f64) { (0.0, 0.0) }
    pub fn frames(&self) -> u64 { 0 }
    pub const fn enabled() -> bool { false }
}
