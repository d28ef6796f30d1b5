//! Frame bracketing and statistics

use crate::context::RenderContext;
use crate::device::GpuDevice;
use crate::state::{ActiveState, BlendMode, CullMode};
use relic_core::math::Rect;
use relic_metrics::FrameTimer;

impl<D: GpuDevice> RenderContext<D> {
    /// Reset to the per-frame baseline: full-window viewport, depth test on,
    /// front-face culling, blending off.
    ///
    /// The snapshot is zeroed rather than re-queried, so the baseline setters
    /// always reach the driver. The default framebuffer is assumed bound;
    /// frames that render offscreen must return to it before `end_frame`.
    pub fn begin_frame(&mut self) {
        debug_assert!(!self.in_frame, "begin_frame called twice without end_frame");

        self.active = ActiveState::default();

        self.set_viewport(Rect::from_size(self.width, self.height));
        self.viewport_def = self.viewport;
        self.set_depth_test(true);

        // Seed opposite values so both setters issue a transition
        self.active.cull_mode = CullMode::None;
        self.active.blend_mode = BlendMode::Alpha;
        self.set_culling(CullMode::Front);
        self.set_blending(BlendMode::None);

        self.stats.start();
        self.timer.begin();
        self.in_frame = true;
    }

    pub fn end_frame(&mut self) {
        debug_assert!(self.in_frame, "end_frame called without begin_frame");

        self.timer.end();
        if let Some(report) = self.stats.stop(self.clock.now_ms()) {
            tracing::debug!(
                "FPS: {} DIP: {} TRI: {}",
                report.fps,
                report.draw_calls,
                report.triangles
            );
            if FrameTimer::enabled() {
                let (min, max) = self.timer.frame_time_range_ms();
                tracing::debug!(
                    "frame time {:.2} ms (min {:.2}, max {:.2})",
                    self.timer.frame_time_ms(),
                    min,
                    max
                );
            }
        }
        self.in_frame = false;
    }

    /// Count one draw call of `triangles` triangles into the current frame.
    pub fn record_draw(&mut self, triangles: u32) {
        self.stats.record_draw(triangles);
    }

    pub fn in_frame(&self) -> bool {
        self.in_frame
    }
}
