//! Two-sided stencil for z-fail shadow volumes
//!
//! Volume accumulation wants back faces to decrement and front faces to
//! increment on depth fail, in one pass. Three driver paths provide that:
//!
//! - separate-face stencil: program both faces directly
//! - `EXT_stencil_two_side`: enable the extension, program each active face
//! - neither: only the comparison is set here; the caller draws the volume
//!   twice with front/back culling toggled and sets the ops per pass
//!
//! Disabling always leaves the state for the compare pass that follows:
//! keep/keep/keep, not-equal against the reference, front-face culling.

use crate::caps::StencilMode;
use crate::context::RenderContext;
use crate::device::{CompareFunc, Face, Feature, GpuDevice, StencilOp, StencilOps};
use crate::state::CullMode;

const FULL_MASK: u32 = !0;

const INCR_ON_DEPTH_FAIL: StencilOps = StencilOps::depth_fail(StencilOp::Incr);
const DECR_ON_DEPTH_FAIL: StencilOps = StencilOps::depth_fail(StencilOp::Decr);

/// Which two-sided stencil path is live.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum StencilPath {
    #[default]
    Disabled,
    /// Single-sided fallback; two passes driven by the caller.
    EnabledNative,
    EnabledExtensionTwoSide,
    EnabledSeparate,
}

impl<D: GpuDevice> RenderContext<D> {
    /// Preset stencil state for shadow-volume accumulation (`enable`) or for
    /// the compare pass after it (`!enable`).
    pub fn set_stencil_two_side(&mut self, reference: i32, enable: bool) {
        if !enable {
            if self.active.stencil == StencilPath::EnabledExtensionTwoSide {
                self.device.disable(Feature::StencilTwoSide);
            }
            self.device.stencil_op(StencilOps::KEEP);
            self.device.stencil_func(CompareFunc::NotEqual, reference, FULL_MASK);
            self.set_culling(CullMode::Front);
            self.active.stencil = StencilPath::Disabled;
            return;
        }

        self.active.stencil = match self.caps.stencil {
            StencilMode::None => {
                tracing::trace!("two-sided stencil unavailable, caller runs two passes");
                self.device.stencil_func(CompareFunc::Always, reference, FULL_MASK);
                StencilPath::EnabledNative
            }
            StencilMode::TwoSideExtension => {
                self.set_culling(CullMode::None);
                self.device.enable(Feature::StencilTwoSide);
                self.device.active_stencil_face(Face::Back);
                self.device.stencil_op(DECR_ON_DEPTH_FAIL);
                self.device.stencil_func(CompareFunc::Always, reference, FULL_MASK);
                self.device.active_stencil_face(Face::Front);
                self.device.stencil_op(INCR_ON_DEPTH_FAIL);
                self.device.stencil_func(CompareFunc::Always, reference, FULL_MASK);
                StencilPath::EnabledExtensionTwoSide
            }
            StencilMode::SeparateExtension => {
                self.set_culling(CullMode::None);
                self.device
                    .stencil_func_separate(Face::Front, CompareFunc::Always, reference, FULL_MASK);
                self.device
                    .stencil_func_separate(Face::Back, CompareFunc::Always, reference, FULL_MASK);
                self.device.stencil_op_separate(Face::Front, INCR_ON_DEPTH_FAIL);
                self.device.stencil_op_separate(Face::Back, DECR_ON_DEPTH_FAIL);
                StencilPath::EnabledSeparate
            }
        };
    }

    pub fn stencil_path(&self) -> StencilPath {
        self.active.stencil
    }
}
