//! Command-recording backend
//!
//! `RecordingDevice` implements `GpuDevice` without a driver: every call is
//! appended to a command log. Used for headless runs and for asserting exact
//! command streams in tests.

use crate::device::{
    Attachment, BlendFactor, ClearMask, ColorMask, CompareFunc, DriverInfo, Face, Feature,
    GpuDevice, LabelKind, NativeId, RenderbufferFormat, StencilOps, TextureTarget,
};
use crate::error::RenderError;
use relic_core::math::{Rect, Vec4};
use std::collections::HashSet;

/// One recorded driver call.
#[derive(Debug, Clone, PartialEq)]
pub enum GpuCommand {
    Enable(Feature),
    Disable(Feature),
    CullFace(Face),
    BlendFunc(BlendFactor, BlendFactor),
    ColorMask(ColorMask),
    DepthMask(bool),
    StencilFunc {
        func: CompareFunc,
        reference: i32,
        mask: u32,
    },
    StencilOp(StencilOps),
    StencilFuncSeparate {
        face: Face,
        func: CompareFunc,
        reference: i32,
        mask: u32,
    },
    StencilOpSeparate(Face, StencilOps),
    ActiveStencilFace(Face),
    Viewport(Rect),
    Scissor(Rect),
    ClearColor(Vec4),
    ClearDepth(f32),
    ClearStencil(i32),
    Clear(ClearMask),
    CreateFramebuffer(NativeId),
    DeleteFramebuffer(NativeId),
    BindFramebuffer(Option<NativeId>),
    CreateRenderbuffer {
        id: NativeId,
        format: RenderbufferFormat,
        width: i32,
        height: i32,
    },
    DeleteRenderbuffer(NativeId),
    FramebufferTexture {
        attachment: Attachment,
        target: TextureTarget,
        texture: NativeId,
    },
    FramebufferRenderbuffer {
        attachment: Attachment,
        renderbuffer: NativeId,
    },
    DiscardFramebuffer {
        offscreen: bool,
        attachments: Vec<Attachment>,
    },
    CopyToTexture {
        x_offset: i32,
        y_offset: i32,
        src: Rect,
    },
    UseProgram(Option<NativeId>),
    BindTexture {
        unit: u32,
        cube: bool,
        texture: Option<NativeId>,
    },
    BindVertexArray(Option<NativeId>),
    PushDebugGroup(String),
    PopDebugGroup,
    ObjectLabel {
        kind: LabelKind,
        object: NativeId,
        label: String,
    },
    CreateQuery(NativeId),
    DeleteQuery(NativeId),
    BeginTimeElapsed(NativeId),
    EndTimeElapsed,
    QueryResult(NativeId),
}

/// Headless `GpuDevice` that logs commands and tracks live objects.
#[derive(Debug, Default)]
pub struct RecordingDevice {
    driver: DriverInfo,
    default_framebuffer: Option<NativeId>,
    commands: Vec<GpuCommand>,
    next_id: NativeId,
    live_framebuffers: HashSet<NativeId>,
    live_renderbuffers: HashSet<NativeId>,
    live_queries: HashSet<NativeId>,
    /// Reported by every timer query.
    elapsed_ns: u64,
}

impl RecordingDevice {
    /// Device advertising the given extension string.
    pub fn new(extensions: &str) -> Self {
        Self::with_driver(DriverInfo {
            vendor: "Relic".to_string(),
            renderer: "Recording device".to_string(),
            version: "headless".to_string(),
            extensions: extensions.to_string(),
        })
    }

    pub fn with_driver(driver: DriverInfo) -> Self {
        Self {
            driver,
            // Object names start above anything a test registers by hand
            next_id: 1000,
            ..Self::default()
        }
    }

    /// Pretend the host had `framebuffer` bound when the core was created.
    pub fn with_default_framebuffer(mut self, framebuffer: NativeId) -> Self {
        self.default_framebuffer = Some(framebuffer);
        self
    }

    /// Report `ns` from every elapsed-time query.
    pub fn with_elapsed_ns(mut self, ns: u64) -> Self {
        self.elapsed_ns = ns;
        self
    }

    pub fn commands(&self) -> &[GpuCommand] {
        &self.commands
    }

    /// Drain the log, keeping object bookkeeping.
    pub fn take_commands(&mut self) -> Vec<GpuCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn count(&self, pred: impl Fn(&GpuCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    pub fn live_framebuffers(&self) -> usize {
        self.live_framebuffers.len()
    }

    pub fn live_renderbuffers(&self) -> usize {
        self.live_renderbuffers.len()
    }

    pub fn live_queries(&self) -> usize {
        self.live_queries.len()
    }

    fn alloc_id(&mut self) -> NativeId {
        self.next_id += 1;
        self.next_id
    }

    fn push(&mut self, command: GpuCommand) {
        self.commands.push(command);
    }
}

impl GpuDevice for RecordingDevice {
    fn driver_info(&self) -> DriverInfo {
        self.driver.clone()
    }

    fn default_framebuffer(&self) -> Option<NativeId> {
        self.default_framebuffer
    }

    fn enable(&mut self, feature: Feature) {
        self.push(GpuCommand::Enable(feature));
    }

    fn disable(&mut self, feature: Feature) {
        self.push(GpuCommand::Disable(feature));
    }

    fn cull_face(&mut self, face: Face) {
        self.push(GpuCommand::CullFace(face));
    }

    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) {
        self.push(GpuCommand::BlendFunc(src, dst));
    }

    fn color_mask(&mut self, mask: ColorMask) {
        self.push(GpuCommand::ColorMask(mask));
    }

    fn depth_mask(&mut self, write: bool) {
        self.push(GpuCommand::DepthMask(write));
    }

    fn stencil_func(&mut self, func: CompareFunc, reference: i32, mask: u32) {
        self.push(GpuCommand::StencilFunc {
            func,
            reference,
            mask,
        });
    }

    fn stencil_op(&mut self, ops: StencilOps) {
        self.push(GpuCommand::StencilOp(ops));
    }

    fn stencil_func_separate(&mut self, face: Face, func: CompareFunc, reference: i32, mask: u32) {
        self.push(GpuCommand::StencilFuncSeparate {
            face,
            func,
            reference,
            mask,
        });
    }

    fn stencil_op_separate(&mut self, face: Face, ops: StencilOps) {
        self.push(GpuCommand::StencilOpSeparate(face, ops));
    }

    fn active_stencil_face(&mut self, face: Face) {
        self.push(GpuCommand::ActiveStencilFace(face));
    }

    fn viewport(&mut self, rect: Rect) {
        self.push(GpuCommand::Viewport(rect));
    }

    fn scissor(&mut self, rect: Rect) {
        self.push(GpuCommand::Scissor(rect));
    }

    fn clear_color(&mut self, color: Vec4) {
        self.push(GpuCommand::ClearColor(color));
    }

    fn clear_depth(&mut self, depth: f32) {
        self.push(GpuCommand::ClearDepth(depth));
    }

    fn clear_stencil(&mut self, value: i32) {
        self.push(GpuCommand::ClearStencil(value));
    }

    fn clear(&mut self, mask: ClearMask) {
        self.push(GpuCommand::Clear(mask));
    }

    fn create_framebuffer(&mut self) -> Result<NativeId, RenderError> {
        let id = self.alloc_id();
        self.live_framebuffers.insert(id);
        self.push(GpuCommand::CreateFramebuffer(id));
        Ok(id)
    }

    fn delete_framebuffer(&mut self, framebuffer: NativeId) {
        self.live_framebuffers.remove(&framebuffer);
        self.push(GpuCommand::DeleteFramebuffer(framebuffer));
    }

    fn bind_framebuffer(&mut self, framebuffer: Option<NativeId>) {
        self.push(GpuCommand::BindFramebuffer(framebuffer));
    }

    fn create_renderbuffer(
        &mut self,
        format: RenderbufferFormat,
        width: i32,
        height: i32,
    ) -> Result<NativeId, RenderError> {
        let id = self.alloc_id();
        self.live_renderbuffers.insert(id);
        self.push(GpuCommand::CreateRenderbuffer {
            id,
            format,
            width,
            height,
        });
        Ok(id)
    }

    fn delete_renderbuffer(&mut self, renderbuffer: NativeId) {
        self.live_renderbuffers.remove(&renderbuffer);
        self.push(GpuCommand::DeleteRenderbuffer(renderbuffer));
    }

    fn framebuffer_texture(&mut self, attachment: Attachment, target: TextureTarget, texture: NativeId) {
        self.push(GpuCommand::FramebufferTexture {
            attachment,
            target,
            texture,
        });
    }

    fn framebuffer_renderbuffer(&mut self, attachment: Attachment, renderbuffer: NativeId) {
        self.push(GpuCommand::FramebufferRenderbuffer {
            attachment,
            renderbuffer,
        });
    }

    fn discard_framebuffer(&mut self, offscreen: bool, attachments: &[Attachment]) {
        self.push(GpuCommand::DiscardFramebuffer {
            offscreen,
            attachments: attachments.to_vec(),
        });
    }

    fn copy_to_texture(&mut self, x_offset: i32, y_offset: i32, src: Rect) {
        self.push(GpuCommand::CopyToTexture {
            x_offset,
            y_offset,
            src,
        });
    }

    fn use_program(&mut self, program: Option<NativeId>) {
        self.push(GpuCommand::UseProgram(program));
    }

    fn bind_texture(&mut self, unit: u32, cube: bool, texture: Option<NativeId>) {
        self.push(GpuCommand::BindTexture {
            unit,
            cube,
            texture,
        });
    }

    fn bind_vertex_array(&mut self, vao: Option<NativeId>) {
        self.push(GpuCommand::BindVertexArray(vao));
    }

    fn push_debug_group(&mut self, title: &str) {
        self.push(GpuCommand::PushDebugGroup(title.to_string()));
    }

    fn pop_debug_group(&mut self) {
        self.push(GpuCommand::PopDebugGroup);
    }

    fn object_label(&mut self, kind: LabelKind, object: NativeId, label: &str) {
        self.push(GpuCommand::ObjectLabel {
            kind,
            object,
            label: label.to_string(),
        });
    }

    fn create_query(&mut self) -> Result<NativeId, RenderError> {
        let id = self.alloc_id();
        self.live_queries.insert(id);
        self.push(GpuCommand::CreateQuery(id));
        Ok(id)
    }

    fn delete_query(&mut self, query: NativeId) {
        self.live_queries.remove(&query);
        self.push(GpuCommand::DeleteQuery(query));
    }

    fn begin_time_elapsed(&mut self, query: NativeId) {
        self.push(GpuCommand::BeginTimeElapsed(query));
    }

    fn end_time_elapsed(&mut self) {
        self.push(GpuCommand::EndTimeElapsed);
    }

    fn query_result_ns(&mut self, query: NativeId) -> Option<u64> {
        self.push(GpuCommand::QueryResult(query));
        self.live_queries.contains(&query).then_some(self.elapsed_ns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_object_lifetimes() {
        let mut device = RecordingDevice::new("");
        let fbo = device.create_framebuffer().unwrap();
        let rb = device
            .create_renderbuffer(RenderbufferFormat::Depth16, 64, 64)
            .unwrap();
        assert_ne!(fbo, rb);
        assert_eq!(device.live_framebuffers(), 1);
        assert_eq!(device.live_renderbuffers(), 1);

        device.delete_renderbuffer(rb);
        device.delete_framebuffer(fbo);
        assert_eq!(device.live_framebuffers(), 0);
        assert_eq!(device.live_renderbuffers(), 0);
        assert_eq!(device.commands().len(), 4);
    }

    #[test]
    fn test_take_commands_drains_log() {
        let mut device = RecordingDevice::new("").with_default_framebuffer(7);
        assert_eq!(device.default_framebuffer(), Some(7));

        device.enable(Feature::DepthTest);
        assert_eq!(device.take_commands(), vec![GpuCommand::Enable(Feature::DepthTest)]);
        assert!(device.commands().is_empty());
    }
}
