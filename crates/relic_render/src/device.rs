//! GPU backend seam
//!
//! Every driver call the render core makes goes through `GpuDevice`. The core
//! owns minimal-diff logic; a backend only translates commands 1:1.

use crate::error::RenderError;
use relic_core::math::{Rect, Vec4};

/// Driver object name (framebuffer, renderbuffer, texture, program, VAO).
pub type NativeId = u32;

/// Driver identification strings, queried once at context creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverInfo {
    pub vendor: String,
    pub renderer: String,
    pub version: String,
    /// Space-delimited extension list as reported by the driver.
    pub extensions: String,
}

/// Fixed-function pipeline switches.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Feature {
    CullFace,
    Blend,
    DepthTest,
    StencilTest,
    ScissorTest,
    /// `EXT_stencil_two_side` per-face stencil state.
    StencilTwoSide,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
    FrontAndBack,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    Zero,
    One,
    SrcColor,
    OneMinusSrcColor,
    DstColor,
    SrcAlpha,
    OneMinusSrcAlpha,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CompareFunc {
    Never,
    Less,
    Equal,
    LessEqual,
    Greater,
    NotEqual,
    GreaterEqual,
    Always,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StencilOp {
    Keep,
    Zero,
    Replace,
    Incr,
    Decr,
}

/// Stencil actions for (stencil fail, depth fail, depth pass).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct StencilOps {
    pub fail: StencilOp,
    pub depth_fail: StencilOp,
    pub pass: StencilOp,
}

impl StencilOps {
    pub const KEEP: Self = Self::depth_fail(StencilOp::Keep);

    /// Keep on every outcome except depth fail.
    pub const fn depth_fail(op: StencilOp) -> Self {
        Self {
            fail: StencilOp::Keep,
            depth_fail: op,
            pass: StencilOp::Keep,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ColorMask {
    pub r: bool,
    pub g: bool,
    pub b: bool,
    pub a: bool,
}

impl ColorMask {
    pub const ALL: Self = Self::splat(true);
    pub const NONE: Self = Self::splat(false);

    pub const fn new(r: bool, g: bool, b: bool, a: bool) -> Self {
        Self { r, g, b, a }
    }

    pub const fn splat(v: bool) -> Self {
        Self::new(v, v, v, v)
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ClearMask {
    pub color: bool,
    pub depth: bool,
    pub stencil: bool,
}

impl ClearMask {
    pub const ALL: Self = Self {
        color: true,
        depth: true,
        stencil: true,
    };

    pub fn is_empty(self) -> bool {
        !(self.color || self.depth || self.stencil)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Attachment {
    Color0,
    Depth,
}

/// Texture image bound as a framebuffer attachment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextureTarget {
    Texture2d,
    /// Cube map face, 0..6 in +X, -X, +Y, -Y, +Z, -Z order.
    CubeFace(u8),
}

/// Storage formats used for companion renderbuffers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RenderbufferFormat {
    Rgb565,
    Depth16,
}

/// Object namespace for debug labels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LabelKind {
    Texture,
    Framebuffer,
    Renderbuffer,
    Program,
}

/// Backend command interface.
///
/// Methods map onto single driver entry points; callers guarantee the calls
/// happen on the thread that owns the context.
pub trait GpuDevice {
    fn driver_info(&self) -> DriverInfo;

    /// Framebuffer bound by the host before the core took over (`None` = 0).
    fn default_framebuffer(&self) -> Option<NativeId>;

    fn enable(&mut self, feature: Feature);
    fn disable(&mut self, feature: Feature);

    fn cull_face(&mut self, face: Face);
    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor);
    fn color_mask(&mut self, mask: ColorMask);
    fn depth_mask(&mut self, write: bool);

    /// Stencil test for both faces, or for the active face under `StencilTwoSide`.
    fn stencil_func(&mut self, func: CompareFunc, reference: i32, mask: u32);
    fn stencil_op(&mut self, ops: StencilOps);
    fn stencil_func_separate(&mut self, face: Face, func: CompareFunc, reference: i32, mask: u32);
    fn stencil_op_separate(&mut self, face: Face, ops: StencilOps);
    /// Select the face programmed by `stencil_func`/`stencil_op` (two-side extension).
    fn active_stencil_face(&mut self, face: Face);

    fn viewport(&mut self, rect: Rect);
    fn scissor(&mut self, rect: Rect);

    fn clear_color(&mut self, color: Vec4);
    fn clear_depth(&mut self, depth: f32);
    fn clear_stencil(&mut self, value: i32);
    fn clear(&mut self, mask: ClearMask);

    fn create_framebuffer(&mut self) -> Result<NativeId, RenderError>;
    fn delete_framebuffer(&mut self, framebuffer: NativeId);
    /// `None` binds framebuffer 0.
    fn bind_framebuffer(&mut self, framebuffer: Option<NativeId>);

    /// Allocate a renderbuffer with fixed storage. Left unbound on return.
    fn create_renderbuffer(
        &mut self,
        format: RenderbufferFormat,
        width: i32,
        height: i32,
    ) -> Result<NativeId, RenderError>;
    fn delete_renderbuffer(&mut self, renderbuffer: NativeId);

    fn framebuffer_texture(&mut self, attachment: Attachment, target: TextureTarget, texture: NativeId);
    fn framebuffer_renderbuffer(&mut self, attachment: Attachment, renderbuffer: NativeId);

    /// Discard hint for the bound framebuffer. `offscreen` selects FBO
    /// attachment names over default-framebuffer buffer names.
    fn discard_framebuffer(&mut self, offscreen: bool, attachments: &[Attachment]);

    /// Copy `src` of the bound framebuffer into the texture bound on unit 0.
    fn copy_to_texture(&mut self, x_offset: i32, y_offset: i32, src: Rect);

    fn use_program(&mut self, program: Option<NativeId>);
    fn bind_texture(&mut self, unit: u32, cube: bool, texture: Option<NativeId>);
    fn bind_vertex_array(&mut self, vao: Option<NativeId>);

    /// Open a named group in the driver's debug output (`KHR_debug`).
    fn push_debug_group(&mut self, title: &str);
    fn pop_debug_group(&mut self);
    fn object_label(&mut self, kind: LabelKind, object: NativeId, label: &str);

    fn create_query(&mut self) -> Result<NativeId, RenderError>;
    fn delete_query(&mut self, query: NativeId);
    /// Start a GPU elapsed-time query. One may be active at a time.
    fn begin_time_elapsed(&mut self, query: NativeId);
    fn end_time_elapsed(&mut self);
    /// Wait for and read an ended query, in nanoseconds.
    fn query_result_ns(&mut self, query: NativeId) -> Option<u64>;
}

/// Lets a context borrow a device the caller keeps inspecting after teardown.
impl<D: GpuDevice + ?Sized> GpuDevice for &mut D {
    fn driver_info(&self) -> DriverInfo {
        (**self).driver_info()
    }

    fn default_framebuffer(&self) -> Option<NativeId> {
        (**self).default_framebuffer()
    }

    fn enable(&mut self, feature: Feature) {
        (**self).enable(feature)
    }

    fn disable(&mut self, feature: Feature) {
        (**self).disable(feature)
    }

    fn cull_face(&mut self, face: Face) {
        (**self).cull_face(face)
    }

    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) {
        (**self).blend_func(src, dst)
    }

    fn color_mask(&mut self, mask: ColorMask) {
        (**self).color_mask(mask)
    }

    fn depth_mask(&mut self, write: bool) {
        (**self).depth_mask(write)
    }

    fn stencil_func(&mut self, func: CompareFunc, reference: i32, mask: u32) {
        (**self).stencil_func(func, reference, mask)
    }

    fn stencil_op(&mut self, ops: StencilOps) {
        (**self).stencil_op(ops)
    }

    fn stencil_func_separate(&mut self, face: Face, func: CompareFunc, reference: i32, mask: u32) {
        (**self).stencil_func_separate(face, func, reference, mask)
    }

    fn stencil_op_separate(&mut self, face: Face, ops: StencilOps) {
        (**self).stencil_op_separate(face, ops)
    }

    fn active_stencil_face(&mut self, face: Face) {
        (**self).active_stencil_face(face)
    }

    fn viewport(&mut self, rect: Rect) {
        (**self).viewport(rect)
    }

    fn scissor(&mut self, rect: Rect) {
        (**self).scissor(rect)
    }

    fn clear_color(&mut self, color: Vec4) {
        (**self).clear_color(color)
    }

    fn clear_depth(&mut self, depth: f32) {
        (**self).clear_depth(depth)
    }

    fn clear_stencil(&mut self, value: i32) {
        (**self).clear_stencil(value)
    }

    fn clear(&mut self, mask: ClearMask) {
        (**self).clear(mask)
    }

    fn create_framebuffer(&mut self) -> Result<NativeId, RenderError> {
        (**self).create_framebuffer()
    }

    fn delete_framebuffer(&mut self, framebuffer: NativeId) {
        (**self).delete_framebuffer(framebuffer)
    }

    fn bind_framebuffer(&mut self, framebuffer: Option<NativeId>) {
        (**self).bind_framebuffer(framebuffer)
    }

    fn create_renderbuffer(
        &mut self,
        format: RenderbufferFormat,
        width: i32,
        height: i32,
    ) -> Result<NativeId, RenderError> {
        (**self).create_renderbuffer(format, width, height)
    }

    fn delete_renderbuffer(&mut self, renderbuffer: NativeId) {
        (**self).delete_renderbuffer(renderbuffer)
    }

    fn framebuffer_texture(&mut self, attachment: Attachment, target: TextureTarget, texture: NativeId) {
        (**self).framebuffer_texture(attachment, target, texture)
    }

    fn framebuffer_renderbuffer(&mut self, attachment: Attachment, renderbuffer: NativeId) {
        (**self).framebuffer_renderbuffer(attachment, renderbuffer)
    }

    fn discard_framebuffer(&mut self, offscreen: bool, attachments: &[Attachment]) {
        (**self).discard_framebuffer(offscreen, attachments)
    }

    fn copy_to_texture(&mut self, x_offset: i32, y_offset: i32, src: Rect) {
        (**self).copy_to_texture(x_offset, y_offset, src)
    }

    fn use_program(&mut self, program: Option<NativeId>) {
        (**self).use_program(program)
    }

    fn bind_texture(&mut self, unit: u32, cube: bool, texture: Option<NativeId>) {
        (**self).bind_texture(unit, cube, texture)
    }

    fn bind_vertex_array(&mut self, vao: Option<NativeId>) {
        (**self).bind_vertex_array(vao)
    }

    fn push_debug_group(&mut self, title: &str) {
        (**self).push_debug_group(title)
    }

    fn pop_debug_group(&mut self) {
        (**self).pop_debug_group()
    }

    fn object_label(&mut self, kind: LabelKind, object: NativeId, label: &str) {
        (**self).object_label(kind, object, label)
    }

    fn create_query(&mut self) -> Result<NativeId, RenderError> {
        (**self).create_query()
    }

    fn delete_query(&mut self, query: NativeId) {
        (**self).delete_query(query)
    }

    fn begin_time_elapsed(&mut self, query: NativeId) {
        (**self).begin_time_elapsed(query)
    }

    fn end_time_elapsed(&mut self) {
        (**self).end_time_elapsed()
    }

    fn query_result_ns(&mut self, query: NativeId) -> Option<u64> {
        (**self).query_result_ns(query)
    }
}
