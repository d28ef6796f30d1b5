//! OpenGL backend on top of `glow`
//!
//! Requires a context made current by the host before `GlowDevice::new` and
//! kept current on the calling thread for the device's lifetime.

use crate::device::{
    Attachment, BlendFactor, ClearMask, ColorMask, CompareFunc, DriverInfo, Face, Feature,
    GpuDevice, LabelKind, NativeId, RenderbufferFormat, StencilOps, StencilOp, TextureTarget,
};
use crate::error::RenderError;
use glow::HasContext;
use relic_core::math::{Rect, Vec4};
use std::ffi::{c_char, c_void};
use std::num::NonZeroU32;

/// `GL_STENCIL_TEST_TWO_SIDE_EXT`, absent from core GL headers.
const STENCIL_TEST_TWO_SIDE_EXT: u32 = 0x8910;

type ActiveStencilFaceFn = unsafe extern "system" fn(face: u32);
type DiscardFn = unsafe extern "system" fn(target: u32, count: i32, attachments: *const u32);
type PushDebugGroupFn =
    unsafe extern "system" fn(source: u32, id: u32, length: i32, message: *const c_char);
type PopDebugGroupFn = unsafe extern "system" fn();
type ObjectLabelFn =
    unsafe extern "system" fn(identifier: u32, name: u32, length: i32, label: *const c_char);
type GenQueriesFn = unsafe extern "system" fn(count: i32, ids: *mut u32);
type DeleteQueriesFn = unsafe extern "system" fn(count: i32, ids: *const u32);
type BeginQueryFn = unsafe extern "system" fn(target: u32, id: u32);
type EndQueryFn = unsafe extern "system" fn(target: u32);
type GetQueryObjectFn = unsafe extern "system" fn(id: u32, pname: u32, params: *mut u32);

/// Entry points outside what `glow` dispatches on every driver.
///
/// Extension functions go by suffixed names on ES and older desktop drivers,
/// so each is resolved under every name it ships as, first hit wins. A `None`
/// turns the matching device call into a traced no-op.
struct ExtensionFns {
    active_stencil_face: Option<ActiveStencilFaceFn>,
    discard_framebuffer: Option<DiscardFn>,
    push_debug_group: Option<PushDebugGroupFn>,
    pop_debug_group: Option<PopDebugGroupFn>,
    object_label: Option<ObjectLabelFn>,
    gen_queries: Option<GenQueriesFn>,
    delete_queries: Option<DeleteQueriesFn>,
    begin_query: Option<BeginQueryFn>,
    end_query: Option<EndQueryFn>,
    get_query_object: Option<GetQueryObjectFn>,
}

/// Resolve the first of `names` the loader knows.
///
/// # Safety
///
/// `F` must be the function pointer type matching every name in `names`.
unsafe fn resolve<F: Copy>(
    loader: &mut impl FnMut(&str) -> *const c_void,
    names: &[&str],
) -> Option<F> {
    debug_assert_eq!(std::mem::size_of::<F>(), std::mem::size_of::<*const c_void>());
    names.iter().find_map(|&symbol| {
        let ptr = loader(symbol);
        // SAFETY: non-null pointer the loader resolved for this signature
        (!ptr.is_null()).then(|| std::mem::transmute_copy::<*const c_void, F>(&ptr))
    })
}

impl ExtensionFns {
    /// # Safety
    ///
    /// `loader` must return valid entry points for the current context, or null.
    unsafe fn load(loader: &mut impl FnMut(&str) -> *const c_void) -> Self {
        Self {
            active_stencil_face: resolve(loader, &["glActiveStencilFaceEXT"]),
            // The EXT hint is what ES 2.0 drivers export; core 4.3 / ES 3.0
            // renamed it to invalidate with the same arguments
            discard_framebuffer: resolve(
                loader,
                &["glDiscardFramebufferEXT", "glInvalidateFramebuffer"],
            ),
            push_debug_group: resolve(loader, &["glPushDebugGroup", "glPushDebugGroupKHR"]),
            pop_debug_group: resolve(loader, &["glPopDebugGroup", "glPopDebugGroupKHR"]),
            object_label: resolve(loader, &["glObjectLabel", "glObjectLabelKHR"]),
            gen_queries: resolve(loader, &["glGenQueries", "glGenQueriesEXT"]),
            delete_queries: resolve(loader, &["glDeleteQueries", "glDeleteQueriesEXT"]),
            begin_query: resolve(loader, &["glBeginQuery", "glBeginQueryEXT"]),
            end_query: resolve(loader, &["glEndQuery", "glEndQueryEXT"]),
            get_query_object: resolve(loader, &["glGetQueryObjectuiv", "glGetQueryObjectuivEXT"]),
        }
    }

    /// Returns false when no discard entry point was loaded.
    unsafe fn discard(&self, names: &[u32]) -> bool {
        let Some(discard) = self.discard_framebuffer else {
            return false;
        };
        discard(glow::FRAMEBUFFER, names.len() as i32, names.as_ptr());
        true
    }
}

pub struct GlowDevice {
    gl: glow::Context,
    ext: ExtensionFns,
}

impl GlowDevice {
    /// Wrap the current GL context, resolving entry points through `loader`.
    ///
    /// # Safety
    ///
    /// A GL context must be current on this thread, and `loader` must return
    /// valid entry points for it (or null).
    pub unsafe fn new(mut loader: impl FnMut(&str) -> *const c_void) -> Self {
        let ext = ExtensionFns::load(&mut loader);
        let gl = glow::Context::from_loader_function(|symbol| loader(symbol));
        Self { gl, ext }
    }

    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }
}

fn feature_enum(feature: Feature) -> u32 {
    match feature {
        Feature::CullFace => glow::CULL_FACE,
        Feature::Blend => glow::BLEND,
        Feature::DepthTest => glow::DEPTH_TEST,
        Feature::StencilTest => glow::STENCIL_TEST,
        Feature::ScissorTest => glow::SCISSOR_TEST,
        Feature::StencilTwoSide => STENCIL_TEST_TWO_SIDE_EXT,
    }
}

fn face_enum(face: Face) -> u32 {
    match face {
        Face::Front => glow::FRONT,
        Face::Back => glow::BACK,
        Face::FrontAndBack => glow::FRONT_AND_BACK,
    }
}

fn blend_factor_enum(factor: BlendFactor) -> u32 {
    match factor {
        BlendFactor::Zero => glow::ZERO,
        BlendFactor::One => glow::ONE,
        BlendFactor::SrcColor => glow::SRC_COLOR,
        BlendFactor::OneMinusSrcColor => glow::ONE_MINUS_SRC_COLOR,
        BlendFactor::DstColor => glow::DST_COLOR,
        BlendFactor::SrcAlpha => glow::SRC_ALPHA,
        BlendFactor::OneMinusSrcAlpha => glow::ONE_MINUS_SRC_ALPHA,
    }
}

fn compare_enum(func: CompareFunc) -> u32 {
    match func {
        CompareFunc::Never => glow::NEVER,
        CompareFunc::Less => glow::LESS,
        CompareFunc::Equal => glow::EQUAL,
        CompareFunc::LessEqual => glow::LEQUAL,
        CompareFunc::Greater => glow::GREATER,
        CompareFunc::NotEqual => glow::NOTEQUAL,
        CompareFunc::GreaterEqual => glow::GEQUAL,
        CompareFunc::Always => glow::ALWAYS,
    }
}

fn stencil_op_enum(op: StencilOp) -> u32 {
    match op {
        StencilOp::Keep => glow::KEEP,
        StencilOp::Zero => glow::ZERO,
        StencilOp::Replace => glow::REPLACE,
        StencilOp::Incr => glow::INCR,
        StencilOp::Decr => glow::DECR,
    }
}

fn attachment_enum(attachment: Attachment) -> u32 {
    match attachment {
        Attachment::Color0 => glow::COLOR_ATTACHMENT0,
        Attachment::Depth => glow::DEPTH_ATTACHMENT,
    }
}

/// Buffer names accepted by discard on the default framebuffer.
fn default_buffer_enum(attachment: Attachment) -> u32 {
    match attachment {
        Attachment::Color0 => glow::COLOR,
        Attachment::Depth => glow::DEPTH,
    }
}

fn texture_target_enum(target: TextureTarget) -> u32 {
    match target {
        TextureTarget::Texture2d => glow::TEXTURE_2D,
        TextureTarget::CubeFace(face) => glow::TEXTURE_CUBE_MAP_POSITIVE_X + face as u32,
    }
}

fn renderbuffer_format_enum(format: RenderbufferFormat) -> u32 {
    match format {
        RenderbufferFormat::Rgb565 => glow::RGB565,
        RenderbufferFormat::Depth16 => glow::DEPTH_COMPONENT16,
    }
}

fn label_kind_enum(kind: LabelKind) -> u32 {
    match kind {
        LabelKind::Texture => glow::TEXTURE,
        LabelKind::Framebuffer => glow::FRAMEBUFFER,
        LabelKind::Renderbuffer => glow::RENDERBUFFER,
        LabelKind::Program => glow::PROGRAM,
    }
}

fn clear_bits(mask: ClearMask) -> u32 {
    let mut bits = 0;
    if mask.color {
        bits |= glow::COLOR_BUFFER_BIT;
    }
    if mask.depth {
        bits |= glow::DEPTH_BUFFER_BIT;
    }
    if mask.stencil {
        bits |= glow::STENCIL_BUFFER_BIT;
    }
    bits
}

fn name(id: NativeId) -> Option<NonZeroU32> {
    NonZeroU32::new(id)
}

fn backend_error(object: &'static str) -> impl FnOnce(String) -> RenderError {
    move |reason| RenderError::Backend { object, reason }
}

// SAFETY (all `unsafe` blocks below): `GlowDevice::new` requires the context
// to stay current on the calling thread; arguments are validated enum values
// or names the driver handed out.
impl GpuDevice for GlowDevice {
    fn driver_info(&self) -> DriverInfo {
        unsafe {
            let mut extensions: Vec<&str> = self
                .gl
                .supported_extensions()
                .iter()
                .map(String::as_str)
                .collect();
            extensions.sort_unstable();
            DriverInfo {
                vendor: self.gl.get_parameter_string(glow::VENDOR),
                renderer: self.gl.get_parameter_string(glow::RENDERER),
                version: self.gl.get_parameter_string(glow::VERSION),
                extensions: extensions.join(" "),
            }
        }
    }

    fn default_framebuffer(&self) -> Option<NativeId> {
        let bound = unsafe { self.gl.get_parameter_i32(glow::FRAMEBUFFER_BINDING) };
        NativeId::try_from(bound).ok().filter(|id| *id != 0)
    }

    fn enable(&mut self, feature: Feature) {
        unsafe { self.gl.enable(feature_enum(feature)) }
    }

    fn disable(&mut self, feature: Feature) {
        unsafe { self.gl.disable(feature_enum(feature)) }
    }

    fn cull_face(&mut self, face: Face) {
        unsafe { self.gl.cull_face(face_enum(face)) }
    }

    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) {
        unsafe { self.gl.blend_func(blend_factor_enum(src), blend_factor_enum(dst)) }
    }

    fn color_mask(&mut self, mask: ColorMask) {
        unsafe { self.gl.color_mask(mask.r, mask.g, mask.b, mask.a) }
    }

    fn depth_mask(&mut self, write: bool) {
        unsafe { self.gl.depth_mask(write) }
    }

    fn stencil_func(&mut self, func: CompareFunc, reference: i32, mask: u32) {
        unsafe { self.gl.stencil_func(compare_enum(func), reference, mask) }
    }

    fn stencil_op(&mut self, ops: StencilOps) {
        unsafe {
            self.gl.stencil_op(
                stencil_op_enum(ops.fail),
                stencil_op_enum(ops.depth_fail),
                stencil_op_enum(ops.pass),
            )
        }
    }

    fn stencil_func_separate(&mut self, face: Face, func: CompareFunc, reference: i32, mask: u32) {
        unsafe {
            self.gl
                .stencil_func_separate(face_enum(face), compare_enum(func), reference, mask)
        }
    }

    fn stencil_op_separate(&mut self, face: Face, ops: StencilOps) {
        unsafe {
            self.gl.stencil_op_separate(
                face_enum(face),
                stencil_op_enum(ops.fail),
                stencil_op_enum(ops.depth_fail),
                stencil_op_enum(ops.pass),
            )
        }
    }

    fn active_stencil_face(&mut self, face: Face) {
        match self.ext.active_stencil_face {
            Some(active_stencil_face) => unsafe { active_stencil_face(face_enum(face)) },
            None => tracing::trace!(?face, "glActiveStencilFaceEXT not loaded"),
        }
    }

    fn viewport(&mut self, rect: Rect) {
        unsafe { self.gl.viewport(rect.x, rect.y, rect.width, rect.height) }
    }

    fn scissor(&mut self, rect: Rect) {
        unsafe { self.gl.scissor(rect.x, rect.y, rect.width, rect.height) }
    }

    fn clear_color(&mut self, color: Vec4) {
        unsafe { self.gl.clear_color(color.x, color.y, color.z, color.w) }
    }

    fn clear_depth(&mut self, depth: f32) {
        unsafe { self.gl.clear_depth_f32(depth) }
    }

    fn clear_stencil(&mut self, value: i32) {
        unsafe { self.gl.clear_stencil(value) }
    }

    fn clear(&mut self, mask: ClearMask) {
        unsafe { self.gl.clear(clear_bits(mask)) }
    }

    fn create_framebuffer(&mut self) -> Result<NativeId, RenderError> {
        let fbo = unsafe { self.gl.create_framebuffer() }.map_err(backend_error("framebuffer"))?;
        Ok(fbo.0.get())
    }

    fn delete_framebuffer(&mut self, framebuffer: NativeId) {
        if let Some(id) = name(framebuffer) {
            unsafe { self.gl.delete_framebuffer(glow::NativeFramebuffer(id)) }
        }
    }

    fn bind_framebuffer(&mut self, framebuffer: Option<NativeId>) {
        let fbo = framebuffer.and_then(name).map(glow::NativeFramebuffer);
        unsafe { self.gl.bind_framebuffer(glow::FRAMEBUFFER, fbo) }
    }

    fn create_renderbuffer(
        &mut self,
        format: RenderbufferFormat,
        width: i32,
        height: i32,
    ) -> Result<NativeId, RenderError> {
        unsafe {
            let rb = self
                .gl
                .create_renderbuffer()
                .map_err(backend_error("renderbuffer"))?;
            self.gl.bind_renderbuffer(glow::RENDERBUFFER, Some(rb));
            self.gl.renderbuffer_storage(
                glow::RENDERBUFFER,
                renderbuffer_format_enum(format),
                width,
                height,
            );
            self.gl.bind_renderbuffer(glow::RENDERBUFFER, None);
            Ok(rb.0.get())
        }
    }

    fn delete_renderbuffer(&mut self, renderbuffer: NativeId) {
        if let Some(id) = name(renderbuffer) {
            unsafe { self.gl.delete_renderbuffer(glow::NativeRenderbuffer(id)) }
        }
    }

    fn framebuffer_texture(&mut self, attachment: Attachment, target: TextureTarget, texture: NativeId) {
        unsafe {
            self.gl.framebuffer_texture_2d(
                glow::FRAMEBUFFER,
                attachment_enum(attachment),
                texture_target_enum(target),
                name(texture).map(glow::NativeTexture),
                0,
            )
        }
    }

    fn framebuffer_renderbuffer(&mut self, attachment: Attachment, renderbuffer: NativeId) {
        unsafe {
            self.gl.framebuffer_renderbuffer(
                glow::FRAMEBUFFER,
                attachment_enum(attachment),
                glow::RENDERBUFFER,
                name(renderbuffer).map(glow::NativeRenderbuffer),
            )
        }
    }

    fn discard_framebuffer(&mut self, offscreen: bool, attachments: &[Attachment]) {
        let names: Vec<u32> = attachments
            .iter()
            .map(|&a| {
                if offscreen {
                    attachment_enum(a)
                } else {
                    default_buffer_enum(a)
                }
            })
            .collect();
        if !unsafe { self.ext.discard(&names) } {
            tracing::trace!(?attachments, "framebuffer discard not loaded");
        }
    }

    fn copy_to_texture(&mut self, x_offset: i32, y_offset: i32, src: Rect) {
        unsafe {
            self.gl.copy_tex_sub_image_2d(
                glow::TEXTURE_2D,
                0,
                x_offset,
                y_offset,
                src.x,
                src.y,
                src.width,
                src.height,
            )
        }
    }

    fn use_program(&mut self, program: Option<NativeId>) {
        let program = program.and_then(name).map(glow::NativeProgram);
        unsafe { self.gl.use_program(program) }
    }

    fn bind_texture(&mut self, unit: u32, cube: bool, texture: Option<NativeId>) {
        let target = if cube {
            glow::TEXTURE_CUBE_MAP
        } else {
            glow::TEXTURE_2D
        };
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl
                .bind_texture(target, texture.and_then(name).map(glow::NativeTexture));
        }
    }

    fn bind_vertex_array(&mut self, vao: Option<NativeId>) {
        let vao = vao.and_then(name).map(glow::NativeVertexArray);
        unsafe { self.gl.bind_vertex_array(vao) }
    }

    fn push_debug_group(&mut self, title: &str) {
        if let Some(push) = self.ext.push_debug_group {
            let len = title.len() as i32;
            unsafe { push(glow::DEBUG_SOURCE_APPLICATION, 1, len, title.as_ptr().cast()) }
        }
    }

    fn pop_debug_group(&mut self) {
        if let Some(pop) = self.ext.pop_debug_group {
            unsafe { pop() }
        }
    }

    fn object_label(&mut self, kind: LabelKind, object: NativeId, label: &str) {
        if let Some(object_label) = self.ext.object_label {
            let len = label.len() as i32;
            unsafe { object_label(label_kind_enum(kind), object, len, label.as_ptr().cast()) }
        }
    }

    fn create_query(&mut self) -> Result<NativeId, RenderError> {
        let Some(gen_queries) = self.ext.gen_queries else {
            return Err(RenderError::Backend {
                object: "query",
                reason: "glGenQueries not loaded".to_string(),
            });
        };
        let mut id = 0;
        unsafe { gen_queries(1, &mut id) };
        if id == 0 {
            return Err(RenderError::Backend {
                object: "query",
                reason: "driver returned name 0".to_string(),
            });
        }
        Ok(id)
    }

    fn delete_query(&mut self, query: NativeId) {
        if let Some(delete) = self.ext.delete_queries {
            unsafe { delete(1, &query) }
        }
    }

    fn begin_time_elapsed(&mut self, query: NativeId) {
        if let Some(begin) = self.ext.begin_query {
            unsafe { begin(glow::TIME_ELAPSED, query) }
        }
    }

    fn end_time_elapsed(&mut self) {
        if let Some(end) = self.ext.end_query {
            unsafe { end(glow::TIME_ELAPSED) }
        }
    }

    fn query_result_ns(&mut self, query: NativeId) -> Option<u64> {
        let get = self.ext.get_query_object?;
        let mut ns = 0;
        // Blocks until the GPU has passed the end of the query
        unsafe { get(query, glow::QUERY_RESULT, &mut ns) };
        Some(u64::from(ns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_faces_are_consecutive() {
        assert_eq!(
            texture_target_enum(TextureTarget::CubeFace(0)),
            glow::TEXTURE_CUBE_MAP_POSITIVE_X
        );
        assert_eq!(
            texture_target_enum(TextureTarget::CubeFace(5)),
            glow::TEXTURE_CUBE_MAP_NEGATIVE_Z
        );
    }

    #[test]
    fn test_discard_names_depend_on_binding() {
        assert_eq!(attachment_enum(Attachment::Color0), glow::COLOR_ATTACHMENT0);
        assert_eq!(attachment_enum(Attachment::Depth), glow::DEPTH_ATTACHMENT);
        assert_eq!(default_buffer_enum(Attachment::Color0), glow::COLOR);
        assert_eq!(default_buffer_enum(Attachment::Depth), glow::DEPTH);
    }

    #[test]
    fn test_companion_formats() {
        assert_eq!(renderbuffer_format_enum(RenderbufferFormat::Rgb565), glow::RGB565);
        assert_eq!(
            renderbuffer_format_enum(RenderbufferFormat::Depth16),
            glow::DEPTH_COMPONENT16
        );
    }

    #[test]
    fn test_stencil_enums() {
        assert_eq!(stencil_op_enum(StencilOp::Incr), glow::INCR);
        assert_eq!(stencil_op_enum(StencilOp::Decr), glow::DECR);
        assert_eq!(compare_enum(CompareFunc::NotEqual), glow::NOTEQUAL);
        assert_eq!(feature_enum(Feature::StencilTwoSide), 0x8910);
    }

    #[test]
    fn test_clear_bits() {
        assert_eq!(clear_bits(ClearMask::default()), 0);
        assert_eq!(
            clear_bits(ClearMask::ALL),
            glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT | glow::STENCIL_BUFFER_BIT
        );
    }

    use std::cell::RefCell;

    thread_local! {
        static DISCARDED: RefCell<Vec<(&'static str, u32, Vec<u32>)>> = RefCell::new(Vec::new());
    }

    unsafe fn record(entry: &'static str, target: u32, count: i32, attachments: *const u32) {
        let names = std::slice::from_raw_parts(attachments, count as usize).to_vec();
        DISCARDED.with(|d| d.borrow_mut().push((entry, target, names)));
    }

    unsafe extern "system" fn fake_discard_ext(target: u32, count: i32, attachments: *const u32) {
        record("glDiscardFramebufferEXT", target, count, attachments)
    }

    unsafe extern "system" fn fake_invalidate(target: u32, count: i32, attachments: *const u32) {
        record("glInvalidateFramebuffer", target, count, attachments)
    }

    fn load_with(exported: &[&str]) -> ExtensionFns {
        let mut loader = |symbol: &str| -> *const c_void {
            if !exported.contains(&symbol) {
                return std::ptr::null();
            }
            match symbol {
                "glDiscardFramebufferEXT" => fake_discard_ext as *const c_void,
                "glInvalidateFramebuffer" => fake_invalidate as *const c_void,
                _ => std::ptr::null(),
            }
        };
        unsafe { ExtensionFns::load(&mut loader) }
    }

    fn take_discarded() -> Vec<(&'static str, u32, Vec<u32>)> {
        DISCARDED.with(|d| std::mem::take(&mut *d.borrow_mut()))
    }

    #[test]
    fn test_discard_prefers_ext_entry_point() {
        let ext = load_with(&["glDiscardFramebufferEXT", "glInvalidateFramebuffer"]);
        assert!(unsafe { ext.discard(&[glow::COLOR, glow::DEPTH]) });
        assert_eq!(
            take_discarded(),
            vec![("glDiscardFramebufferEXT", glow::FRAMEBUFFER, vec![glow::COLOR, glow::DEPTH])]
        );
    }

    #[test]
    fn test_discard_falls_back_to_invalidate() {
        let ext = load_with(&["glInvalidateFramebuffer"]);
        assert!(unsafe { ext.discard(&[glow::DEPTH_ATTACHMENT]) });
        assert_eq!(
            take_discarded(),
            vec![("glInvalidateFramebuffer", glow::FRAMEBUFFER, vec![glow::DEPTH_ATTACHMENT])]
        );
    }

    #[test]
    fn test_missing_entry_points_are_skipped() {
        let ext = load_with(&[]);
        assert!(!unsafe { ext.discard(&[glow::COLOR]) });
        assert!(take_discarded().is_empty());
        assert!(ext.active_stencil_face.is_none());
        assert!(ext.push_debug_group.is_none());
        assert!(ext.gen_queries.is_none());
    }

    #[test]
    fn test_suffixed_names_resolve() {
        let mut asked = Vec::new();
        let mut loader = |symbol: &str| -> *const c_void {
            asked.push(symbol.to_string());
            if symbol == "glPopDebugGroupKHR" {
                fake_pop as *const c_void
            } else {
                std::ptr::null()
            }
        };
        let ext = unsafe { ExtensionFns::load(&mut loader) };
        assert!(ext.pop_debug_group.is_some());
        let core = asked.iter().position(|s| s == "glPopDebugGroup").unwrap();
        let khr = asked.iter().position(|s| s == "glPopDebugGroupKHR").unwrap();
        assert!(core < khr);
    }

    unsafe extern "system" fn fake_pop() {}

    #[test]
    fn test_label_namespaces() {
        assert_eq!(label_kind_enum(LabelKind::Texture), glow::TEXTURE);
        assert_eq!(label_kind_enum(LabelKind::Program), glow::PROGRAM);
    }
}
