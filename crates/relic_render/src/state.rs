//! Pipeline state tracker
//!
//! `ActiveState` is the currently-bound snapshot. Every setter compares against
//! it and skips the driver call when nothing changes; redundant state changes
//! are the dominant cost of immediate-mode GPU APIs.
//!
//! Toggles cached as `Option` start out unknown after a frame reset, so the
//! first request always reaches the driver.

use crate::context::RenderContext;
use crate::device::{BlendFactor, ClearMask, ColorMask, Face, Feature, GpuDevice, NativeId};
use crate::error::RenderError;
use crate::resources::{ShaderHandle, TextureHandle};
use crate::stencil::StencilPath;
use relic_core::math::{Rect, Vec4};

/// Number of tracked texture units.
pub const MAX_TEXTURE_UNITS: usize = 8;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum CullMode {
    #[default]
    None,
    Back,
    Front,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum BlendMode {
    #[default]
    None,
    Alpha,
    Add,
    Multiply,
    Screen,
}

impl BlendMode {
    /// Source/destination factors, `None` when blending is off.
    pub fn factors(self) -> Option<(BlendFactor, BlendFactor)> {
        match self {
            BlendMode::None => None,
            BlendMode::Alpha => Some((BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha)),
            BlendMode::Add => Some((BlendFactor::One, BlendFactor::One)),
            BlendMode::Multiply => Some((BlendFactor::DstColor, BlendFactor::Zero)),
            BlendMode::Screen => Some((BlendFactor::One, BlendFactor::OneMinusSrcColor)),
        }
    }
}

/// Currently-bound GPU state for one context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveState {
    pub shader: Option<ShaderHandle>,
    pub textures: [Option<TextureHandle>; MAX_TEXTURE_UNITS],
    /// `None` = default framebuffer.
    pub target: Option<TextureHandle>,
    pub target_face: u8,
    pub vao: Option<NativeId>,
    pub cull_mode: CullMode,
    pub blend_mode: BlendMode,
    pub stencil: StencilPath,

    pub depth_test: Option<bool>,
    pub stencil_test: Option<bool>,
    pub scissor_test: Option<bool>,
    pub color_write: Option<ColorMask>,
    pub depth_write: Option<bool>,
    pub clear_color: Option<Vec4>,
    pub clear_depth: Option<f32>,
    pub clear_stencil: Option<i32>,
}

impl ActiveState {
    pub fn stencil_two_side(&self) -> bool {
        self.stencil != StencilPath::Disabled
    }
}

fn apply_toggle<D: GpuDevice + ?Sized>(
    device: &mut D,
    cached: &mut Option<bool>,
    feature: Feature,
    enabled: bool,
) {
    if *cached == Some(enabled) {
        return;
    }
    if enabled {
        device.enable(feature);
    } else {
        device.disable(feature);
    }
    *cached = Some(enabled);
}

impl<D: GpuDevice> RenderContext<D> {
    pub fn set_culling(&mut self, mode: CullMode) {
        if self.active.cull_mode == mode {
            return;
        }

        match mode {
            CullMode::None => self.device.disable(Feature::CullFace),
            CullMode::Back => self.device.cull_face(Face::Back),
            CullMode::Front => self.device.cull_face(Face::Front),
        }

        if mode != CullMode::None && self.active.cull_mode == CullMode::None {
            self.device.enable(Feature::CullFace);
        }

        self.active.cull_mode = mode;
    }

    pub fn set_blending(&mut self, mode: BlendMode) {
        if self.active.blend_mode == mode {
            return;
        }

        match mode.factors() {
            None => self.device.disable(Feature::Blend),
            Some((src, dst)) => self.device.blend_func(src, dst),
        }

        if mode != BlendMode::None && self.active.blend_mode == BlendMode::None {
            self.device.enable(Feature::Blend);
        }

        self.active.blend_mode = mode;
    }

    pub fn set_depth_test(&mut self, test: bool) {
        apply_toggle(&mut self.device, &mut self.active.depth_test, Feature::DepthTest, test);
    }

    pub fn set_stencil_test(&mut self, test: bool) {
        apply_toggle(&mut self.device, &mut self.active.stencil_test, Feature::StencilTest, test);
    }

    pub fn set_scissor_test(&mut self, test: bool) {
        apply_toggle(&mut self.device, &mut self.active.scissor_test, Feature::ScissorTest, test);
    }

    pub fn set_color_write(&mut self, mask: ColorMask) {
        if self.active.color_write == Some(mask) {
            return;
        }
        self.device.color_mask(mask);
        self.active.color_write = Some(mask);
    }

    pub fn set_depth_write(&mut self, write: bool) {
        if self.active.depth_write == Some(write) {
            return;
        }
        self.device.depth_mask(write);
        self.active.depth_write = Some(write);
    }

    pub fn set_clear_color(&mut self, color: Vec4) {
        if self.active.clear_color == Some(color) {
            return;
        }
        self.device.clear_color(color);
        self.active.clear_color = Some(color);
    }

    pub fn set_clear_depth(&mut self, depth: f32) {
        if self.active.clear_depth == Some(depth) {
            return;
        }
        self.device.clear_depth(depth);
        self.active.clear_depth = Some(depth);
    }

    pub fn set_clear_stencil(&mut self, value: i32) {
        if self.active.clear_stencil == Some(value) {
            return;
        }
        self.device.clear_stencil(value);
        self.active.clear_stencil = Some(value);
    }

    pub fn clear(&mut self, color: bool, depth: bool, stencil: bool) {
        let mask = ClearMask {
            color,
            depth,
            stencil,
        };
        if !mask.is_empty() {
            self.device.clear(mask);
        }
    }

    pub fn set_viewport(&mut self, rect: Rect) {
        self.device.viewport(rect);
        self.viewport = rect;
    }

    pub fn set_scissor(&mut self, rect: Rect) {
        self.device.scissor(rect);
        self.scissor = rect;
    }

    /// Bind a shader program; `None` unbinds.
    pub fn bind_shader(&mut self, shader: Option<ShaderHandle>) -> Result<(), RenderError> {
        if self.active.shader == shader {
            return Ok(());
        }
        let program = match shader {
            Some(handle) => Some(
                self.shaders
                    .get(handle)
                    .ok_or(RenderError::StaleShader(handle))?
                    .program,
            ),
            None => None,
        };
        self.device.use_program(program);
        self.active.shader = shader;
        Ok(())
    }

    /// Bind a texture to `unit`; `None` unbinds.
    pub fn bind_texture(
        &mut self,
        unit: usize,
        texture: Option<TextureHandle>,
    ) -> Result<(), RenderError> {
        if unit >= MAX_TEXTURE_UNITS {
            return Err(RenderError::TextureUnitOutOfRange {
                unit,
                max: MAX_TEXTURE_UNITS,
            });
        }
        if self.active.textures[unit] == texture {
            return Ok(());
        }
        let (cube, id) = match texture {
            Some(handle) => {
                let desc = self
                    .textures
                    .get(handle)
                    .ok_or(RenderError::StaleTexture(handle))?;
                (desc.cube, Some(desc.id))
            }
            None => (false, None),
        };
        self.device.bind_texture(unit as u32, cube, id);
        self.active.textures[unit] = texture;
        Ok(())
    }

    /// Bind a vertex array object. No-op on drivers without VAO support,
    /// where the mesh layer falls back to client-side attribute setup.
    pub fn bind_vertex_array(&mut self, vao: Option<NativeId>) {
        if !self.caps.vao || self.active.vao == vao {
            return;
        }
        self.device.bind_vertex_array(vao);
        self.active.vao = vao;
    }
}
