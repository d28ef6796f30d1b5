//! Built-in frame renderer for headless runs
//!
//! Walks the render core through the passes a level frame uses: a shadow map,
//! the lit scene, z-fail shadow volumes, and a water refraction copy. No
//! geometry exists; draws are only counted.

use relic_core::math::{Rect, Vec4};
use relic_render::{
    BlendMode, ColorMask, CullMode, GpuDevice, RenderContext, RenderError, ShaderDesc,
    ShaderHandle, StencilOp, StencilOps, StencilPath, TextureDesc, TextureFormat, TextureHandle,
};
use relic_services::RenderSettings;

use crate::host::FrameRenderer;

const SHADOW_MAP_SIZE: i32 = 1024;
const REFRACTION_SIZE: i32 = 512;
const STENCIL_REF: i32 = 0x80;

const SCENE_TRIANGLES: u32 = 4096;
const VOLUME_TRIANGLES: u32 = 512;

/// Per-context resources. The ids stand in for textures an asset layer
/// would have created.
struct Resources {
    shadow_map: TextureHandle,
    refraction: TextureHandle,
    shader: ShaderHandle,
}

pub struct ShadowVolumeDemo {
    quality: RenderSettings,
    resources: Option<Resources>,
    time: f32,
}

impl ShadowVolumeDemo {
    pub fn new(quality: RenderSettings) -> Self {
        Self {
            quality,
            resources: None,
            time: 0.0,
        }
    }

    /// Seconds of simulated time.
    pub fn time(&self) -> f32 {
        self.time
    }

    fn shadow_pass<D: GpuDevice>(
        ctx: &mut RenderContext<D>,
        res: &Resources,
    ) -> Result<(), RenderError> {
        let mut ctx = ctx.marker("shadow map");
        ctx.set_target(Some(res.shadow_map), true, 0)?;
        ctx.set_culling(CullMode::Back);
        ctx.record_draw(SCENE_TRIANGLES);
        ctx.invalidate_target(true, false);
        ctx.set_target(None, false, 0)
    }

    fn volume_pass<D: GpuDevice>(ctx: &mut RenderContext<D>) {
        let mut ctx = ctx.marker("shadow volumes");
        ctx.set_stencil_test(true);
        ctx.set_depth_write(false);
        ctx.set_color_write(ColorMask::NONE);

        ctx.set_stencil_two_side(STENCIL_REF, true);
        if ctx.stencil_path() == StencilPath::EnabledNative {
            // Back faces decrement, front faces increment, one pass each
            ctx.set_culling(CullMode::Front);
            ctx.device_mut()
                .stencil_op(StencilOps::depth_fail(StencilOp::Decr));
            ctx.record_draw(VOLUME_TRIANGLES);
            ctx.set_culling(CullMode::Back);
            ctx.device_mut()
                .stencil_op(StencilOps::depth_fail(StencilOp::Incr));
            ctx.record_draw(VOLUME_TRIANGLES);
        } else {
            ctx.record_draw(VOLUME_TRIANGLES);
        }
        ctx.set_stencil_two_side(STENCIL_REF, false);

        // Darken everything the volumes left non-zero
        ctx.set_color_write(ColorMask::ALL);
        ctx.set_blending(BlendMode::Multiply);
        ctx.record_draw(2);
        ctx.set_blending(BlendMode::None);
        ctx.set_depth_write(true);
        ctx.set_stencil_test(false);
    }
}

impl FrameRenderer for ShadowVolumeDemo {
    fn init<D: GpuDevice>(&mut self, ctx: &mut RenderContext<D>) -> Result<(), RenderError> {
        let format = if ctx.caps().depth_texture {
            TextureFormat::Shadow
        } else {
            TextureFormat::Rgba
        };
        let res = Resources {
            shadow_map: ctx.register_texture(TextureDesc {
                format,
                width: SHADOW_MAP_SIZE,
                height: SHADOW_MAP_SIZE,
                cube: false,
                id: 1,
            }),
            refraction: ctx.register_texture(TextureDesc {
                format: TextureFormat::Rgba,
                width: REFRACTION_SIZE,
                height: REFRACTION_SIZE,
                cube: false,
                id: 2,
            }),
            shader: ctx.register_shader(ShaderDesc { program: 1 }),
        };
        ctx.label_texture(res.shadow_map, "shadow map");
        ctx.label_texture(res.refraction, "water refraction");
        ctx.label_shader(res.shader, "level");
        self.resources = Some(res);
        Ok(())
    }

    fn update(&mut self, delta: f32) -> bool {
        self.time += delta;
        true
    }

    fn render<D: GpuDevice>(&mut self, ctx: &mut RenderContext<D>) -> Result<(), RenderError> {
        let Some(res) = self.resources.as_ref() else {
            return Ok(());
        };

        if self.quality.shadows {
            let mut timed = ctx.timing();
            Self::shadow_pass(&mut *timed, res)?;
            if let Some(gpu) = timed.finish() {
                tracing::trace!(?gpu, "shadow pass");
            }
        }

        // Slow pulse so the clear colour visibly changes in captures
        let pulse = 0.5 + 0.5 * self.time.sin();
        ctx.set_clear_color(Vec4::new(0.0, 0.0, 0.1 * pulse, 1.0));
        ctx.set_clear_stencil(0);
        ctx.clear(true, true, true);

        ctx.bind_shader(Some(res.shader))?;
        if self.quality.shadows {
            ctx.bind_texture(1, Some(res.shadow_map))?;
        }
        ctx.record_draw(SCENE_TRIANGLES);

        if self.quality.shadows {
            Self::volume_pass(ctx);
        }

        if self.quality.water {
            let mut ctx = ctx.marker("water");
            let viewport = ctx.viewport();
            let texture_size = ctx
                .texture(res.refraction)
                .map_or(REFRACTION_SIZE, |desc| desc.width.min(desc.height));
            let size = texture_size.min(viewport.width).min(viewport.height);
            ctx.copy_target(res.refraction, 0, 0, Rect::new(viewport.x, viewport.y, size, size))?;
            ctx.set_blending(BlendMode::Alpha);
            ctx.record_draw(2);
            ctx.set_blending(BlendMode::None);
        }

        ctx.invalidate_target(false, true);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relic_render::{Feature, GpuCommand, LabelKind, RecordingDevice};
    use relic_core::time::ManualClock;

    fn frame(extensions: &str, quality: RenderSettings) -> (ShadowVolumeDemo, Vec<GpuCommand>) {
        let mut device = RecordingDevice::new(extensions);
        let mut demo = ShadowVolumeDemo::new(quality);
        {
            let mut ctx =
                RenderContext::new(&mut device, Box::new(ManualClock::new(0)), 640, 480).unwrap();
            demo.init(&mut ctx).unwrap();
            assert!(demo.update(1.0 / 60.0));
            ctx.begin_frame();
            demo.render(&mut ctx).unwrap();
            ctx.end_frame();
            assert_eq!(ctx.active().target, None);
            assert_eq!(ctx.stencil_path(), StencilPath::Disabled);
        }
        (demo, device.take_commands())
    }

    #[test]
    fn test_single_sided_volume_passes() {
        let (_, commands) = frame("", RenderSettings::default());
        let incr = GpuCommand::StencilOp(StencilOps::depth_fail(StencilOp::Incr));
        let decr = GpuCommand::StencilOp(StencilOps::depth_fail(StencilOp::Decr));
        assert!(commands.contains(&incr));
        assert!(commands.contains(&decr));
    }

    #[test]
    fn test_two_side_extension_path() {
        let (_, commands) = frame("GL_EXT_stencil_two_side", RenderSettings::default());
        assert!(commands.contains(&GpuCommand::Enable(Feature::StencilTwoSide)));
        assert!(commands.contains(&GpuCommand::Disable(Feature::StencilTwoSide)));
    }

    #[test]
    fn test_shadows_off_skips_passes() {
        let quality = RenderSettings {
            shadows: false,
            ..RenderSettings::default()
        };
        let (_, commands) = frame("GL_ARB_depth_texture", quality);
        assert!(!commands.contains(&GpuCommand::Enable(Feature::StencilTest)));
        assert!(!commands
            .iter()
            .any(|c| matches!(c, GpuCommand::FramebufferTexture { texture: 1, .. })));
        assert!(commands
            .iter()
            .any(|c| matches!(c, GpuCommand::CopyToTexture { .. })));
    }

    #[test]
    fn test_passes_are_grouped_and_labelled() {
        let (_, commands) = frame("GL_KHR_debug GL_ARB_timer_query", RenderSettings::default());
        let groups: Vec<&str> = commands
            .iter()
            .filter_map(|c| match c {
                GpuCommand::PushDebugGroup(title) => Some(title.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(groups, ["shadow map", "shadow volumes", "water"]);
        assert_eq!(
            commands.iter().filter(|c| **c == GpuCommand::PopDebugGroup).count(),
            3
        );
        assert!(commands.contains(&GpuCommand::ObjectLabel {
            kind: LabelKind::Texture,
            object: 2,
            label: "water refraction".to_string(),
        }));

        // The shadow pass sits inside one timer query
        let begin = commands
            .iter()
            .position(|c| matches!(c, GpuCommand::BeginTimeElapsed(_)))
            .unwrap();
        let end = commands
            .iter()
            .position(|c| *c == GpuCommand::EndTimeElapsed)
            .unwrap();
        assert_eq!(commands[begin + 1], GpuCommand::PushDebugGroup("shadow map".to_string()));
        assert_eq!(commands[end - 1], GpuCommand::PopDebugGroup);
    }

    #[test]
    fn test_time_advances() {
        let (demo, _) = frame("", RenderSettings::default());
        assert!((demo.time() - 1.0 / 60.0).abs() < f32::EPSILON);
    }
}
