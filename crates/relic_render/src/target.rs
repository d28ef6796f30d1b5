//! Render target binding
//!
//! All offscreen targets share one framebuffer object; binding a target swaps
//! its attachments. Depth/shadow textures go on the depth attachment with a
//! pooled colour renderbuffer beside them, colour textures go on colour
//! attachment 0 with a pooled depth renderbuffer.

use crate::context::RenderContext;
use crate::device::{Attachment, ClearMask, ColorMask, GpuDevice, TextureTarget};
use crate::error::RenderError;
use crate::resources::TextureHandle;
use crate::target_cache::PoolKind;
use relic_core::math::Rect;

impl<D: GpuDevice> RenderContext<D> {
    /// Redirect rendering to `target` (cube `face` for cube maps), or back to
    /// the default framebuffer for `None`.
    ///
    /// The viewport active before the first offscreen bind is restored when
    /// returning to the default framebuffer, across any number of
    /// intermediate target switches.
    pub fn set_target(
        &mut self,
        target: Option<TextureHandle>,
        clear: bool,
        face: u8,
    ) -> Result<(), RenderError> {
        if target == self.active.target && face == self.active.target_face {
            return Ok(());
        }

        match target {
            None => self.restore_default_framebuffer(),
            Some(handle) => {
                let desc = *self
                    .textures
                    .get(handle)
                    .ok_or(RenderError::StaleTexture(handle))?;

                if self.active.target.is_none() {
                    self.viewport_def = self.viewport;
                }

                let tex_target = if desc.cube {
                    TextureTarget::CubeFace(face)
                } else {
                    TextureTarget::Texture2d
                };

                let depth = desc.format.is_depth();
                let (kind, primary, companion) = if depth {
                    (PoolKind::Depth, Attachment::Depth, Attachment::Color0)
                } else {
                    (PoolKind::Color, Attachment::Color0, Attachment::Depth)
                };
                let renderbuffer =
                    self.targets
                        .acquire(&mut self.device, kind, desc.width, desc.height)?;

                self.device.bind_framebuffer(Some(self.fbo));
                self.device.framebuffer_texture(primary, tex_target, desc.id);
                self.device.framebuffer_renderbuffer(companion, renderbuffer);

                if depth {
                    self.set_color_write(ColorMask::NONE);
                } else {
                    self.set_color_write(ColorMask::ALL);
                }
                self.set_viewport(Rect::from_size(desc.width, desc.height));
            }
        }

        if clear {
            self.device.clear(ClearMask::ALL);
        }

        self.active.target = target;
        self.active.target_face = face;
        Ok(())
    }

    /// Return to the default framebuffer whatever the snapshot says.
    ///
    /// For recovering from a pass that bailed out with a target still bound.
    /// Viewport and colour mask are restored like `set_target(None, ..)`.
    pub fn reset_target(&mut self) {
        if self.active.target.is_some() {
            tracing::debug!(target = ?self.active.target, "offscreen target left bound");
        }
        self.restore_default_framebuffer();
        self.active.target = None;
        self.active.target_face = 0;
    }

    fn restore_default_framebuffer(&mut self) {
        self.device.bind_framebuffer(self.default_fbo);
        self.device.color_mask(ColorMask::ALL);
        self.active.color_write = Some(ColorMask::ALL);
        self.set_viewport(self.viewport_def);
    }

    /// Hint that the bound target's colour and/or depth contents need not be
    /// preserved. Dropped silently without the discard capability.
    pub fn invalidate_target(&mut self, color: bool, depth: bool) {
        if !self.caps.discard_frame || !(color || depth) {
            return;
        }

        let mut attachments = [Attachment::Color0; 2];
        let mut count = 0;
        if color {
            count += 1;
        }
        if depth {
            attachments[count] = Attachment::Depth;
            count += 1;
        }
        self.device
            .discard_framebuffer(self.active.target.is_some(), &attachments[..count]);
    }

    /// Copy `src` from the bound framebuffer into `texture` at the given offset.
    pub fn copy_target(
        &mut self,
        texture: TextureHandle,
        x_offset: i32,
        y_offset: i32,
        src: Rect,
    ) -> Result<(), RenderError> {
        self.bind_texture(0, Some(texture))?;
        self.device.copy_to_texture(x_offset, y_offset, src);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::context::tests::context;
    use crate::context::RenderContext;
    use crate::device::{Attachment, ClearMask, ColorMask, GpuDevice, TextureTarget};
    use crate::error::RenderError;
    use crate::recording::{GpuCommand, RecordingDevice};
    use crate::resources::{TextureDesc, TextureFormat, TextureHandle};
    use crate::target_cache::PoolKind;
    use relic_core::math::Rect;
    use relic_core::time::ManualClock;

    fn texture<D: GpuDevice>(
        ctx: &mut RenderContext<D>,
        format: TextureFormat,
        size: i32,
        id: u32,
    ) -> TextureHandle {
        ctx.register_texture(TextureDesc {
            format,
            width: size,
            height: size,
            cube: false,
            id,
        })
    }

    #[test]
    fn test_color_target_attachments() {
        let mut ctx = context("");
        let tex = texture(&mut ctx, TextureFormat::Rgba, 256, 11);
        let fbo = ctx.fbo;

        ctx.set_target(Some(tex), true, 0).unwrap();

        let commands = ctx.device_mut().take_commands();
        let rb = match commands[0] {
            GpuCommand::CreateRenderbuffer { id, .. } => id,
            ref other => panic!("expected renderbuffer allocation, got {other:?}"),
        };
        assert_eq!(
            &commands[1..],
            &[
                GpuCommand::BindFramebuffer(Some(fbo)),
                GpuCommand::FramebufferTexture {
                    attachment: Attachment::Color0,
                    target: TextureTarget::Texture2d,
                    texture: 11,
                },
                GpuCommand::FramebufferRenderbuffer {
                    attachment: Attachment::Depth,
                    renderbuffer: rb,
                },
                GpuCommand::ColorMask(ColorMask::ALL),
                GpuCommand::Viewport(Rect::from_size(256, 256)),
                GpuCommand::Clear(ClearMask::ALL),
            ]
        );
        assert_eq!(ctx.targets().len(PoolKind::Color), 1);
    }

    #[test]
    fn test_shadow_target_disables_color_writes() {
        let mut ctx = context("");
        let shadow = texture(&mut ctx, TextureFormat::Shadow, 1024, 12);

        ctx.set_target(Some(shadow), false, 0).unwrap();

        let commands = ctx.device_mut().take_commands();
        assert!(commands.contains(&GpuCommand::FramebufferTexture {
            attachment: Attachment::Depth,
            target: TextureTarget::Texture2d,
            texture: 12,
        }));
        assert!(commands.contains(&GpuCommand::ColorMask(ColorMask::NONE)));
        assert!(!commands.iter().any(|c| matches!(c, GpuCommand::Clear(_))));
        assert_eq!(ctx.targets().len(PoolKind::Depth), 1);
        assert_eq!(ctx.targets().len(PoolKind::Color), 0);

        // Back to the screen re-enables colour writes
        ctx.set_target(None, false, 0).unwrap();
        let commands = ctx.device_mut().take_commands();
        assert_eq!(commands[0], GpuCommand::BindFramebuffer(None));
        assert_eq!(commands[1], GpuCommand::ColorMask(ColorMask::ALL));
    }

    #[test]
    fn test_same_binding_is_noop() {
        let mut ctx = context("");
        let tex = texture(&mut ctx, TextureFormat::Rgba, 64, 1);

        ctx.set_target(Some(tex), false, 0).unwrap();
        ctx.device_mut().take_commands();
        ctx.set_target(Some(tex), true, 0).unwrap();
        assert!(ctx.device().commands().is_empty());

        ctx.set_target(None, false, 0).unwrap();
        ctx.device_mut().take_commands();
        ctx.set_target(None, false, 0).unwrap();
        assert!(ctx.device().commands().is_empty());
    }

    #[test]
    fn test_cube_faces_rebind() {
        let mut ctx = context("");
        let cube = ctx.register_texture(TextureDesc {
            format: TextureFormat::Rgba,
            width: 128,
            height: 128,
            cube: true,
            id: 77,
        });

        for face in 0..6 {
            ctx.set_target(Some(cube), false, face).unwrap();
            assert!(ctx.device().commands().contains(&GpuCommand::FramebufferTexture {
                attachment: Attachment::Color0,
                target: TextureTarget::CubeFace(face),
                texture: 77,
            }));
            ctx.device_mut().take_commands();
        }
        // One companion for all six faces
        assert_eq!(ctx.targets().len(PoolKind::Color), 1);
        assert_eq!(ctx.active().target_face, 5);
    }

    #[test]
    fn test_viewport_restored_across_switches() {
        let mut ctx = context("");
        let host_viewport = Rect::new(8, 8, 600, 400);
        ctx.set_viewport(host_viewport);

        let shadow = texture(&mut ctx, TextureFormat::Depth, 1024, 1);
        let reflect = texture(&mut ctx, TextureFormat::Rgba, 256, 2);
        let blur = texture(&mut ctx, TextureFormat::Rgba, 128, 3);

        ctx.set_target(Some(shadow), true, 0).unwrap();
        assert_eq!(ctx.viewport(), Rect::from_size(1024, 1024));
        ctx.set_target(Some(reflect), true, 0).unwrap();
        // Viewport changes on an offscreen target don't leak into the default
        ctx.set_viewport(Rect::new(0, 0, 10, 10));
        ctx.set_target(Some(blur), false, 0).unwrap();
        ctx.set_target(None, false, 0).unwrap();

        assert_eq!(ctx.viewport(), host_viewport);
        assert_eq!(
            ctx.device().commands().last(),
            Some(&GpuCommand::Viewport(host_viewport))
        );
    }

    #[test]
    fn test_restores_host_framebuffer() {
        let device = RecordingDevice::new("").with_default_framebuffer(5);
        let mut ctx = RenderContext::new(device, Box::new(ManualClock::new(0)), 64, 64).unwrap();
        let tex = texture(&mut ctx, TextureFormat::Rgba, 32, 1);

        ctx.set_target(Some(tex), false, 0).unwrap();
        ctx.set_target(None, false, 0).unwrap();
        assert!(ctx
            .device()
            .commands()
            .contains(&GpuCommand::BindFramebuffer(Some(5))));
    }

    #[test]
    fn test_stale_target_is_rejected() {
        let mut ctx = context("");
        let tex = texture(&mut ctx, TextureFormat::Rgba, 32, 1);
        ctx.unregister_texture(tex);

        assert!(matches!(
            ctx.set_target(Some(tex), false, 0),
            Err(RenderError::StaleTexture(_))
        ));
        assert_eq!(ctx.active().target, None);
        assert!(ctx.device().commands().is_empty());
    }

    #[test]
    fn test_invalidate_needs_capability() {
        let mut ctx = context("");
        ctx.invalidate_target(true, true);
        assert!(ctx.device().commands().is_empty());

        let mut ctx = context("GL_EXT_discard_framebuffer");
        ctx.invalidate_target(false, false);
        assert!(ctx.device().commands().is_empty());

        ctx.invalidate_target(true, true);
        assert_eq!(
            ctx.device_mut().take_commands(),
            vec![GpuCommand::DiscardFramebuffer {
                offscreen: false,
                attachments: vec![Attachment::Color0, Attachment::Depth],
            }]
        );

        let tex = texture(&mut ctx, TextureFormat::Rgba, 32, 1);
        ctx.set_target(Some(tex), false, 0).unwrap();
        ctx.device_mut().take_commands();
        ctx.invalidate_target(false, true);
        assert_eq!(
            ctx.device_mut().take_commands(),
            vec![GpuCommand::DiscardFramebuffer {
                offscreen: true,
                attachments: vec![Attachment::Depth],
            }]
        );
    }

    #[test]
    fn test_invalidate_single_attachment() {
        let mut ctx = context("GL_EXT_discard_framebuffer");
        ctx.invalidate_target(true, false);
        ctx.invalidate_target(false, true);
        assert_eq!(
            ctx.device_mut().take_commands(),
            vec![
                GpuCommand::DiscardFramebuffer {
                    offscreen: false,
                    attachments: vec![Attachment::Color0],
                },
                GpuCommand::DiscardFramebuffer {
                    offscreen: false,
                    attachments: vec![Attachment::Depth],
                },
            ]
        );
    }

    #[test]
    fn test_reset_target_unbinds_offscreen() {
        let mut ctx = context("");
        let host_viewport = Rect::new(0, 0, 640, 480);
        let shadow = texture(&mut ctx, TextureFormat::Shadow, 512, 4);
        ctx.set_target(Some(shadow), false, 0).unwrap();
        ctx.device_mut().take_commands();

        ctx.reset_target();
        assert_eq!(
            ctx.device_mut().take_commands(),
            vec![
                GpuCommand::BindFramebuffer(None),
                GpuCommand::ColorMask(ColorMask::ALL),
                GpuCommand::Viewport(host_viewport),
            ]
        );
        assert_eq!(ctx.active().target, None);

        // Binds even when the snapshot already says default
        ctx.reset_target();
        assert_eq!(ctx.device().commands()[0], GpuCommand::BindFramebuffer(None));

        // The next bind of the same target is not mistaken for a no-op
        ctx.device_mut().take_commands();
        ctx.set_target(Some(shadow), false, 0).unwrap();
        assert!(ctx
            .device()
            .commands()
            .contains(&GpuCommand::BindFramebuffer(Some(ctx.fbo))));
    }

    #[test]
    fn test_copy_target_binds_unit_zero() {
        let mut ctx = context("");
        let tex = texture(&mut ctx, TextureFormat::Rgba, 64, 21);
        let src = Rect::new(0, 0, 64, 32);

        ctx.copy_target(tex, 4, 2, src).unwrap();
        assert_eq!(
            ctx.device_mut().take_commands(),
            vec![
                GpuCommand::BindTexture {
                    unit: 0,
                    cube: false,
                    texture: Some(21),
                },
                GpuCommand::CopyToTexture {
                    x_offset: 4,
                    y_offset: 2,
                    src,
                },
            ]
        );
    }

    #[test]
    fn test_teardown_releases_everything() {
        let mut device = RecordingDevice::new("");
        {
            let mut ctx =
                RenderContext::new(&mut device, Box::new(ManualClock::new(0)), 64, 64).unwrap();
            let color = texture(&mut ctx, TextureFormat::Rgba, 32, 1);
            let depth = texture(&mut ctx, TextureFormat::Depth, 32, 2);
            ctx.begin_frame();
            ctx.set_target(Some(color), false, 0).unwrap();
            ctx.set_target(Some(depth), false, 0).unwrap();
            // Dropped mid-frame with an offscreen target bound
        }
        assert_eq!(device.live_framebuffers(), 0);
        assert_eq!(device.live_renderbuffers(), 0);
        assert!(device.commands().contains(&GpuCommand::BindFramebuffer(None)));
    }
}
