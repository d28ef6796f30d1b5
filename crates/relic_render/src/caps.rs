//! Capability probe
//!
//! Turns the driver's extension string into an immutable `CapabilitySet`.
//! Probing is a pure substring search over fixed tokens; it runs once per GPU
//! context. Re-probing a live context hands stale flags to render targets that
//! were already created from the first result.

use crate::device::DriverInfo;

/// Two-sided stencil support, in priority order.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum StencilMode {
    /// Single-sided only; two-sidedness needs two passes.
    #[default]
    None,
    /// `EXT_stencil_two_side`
    TwoSideExtension,
    /// `ATI_separate_stencil` / core separate-face stencil
    SeparateExtension,
}

impl StencilMode {
    fn label(self) -> &'static str {
        match self {
            StencilMode::None => "false",
            StencilMode::TwoSideExtension => "two_side",
            StencilMode::SeparateExtension => "separate",
        }
    }
}

/// Support level of a renderable float format.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct FloatFormat {
    pub supported: bool,
    /// Linear filtering on top of `supported`.
    pub linear: bool,
}

impl FloatFormat {
    fn label(self) -> &'static str {
        match (self.supported, self.linear) {
            (true, true) => "linear",
            (true, false) => "nearest",
            _ => "false",
        }
    }
}

/// Optional driver features detected at context creation.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct CapabilitySet {
    pub shader_binary: bool,
    pub vao: bool,
    pub depth_texture: bool,
    pub shadow_sampler: bool,
    pub discard_frame: bool,
    pub tex_npot: bool,
    pub tex_rg: bool,
    pub tex_border: bool,
    pub tex_float: FloatFormat,
    pub tex_half: FloatFormat,
    pub stencil: StencilMode,
    /// `KHR_debug` groups and object labels
    pub debug_markers: bool,
    /// GPU timer queries
    pub timer_query: bool,
}

fn has(ext: &str, token: &str) -> bool {
    ext.contains(token)
}

/// Token followed by a separator or the end of the string, so that
/// `_texture_rg` does not match `_texture_rgb10_a2ui`.
fn has_word(ext: &str, token: &str) -> bool {
    ext.match_indices(token).any(|(at, _)| {
        ext[at + token.len()..]
            .chars()
            .next()
            .map_or(true, char::is_whitespace)
    })
}

impl CapabilitySet {
    /// Derive capabilities from an extension string.
    ///
    /// Matching is case-sensitive. `vendor` only feeds diagnostics.
    pub fn probe(extensions: &str, vendor: &str) -> Self {
        let ext = extensions;

        let depth_texture = has(ext, "_depth_texture");
        // ARB float textures imply linear filtering for both precisions
        let arb_float = has(ext, "GL_ARB_texture_float");
        let float_linear = arb_float || has(ext, "_texture_float_linear");
        let half_linear = arb_float || has(ext, "_texture_half_float_linear");

        let stencil = if has(ext, "_ATI_separate_stencil") {
            StencilMode::SeparateExtension
        } else if has(ext, "_stencil_two_side") {
            StencilMode::TwoSideExtension
        } else {
            StencilMode::None
        };

        let caps = Self {
            shader_binary: has(ext, "_program_binary"),
            vao: has(ext, "_vertex_array_object"),
            depth_texture,
            shadow_sampler: depth_texture
                && (has(ext, "_shadow_samplers") || has(ext, "GL_ARB_shadow")),
            discard_frame: has(ext, "_discard_framebuffer"),
            tex_npot: has(ext, "_texture_npot") || has(ext, "_texture_non_power_of_two"),
            tex_rg: has_word(ext, "_texture_rg"),
            tex_border: has(ext, "_texture_border_clamp"),
            tex_float: FloatFormat {
                supported: float_linear || has(ext, "_texture_float"),
                linear: float_linear,
            },
            tex_half: FloatFormat {
                supported: half_linear || has(ext, "_texture_half_float"),
                linear: half_linear,
            },
            stencil,
            debug_markers: has(ext, "_KHR_debug"),
            timer_query: has(ext, "_timer_query"),
        };

        tracing::trace!(vendor, ?caps, "probed capabilities");
        caps
    }

    /// Probe a driver and log what was found.
    pub fn probe_driver(info: &DriverInfo) -> Self {
        let caps = Self::probe(&info.extensions, &info.vendor);
        caps.log(info);
        caps
    }

    fn log(&self, info: &DriverInfo) {
        tracing::info!("Vendor   : {}", info.vendor);
        tracing::info!("Renderer : {}", info.renderer);
        tracing::info!("Version  : {}", info.version);
        tracing::info!("supports :");
        tracing::info!("  binary shaders : {}", self.shader_binary);
        tracing::info!("  vertex arrays  : {}", self.vao);
        tracing::info!("  depth texture  : {}", self.depth_texture);
        tracing::info!("  shadow sampler : {}", self.shadow_sampler);
        tracing::info!("  discard frame  : {}", self.discard_frame);
        tracing::info!("  NPOT textures  : {}", self.tex_npot);
        tracing::info!("  RG   textures  : {}", self.tex_rg);
        tracing::info!("  border color   : {}", self.tex_border);
        tracing::info!(
            "  float textures : float = {}, half = {}",
            self.tex_float.label(),
            self.tex_half.label()
        );
        tracing::info!("  stencil        : {}", self.stencil.label());
        tracing::debug!(
            debug_markers = self.debug_markers,
            timer_query = self.timer_query,
            "profiling support"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: &str = "GL_ARB_vertex_array_object GL_ARB_depth_texture GL_ARB_shadow \
        GL_ARB_texture_float GL_ARB_texture_non_power_of_two GL_EXT_stencil_two_side \
        GL_ATI_separate_stencil GL_ARB_texture_rg GL_KHR_debug";

    #[test]
    fn test_empty_string_has_nothing() {
        assert_eq!(CapabilitySet::probe("", ""), CapabilitySet::default());
    }

    #[test]
    fn test_desktop_driver() {
        let caps = CapabilitySet::probe(DESKTOP, "ATI");
        assert!(caps.vao);
        assert!(caps.depth_texture);
        assert!(caps.shadow_sampler);
        assert!(caps.tex_npot);
        assert!(caps.tex_rg);
        assert!(caps.debug_markers);
        assert!(!caps.discard_frame);
        assert!(!caps.shader_binary);
        assert_eq!(caps.tex_float, FloatFormat { supported: true, linear: true });
        assert_eq!(caps.tex_half, FloatFormat { supported: true, linear: true });
    }

    #[test]
    fn test_separate_stencil_wins() {
        for ext in [
            "GL_ATI_separate_stencil",
            "GL_EXT_stencil_two_side GL_ATI_separate_stencil",
            "GL_ATI_separate_stencil GL_EXT_stencil_two_side",
            DESKTOP,
        ] {
            assert_eq!(
                CapabilitySet::probe(ext, "").stencil,
                StencilMode::SeparateExtension,
                "{ext}"
            );
        }
        assert_eq!(
            CapabilitySet::probe("GL_EXT_stencil_two_side", "").stencil,
            StencilMode::TwoSideExtension
        );
        assert_eq!(CapabilitySet::probe("GL_OES_depth_texture", "").stencil, StencilMode::None);
    }

    #[test]
    fn test_probe_is_deterministic() {
        let a = CapabilitySet::probe(DESKTOP, "a");
        let b = CapabilitySet::probe(DESKTOP, "b");
        assert_eq!(a, b);
    }

    #[test]
    fn test_shadow_sampler_needs_depth_texture() {
        let caps = CapabilitySet::probe("GL_EXT_shadow_samplers", "");
        assert!(!caps.shadow_sampler);
        let caps = CapabilitySet::probe("GL_EXT_shadow_samplers GL_OES_depth_texture", "");
        assert!(caps.shadow_sampler);
    }

    #[test]
    fn test_float_formats_without_linear() {
        let caps = CapabilitySet::probe("GL_OES_texture_float GL_OES_texture_half_float", "");
        assert_eq!(caps.tex_float, FloatFormat { supported: true, linear: false });
        assert_eq!(caps.tex_half, FloatFormat { supported: true, linear: false });

        let caps = CapabilitySet::probe("GL_OES_texture_half_float_linear", "");
        assert_eq!(caps.tex_half, FloatFormat { supported: true, linear: true });
        assert!(!caps.tex_float.supported);
    }

    #[test]
    fn test_rg_matches_whole_token_only() {
        assert!(CapabilitySet::probe("GL_EXT_texture_rg", "").tex_rg);
        assert!(CapabilitySet::probe("GL_EXT_texture_rg GL_OES_vertex_array_object", "").tex_rg);
        assert!(!CapabilitySet::probe("GL_ARB_texture_rgb10_a2ui", "").tex_rg);
    }

    #[test]
    fn test_mobile_driver() {
        let ext = "GL_OES_vertex_array_object GL_EXT_discard_framebuffer GL_OES_texture_npot \
            GL_OES_get_program_binary GL_EXT_disjoint_timer_query";
        let caps = CapabilitySet::probe(ext, "ARM");
        assert!(caps.vao);
        assert!(caps.discard_frame);
        assert!(caps.tex_npot);
        assert!(caps.shader_binary);
        assert!(caps.timer_query);
        assert!(!caps.depth_texture);
    }
}
