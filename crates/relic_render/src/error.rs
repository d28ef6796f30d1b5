use crate::resources::{ShaderHandle, TextureHandle};
use thiserror::Error;

/// Errors surfaced by the render core.
///
/// Capability absence is never an error; missing features degrade silently.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("texture handle {0:?} is stale or was never registered")]
    StaleTexture(TextureHandle),

    #[error("shader handle {0:?} is stale or was never registered")]
    StaleShader(ShaderHandle),

    #[error("texture unit {unit} is out of range (max {max})")]
    TextureUnitOutOfRange { unit: usize, max: usize },

    #[error("backend failed to create {object}: {reason}")]
    Backend { object: &'static str, reason: String },
}
