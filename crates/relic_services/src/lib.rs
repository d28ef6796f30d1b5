//! Relic Services Layer
//!
//! Persistent configuration for the host shim: video mode, frame pacing and
//! render quality toggles.

pub mod settings;

pub use settings::{FrameRate, RenderSettings, Settings, SettingsError, VideoSettings};
