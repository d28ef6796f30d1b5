//! Relic Engine Core
//!
//! Platform services shared by every engine layer:
//! - Timer source behind a `Clock` trait
//! - Generation-checked resource arenas
//! - Math re-exports and pixel rectangles

pub mod handle;
pub mod math;
pub mod time;

pub use glam;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
