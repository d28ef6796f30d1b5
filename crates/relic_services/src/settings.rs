//! Settings management

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write settings to '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported frame rate '{0}' (expected 30, 60, 90, 120 or 144)")]
    InvalidFrameRate(String),
}

/// Host tick rates the core can be paced at.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum FrameRate {
    Fps30,
    #[default]
    Fps60,
    Fps90,
    Fps120,
    Fps144,
}

impl FrameRate {
    pub const ALL: [FrameRate; 5] = [
        FrameRate::Fps30,
        FrameRate::Fps60,
        FrameRate::Fps90,
        FrameRate::Fps120,
        FrameRate::Fps144,
    ];

    pub fn hz(self) -> u32 {
        match self {
            FrameRate::Fps30 => 30,
            FrameRate::Fps60 => 60,
            FrameRate::Fps90 => 90,
            FrameRate::Fps120 => 120,
            FrameRate::Fps144 => 144,
        }
    }

    /// Simulation step per host tick, in seconds.
    pub fn delta(self) -> f32 {
        1.0 / self.hz() as f32
    }
}

impl TryFrom<u32> for FrameRate {
    type Error = SettingsError;

    fn try_from(hz: u32) -> Result<Self, Self::Error> {
        FrameRate::ALL
            .into_iter()
            .find(|rate| rate.hz() == hz)
            .ok_or_else(|| SettingsError::InvalidFrameRate(hz.to_string()))
    }
}

impl From<FrameRate> for u32 {
    fn from(rate: FrameRate) -> u32 {
        rate.hz()
    }
}

/// Accepts `"60"` as well as the frontend option form `"60fps"`.
impl FromStr for FrameRate {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_end_matches("fps");
        digits
            .parse::<u32>()
            .ok()
            .and_then(|hz| FrameRate::try_from(hz).ok())
            .ok_or_else(|| SettingsError::InvalidFrameRate(s.to_string()))
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}fps", self.hz())
    }
}

/// Engine settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub video: VideoSettings,
    pub render: RenderSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSettings {
    pub width: u32,
    pub height: u32,
    pub frame_rate: FrameRate,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            frame_rate: FrameRate::default(),
        }
    }
}

/// Quality toggles read by the game layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub ambient: bool,
    pub lighting: bool,
    pub shadows: bool,
    pub water: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            ambient: true,
            lighting: true,
            shadows: true,
            water: true,
        }
    }
}

impl Settings {
    /// Load from a JSON file. A missing file yields defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let settings = serde_json::from_str(&text)?;
        tracing::debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "settings saved");
        Ok(())
    }
}
