//! Game settings and asset locations
//!
//! Read once at startup from `pong.json` in the working directory. Every
//! field is optional; a missing file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::DEFAULT_FPS;

/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "pong.json";

/// Settings loading errors
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("target_fps must be greater than zero")]
    ZeroFps,
}

/// Asset file locations, relative to `Settings::asset_root`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub main_menu_image: PathBuf,
    pub pause_image: PathBuf,
    pub game_over_image: PathBuf,
    pub game_won_image: PathBuf,
    pub font: PathBuf,
    pub paddle_hit_sound: PathBuf,
    pub score_sound: PathBuf,
    pub music: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            main_menu_image: "imgs/menu_main.png".into(),
            pause_image: "imgs/menu_pause.png".into(),
            game_over_image: "imgs/game_over.png".into(),
            game_won_image: "imgs/game_won.png".into(),
            font: "fonts/ARCADECLASSIC.TTF".into(),
            paddle_hit_sound: "sounds/paddle_hit.wav".into(),
            score_sound: "sounds/score.wav".into(),
            music: "music/background.ogg".into(),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Frame cap; the game ticks once per frame
    pub target_fps: u32,
    /// Directory every asset path is resolved against
    pub asset_root: PathBuf,
    pub assets: AssetPaths,

    // === Audio ===
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Pong".to_string(),
            target_fps: DEFAULT_FPS,
            asset_root: "assets".into(),
            assets: AssetPaths::default(),
            music_volume: 0.3,
            sfx_volume: 1.0,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            log::info!("No {} found, using default settings", path.display());
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|err| match err {
            SettingsError::Parse { source, .. } => SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut settings: Self =
            serde_json::from_str(json).map_err(|source| SettingsError::Parse {
                path: PathBuf::from(SETTINGS_FILE),
                source,
            })?;

        if settings.target_fps == 0 {
            return Err(SettingsError::ZeroFps);
        }
        settings.music_volume = settings.music_volume.clamp(0.0, 1.0);
        settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    /// Resolve an asset path against the asset root
    pub fn asset_path(&self, relative: &Path) -> PathBuf {
        self.asset_root.join(relative)
    }
}
