//! Image assets
//!
//! Full-screen menu images are decoded into RGBA once at startup and kept in
//! memory for the lifetime of the game.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use thiserror::Error;

use crate::settings::Settings;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("could not load image {path}: {source}")]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("could not read font {path}: {source}")]
    FontIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path} is not a usable font")]
    FontParse { path: PathBuf },
}

/// Decoded RGBA8 pixel data
pub type Image = RgbaImage;

/// Load an image file and convert to RGBA8
pub fn load_image(path: &Path) -> Result<Image, AssetError> {
    let img = image::open(path).map_err(|source| AssetError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = img.to_rgba8();

    log::info!(
        "Loaded image {}x{} from {}",
        rgba.width(),
        rgba.height(),
        path.display()
    );
    Ok(rgba)
}

/// Full-screen images shown instead of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Pause,
    GameOver,
    GameWon,
}

/// One image per `Screen`
#[derive(Debug, Clone)]
pub struct ScreenImages {
    pub main_menu: Image,
    pub pause: Image,
    pub game_over: Image,
    pub game_won: Image,
}

impl ScreenImages {
    /// Load every screen image named in `settings`
    pub fn load(settings: &Settings) -> Result<Self, AssetError> {
        let paths = &settings.assets;
        Ok(Self {
            main_menu: load_image(&settings.asset_path(&paths.main_menu_image))?,
            pause: load_image(&settings.asset_path(&paths.pause_image))?,
            game_over: load_image(&settings.asset_path(&paths.game_over_image))?,
            game_won: load_image(&settings.asset_path(&paths.game_won_image))?,
        })
    }

    pub fn get(&self, screen: Screen) -> &Image {
        match screen {
            Screen::MainMenu => &self.main_menu,
            Screen::Pause => &self.pause,
            Screen::GameOver => &self.game_over,
            Screen::GameWon => &self.game_won,
        }
    }
}

/// Read the scoreboard font
pub fn load_font(path: &Path) -> Result<rusttype::Font<'static>, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::FontIo {
        path: path.to_path_buf(),
        source,
    })?;
    let font = rusttype::Font::try_from_vec(bytes).ok_or_else(|| AssetError::FontParse {
        path: path.to_path_buf(),
    })?;
    log::info!("Loaded font from {}", path.display());
    Ok(font)
}
