//! Startup errors

use thiserror::Error;

use crate::assets::AssetError;
use crate::audio::AudioError;
use crate::renderer::RenderError;
use crate::settings::SettingsError;

/// Anything that stops the game from starting
#[derive(Error, Debug)]
pub enum InitError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Audio(#[from] AudioError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("could not create window: {0}")]
    Window(#[from] winit::error::OsError),
}
