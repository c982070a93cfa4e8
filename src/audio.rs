//! Audio playback using rodio
//!
//! Sound effects and music are decoded from files once at startup. Effects
//! are buffered so each play is a cheap clone of the decoded samples.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rodio::source::Buffered;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use thiserror::Error;

use crate::frame::AudioSink;
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a paddle
    PaddleHit,
    /// Someone won a point
    Score,
}

impl From<GameEvent> for SoundEffect {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::PaddleHit(_) => SoundEffect::PaddleHit,
            GameEvent::Scored(_) => SoundEffect::Score,
        }
    }
}

/// Audio setup errors
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("could not open audio output: {0}")]
    Stream(#[from] rodio::StreamError),

    #[error("could not create music sink: {0}")]
    Sink(#[from] rodio::PlayError),

    #[error("could not open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: rodio::decoder::DecoderError,
    },
}

type Sound = Buffered<Decoder<BufReader<File>>>;

/// Audio manager for the game
pub struct AudioManager {
    // Dropping the stream stops all output
    _stream: OutputStream,
    handle: OutputStreamHandle,
    paddle_hit: Sound,
    score: Sound,
    music: Sink,
    sfx_volume: f32,
}

impl AudioManager {
    /// Open the default output device and decode every sound in `settings`
    pub fn load(settings: &Settings) -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default()?;

        let paddle_hit = open_decoder(&settings.asset_path(&settings.assets.paddle_hit_sound))?
            .buffered();
        let score = open_decoder(&settings.asset_path(&settings.assets.score_sound))?.buffered();

        let music_path = settings.asset_path(&settings.assets.music);
        let music_source = open_decoder(&music_path)?;
        let music = Sink::try_new(&handle)?;
        music.pause();
        music.append(music_source.repeat_infinite());
        music.set_volume(settings.music_volume);
        log::info!("Loaded audio ({})", music_path.display());

        Ok(Self {
            _stream: stream,
            handle,
            paddle_hit,
            score,
            music,
            sfx_volume: settings.sfx_volume,
        })
    }

    /// Start the background music loop
    pub fn start_music(&self) {
        self.music.play();
    }

    /// Play a sound effect (fire and forget)
    pub fn play(&self, effect: SoundEffect) {
        if self.sfx_volume <= 0.0 {
            return;
        }

        let sound = match effect {
            SoundEffect::PaddleHit => &self.paddle_hit,
            SoundEffect::Score => &self.score,
        };

        let source = sound.clone().amplify(self.sfx_volume).convert_samples();
        if let Err(err) = self.handle.play_raw(source) {
            log::debug!("Could not play {:?}: {}", effect, err);
        }
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        AudioManager::play(self, effect);
    }
}

fn open_decoder(path: &Path) -> Result<Decoder<BufReader<File>>, AudioError> {
    let file = File::open(path).map_err(|source| AudioError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
