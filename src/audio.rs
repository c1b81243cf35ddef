use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source, source::Buffered};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::settings::Settings;

/// Sound clips the game plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clip {
    Theme,
    Firing,
}

#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    #[error("no audio output: {0}")]
    Stream(#[from] rodio::StreamError),

    #[error("cannot play sound: {0}")]
    Play(#[from] rodio::PlayError),

    #[error("cannot decode sound: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),

    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Somewhere to play sounds
pub trait AudioSink {
    /// Starts a clip and returns immediately
    fn play_once(&self, clip: Clip);

    /// Plays a clip and returns once it has finished
    fn play_blocking(&self, clip: Clip);
}

/// Audio sink that plays nothing, used when no output device is available
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play_once(&self, _clip: Clip) {}

    fn play_blocking(&self, _clip: Clip) {}
}

type BufferedClip = Buffered<Decoder<BufReader<File>>>;

/// Audio manager for playing sound effects through rodio
pub struct AudioManager {
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
    /// Pre-loaded and buffered fire sound (None if loading failed)
    fire_sound: Option<BufferedClip>,
    theme_path: PathBuf,
    volume: f32,
}

impl AudioManager {
    /// Opens the default output device and pre-loads the firing sound
    pub fn new(settings: &Settings) -> Result<Self, AudioError> {
        let (stream, stream_handle) = OutputStream::try_default()?;

        let fire_sound = match load_clip(&settings.firing_sound) {
            Ok(clip) => Some(clip.buffered()),
            Err(err) => {
                log::warn!("firing sound unavailable: {err}");
                None
            }
        };

        Ok(Self {
            _stream: stream,
            stream_handle,
            fire_sound,
            theme_path: settings.theme_song.clone(),
            volume: 0.3,
        })
    }

    /// Opens rodio audio, falling back to silence if there is no device
    pub fn open_or_silent(settings: &Settings) -> Box<dyn AudioSink> {
        match Self::new(settings) {
            Ok(manager) => Box::new(manager),
            Err(err) => {
                log::warn!("failed to initialize audio, continuing without sound: {err}");
                Box::new(SilentAudio)
            }
        }
    }

    fn play_theme(&self) -> Result<(), AudioError> {
        let source = load_clip(&self.theme_path)?;
        let sink = Sink::try_new(&self.stream_handle)?;
        sink.set_volume(self.volume);
        sink.append(source);
        sink.sleep_until_end();
        Ok(())
    }

    fn play_fire_sound(&self) {
        // Only play if the sound was successfully loaded
        let Some(fire_sound) = &self.fire_sound else {
            return;
        };
        match Sink::try_new(&self.stream_handle) {
            Ok(sink) => {
                sink.set_volume(self.volume);
                // Clone the buffered source (fast - just clones references)
                sink.append(fire_sound.clone());
                sink.detach();
            }
            Err(err) => log::debug!("dropped fire sound: {err}"),
        }
    }
}

impl AudioSink for AudioManager {
    fn play_once(&self, clip: Clip) {
        match clip {
            Clip::Firing => self.play_fire_sound(),
            Clip::Theme => log::debug!("theme is only played blocking"),
        }
    }

    fn play_blocking(&self, clip: Clip) {
        match clip {
            Clip::Theme => {
                if let Err(err) = self.play_theme() {
                    log::warn!("theme song skipped: {err}");
                }
            }
            Clip::Firing => self.play_fire_sound(),
        }
    }
}

fn load_clip(path: &Path) -> Result<Decoder<BufReader<File>>, AudioError> {
    let file = File::open(path).map_err(|source| AudioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Decoder::new(BufReader::new(file))?)
}
