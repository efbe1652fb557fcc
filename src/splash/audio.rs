//! Intro jingle played while the splash screen is up

use std::path::{Path, PathBuf};

use thiserror::Error;

/// File name of the bundled intro clip inside the assets directory
pub const INTRO_ASSET: &str = "intro.mp3";

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Audio file not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Playback error: {0}")]
    Playback(String),
}

/// A one-shot audio clip that can be started and stopped
pub trait IntroAudio {
    fn play(&mut self) -> Result<(), AudioError>;
    /// Stop playback. Stopping a clip that is not playing does nothing.
    fn stop(&mut self);
}

/// Locate a bundled asset by name
pub fn locate_asset(assets_dir: &Path, name: &str) -> Result<PathBuf, AudioError> {
    let path = assets_dir.join(name);
    if path.is_file() {
        Ok(path)
    } else {
        Err(AudioError::NotFound(path))
    }
}

/// Build the intro player for the bundled clip.
///
/// Returns `None` when audio is disabled or the clip cannot be found; the
/// splash then runs silently.
pub fn open_intro_audio(assets_dir: &Path, enabled: bool) -> Option<Box<dyn IntroAudio>> {
    if !enabled {
        return None;
    }

    let path = match locate_asset(assets_dir, INTRO_ASSET) {
        Ok(path) => path,
        Err(e) => {
            log::warn!("{}", e);
            return None;
        }
    };

    #[cfg(feature = "audio")]
    {
        Some(Box::new(rodio_player::RodioAudio::new(path)))
    }
    #[cfg(not(feature = "audio"))]
    {
        log::info!(
            "Built without the 'audio' feature, not playing {}",
            path.display()
        );
        None
    }
}

#[cfg(feature = "audio")]
mod rodio_player {
    use std::fs::File;
    use std::io::BufReader;
    use std::path::PathBuf;

    use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

    use super::{AudioError, IntroAudio};

    /// Plays an audio file on the default output device
    pub struct RodioAudio {
        path: PathBuf,
        // The stream must outlive the sink or playback stops
        stream: Option<OutputStream>,
        sink: Option<Sink>,
    }

    impl RodioAudio {
        pub fn new(path: PathBuf) -> Self {
            Self {
                path,
                stream: None,
                sink: None,
            }
        }
    }

    impl IntroAudio for RodioAudio {
        fn play(&mut self) -> Result<(), AudioError> {
            self.stop();

            let file = File::open(&self.path)?;
            let source = Decoder::new(BufReader::new(file))
                .map_err(|e| AudioError::Playback(e.to_string()))?;

            let mut stream = OutputStreamBuilder::open_default_stream()
                .map_err(|e| AudioError::Playback(e.to_string()))?;
            stream.log_on_drop(false);

            let sink = Sink::connect_new(stream.mixer());
            sink.append(source);

            self.stream = Some(stream);
            self.sink = Some(sink);
            Ok(())
        }

        fn stop(&mut self) {
            if let Some(sink) = self.sink.take() {
                sink.stop();
            }
            self.stream = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_locate_missing_asset() {
        let temp = TempDir::new().unwrap();
        let result = locate_asset(temp.path(), INTRO_ASSET);
        assert!(matches!(result, Err(AudioError::NotFound(_))));
    }

    #[test]
    fn test_locate_existing_asset() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(INTRO_ASSET), b"ID3").unwrap();
        let path = locate_asset(temp.path(), INTRO_ASSET).unwrap();
        assert_eq!(path, temp.path().join(INTRO_ASSET));
    }

    #[test]
    fn test_missing_asset_runs_silently() {
        let temp = TempDir::new().unwrap();
        assert!(open_intro_audio(temp.path(), true).is_none());
    }

    #[test]
    fn test_disabled_audio_is_silent() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(INTRO_ASSET), b"ID3").unwrap();
        assert!(open_intro_audio(temp.path(), false).is_none());
    }
}
