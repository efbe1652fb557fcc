//! Splash screen timing
//!
//! The splash shows for a fixed time, then hands over to the login screen.
//! The UI loop polls [`Splash::poll`] instead of scheduling a callback, so
//! a splash that has already been dropped can never trigger a transition.

pub mod audio;

use std::time::{Duration, Instant};

pub use audio::{locate_asset, open_intro_audio, AudioError, IntroAudio, INTRO_ASSET};

/// How long the splash stays up
pub const SPLASH_DURATION: Duration = Duration::from_secs(3);

/// Logo scale at the start and end of the intro animation
pub const START_SCALE: f32 = 0.7;
pub const END_SCALE: f32 = 0.9;
pub const SCALE_DURATION: Duration = Duration::from_millis(700);

pub struct Splash {
    started: Instant,
    duration: Duration,
    audio: Option<Box<dyn IntroAudio>>,
    finished: bool,
}

impl Splash {
    /// Show the splash and start the intro clip
    pub fn start(duration: Duration, audio: Option<Box<dyn IntroAudio>>) -> Self {
        Self::start_at(Instant::now(), duration, audio)
    }

    pub fn start_at(now: Instant, duration: Duration, audio: Option<Box<dyn IntroAudio>>) -> Self {
        let audio = audio.and_then(|mut clip| match clip.play() {
            Ok(()) => Some(clip),
            Err(e) => {
                log::warn!("Error playing intro audio: {}", e);
                None
            }
        });

        Self {
            started: now,
            duration,
            audio,
            finished: false,
        }
    }

    /// Check the timer. Returns `true` exactly once, when the splash is over.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.finished || now.saturating_duration_since(self.started) < self.duration {
            return false;
        }
        self.finish();
        true
    }

    /// End the splash early. Returns `false` if it had already ended.
    pub fn skip(&mut self) -> bool {
        if self.finished {
            return false;
        }
        log::debug!("Splash skipped");
        self.finish();
        true
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_playing(&self) -> bool {
        self.audio.is_some()
    }

    /// Logo scale for the intro animation (ease-in)
    pub fn scale(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        let t = (elapsed.as_secs_f32() / SCALE_DURATION.as_secs_f32()).min(1.0);
        START_SCALE + (END_SCALE - START_SCALE) * t * t
    }

    fn finish(&mut self) {
        self.finished = true;
        self.stop_audio();
    }

    fn stop_audio(&mut self) {
        if let Some(mut clip) = self.audio.take() {
            clip.stop();
        }
    }
}

impl Drop for Splash {
    fn drop(&mut self) {
        self.stop_audio();
    }
}
