//! Background music collaborator for the discussion phase.
//!
//! The engine only issues commands; failures are logged by the caller and
//! never affect the countdown.

use std::sync::{Arc, Mutex};

use derive_more::{Display, Error};
use tracing::{debug, instrument};

use super::countdown::AudioCue;

/// Fixed playback volume for the discussion loop.
pub const SOUNDTRACK_VOLUME: f32 = 0.3;

/// Audio backend failure.
#[derive(Debug, Clone, Display, Error)]
#[display("Audio error: {} at {}:{}", message, file, line)]
pub struct AudioError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AudioError {
    /// Creates a new audio error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Looping background track driven by the discussion timer.
pub trait Soundtrack: std::fmt::Debug + Send {
    /// Start or resume looping playback at [`SOUNDTRACK_VOLUME`].
    fn play(&mut self) -> Result<(), AudioError>;
    /// Pause playback, keeping position.
    fn pause(&mut self) -> Result<(), AudioError>;
    /// Stop playback.
    fn stop(&mut self) -> Result<(), AudioError>;

    /// Dispatches a cue to the matching command.
    fn apply(&mut self, cue: AudioCue) -> Result<(), AudioError> {
        match cue {
            AudioCue::Play => self.play(),
            AudioCue::Pause => self.pause(),
            AudioCue::Stop => self.stop(),
        }
    }
}

/// Soundtrack that plays nothing and only traces commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSoundtrack;

impl Soundtrack for SilentSoundtrack {
    fn play(&mut self) -> Result<(), AudioError> {
        debug!(volume = SOUNDTRACK_VOLUME, looping = true, "Soundtrack play");
        Ok(())
    }

    fn pause(&mut self) -> Result<(), AudioError> {
        debug!("Soundtrack pause");
        Ok(())
    }

    fn stop(&mut self) -> Result<(), AudioError> {
        debug!("Soundtrack stop");
        Ok(())
    }
}

/// Soundtrack that records every command into a shared log.
///
/// Clones share the log, so a frontend (or a test) can keep one handle
/// while the timer owns the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingSoundtrack {
    cues: Arc<Mutex<Vec<AudioCue>>>,
    fail: bool,
}

impl RecordingSoundtrack {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder whose commands are recorded and then fail.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Commands received so far.
    pub fn cues(&self) -> Vec<AudioCue> {
        self.cues.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, cue: AudioCue) -> Result<(), AudioError> {
        if let Ok(mut cues) = self.cues.lock() {
            cues.push(cue);
        }
        if self.fail {
            Err(AudioError::new(format!("{cue:?} failed")))
        } else {
            Ok(())
        }
    }
}

impl Soundtrack for RecordingSoundtrack {
    fn play(&mut self) -> Result<(), AudioError> {
        self.record(AudioCue::Play)
    }

    fn pause(&mut self) -> Result<(), AudioError> {
        self.record(AudioCue::Pause)
    }

    fn stop(&mut self) -> Result<(), AudioError> {
        self.record(AudioCue::Stop)
    }
}
