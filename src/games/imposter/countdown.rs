//! Pure discussion countdown.
//!
//! `NotStarted → Running ⇄ Paused → Expired`, with `skip` reaching
//! `Expired` from any non-terminal phase. No clocks or tasks live here;
//! the caller feeds [`Countdown::tick`] once per [`TICK_MS`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::error::{ConfigurationError, TimerError};

/// Tick cadence in milliseconds.
pub const TICK_MS: u64 = 1000;

/// Discussion length presets offered by the setup screen.
pub const DISCUSSION_PRESETS: [&str; 5] = ["1:00", "1:30", "2:00", "2:30", "3:00"];

/// Countdown phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum TimerPhase {
    /// Created, waiting for `start`.
    NotStarted,
    /// Counting down.
    Running,
    /// Frozen; remaining time preserved.
    Paused,
    /// Terminal.
    Expired,
}

/// Soundtrack command implied by a phase change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// Start or resume the loop.
    Play,
    /// Pause the loop.
    Pause,
    /// Stop the loop.
    Stop,
}

/// Observable timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Milliseconds left.
    pub remaining_ms: u64,
    /// Current phase.
    pub phase: TimerPhase,
}

/// Countdown state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    duration_ms: u64,
    state: TimerState,
}

impl Countdown {
    /// Creates a countdown that will run for `duration_ms` once started.
    #[instrument]
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            state: TimerState {
                remaining_ms: duration_ms,
                phase: TimerPhase::NotStarted,
            },
        }
    }

    /// Current state.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Current phase.
    pub fn phase(&self) -> TimerPhase {
        self.state.phase
    }

    /// Milliseconds left.
    pub fn remaining_ms(&self) -> u64 {
        self.state.remaining_ms
    }

    /// Configured duration.
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Returns true once expired.
    pub fn is_expired(&self) -> bool {
        self.state.phase == TimerPhase::Expired
    }

    /// `NotStarted → Running` with the full duration.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<AudioCue, TimerError> {
        self.require("start", TimerPhase::NotStarted)?;
        self.state = TimerState {
            remaining_ms: self.duration_ms,
            phase: TimerPhase::Running,
        };
        info!(remaining_ms = self.duration_ms, "Discussion timer started");
        Ok(AudioCue::Play)
    }

    /// `Running → Paused`.
    #[instrument(skip(self))]
    pub fn pause(&mut self) -> Result<AudioCue, TimerError> {
        self.require("pause", TimerPhase::Running)?;
        self.state.phase = TimerPhase::Paused;
        info!(remaining_ms = self.state.remaining_ms, "Discussion timer paused");
        Ok(AudioCue::Pause)
    }

    /// `Paused → Running`.
    #[instrument(skip(self))]
    pub fn resume(&mut self) -> Result<AudioCue, TimerError> {
        self.require("resume", TimerPhase::Paused)?;
        self.state.phase = TimerPhase::Running;
        info!(remaining_ms = self.state.remaining_ms, "Discussion timer resumed");
        Ok(AudioCue::Play)
    }

    /// Pauses when running, resumes when paused.
    #[instrument(skip(self))]
    pub fn toggle(&mut self) -> Result<AudioCue, TimerError> {
        match self.state.phase {
            TimerPhase::Running => self.pause(),
            TimerPhase::Paused => self.resume(),
            phase => Err(TimerError {
                action: "toggle",
                phase,
            }),
        }
    }

    /// Forces `Expired` from any non-terminal phase.
    #[instrument(skip(self))]
    pub fn skip(&mut self) -> Result<AudioCue, TimerError> {
        if self.is_expired() {
            return Err(TimerError {
                action: "skip",
                phase: TimerPhase::Expired,
            });
        }
        self.state = TimerState {
            remaining_ms: 0,
            phase: TimerPhase::Expired,
        };
        info!("Discussion timer skipped");
        Ok(AudioCue::Stop)
    }

    /// Applies one clock tick.
    ///
    /// Only a running countdown moves; ticks in any other phase are
    /// ignored. Returns [`AudioCue::Stop`] on the tick that expires it.
    #[instrument(skip(self))]
    pub fn tick(&mut self) -> Option<AudioCue> {
        if self.state.phase != TimerPhase::Running {
            debug!(phase = ?self.state.phase, "Ignoring tick");
            return None;
        }
        self.state.remaining_ms = self.state.remaining_ms.saturating_sub(TICK_MS);
        if self.state.remaining_ms == 0 {
            self.state.phase = TimerPhase::Expired;
            info!("Discussion timer expired");
            return Some(AudioCue::Stop);
        }
        None
    }

    fn require(&self, action: &'static str, expected: TimerPhase) -> Result<(), TimerError> {
        if self.state.phase == expected {
            Ok(())
        } else {
            Err(TimerError {
                action,
                phase: self.state.phase,
            })
        }
    }
}

/// Parses an `m:ss` clock string into milliseconds.
#[instrument]
pub fn parse_clock(clock: &str) -> Result<u64, ConfigurationError> {
    let invalid = || ConfigurationError::InvalidClock(clock.to_string());
    let (minutes, seconds) = clock.trim().split_once(':').ok_or_else(invalid)?;
    let minutes: u64 = minutes.parse().map_err(|_| invalid())?;
    let seconds: u64 = seconds.parse().map_err(|_| invalid())?;
    if seconds >= 60 {
        return Err(invalid());
    }
    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .and_then(|s| s.checked_mul(1000))
        .ok_or_else(invalid)
}

/// Formats milliseconds as `m:ss`, rounding down to whole seconds.
pub fn format_clock(ms: u64) -> String {
    let total_seconds = ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
