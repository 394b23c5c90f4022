//! Discussion timer: countdown, tick task and soundtrack under one owner.
//!
//! The tick task exists only while the countdown is `Running`. Every
//! transition out of `Running` releases it, and dropping the timer
//! releases it and stops the soundtrack, so no exit path can leave a
//! countdown or music running behind a finished round.

use std::time::Duration;

use tracing::{instrument, warn};

use super::countdown::{AudioCue, Countdown, TICK_MS, TimerPhase, TimerState};
use super::error::TimerError;
use super::soundtrack::Soundtrack;
use super::ticker::Ticker;

/// Playback status as last commanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Playback {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Discussion phase timer.
#[derive(Debug)]
pub struct DiscussionTimer {
    countdown: Countdown,
    ticker: Option<Ticker>,
    soundtrack: Box<dyn Soundtrack>,
    playback: Playback,
}

impl DiscussionTimer {
    /// Creates a timer for `duration_ms`, not yet started.
    #[instrument(skip(soundtrack))]
    pub fn new(duration_ms: u64, soundtrack: Box<dyn Soundtrack>) -> Self {
        Self {
            countdown: Countdown::new(duration_ms),
            ticker: None,
            soundtrack,
            playback: Playback::Stopped,
        }
    }

    /// Current state.
    pub fn state(&self) -> TimerState {
        self.countdown.state()
    }

    /// Current phase.
    pub fn phase(&self) -> TimerPhase {
        self.countdown.phase()
    }

    /// Returns true once expired.
    pub fn is_expired(&self) -> bool {
        self.countdown.is_expired()
    }

    /// Returns true while a tick task is live.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Starts the countdown, the tick task and the music.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<TimerState, TimerError> {
        let cue = self.countdown.start()?;
        self.ticker = Some(Ticker::spawn(Duration::from_millis(TICK_MS)));
        self.cue(cue);
        Ok(self.state())
    }

    /// Pauses; the tick task is released.
    #[instrument(skip(self))]
    pub fn pause(&mut self) -> Result<TimerState, TimerError> {
        let cue = self.countdown.pause()?;
        self.ticker = None;
        self.cue(cue);
        Ok(self.state())
    }

    /// Resumes with a fresh tick task.
    #[instrument(skip(self))]
    pub fn resume(&mut self) -> Result<TimerState, TimerError> {
        let cue = self.countdown.resume()?;
        self.ticker = Some(Ticker::spawn(Duration::from_millis(TICK_MS)));
        self.cue(cue);
        Ok(self.state())
    }

    /// Pauses when running, resumes when paused.
    #[instrument(skip(self))]
    pub fn toggle(&mut self) -> Result<TimerState, TimerError> {
        match self.phase() {
            TimerPhase::Running => self.pause(),
            TimerPhase::Paused => self.resume(),
            phase => Err(TimerError {
                action: "toggle",
                phase,
            }),
        }
    }

    /// Expires immediately.
    #[instrument(skip(self))]
    pub fn skip(&mut self) -> Result<TimerState, TimerError> {
        let cue = self.countdown.skip()?;
        self.ticker = None;
        self.cue(cue);
        Ok(self.state())
    }

    /// Applies one tick. Releases the tick task on expiry.
    #[instrument(skip(self))]
    pub fn tick(&mut self) -> TimerState {
        if let Some(cue) = self.countdown.tick() {
            self.ticker = None;
            self.cue(cue);
        }
        self.state()
    }

    /// Waits for the next scheduled tick and applies it.
    ///
    /// Returns `None` immediately when no tick task is live.
    pub async fn next_tick(&mut self) -> Option<TimerState> {
        let ticker = self.ticker.as_mut()?;
        ticker.next().await?;
        Some(self.tick())
    }

    /// Releases the tick task and stops the music without expiring.
    #[instrument(skip(self))]
    pub fn abandon(&mut self) {
        self.ticker = None;
        if self.playback != Playback::Stopped {
            self.cue(AudioCue::Stop);
        }
    }

    fn cue(&mut self, cue: AudioCue) {
        self.playback = match cue {
            AudioCue::Play => Playback::Playing,
            AudioCue::Pause => Playback::Paused,
            AudioCue::Stop => Playback::Stopped,
        };
        if let Err(e) = self.soundtrack.apply(cue) {
            warn!(error = %e, ?cue, "Soundtrack command failed");
        }
    }
}

impl Drop for DiscussionTimer {
    fn drop(&mut self) {
        self.abandon();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::imposter::RecordingSoundtrack;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_on_virtual_time() {
        let audio = RecordingSoundtrack::new();
        let mut timer = DiscussionTimer::new(3000, Box::new(audio.clone()));
        timer.start().unwrap();
        assert!(timer.is_ticking());
        assert_eq!(timer.next_tick().await.unwrap().remaining_ms, 2000);
        assert_eq!(timer.next_tick().await.unwrap().remaining_ms, 1000);
        let last = timer.next_tick().await.unwrap();
        assert_eq!(last.phase, TimerPhase::Expired);
        assert!(!timer.is_ticking());
        assert_eq!(timer.next_tick().await, None);
        assert_eq!(audio.cues(), vec![AudioCue::Play, AudioCue::Stop]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_releases_ticker() {
        let audio = RecordingSoundtrack::new();
        let mut timer = DiscussionTimer::new(60_000, Box::new(audio.clone()));
        timer.start().unwrap();
        timer.pause().unwrap();
        assert!(!timer.is_ticking());
        tokio::time::advance(Duration::from_secs(10)).await;
        assert_eq!(timer.state().remaining_ms, 60_000);
        timer.resume().unwrap();
        assert!(timer.is_ticking());
        assert_eq!(audio.cues(), vec![AudioCue::Play, AudioCue::Pause, AudioCue::Play]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_before_start_names_toggle() {
        let audio = RecordingSoundtrack::new();
        let mut timer = DiscussionTimer::new(60_000, Box::new(audio.clone()));
        let err = timer.toggle().unwrap_err();
        assert_eq!(err.action, "toggle");
        assert_eq!(err.phase, TimerPhase::NotStarted);
        assert!(!timer.is_ticking());
        assert!(audio.cues().is_empty());

        timer.start().unwrap();
        assert_eq!(timer.toggle().unwrap().phase, TimerPhase::Paused);
        assert_eq!(timer.toggle().unwrap().phase, TimerPhase::Running);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_music() {
        let audio = RecordingSoundtrack::new();
        {
            let mut timer = DiscussionTimer::new(60_000, Box::new(audio.clone()));
            timer.start().unwrap();
        }
        assert_eq!(audio.cues(), vec![AudioCue::Play, AudioCue::Stop]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_audio_failure_does_not_stop_countdown() {
        let mut timer = DiscussionTimer::new(2000, Box::new(RecordingSoundtrack::failing()));
        timer.start().unwrap();
        assert_eq!(timer.phase(), TimerPhase::Running);
        timer.next_tick().await;
        assert_eq!(timer.next_tick().await.unwrap().phase, TimerPhase::Expired);
    }
}
