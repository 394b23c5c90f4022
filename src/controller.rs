//! Round controller: the single owner of the live round.
//!
//! The round is one explicit state machine ([`RoundPhase`]). Frontends
//! render whatever phase is current and call back into the controller;
//! navigation is never the source of truth.

use derive_getters::Getters;
use rand::Rng;
use tracing::{debug, info, instrument, warn};

use crate::games::imposter::{
    DiscussionTimer, GameError, PhaseError, RevealCard, RevealSequencer, RevealStep, Session,
    SessionConfiguration, SilentSoundtrack, Soundtrack, TimerState, VoteOutcome, WordCatalog,
    assign, reassign, resolve,
};

/// Builds a fresh soundtrack for each discussion phase.
pub type SoundtrackFactory = Box<dyn Fn() -> Box<dyn Soundtrack> + Send>;

/// Phase of the live round.
#[derive(Debug, strum::IntoStaticStr)]
pub enum RoundPhase {
    /// No round; waiting for a confirmed configuration.
    Setup,
    /// Passing the device for private reveals.
    Reveal(RevealSequencer),
    /// Open discussion under the countdown.
    Discussion {
        /// The round.
        session: Session,
        /// Countdown, tick task and music.
        timer: DiscussionTimer,
    },
    /// Waiting for the single accusation.
    Voting(Session),
    /// Round resolved.
    Results {
        /// The round.
        session: Session,
        /// How the vote went.
        outcome: VoteOutcome,
    },
    /// A phase-boundary payload could not be decoded; only setup is reachable.
    NoGameData,
}

impl RoundPhase {
    /// Phase name for messages.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// The round's session, if there is one.
    pub fn session(&self) -> Option<&Session> {
        match self {
            RoundPhase::Reveal(reveal) => Some(reveal.session()),
            RoundPhase::Discussion { session, .. }
            | RoundPhase::Voting(session)
            | RoundPhase::Results { session, .. } => Some(session),
            RoundPhase::Setup | RoundPhase::NoGameData => None,
        }
    }
}

/// Phase a transported session re-enters at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum PhaseEntry {
    /// Start of the reveal pass.
    Reveal,
    /// Discussion, timer not started.
    Discussion,
    /// Voting.
    Voting,
}

/// Drives one round at a time.
#[derive(Getters)]
pub struct RoundController<R> {
    catalog: WordCatalog,
    #[getter(skip)]
    rng: R,
    #[getter(skip)]
    soundtrack: SoundtrackFactory,
    phase: RoundPhase,
}

impl<R> std::fmt::Debug for RoundController<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundController")
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl<R: Rng> RoundController<R> {
    /// Creates a controller in [`RoundPhase::Setup`] with silent music.
    #[instrument(skip_all)]
    pub fn new(catalog: WordCatalog, rng: R) -> Self {
        info!("Creating RoundController");
        Self {
            catalog,
            rng,
            soundtrack: Box::new(|| Box::new(SilentSoundtrack)),
            phase: RoundPhase::Setup,
        }
    }

    /// Replaces the soundtrack used by later discussion phases.
    pub fn with_soundtrack(mut self, soundtrack: SoundtrackFactory) -> Self {
        self.soundtrack = soundtrack;
        self
    }

    /// The round's session, if there is one.
    pub fn session(&self) -> Option<&Session> {
        self.phase.session()
    }

    /// Deals a round from a confirmed configuration.
    #[instrument(skip_all)]
    pub fn start_round(&mut self, config: &SessionConfiguration) -> Result<&RoundPhase, GameError> {
        self.require("start a round", |p| matches!(p, RoundPhase::Setup))?;
        config.check_word_pool(&self.catalog)?;
        let session = assign(config, &self.catalog, &mut self.rng)?;
        info!(players = session.players().len(), "Round dealt");
        self.phase = RoundPhase::Reveal(RevealSequencer::new(session));
        Ok(&self.phase)
    }

    /// Card for the player currently holding the device.
    pub fn current_card(&self) -> Result<RevealCard<'_>, PhaseError> {
        match &self.phase {
            RoundPhase::Reveal(reveal) => Ok(reveal.current()),
            other => Err(PhaseError {
                action: "show a card",
                phase: other.name(),
            }),
        }
    }

    /// Acknowledges the current reveal; after the last player the round
    /// moves to discussion.
    #[instrument(skip(self))]
    pub fn advance_reveal(&mut self) -> Result<&RoundPhase, GameError> {
        match self.take_phase() {
            RoundPhase::Reveal(reveal) => {
                self.phase = match reveal.advance() {
                    RevealStep::Showing(next) => RoundPhase::Reveal(next),
                    RevealStep::Done(session) => self.discussion(session),
                };
                Ok(&self.phase)
            }
            other => Err(self.restore(other, "advance the reveal")),
        }
    }

    /// Starts the discussion countdown.
    #[instrument(skip(self))]
    pub fn start_timer(&mut self) -> Result<TimerState, GameError> {
        Ok(self.timer_mut("start the timer")?.start()?)
    }

    /// Pauses the countdown.
    #[instrument(skip(self))]
    pub fn pause_timer(&mut self) -> Result<TimerState, GameError> {
        Ok(self.timer_mut("pause the timer")?.pause()?)
    }

    /// Resumes the countdown.
    #[instrument(skip(self))]
    pub fn resume_timer(&mut self) -> Result<TimerState, GameError> {
        Ok(self.timer_mut("resume the timer")?.resume()?)
    }

    /// Pauses or resumes the countdown.
    #[instrument(skip(self))]
    pub fn toggle_timer(&mut self) -> Result<TimerState, GameError> {
        Ok(self.timer_mut("toggle the timer")?.toggle()?)
    }

    /// Ends the discussion immediately.
    #[instrument(skip(self))]
    pub fn skip_timer(&mut self) -> Result<TimerState, GameError> {
        Ok(self.timer_mut("skip the timer")?.skip()?)
    }

    /// Current countdown state, if discussing.
    pub fn timer_state(&self) -> Option<TimerState> {
        match &self.phase {
            RoundPhase::Discussion { timer, .. } => Some(timer.state()),
            _ => None,
        }
    }

    /// Waits for the next scheduled tick and applies it.
    ///
    /// Returns `None` immediately unless the countdown is running.
    pub async fn next_tick(&mut self) -> Option<TimerState> {
        match &mut self.phase {
            RoundPhase::Discussion { timer, .. } => timer.next_tick().await,
            _ => None,
        }
    }

    /// Moves from an expired discussion to voting.
    #[instrument(skip(self))]
    pub fn proceed_to_vote(&mut self) -> Result<&RoundPhase, GameError> {
        match self.take_phase() {
            RoundPhase::Discussion { session, timer } if timer.is_expired() => {
                drop(timer);
                info!("Discussion over, voting open");
                self.phase = RoundPhase::Voting(session);
                Ok(&self.phase)
            }
            other => Err(self.restore(other, "open voting")),
        }
    }

    /// Records the group's accusation and resolves the round.
    #[instrument(skip(self))]
    pub fn accuse(&mut self, accused: &str) -> Result<VoteOutcome, GameError> {
        match self.take_phase() {
            RoundPhase::Voting(session) => match resolve(&session, accused) {
                Ok(outcome) => {
                    self.phase = RoundPhase::Results {
                        session,
                        outcome: outcome.clone(),
                    };
                    Ok(outcome)
                }
                Err(e) => {
                    self.phase = RoundPhase::Voting(session);
                    Err(e.into())
                }
            },
            other => Err(self.restore(other, "accuse a player")),
        }
    }

    /// Deals the next round from the finished one.
    #[instrument(skip(self))]
    pub fn play_again(&mut self) -> Result<&RoundPhase, GameError> {
        match self.take_phase() {
            RoundPhase::Results { session, outcome } => {
                match reassign(&session, &self.catalog, &mut self.rng) {
                    Ok(next) => {
                        info!("Playing again");
                        self.phase = RoundPhase::Reveal(RevealSequencer::new(next));
                        Ok(&self.phase)
                    }
                    Err(e) => {
                        self.phase = RoundPhase::Results { session, outcome };
                        Err(e.into())
                    }
                }
            }
            other => Err(self.restore(other, "play again")),
        }
    }

    /// Ends the round from any phase and returns to setup.
    ///
    /// The tick task and music are stopped before the round state is
    /// released.
    #[instrument(skip(self))]
    pub fn abandon(&mut self) {
        let previous = self.take_phase();
        if let RoundPhase::Discussion { mut timer, .. } = previous {
            timer.abandon();
        }
        info!("Round abandoned");
    }

    /// Re-enters a round from a session payload serialized at a phase
    /// boundary. Any live round is abandoned first.
    ///
    /// A payload that does not decode leaves the controller in
    /// [`RoundPhase::NoGameData`].
    #[instrument(skip(self, payload))]
    pub fn load_transport(
        &mut self,
        payload: &str,
        entry: PhaseEntry,
    ) -> Result<&RoundPhase, GameError> {
        self.abandon();
        let session = match Session::from_transport(payload) {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "No game data");
                self.phase = RoundPhase::NoGameData;
                return Err(e.into());
            }
        };
        self.phase = match entry {
            PhaseEntry::Reveal => RoundPhase::Reveal(RevealSequencer::new(session)),
            PhaseEntry::Discussion => self.discussion(session),
            PhaseEntry::Voting => RoundPhase::Voting(session),
        };
        Ok(&self.phase)
    }

    fn discussion(&self, session: Session) -> RoundPhase {
        let timer = DiscussionTimer::new(*session.discussion_duration_ms(), (self.soundtrack)());
        info!("Reveal finished, discussion ready");
        RoundPhase::Discussion { session, timer }
    }

    fn timer_mut(&mut self, action: &'static str) -> Result<&mut DiscussionTimer, PhaseError> {
        match &mut self.phase {
            RoundPhase::Discussion { timer, .. } => Ok(timer),
            other => Err(PhaseError {
                action,
                phase: other.name(),
            }),
        }
    }

    fn require(
        &self,
        action: &'static str,
        allowed: impl Fn(&RoundPhase) -> bool,
    ) -> Result<(), PhaseError> {
        if allowed(&self.phase) {
            Ok(())
        } else {
            warn!(action, phase = self.phase.name(), "Operation not allowed in phase");
            Err(PhaseError {
                action,
                phase: self.phase.name(),
            })
        }
    }

    fn take_phase(&mut self) -> RoundPhase {
        std::mem::replace(&mut self.phase, RoundPhase::Setup)
    }

    fn restore(&mut self, phase: RoundPhase, action: &'static str) -> GameError {
        let name = phase.name();
        debug!(action, phase = name, "Rejected operation, phase restored");
        self.phase = phase;
        PhaseError { action, phase: name }.into()
    }
}
