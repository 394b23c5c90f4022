//! Imposter party game engine.
//!
//! Configuration → [`assign`] → [`RevealSequencer`] → [`DiscussionTimer`]
//! → [`resolve`], with [`reassign`] feeding a finished round back in.

mod assignment;
mod catalog;
mod config;
mod countdown;
mod discussion;
mod error;
pub mod invariants;
mod reveal;
mod session;
mod soundtrack;
mod ticker;
mod vote;

pub use assignment::{assign, reassign};
pub use catalog::{Category, WordCatalog, WordEntry};
pub use config::{SessionConfiguration, SetupDraft};
pub use countdown::{
    AudioCue, Countdown, DISCUSSION_PRESETS, TICK_MS, TimerPhase, TimerState, format_clock,
    parse_clock,
};
pub use discussion::DiscussionTimer;
pub use error::{
    ConfigurationError, GameError, MIN_CUSTOM_TOPICS, MIN_PLAYERS, PhaseError, TimerError,
    TransportError, ValidationError,
};
pub use reveal::{
    CardFace, HoldToReveal, REVEAL_HOLD, RevealCard, RevealSequencer, RevealStep, Secret,
};
pub use session::Session;
pub use soundtrack::{
    AudioError, RecordingSoundtrack, SOUNDTRACK_VOLUME, SilentSoundtrack, Soundtrack,
};
pub use ticker::Ticker;
pub use vote::{VoteOutcome, resolve};
