//! Imposter game library - pass-the-device party game engine
//!
//! One device is handed around a group. Every player privately sees a
//! secret word, except one randomly chosen imposter who sees only an
//! optional clue. After a timed discussion the group accuses one player.
//!
//! # Architecture
//!
//! - **Engine**: configuration, assignment, reveal, countdown and vote
//!   resolution as plain synchronous types
//! - **Discussion**: the countdown bound to a tokio tick task and music
//! - **Controller**: one explicit phase state machine owning the round
//! - **Config**: TOML defaults and catalog extensions
//!
//! # Example
//!
//! ```no_run
//! use imposter_game::{Category, RoundController, SessionConfiguration, WordCatalog};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = SessionConfiguration::new(
//!     [Category::Animals].into_iter().collect(),
//!     Vec::new(),
//!     vec!["Ann".into(), "Bo".into(), "Cy".into()],
//!     true,
//!     90_000,
//! )?;
//! let mut controller = RoundController::new(WordCatalog::builtin(), rand::rng());
//! controller.start_round(&config)?;
//! let card = controller.current_card()?;
//! println!("Pass the device to {}", card.player);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod app_config;
mod controller;
mod games;

// Crate-level exports - Application configuration
pub use app_config::{AppConfig, AppConfigError};

// Crate-level exports - Round controller
pub use controller::{PhaseEntry, RoundController, RoundPhase, SoundtrackFactory};

// Crate-level exports - Invariants
pub use games::imposter::invariants;

// Crate-level exports - Game engine
pub use games::imposter::{
    AudioCue, AudioError, CardFace, Category, ConfigurationError, Countdown, DISCUSSION_PRESETS,
    DiscussionTimer, GameError, HoldToReveal, MIN_CUSTOM_TOPICS, MIN_PLAYERS, PhaseError,
    REVEAL_HOLD, RecordingSoundtrack, RevealCard, RevealSequencer, RevealStep, SOUNDTRACK_VOLUME,
    Secret, Session, SessionConfiguration, SetupDraft, SilentSoundtrack, Soundtrack, TICK_MS,
    Ticker, TimerError, TimerPhase, TimerState, TransportError, ValidationError, VoteOutcome,
    WordCatalog, WordEntry, assign, format_clock, parse_clock, reassign, resolve,
};
