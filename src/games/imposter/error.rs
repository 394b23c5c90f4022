//! Error taxonomy for the imposter engine.
//!
//! Every error here is a logic or input fault. None of them is retried:
//! configuration errors block the setup screen, validation errors reject
//! the operation, transport errors drop the round to a "no game data" state.

use derive_more::{Display, Error, From};

use super::catalog::Category;
use super::countdown::TimerPhase;

/// Minimum number of players in a round.
pub const MIN_PLAYERS: usize = 3;

/// Minimum number of custom topics when the Custom category is chosen.
pub const MIN_CUSTOM_TOPICS: usize = 3;

/// Configuration rejected at confirmation time, before any session exists.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigurationError {
    /// Fewer than [`MIN_PLAYERS`] players.
    #[display("At least {} players are required (got {})", MIN_PLAYERS, _0)]
    TooFewPlayers(#[error(not(source))] usize),

    /// A player name is empty after trimming.
    #[display("Player names cannot be blank")]
    BlankPlayerName,

    /// The same player name appears twice.
    #[display("Player '{}' was added twice", _0)]
    DuplicatePlayer(#[error(not(source))] String),

    /// No category selected and Custom not chosen.
    #[display("Select at least one category")]
    NoCategories,

    /// Custom was selected together with catalog categories.
    #[display("Custom cannot be combined with other categories")]
    MixedCustomCategory,

    /// Custom chosen with fewer than [`MIN_CUSTOM_TOPICS`] topics.
    #[display("At least {} custom topics are required (got {})", MIN_CUSTOM_TOPICS, _0)]
    TooFewCustomTopics(#[error(not(source))] usize),

    /// A custom topic is empty after trimming.
    #[display("Custom topics cannot be blank")]
    BlankCustomTopic,

    /// The same custom topic appears twice.
    #[display("Custom topic '{}' was added twice", _0)]
    DuplicateCustomTopic(#[error(not(source))] String),

    /// Discussion duration is zero.
    #[display("Discussion duration must be positive")]
    ZeroDuration,

    /// No catalog entry matches the selected categories.
    #[display("No words available for categories {:?}", _0)]
    EmptyWordPool(#[error(not(source))] Vec<Category>),

    /// A clock string could not be parsed as `m:ss`.
    #[display("Invalid clock '{}', expected m:ss", _0)]
    InvalidClock(#[error(not(source))] String),
}

/// An integration fault: input that references something outside the round.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ValidationError {
    /// The accused name is not on the roster.
    #[display("'{}' is not a player in this round", _0)]
    UnknownAccused(#[error(not(source))] String),
}

/// Failure to decode a session from its transport representation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum TransportError {
    /// Payload was not valid session JSON.
    #[display("Malformed session payload: {}", _0)]
    Malformed(#[error(not(source))] String),

    /// Payload decoded but violates session invariants.
    #[display("Inconsistent session payload: {}", _0)]
    Inconsistent(#[error(not(source))] String),
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// A timer control issued in a phase that does not accept it.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot {} the timer while {:?}", action, phase)]
pub struct TimerError {
    /// The attempted control (`start`, `pause`, ...).
    pub action: &'static str,
    /// Phase the timer was in.
    pub phase: TimerPhase,
}

/// A controller operation issued in the wrong round phase.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot {} during the {} phase", action, phase)]
pub struct PhaseError {
    /// The attempted operation.
    pub action: &'static str,
    /// Name of the phase the round was in.
    pub phase: &'static str,
}

/// Umbrella error for controller operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// See [`ConfigurationError`].
    #[display("{}", _0)]
    Configuration(ConfigurationError),
    /// See [`ValidationError`].
    #[display("{}", _0)]
    Validation(ValidationError),
    /// See [`TransportError`].
    #[display("{}", _0)]
    Transport(TransportError),
    /// See [`TimerError`].
    #[display("{}", _0)]
    Timer(TimerError),
    /// See [`PhaseError`].
    #[display("{}", _0)]
    Phase(PhaseError),
}
