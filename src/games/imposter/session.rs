//! The dealt round ("final game payload").

use std::collections::BTreeSet;

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::catalog::Category;
use super::error::TransportError;
use super::invariants::{InvariantSet, SessionInvariants};

/// A dealt round: roster, secret word, optional clue and the imposter.
///
/// Immutable once dealt. Passed by value between phases; the transport
/// form is camelCase JSON. Every decode runs [`SessionInvariants`], so a
/// deserialized session is as sound as a dealt one.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SessionWire")]
pub struct Session {
    /// Roster in reveal order.
    players: Vec<String>,
    /// Categories the word was drawn from.
    categories: BTreeSet<Category>,
    /// Custom topics, when the round uses them.
    custom_topics: Option<Vec<String>>,
    /// Secret word.
    word: String,
    /// Clue shown to the imposter, if any.
    clue: Option<String>,
    /// The imposter (an element of `players`).
    imposter: String,
    /// Discussion length in milliseconds.
    discussion_duration_ms: u64,
    /// Clue policy of the round, kept so "play again" preserves it.
    clue_enabled: bool,
}

impl Session {
    /// Builds a session from already-validated parts.
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        players: Vec<String>,
        categories: BTreeSet<Category>,
        custom_topics: Option<Vec<String>>,
        word: String,
        clue: Option<String>,
        imposter: String,
        discussion_duration_ms: u64,
        clue_enabled: bool,
    ) -> Self {
        Self {
            players,
            categories,
            custom_topics,
            word,
            clue,
            imposter,
            discussion_duration_ms,
            clue_enabled,
        }
    }

    /// Returns true if `name` is the imposter.
    pub fn is_imposter(&self, name: &str) -> bool {
        self.imposter == name
    }

    /// Returns true if `name` is on the roster.
    pub fn has_player(&self, name: &str) -> bool {
        self.players.iter().any(|p| p == name)
    }

    /// Returns true when the word came from custom topics.
    pub fn uses_custom_topics(&self) -> bool {
        self.custom_topics.as_ref().is_some_and(|t| !t.is_empty())
    }

    /// Encodes the session for a phase boundary.
    #[instrument(skip(self))]
    pub fn to_transport(&self) -> Result<String, TransportError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a session and checks its invariants.
    #[instrument(skip(payload), fields(len = payload.len()))]
    pub fn from_transport(payload: &str) -> Result<Self, TransportError> {
        let wire: SessionWire = serde_json::from_str(payload).map_err(|e| {
            warn!(error = %e, "Session payload failed to parse");
            TransportError::from(e)
        })?;
        let session = Self::try_from(wire)?;
        debug!(players = session.players.len(), "Session decoded");
        Ok(session)
    }
}

/// Unchecked decode target; only reaches callers through `TryFrom`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionWire {
    players: Vec<String>,
    categories: BTreeSet<Category>,
    custom_topics: Option<Vec<String>>,
    word: String,
    clue: Option<String>,
    imposter: String,
    discussion_duration_ms: u64,
    clue_enabled: bool,
}

impl TryFrom<SessionWire> for Session {
    type Error = TransportError;

    fn try_from(wire: SessionWire) -> Result<Self, Self::Error> {
        let session = Self::new(
            wire.players,
            wire.categories,
            wire.custom_topics,
            wire.word,
            wire.clue,
            wire.imposter,
            wire.discussion_duration_ms,
            wire.clue_enabled,
        );
        SessionInvariants::check_all(&session).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Session payload violates invariants");
            TransportError::Inconsistent(descriptions)
        })?;
        Ok(session)
    }
}

#[cfg(test)]
impl Session {
    /// Test helper: a session with arbitrary fields, bypassing assignment.
    pub(crate) fn fixture(players: &[&str], imposter: &str, word: &str, clue: Option<&str>) -> Self {
        Self::new(
            players.iter().map(|p| p.to_string()).collect(),
            BTreeSet::from([Category::Animals]),
            None,
            word.to_string(),
            clue.map(str::to_string),
            imposter.to_string(),
            60_000,
            clue.is_some(),
        )
    }
}
