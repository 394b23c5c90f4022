//! Vote resolver: one accusation decides the round.

use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::error::ValidationError;
use super::session::Session;

/// Outcome of the single accusation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct VoteOutcome {
    /// Player the group accused.
    pub accused: String,
    /// The actual imposter.
    pub imposter: String,
    /// True when the accused is the imposter.
    pub players_win: bool,
}

impl std::fmt::Display for VoteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.players_win {
            write!(f, "Players win: {} was the imposter", self.imposter)
        } else {
            write!(
                f,
                "Imposter wins: {} was innocent, {} was the imposter",
                self.accused, self.imposter
            )
        }
    }
}

/// Resolves an accusation against the hidden imposter.
///
/// # Errors
///
/// [`ValidationError::UnknownAccused`] when `accused` is not on the roster.
#[instrument(skip(session))]
pub fn resolve(session: &Session, accused: &str) -> Result<VoteOutcome, ValidationError> {
    if !session.has_player(accused) {
        warn!(accused, "Accusation names a non-player");
        return Err(ValidationError::UnknownAccused(accused.to_string()));
    }
    let players_win = session.is_imposter(accused);
    info!(players_win, "Vote resolved");
    Ok(VoteOutcome::new(
        accused.to_string(),
        session.imposter().clone(),
        players_win,
    ))
}
