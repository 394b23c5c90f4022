//! Assignment engine: deals a [`Session`] from a configuration.
//!
//! Randomness is injected as any [`rand::Rng`], so tests pass a seeded
//! `ChaCha8Rng` and the terminal driver passes `rand::rng()`.

use std::collections::BTreeSet;

use rand::Rng;
use tracing::{debug, info, instrument};

use super::catalog::{Category, WordCatalog};
use super::config::SessionConfiguration;
use super::error::ConfigurationError;
use super::session::Session;

#[cfg(debug_assertions)]
use super::invariants::{InvariantSet, SessionInvariants};

/// Deals a fresh round from a confirmed configuration.
///
/// # Errors
///
/// [`ConfigurationError::EmptyWordPool`] when the configuration uses catalog
/// categories and none of them has an entry in `catalog`.
#[instrument(skip_all, fields(players = config.players().len()))]
pub fn assign<R: Rng + ?Sized>(
    config: &SessionConfiguration,
    catalog: &WordCatalog,
    rng: &mut R,
) -> Result<Session, ConfigurationError> {
    let topics = config
        .uses_custom_topics()
        .then(|| config.custom_topics().clone());
    deal(
        config.players().clone(),
        config.categories().clone(),
        topics,
        *config.clue_enabled(),
        *config.discussion_duration_ms(),
        catalog,
        rng,
    )
}

/// Deals the next round ("play again").
///
/// Roster, categories, custom topics, clue policy and duration carry over;
/// imposter and word are re-rolled independently, so the previous imposter
/// and word remain possible outcomes.
#[instrument(skip_all, fields(players = previous.players().len()))]
pub fn reassign<R: Rng + ?Sized>(
    previous: &Session,
    catalog: &WordCatalog,
    rng: &mut R,
) -> Result<Session, ConfigurationError> {
    info!("Re-dealing round");
    deal(
        previous.players().clone(),
        previous.categories().clone(),
        previous.custom_topics().clone(),
        *previous.clue_enabled(),
        *previous.discussion_duration_ms(),
        catalog,
        rng,
    )
}

fn deal<R: Rng + ?Sized>(
    players: Vec<String>,
    categories: BTreeSet<Category>,
    custom_topics: Option<Vec<String>>,
    clue_enabled: bool,
    discussion_duration_ms: u64,
    catalog: &WordCatalog,
    rng: &mut R,
) -> Result<Session, ConfigurationError> {
    let imposter = players[rng.random_range(0..players.len())].clone();

    let (word, clue, clue_enabled) = match custom_topics.as_deref() {
        Some(topics) if !topics.is_empty() => {
            let word = topics[rng.random_range(0..topics.len())].clone();
            (word, None, false)
        }
        _ => {
            let pool = catalog.words_in(&categories);
            if pool.is_empty() {
                return Err(ConfigurationError::EmptyWordPool(
                    categories.iter().copied().collect(),
                ));
            }
            let entry = pool[rng.random_range(0..pool.len())];
            let clue = if clue_enabled {
                entry.clue_text().map(str::to_string)
            } else {
                None
            };
            (entry.word.clone(), clue, clue_enabled)
        }
    };

    debug!(%imposter, %word, has_clue = clue.is_some(), "Round dealt");

    let session = Session::new(
        players,
        categories,
        custom_topics,
        word,
        clue,
        imposter,
        discussion_duration_ms,
        clue_enabled,
    );

    #[cfg(debug_assertions)]
    debug_assert!(
        SessionInvariants::check_all(&session).is_ok(),
        "Dealt session violates invariants"
    );

    Ok(session)
}
