//! Word-source and clue invariants.

use super::Invariant;
use crate::games::imposter::Session;

/// Invariant: a clue is present only when clues are enabled and the word
/// came from the catalog.
pub struct ClueRequiresPolicy;

impl Invariant<Session> for ClueRequiresPolicy {
    fn holds(session: &Session) -> bool {
        session.clue().is_none() || (*session.clue_enabled() && !session.uses_custom_topics())
    }

    fn description() -> &'static str {
        "Clue present only with clue policy on and a catalog word"
    }
}

/// Invariant: a custom-topic round draws its word from the topics and
/// never has clues enabled.
pub struct CustomWordFromTopics;

impl Invariant<Session> for CustomWordFromTopics {
    fn holds(session: &Session) -> bool {
        match session.custom_topics() {
            Some(topics) if !topics.is_empty() => {
                !*session.clue_enabled() && topics.iter().any(|t| t == session.word())
            }
            _ => true,
        }
    }

    fn description() -> &'static str {
        "Custom-topic word is one of the topics and clues are off"
    }
}
