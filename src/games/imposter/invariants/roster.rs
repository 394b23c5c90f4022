//! Roster invariants: who is playing and who the imposter is.

use std::collections::HashSet;

use super::Invariant;
use crate::games::imposter::Session;
use crate::games::imposter::error::MIN_PLAYERS;

/// Invariant: at least three players, no blank or repeated names.
pub struct RosterUnique;

impl Invariant<Session> for RosterUnique {
    fn holds(session: &Session) -> bool {
        let players = session.players();
        let mut seen = HashSet::new();
        players.len() >= MIN_PLAYERS
            && players
                .iter()
                .all(|p| !p.trim().is_empty() && seen.insert(p.as_str()))
    }

    fn description() -> &'static str {
        "Roster has at least three unique, non-blank players"
    }
}

/// Invariant: the imposter is exactly one roster member.
pub struct ImposterOnRoster;

impl Invariant<Session> for ImposterOnRoster {
    fn holds(session: &Session) -> bool {
        session.has_player(session.imposter())
    }

    fn description() -> &'static str {
        "Imposter is a member of the roster"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_roster_violates() {
        let session = Session::fixture(&["A", "B"], "A", "Owl", None);
        assert!(!RosterUnique::holds(&session));
    }

    #[test]
    fn test_duplicate_roster_violates() {
        let session = Session::fixture(&["A", "B", "A"], "A", "Owl", None);
        assert!(!RosterUnique::holds(&session));
    }

    #[test]
    fn test_outsider_imposter_violates() {
        let session = Session::fixture(&["A", "B", "C"], "D", "Owl", None);
        assert!(!ImposterOnRoster::holds(&session));
        let session = Session::fixture(&["A", "B", "C"], "C", "Owl", None);
        assert!(ImposterOnRoster::holds(&session));
    }
}
