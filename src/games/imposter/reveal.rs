//! Reveal sequencer: passes the device around, one private card per player.
//!
//! The sequencer is a consuming cursor. `advance` from the last player
//! yields [`RevealStep::Done`], handing the untouched session onward.

use std::time::{Duration, Instant};

use tracing::{debug, info, instrument};

use super::session::Session;

/// Minimum hold before a card uncovers.
pub const REVEAL_HOLD: Duration = Duration::from_millis(500);

/// What a player is shown when their card is uncovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Secret<'a> {
    /// Regular players see the word.
    Word(&'a str),
    /// The imposter sees the clue, if the round has one.
    Clue(Option<&'a str>),
}

/// Which face of the card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardFace {
    /// Identity visible, secret hidden.
    #[default]
    Covered,
    /// Secret visible.
    Uncovered,
}

/// The card bound to the current cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealCard<'a> {
    /// Player holding the device.
    pub player: &'a str,
    /// 1-based position in the roster.
    pub ordinal: usize,
    /// Roster size.
    pub total: usize,
    /// Whether this player is the imposter.
    pub is_imposter: bool,
    /// Secret bound to this player.
    pub secret: Secret<'a>,
}

impl<'a> RevealCard<'a> {
    /// Returns the secret only when the card is uncovered.
    pub fn visible_secret(&self, face: CardFace) -> Option<Secret<'a>> {
        match face {
            CardFace::Covered => None,
            CardFace::Uncovered => Some(self.secret),
        }
    }
}

/// Hold-to-reveal gesture.
///
/// Uncovered only while pressed for at least [`REVEAL_HOLD`]; release
/// covers immediately. Instants are passed in so callers own the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoldToReveal {
    pressed_at: Option<Instant>,
}

impl HoldToReveal {
    /// Creates a released gesture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finger down.
    pub fn press(&mut self, at: Instant) {
        self.pressed_at.get_or_insert(at);
    }

    /// Finger up.
    pub fn release(&mut self) {
        self.pressed_at = None;
    }

    /// Face to show at `now`.
    pub fn face(&self, now: Instant) -> CardFace {
        match self.pressed_at {
            Some(at) if now.saturating_duration_since(at) >= REVEAL_HOLD => CardFace::Uncovered,
            _ => CardFace::Covered,
        }
    }
}

/// Cursor over the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSequencer {
    session: Session,
    current: usize,
}

/// Result of advancing the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealStep {
    /// Next player's turn.
    Showing(RevealSequencer),
    /// Everyone has seen their card.
    Done(Session),
}

impl RevealSequencer {
    /// Starts at the first player.
    #[instrument(skip_all, fields(players = session.players().len()))]
    pub fn new(session: Session) -> Self {
        info!("Reveal started");
        Self { session, current: 0 }
    }

    /// Current cursor index.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The session being revealed.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Card for the current player.
    pub fn current(&self) -> RevealCard<'_> {
        let players = self.session.players();
        let player = players[self.current].as_str();
        let is_imposter = self.session.is_imposter(player);
        let secret = if is_imposter {
            Secret::Clue(self.session.clue().as_deref())
        } else {
            Secret::Word(self.session.word())
        };
        RevealCard {
            player,
            ordinal: self.current + 1,
            total: players.len(),
            is_imposter,
            secret,
        }
    }

    /// Returns true when the current player is the last one.
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.session.players().len()
    }

    /// Acknowledges the current reveal and moves on.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn advance(self) -> RevealStep {
        if self.is_last() {
            info!("Reveal complete");
            RevealStep::Done(self.session)
        } else {
            debug!(next = self.current + 1, "Passing device to next player");
            RevealStep::Showing(Self {
                current: self.current + 1,
                ..self
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imposter_sees_clue() {
        let session = Session::fixture(&["A", "B", "C"], "A", "Owl", Some("Night"));
        let reveal = RevealSequencer::new(session);
        let card = reveal.current();
        assert_eq!(card.player, "A");
        assert!(card.is_imposter);
        assert_eq!(card.secret, Secret::Clue(Some("Night")));
        assert_eq!((card.ordinal, card.total), (1, 3));
    }

    #[test]
    fn test_covered_card_hides_secret() {
        let session = Session::fixture(&["A", "B", "C"], "A", "Owl", None);
        let reveal = match RevealSequencer::new(session).advance() {
            RevealStep::Showing(r) => r,
            RevealStep::Done(_) => panic!("three players"),
        };
        let card = reveal.current();
        assert_eq!(card.visible_secret(CardFace::Covered), None);
        assert_eq!(card.visible_secret(CardFace::Uncovered), Some(Secret::Word("Owl")));
    }

    #[test]
    fn test_hold_gesture() {
        let start = Instant::now();
        let mut hold = HoldToReveal::new();
        assert_eq!(hold.face(start), CardFace::Covered);
        hold.press(start);
        assert_eq!(hold.face(start + Duration::from_millis(499)), CardFace::Covered);
        assert_eq!(hold.face(start + REVEAL_HOLD), CardFace::Uncovered);
        // A second press while held does not restart the hold.
        hold.press(start + Duration::from_millis(400));
        assert_eq!(hold.face(start + Duration::from_millis(600)), CardFace::Uncovered);
        hold.release();
        assert_eq!(hold.face(start + Duration::from_secs(5)), CardFace::Covered);
    }
}
