//! Tests for the pass-the-device reveal sequence.

use std::collections::BTreeSet;

use imposter_game::{
    Category, RevealSequencer, RevealStep, Secret, SessionConfiguration, WordCatalog, assign,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn dealt(players: &[&str], seed: u64) -> imposter_game::Session {
    let config = SessionConfiguration::new(
        BTreeSet::from([Category::Places]),
        Vec::new(),
        players.iter().map(|p| p.to_string()).collect(),
        true,
        60_000,
    )
    .unwrap();
    assign(&config, &WordCatalog::builtin(), &mut ChaCha8Rng::seed_from_u64(seed)).unwrap()
}

#[test]
fn test_one_card_per_player_then_done() {
    let session = dealt(&["Ann", "Bo", "Cy", "Di", "Ed"], 9);
    let mut reveal = RevealSequencer::new(session.clone());
    let mut seen = Vec::new();
    let mut imposters = 0;

    let finished = loop {
        let card = reveal.current();
        assert_eq!(card.ordinal, seen.len() + 1);
        assert_eq!(card.total, 5);
        seen.push(card.player.to_string());
        match card.secret {
            Secret::Word(word) => {
                assert!(!card.is_imposter);
                assert_eq!(word, session.word());
            }
            Secret::Clue(clue) => {
                assert!(card.is_imposter);
                assert_eq!(clue, session.clue().as_deref());
                imposters += 1;
            }
        }
        reveal = match reveal.advance() {
            RevealStep::Showing(next) => next,
            RevealStep::Done(session) => break session,
        };
    };

    assert_eq!(&seen, session.players());
    assert_eq!(imposters, 1);
    assert_eq!(finished, session);
}

#[test]
fn test_last_player_flag() {
    let session = dealt(&["A", "B", "C"], 1);
    let reveal = RevealSequencer::new(session);
    assert!(!reveal.is_last());
    let RevealStep::Showing(reveal) = reveal.advance() else {
        panic!("Second player should be showing");
    };
    let RevealStep::Showing(reveal) = reveal.advance() else {
        panic!("Third player should be showing");
    };
    assert!(reveal.is_last());
    assert_eq!(reveal.current_index(), 2);
    assert!(matches!(reveal.advance(), RevealStep::Done(_)));
}
