//! Tests for dealing and re-dealing rounds.

use std::collections::{BTreeSet, HashSet};

use imposter_game::{
    Category, SessionConfiguration, WordCatalog, WordEntry, assign, reassign,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn players() -> Vec<String> {
    vec!["A".into(), "B".into(), "C".into()]
}

fn animals(clue: bool) -> SessionConfiguration {
    SessionConfiguration::new(
        BTreeSet::from([Category::Animals]),
        Vec::new(),
        players(),
        clue,
        60_000,
    )
    .unwrap()
}

#[test]
fn test_animals_round_uses_catalog_clue() {
    let catalog = WordCatalog::builtin();
    let config = animals(true);
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    for _ in 0..25 {
        let session = assign(&config, &catalog, &mut rng).unwrap();
        assert!(session.players().contains(session.imposter()));
        let entry = catalog.lookup(session.word()).expect("Word comes from the catalog");
        assert_eq!(entry.category, Category::Animals);
        assert_eq!(session.clue().as_deref(), entry.clue_text());
    }
}

#[test]
fn test_custom_topics_never_carry_clue() {
    let catalog = WordCatalog::builtin();
    let topics = vec!["Pizza".to_string(), "Tacos".into(), "Sushi".into()];
    let config = SessionConfiguration::new(
        BTreeSet::from([Category::Custom]),
        topics.clone(),
        players(),
        true,
        60_000,
    )
    .unwrap();
    assert!(!*config.clue_enabled());

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..25 {
        let session = assign(&config, &catalog, &mut rng).unwrap();
        assert!(topics.contains(session.word()));
        assert_eq!(session.clue(), &None);
        assert_eq!(session.custom_topics().as_ref(), Some(&topics));
    }
}

#[test]
fn test_every_player_and_word_reachable() {
    let catalog = WordCatalog::builtin();
    let config = animals(false);
    let pool = catalog.count_in(Category::Animals);

    let mut imposters = HashSet::new();
    let mut words = HashSet::new();
    for seed in 0..300 {
        let session = assign(&config, &catalog, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
        imposters.insert(session.imposter().clone());
        words.insert(session.word().clone());
    }
    assert_eq!(imposters.len(), 3);
    assert_eq!(words.len(), pool);
}

#[test]
fn test_reassign_keeps_roster_and_policy() {
    let catalog = WordCatalog::builtin();
    let config = SessionConfiguration::new(
        BTreeSet::from([Category::Animals, Category::Vehicles]),
        Vec::new(),
        vec!["Ann".into(), "Bo".into(), "Cy".into(), "Di".into()],
        true,
        90_000,
    )
    .unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let first = assign(&config, &catalog, &mut rng).unwrap();

    let mut imposters = HashSet::new();
    let mut previous = first.clone();
    for _ in 0..40 {
        let next = reassign(&previous, &catalog, &mut rng).unwrap();
        assert_eq!(next.players(), first.players());
        assert_eq!(next.categories(), first.categories());
        assert_eq!(next.discussion_duration_ms(), &90_000);
        assert!(*next.clue_enabled());
        assert!(next.clue().is_some());
        imposters.insert(next.imposter().clone());
        previous = next;
    }
    // The previous imposter is never excluded.
    assert_eq!(imposters.len(), 4);
}

#[test]
fn test_reassign_keeps_clue_off() {
    let catalog = WordCatalog::builtin();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let first = assign(&animals(false), &catalog, &mut rng).unwrap();
    let next = reassign(&first, &catalog, &mut rng).unwrap();
    assert!(!*next.clue_enabled());
    assert_eq!(next.clue(), &None);
}

#[test]
fn test_reassign_custom_round_stays_custom() {
    let catalog = WordCatalog::builtin();
    let topics = vec!["Pizza".to_string(), "Tacos".into(), "Sushi".into()];
    let config = SessionConfiguration::new(
        BTreeSet::from([Category::Custom]),
        topics.clone(),
        players(),
        false,
        60_000,
    )
    .unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let mut previous = assign(&config, &catalog, &mut rng).unwrap();

    for _ in 0..25 {
        let next = reassign(&previous, &catalog, &mut rng).unwrap();
        assert!(topics.contains(next.word()));
        assert_eq!(next.clue(), &None);
        assert!(!*next.clue_enabled());
        assert_eq!(next.custom_topics().as_ref(), Some(&topics));
        assert_eq!(next.categories(), &BTreeSet::from([Category::Custom]));
        previous = next;
    }
}

#[test]
fn test_reassign_after_clueless_word_keeps_clue_policy() {
    let catalog = WordCatalog::new(vec![
        WordEntry::new("Moon", "", Category::Places),
        WordEntry::new("Desert", "Sand", Category::Places),
    ]);
    let config = SessionConfiguration::new(
        BTreeSet::from([Category::Places]),
        Vec::new(),
        players(),
        true,
        60_000,
    )
    .unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    let mut previous = assign(&config, &catalog, &mut rng).unwrap();
    while previous.word() != "Moon" {
        previous = assign(&config, &catalog, &mut rng).unwrap();
    }
    assert_eq!(previous.clue(), &None);
    assert!(*previous.clue_enabled());

    let mut clues = Vec::new();
    for _ in 0..30 {
        let next = reassign(&previous, &catalog, &mut rng).unwrap();
        assert!(*next.clue_enabled());
        match next.word().as_str() {
            "Moon" => assert_eq!(next.clue(), &None),
            _ => clues.push(next.clue().clone()),
        }
        previous = next;
    }
    assert!(!clues.is_empty());
    assert!(clues.iter().all(|c| c.as_deref() == Some("Sand")));
}
