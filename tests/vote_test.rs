//! Tests for resolving the accusation.

use imposter_game::{Session, ValidationError, resolve};

const PAYLOAD: &str = r#"{
    "players": ["Ann", "Bo", "Cy"],
    "categories": ["Animals"],
    "customTopics": null,
    "word": "Owl",
    "clue": "Night",
    "imposter": "Bo",
    "discussionDurationMs": 60000,
    "clueEnabled": true
}"#;

fn session() -> Session {
    Session::from_transport(PAYLOAD).unwrap()
}

#[test]
fn test_accusing_imposter_wins() {
    let outcome = resolve(&session(), "Bo").unwrap();
    assert!(outcome.players_win);
    assert_eq!(outcome.accused, "Bo");
    assert_eq!(outcome.imposter, "Bo");
}

#[test]
fn test_accusing_innocent_loses() {
    let session = session();
    for innocent in ["Ann", "Cy"] {
        let outcome = resolve(&session, innocent).unwrap();
        assert!(!outcome.players_win);
        assert_eq!(outcome.imposter, "Bo");
    }
}

#[test]
fn test_accusing_stranger_rejected() {
    assert_eq!(
        resolve(&session(), "Zed"),
        Err(ValidationError::UnknownAccused("Zed".into()))
    );
}
