//! Session configuration: the validated input to the assignment engine.

use std::collections::{BTreeSet, HashSet};

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::catalog::{Category, WordCatalog};
use super::error::{ConfigurationError, MIN_CUSTOM_TOPICS, MIN_PLAYERS};

/// Validated configuration for one round.
///
/// Only [`SessionConfiguration::new`] builds one, so holding a value means:
/// at least three unique players, either catalog categories or at least
/// three unique custom topics (never both), clues off for custom topics,
/// and a positive discussion duration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfiguration {
    /// Selected categories (`{Custom}` when custom topics are used).
    categories: BTreeSet<Category>,
    /// User-authored topics; empty unless Custom is selected.
    custom_topics: Vec<String>,
    /// Roster in reveal order.
    players: Vec<String>,
    /// Whether the imposter receives the catalog clue.
    clue_enabled: bool,
    /// Discussion length in milliseconds.
    discussion_duration_ms: u64,
}

impl SessionConfiguration {
    /// Validates and builds a configuration.
    ///
    /// Names and topics are trimmed. `clue_enabled` is forced off when
    /// Custom is selected, and topics are discarded when it is not.
    #[instrument(skip_all, fields(players = players.len(), topics = custom_topics.len()))]
    pub fn new(
        categories: BTreeSet<Category>,
        custom_topics: Vec<String>,
        players: Vec<String>,
        clue_enabled: bool,
        discussion_duration_ms: u64,
    ) -> Result<Self, ConfigurationError> {
        let players = unique_trimmed(players, ConfigurationError::BlankPlayerName, |name| {
            ConfigurationError::DuplicatePlayer(name)
        })?;
        if players.len() < MIN_PLAYERS {
            warn!(count = players.len(), "Too few players");
            return Err(ConfigurationError::TooFewPlayers(players.len()));
        }

        if discussion_duration_ms == 0 {
            return Err(ConfigurationError::ZeroDuration);
        }

        let custom = categories.contains(&Category::Custom);
        let (custom_topics, clue_enabled) = if custom {
            if categories.len() > 1 {
                return Err(ConfigurationError::MixedCustomCategory);
            }
            let topics = unique_trimmed(
                custom_topics,
                ConfigurationError::BlankCustomTopic,
                ConfigurationError::DuplicateCustomTopic,
            )?;
            if topics.len() < MIN_CUSTOM_TOPICS {
                warn!(count = topics.len(), "Too few custom topics");
                return Err(ConfigurationError::TooFewCustomTopics(topics.len()));
            }
            if clue_enabled {
                debug!("Clues disabled for custom topics");
            }
            (topics, false)
        } else {
            if categories.is_empty() {
                return Err(ConfigurationError::NoCategories);
            }
            if !custom_topics.is_empty() {
                debug!("Ignoring custom topics without the Custom category");
            }
            (Vec::new(), clue_enabled)
        };

        Ok(Self {
            categories,
            custom_topics,
            players,
            clue_enabled,
            discussion_duration_ms,
        })
    }

    /// Returns true when words come from custom topics.
    pub fn uses_custom_topics(&self) -> bool {
        !self.custom_topics.is_empty()
    }

    /// Checks that the catalog can supply at least one word.
    #[instrument(skip_all)]
    pub fn check_word_pool(&self, catalog: &WordCatalog) -> Result<(), ConfigurationError> {
        if self.uses_custom_topics() || !catalog.words_in(&self.categories).is_empty() {
            Ok(())
        } else {
            warn!(categories = ?self.categories, "Selected categories have no words");
            Err(ConfigurationError::EmptyWordPool(
                self.categories.iter().copied().collect(),
            ))
        }
    }
}

fn unique_trimmed(
    values: Vec<String>,
    blank: ConfigurationError,
    duplicate: impl Fn(String) -> ConfigurationError,
) -> Result<Vec<String>, ConfigurationError> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(values.len());
    for value in values {
        let value = value.trim().to_string();
        if value.is_empty() {
            return Err(blank);
        }
        if !seen.insert(value.clone()) {
            return Err(duplicate(value));
        }
        out.push(value);
    }
    Ok(out)
}

/// Mutable setup form state, confirmed once into a [`SessionConfiguration`].
///
/// Editing is forgiving the way the setup screen is: blank and duplicate
/// entries are ignored rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct SetupDraft {
    #[setters(skip)]
    categories: BTreeSet<Category>,
    #[setters(skip)]
    custom_topics: Vec<String>,
    #[setters(skip)]
    players: Vec<String>,
    #[setters(skip)]
    clue_enabled: bool,
    /// Discussion length in milliseconds.
    discussion_duration_ms: u64,
}

impl Default for SetupDraft {
    fn default() -> Self {
        Self {
            categories: BTreeSet::from([Category::Places]),
            custom_topics: Vec::new(),
            players: Vec::new(),
            clue_enabled: false,
            discussion_duration_ms: 60_000,
        }
    }
}

impl SetupDraft {
    /// Creates a draft with the setup screen defaults.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a player; blank or duplicate names are ignored.
    #[instrument(skip(self))]
    pub fn add_player(&mut self, name: &str) -> bool {
        push_unique(&mut self.players, name)
    }

    /// Removes a player by name.
    #[instrument(skip(self))]
    pub fn remove_player(&mut self, name: &str) {
        self.players.retain(|p| p != name);
    }

    /// Adds a custom topic; blank or duplicate topics are ignored.
    #[instrument(skip(self))]
    pub fn add_custom_topic(&mut self, topic: &str) -> bool {
        push_unique(&mut self.custom_topics, topic)
    }

    /// Removes a custom topic.
    #[instrument(skip(self))]
    pub fn remove_custom_topic(&mut self, topic: &str) {
        self.custom_topics.retain(|t| t != topic);
    }

    /// Toggles a category.
    ///
    /// Custom is exclusive: selecting it clears the others (and turns clues
    /// off), selecting any other clears Custom. The last selected category
    /// cannot be deselected.
    #[instrument(skip(self))]
    pub fn toggle_category(&mut self, category: Category) {
        if self.categories.len() == 1 && self.categories.contains(&category) {
            debug!("Keeping last selected category");
            return;
        }
        if category.is_custom() {
            self.categories = BTreeSet::from([Category::Custom]);
            self.clue_enabled = false;
            return;
        }
        self.categories.remove(&Category::Custom);
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
    }

    /// Sets the clue policy; ignored while Custom is selected.
    #[instrument(skip(self))]
    pub fn set_clue_enabled(&mut self, enabled: bool) {
        self.clue_enabled = enabled && !self.categories.contains(&Category::Custom);
    }

    /// Returns true when the start button would be enabled.
    pub fn can_start(&self) -> bool {
        let topics_ok = !self.categories.contains(&Category::Custom)
            || self.custom_topics.len() >= MIN_CUSTOM_TOPICS;
        topics_ok && self.players.len() >= MIN_PLAYERS
    }

    /// Validates the draft against `catalog`.
    #[instrument(skip_all)]
    pub fn confirm(&self, catalog: &WordCatalog) -> Result<SessionConfiguration, ConfigurationError> {
        let config = SessionConfiguration::new(
            self.categories.clone(),
            self.custom_topics.clone(),
            self.players.clone(),
            self.clue_enabled,
            self.discussion_duration_ms,
        )?;
        config.check_word_pool(catalog)?;
        info!(
            players = config.players().len(),
            custom = config.uses_custom_topics(),
            clue = config.clue_enabled(),
            "Setup confirmed"
        );
        Ok(config)
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || list.iter().any(|v| v == value) {
        return false;
    }
    list.push(value.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_valid_catalog_configuration() {
        let config = SessionConfiguration::new(
            BTreeSet::from([Category::Animals]),
            names(&["ignored"]),
            names(&[" A ", "B", "C"]),
            true,
            60_000,
        )
        .unwrap();
        assert_eq!(config.players(), &names(&["A", "B", "C"]));
        assert!(config.custom_topics().is_empty());
        assert!(*config.clue_enabled());
    }

    #[test]
    fn test_custom_forces_clue_off() {
        let config = SessionConfiguration::new(
            BTreeSet::from([Category::Custom]),
            names(&["x", "y", "z"]),
            names(&["A", "B", "C"]),
            true,
            60_000,
        )
        .unwrap();
        assert!(!*config.clue_enabled());
        assert!(config.uses_custom_topics());
    }

    #[test]
    fn test_rejections() {
        let animals = BTreeSet::from([Category::Animals]);
        let err = |categories: BTreeSet<Category>, topics: &[&str], players: &[&str], ms| {
            SessionConfiguration::new(categories, names(topics), names(players), false, ms)
                .unwrap_err()
        };
        assert_eq!(
            err(animals.clone(), &[], &["A", "B"], 1000),
            ConfigurationError::TooFewPlayers(2)
        );
        assert_eq!(
            err(animals.clone(), &[], &["A", "B", "A"], 1000),
            ConfigurationError::DuplicatePlayer("A".into())
        );
        assert_eq!(
            err(animals.clone(), &[], &["A", " ", "C"], 1000),
            ConfigurationError::BlankPlayerName
        );
        assert_eq!(
            err(animals, &[], &["A", "B", "C"], 0),
            ConfigurationError::ZeroDuration
        );
        assert_eq!(
            err(BTreeSet::new(), &[], &["A", "B", "C"], 1000),
            ConfigurationError::NoCategories
        );
        assert_eq!(
            err(BTreeSet::from([Category::Custom]), &["x", "y"], &["A", "B", "C"], 1000),
            ConfigurationError::TooFewCustomTopics(2)
        );
        assert_eq!(
            err(
                BTreeSet::from([Category::Custom, Category::Animals]),
                &["x", "y", "z"],
                &["A", "B", "C"],
                1000
            ),
            ConfigurationError::MixedCustomCategory
        );
    }

    #[test]
    fn test_empty_word_pool_detected() {
        let catalog = WordCatalog::new(Vec::new());
        let mut draft = SetupDraft::new();
        for name in ["A", "B", "C"] {
            draft.add_player(name);
        }
        assert!(matches!(
            draft.confirm(&catalog),
            Err(ConfigurationError::EmptyWordPool(_))
        ));
    }

    #[test]
    fn test_draft_category_toggling() {
        let mut draft = SetupDraft::new();
        draft.set_clue_enabled(true);
        draft.toggle_category(Category::Places);
        assert_eq!(draft.categories(), &BTreeSet::from([Category::Places]));

        draft.toggle_category(Category::Animals);
        assert_eq!(draft.categories().len(), 2);

        draft.toggle_category(Category::Custom);
        assert_eq!(draft.categories(), &BTreeSet::from([Category::Custom]));
        assert!(!*draft.clue_enabled());
        draft.set_clue_enabled(true);
        assert!(!*draft.clue_enabled());

        draft.toggle_category(Category::Vehicles);
        assert_eq!(draft.categories(), &BTreeSet::from([Category::Vehicles]));
    }

    #[test]
    fn test_draft_ignores_blank_and_duplicate_entries() {
        let mut draft = SetupDraft::new().with_discussion_duration_ms(90_000);
        assert!(draft.add_player("Ana"));
        assert!(!draft.add_player(" Ana "));
        assert!(!draft.add_player("   "));
        draft.add_player("Ben");
        assert!(!draft.can_start());
        draft.add_player("Cy");
        assert!(draft.can_start());
        draft.remove_player("Ben");
        assert!(!draft.can_start());
        assert_eq!(*draft.discussion_duration_ms(), 90_000);
    }
}
