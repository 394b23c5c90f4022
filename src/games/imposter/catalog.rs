//! Word catalog: the static mapping from category to (word, clue) pairs.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A word category.
///
/// `Custom` is reserved: it never has catalog entries and switches the
/// round to user-authored topics.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    /// User-authored topics, no clues.
    #[serde(rename = "Custom")]
    #[strum(to_string = "Custom")]
    Custom,
    /// Places.
    #[serde(rename = "Places")]
    #[strum(to_string = "Places")]
    Places,
    /// Movies & TV shows.
    #[serde(rename = "Movies & TV Shows")]
    #[strum(to_string = "Movies & TV Shows", serialize = "movies")]
    MoviesAndTv,
    /// Professions.
    #[serde(rename = "Professions")]
    #[strum(to_string = "Professions")]
    Professions,
    /// Food & drinks.
    #[serde(rename = "Food & Drinks")]
    #[strum(to_string = "Food & Drinks", serialize = "food")]
    FoodAndDrinks,
    /// Sports & activities.
    #[serde(rename = "Sports & Activities")]
    #[strum(to_string = "Sports & Activities", serialize = "sports")]
    SportsAndActivities,
    /// Animals.
    #[serde(rename = "Animals")]
    #[strum(to_string = "Animals")]
    Animals,
    /// Vehicles.
    #[serde(rename = "Vehicles")]
    #[strum(to_string = "Vehicles")]
    Vehicles,
    /// Technology & gadgets.
    #[serde(rename = "Technology & Gadgets")]
    #[strum(to_string = "Technology & Gadgets", serialize = "technology")]
    Technology,
    /// Hobbies & interests.
    #[serde(rename = "Hobbies & Interests")]
    #[strum(to_string = "Hobbies & Interests", serialize = "hobbies")]
    Hobbies,
    /// Household objects.
    #[serde(rename = "Household Objects")]
    #[strum(to_string = "Household Objects", serialize = "household")]
    HouseholdObjects,
}

impl Category {
    /// Returns true for the reserved Custom label.
    pub fn is_custom(self) -> bool {
        matches!(self, Category::Custom)
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// The secret word.
    pub word: String,
    /// Hint shown to the imposter when clues are on. May be empty.
    pub clue: String,
    /// Category the word belongs to.
    pub category: Category,
}

impl WordEntry {
    /// Creates a new entry.
    pub fn new(word: impl Into<String>, clue: impl Into<String>, category: Category) -> Self {
        Self {
            word: word.into(),
            clue: clue.into(),
            category,
        }
    }

    /// Returns the clue, or `None` when the entry carries no clue text.
    pub fn clue_text(&self) -> Option<&str> {
        let clue = self.clue.trim();
        if clue.is_empty() { None } else { Some(clue) }
    }
}

const BUILTIN: &[(&str, &str, Category)] = &[
    ("Beach", "Sand", Category::Places),
    ("Airport", "Departure", Category::Places),
    ("Hospital", "Ward", Category::Places),
    ("Library", "Quiet", Category::Places),
    ("Museum", "Exhibit", Category::Places),
    ("Casino", "Chips", Category::Places),
    ("Titanic", "Iceberg", Category::MoviesAndTv),
    ("Friends", "Couch", Category::MoviesAndTv),
    ("The Lion King", "Pride", Category::MoviesAndTv),
    ("Star Wars", "Galaxy", Category::MoviesAndTv),
    ("Breaking Bad", "Chemistry", Category::MoviesAndTv),
    ("Shrek", "Swamp", Category::MoviesAndTv),
    ("Firefighter", "Hose", Category::Professions),
    ("Dentist", "Drill", Category::Professions),
    ("Pilot", "Cockpit", Category::Professions),
    ("Chef", "Knife", Category::Professions),
    ("Teacher", "Chalk", Category::Professions),
    ("Plumber", "Pipe", Category::Professions),
    ("Pizza", "Slice", Category::FoodAndDrinks),
    ("Sushi", "Rice", Category::FoodAndDrinks),
    ("Coffee", "Bean", Category::FoodAndDrinks),
    ("Pancake", "Syrup", Category::FoodAndDrinks),
    ("Taco", "Shell", Category::FoodAndDrinks),
    ("Lemonade", "Sour", Category::FoodAndDrinks),
    ("Soccer", "Goal", Category::SportsAndActivities),
    ("Skiing", "Slope", Category::SportsAndActivities),
    ("Bowling", "Pins", Category::SportsAndActivities),
    ("Surfing", "Wave", Category::SportsAndActivities),
    ("Chess", "Checkmate", Category::SportsAndActivities),
    ("Boxing", "Gloves", Category::SportsAndActivities),
    ("Elephant", "Trunk", Category::Animals),
    ("Penguin", "Ice", Category::Animals),
    ("Giraffe", "Neck", Category::Animals),
    ("Kangaroo", "Pouch", Category::Animals),
    ("Octopus", "Ink", Category::Animals),
    ("Owl", "Night", Category::Animals),
    ("Bicycle", "Pedal", Category::Vehicles),
    ("Submarine", "Periscope", Category::Vehicles),
    ("Helicopter", "Rotor", Category::Vehicles),
    ("Tractor", "Farm", Category::Vehicles),
    ("Ambulance", "Siren", Category::Vehicles),
    ("Sailboat", "Wind", Category::Vehicles),
    ("Smartphone", "Screen", Category::Technology),
    ("Headphones", "Music", Category::Technology),
    ("Drone", "Propeller", Category::Technology),
    ("Laptop", "Keyboard", Category::Technology),
    ("Smartwatch", "Wrist", Category::Technology),
    ("Printer", "Ink", Category::Technology),
    ("Gardening", "Soil", Category::Hobbies),
    ("Photography", "Lens", Category::Hobbies),
    ("Knitting", "Yarn", Category::Hobbies),
    ("Fishing", "Bait", Category::Hobbies),
    ("Painting", "Brush", Category::Hobbies),
    ("Camping", "Tent", Category::Hobbies),
    ("Toaster", "Bread", Category::HouseholdObjects),
    ("Vacuum", "Dust", Category::HouseholdObjects),
    ("Pillow", "Sleep", Category::HouseholdObjects),
    ("Mirror", "Reflection", Category::HouseholdObjects),
    ("Umbrella", "Rain", Category::HouseholdObjects),
    ("Candle", "Wax", Category::HouseholdObjects),
];

/// Immutable word catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCatalog {
    entries: Vec<WordEntry>,
}

impl WordCatalog {
    /// Creates a catalog from explicit entries.
    ///
    /// Entries tagged `Custom` are dropped; Custom never has catalog words.
    #[instrument(skip(entries))]
    pub fn new(entries: Vec<WordEntry>) -> Self {
        let entries: Vec<_> = entries
            .into_iter()
            .filter(|e| !e.category.is_custom() && !e.word.trim().is_empty())
            .collect();
        debug!(count = entries.len(), "Built word catalog");
        Self { entries }
    }

    /// Returns the built-in catalog.
    #[instrument]
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN
                .iter()
                .map(|(word, clue, category)| WordEntry::new(*word, *clue, *category))
                .collect(),
        )
    }

    /// Returns the built-in catalog extended with `extra` entries.
    #[instrument(skip(extra), fields(extra = extra.len()))]
    pub fn builtin_with(extra: Vec<WordEntry>) -> Self {
        let mut entries = Self::builtin().entries;
        entries.extend(extra);
        Self::new(entries)
    }

    /// Finds the entry for a word (case-insensitive).
    #[instrument(skip(self))]
    pub fn lookup(&self, word: &str) -> Option<&WordEntry> {
        self.entries
            .iter()
            .find(|e| e.word.eq_ignore_ascii_case(word.trim()))
    }

    /// Returns every entry whose category is in `categories`, in catalog order.
    ///
    /// An empty result is a configuration problem for the caller to report.
    #[instrument(skip(self))]
    pub fn words_in(&self, categories: &BTreeSet<Category>) -> Vec<&WordEntry> {
        self.entries
            .iter()
            .filter(|e| categories.contains(&e.category))
            .collect()
    }

    /// Number of entries in `category`.
    pub fn count_in(&self, category: Category) -> usize {
        self.entries.iter().filter(|e| e.category == category).count()
    }

    /// All entries.
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }
}

impl Default for WordCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_catalog_category_has_words() {
        let catalog = WordCatalog::builtin();
        for category in Category::iter().filter(|c| !c.is_custom()) {
            assert!(catalog.count_in(category) > 0, "{category} has no words");
        }
        assert_eq!(catalog.count_in(Category::Custom), 0);
    }

    #[test]
    fn test_words_in_filters_by_category() {
        let catalog = WordCatalog::builtin();
        let animals = BTreeSet::from([Category::Animals]);
        let words = catalog.words_in(&animals);
        assert!(!words.is_empty());
        assert!(words.iter().all(|e| e.category == Category::Animals));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = WordCatalog::builtin();
        let entry = catalog.lookup("penguin").expect("Penguin is built in");
        assert_eq!(entry.clue, "Ice");
        assert!(catalog.lookup("Unicorn").is_none());
    }

    #[test]
    fn test_custom_entries_are_dropped() {
        let catalog = WordCatalog::new(vec![
            WordEntry::new("Ghost", "Boo", Category::Custom),
            WordEntry::new("Moon", "", Category::Places),
        ]);
        assert_eq!(catalog.entries().len(), 1);
        assert_eq!(catalog.entries()[0].clue_text(), None);
    }

    #[test]
    fn test_category_labels_round_trip() {
        assert_eq!(Category::MoviesAndTv.to_string(), "Movies & TV Shows");
        assert_eq!(Category::from_str("animals").ok(), Some(Category::Animals));
        assert_eq!(Category::from_str("Food & Drinks").ok(), Some(Category::FoodAndDrinks));
        assert_eq!(Category::from_str("food").ok(), Some(Category::FoodAndDrinks));
    }
}
