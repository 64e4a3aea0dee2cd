//! Card data - the static content of a tarot card.
//!
//! A `Card` belongs to exactly one deck and is identified by an `id`
//! unique within that deck. The id is fixed at creation; every other
//! field can be edited afterwards.

use serde::{Deserialize, Serialize};

/// Major or minor arcana classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arcana {
    /// The 22 trump cards.
    #[default]
    Major,
    /// Suited cards.
    Minor,
}

/// Suit of a minor-arcana card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Cups,
    Wands,
    Swords,
    Pentacles,
}

/// A single tarot card.
///
/// ## Example
///
/// ```
/// use tarot_table::model::Card;
///
/// let fool = Card::new("c1", "The Fool")
///     .with_keywords(["beginnings", "innocence"]);
///
/// assert_eq!(fool.id, "c1");
/// assert_eq!(fool.description, "");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Identifier, unique within the owning deck. Immutable once created.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Free-form description of the card's imagery and themes.
    #[serde(default)]
    pub description: String,

    /// Keywords in display order.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Meaning when the card lands upright.
    #[serde(default)]
    pub upright_meaning: String,

    /// Meaning when the card lands reversed.
    #[serde(default)]
    pub reversed_meaning: String,

    /// Arcana classification. Defaults to major.
    #[serde(default)]
    pub arcana: Arcana,

    /// Suit, for minor-arcana cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suit: Option<Suit>,

    /// Card number within its arcana/suit, if any.
    #[serde(default)]
    pub number: Option<i64>,
}

impl Card {
    /// Create a card with the given id and name, all other fields defaulted.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            keywords: Vec::new(),
            upright_meaning: String::new(),
            reversed_meaning: String::new(),
            arcana: Arcana::Major,
            suit: None,
            number: None,
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the keywords (builder pattern).
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set upright and reversed meanings (builder pattern).
    #[must_use]
    pub fn with_meanings(
        mut self,
        upright: impl Into<String>,
        reversed: impl Into<String>,
    ) -> Self {
        self.upright_meaning = upright.into();
        self.reversed_meaning = reversed.into();
        self
    }
}

/// Partial card update.
///
/// Every field is optional; omitted fields keep their current value.
/// An `id` in the payload is accepted but ignored - card identity never
/// changes through an update.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CardPatch {
    /// Ignored. Present so editor payloads that echo the id round-trip
    /// without being rejected.
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub upright_meaning: Option<String>,
    pub reversed_meaning: Option<String>,
    pub arcana: Option<Arcana>,
    pub suit: Option<Suit>,
    pub number: Option<i64>,
}

impl CardPatch {
    /// Merge this patch into `card`, preserving the card's id.
    pub fn apply_to(&self, card: &mut Card) {
        if let Some(name) = &self.name {
            card.name = name.clone();
        }
        if let Some(description) = &self.description {
            card.description = description.clone();
        }
        if let Some(keywords) = &self.keywords {
            card.keywords = keywords.clone();
        }
        if let Some(upright) = &self.upright_meaning {
            card.upright_meaning = upright.clone();
        }
        if let Some(reversed) = &self.reversed_meaning {
            card.reversed_meaning = reversed.clone();
        }
        if let Some(arcana) = self.arcana {
            card.arcana = arcana;
        }
        if let Some(suit) = self.suit {
            card.suit = Some(suit);
        }
        if let Some(number) = self.number {
            card.number = Some(number);
        }
    }
}
