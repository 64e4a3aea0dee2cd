//! Deck data - a named, ordered collection of cards.
//!
//! Deck ids are globally unique and follow the `tarot-<slug>` pattern;
//! the id doubles as the name of the deck's backing file. Card order in
//! `cards` is insertion order and determines default draw/display order.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::card::Card;

/// Pattern every deck id must match.
pub const DECK_ID_PATTERN: &str = "^tarot-[a-z0-9-]+$";

fn deck_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DECK_ID_PATTERN).expect("deck id pattern is valid"))
}

/// Check whether `id` is a well-formed deck id.
#[must_use]
pub fn is_valid_deck_id(id: &str) -> bool {
    deck_id_regex().is_match(id)
}

/// A deck of tarot cards.
///
/// Invariant: no two cards share an `id`. Enforced by the deck store on
/// every mutation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    /// Globally unique id matching [`DECK_ID_PATTERN`].
    pub id: String,

    /// Display name.
    pub name: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// Cards in insertion order.
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            cards: Vec::new(),
        }
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }

    /// Check whether a card with the given id exists.
    #[must_use]
    pub fn contains_card(&self, card_id: &str) -> bool {
        self.cards.iter().any(|c| c.id == card_id)
    }

    /// The slug after the `tarot-` prefix.
    ///
    /// Used by deck duplication to rewrite card ids.
    #[must_use]
    pub fn id_suffix(&self) -> &str {
        self.id.strip_prefix("tarot-").unwrap_or(&self.id)
    }
}

/// One row of a deck listing: identity plus card count, no card content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub card_count: usize,
    /// Name of the backing file the deck was read from.
    pub file_name: String,
}

/// Partial deck update. Omitted fields keep their current value.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeckPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cards: Option<Vec<Card>>,
}
