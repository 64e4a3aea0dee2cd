//! A card instance on the virtual table.
//!
//! `PlacedCard` is the table's runtime state for one dealt card: where it
//! sits, whether its face is showing, and which way up it landed. The
//! static card content travels along as an optional resolved reference so
//! a reading request can describe the card without another deck lookup.

use serde::{Deserialize, Serialize};

use crate::model::Card;

/// A card currently on the table.
///
/// Created face-down when a card is dropped; mutated in place by
/// move/reveal/flip; destroyed by remove or a table clear.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedCard {
    /// Id of the underlying card within its deck.
    pub card_id: String,

    /// Deck the card was dealt from.
    pub deck_id: String,

    /// Resolved card content. May be absent until hydrated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,

    /// Spread position the card snapped onto, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_id: Option<String>,

    /// Canvas coordinates.
    pub x: f64,
    pub y: f64,

    /// Whether the face is showing. Reveal is one-way; the only route
    /// back to concealment is removing the card.
    pub is_revealed: bool,

    /// Whether the card landed upside-down. Decided once at placement.
    pub is_reversed: bool,

    /// Cached illustration reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl PlacedCard {
    /// Display name, falling back to the card id while unhydrated.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.card.as_ref().map_or(&self.card_id, |c| c.name.as_str())
    }
}
