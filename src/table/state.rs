//! The table state machine.
//!
//! `TableState` is the authoritative in-memory state of one reading in
//! progress: which cards are on the table, where, and in what
//! reveal/orientation state. It is single-session state - one table per
//! reading, no persistence, lifetime bounded by the session.
//!
//! Each placed card moves through a small machine:
//!
//! - **Placed-Hidden** (via `add_card`): on the table, face down.
//! - **Placed-Revealed** (via `reveal`): face up. One-way; there is no
//!   un-reveal, only removal.
//! - **Removed** (via `remove` or `clear`): gone from the table.
//!
//! Operations on unknown card ids return [`Error::NotFound`] instead of
//! silently doing nothing, so misaddressed calls are observable.

use crate::core::DrawRng;
use crate::error::{Error, Result};
use crate::model::{Card, Deck, Spread};

use super::ledger::DrawLedger;
use super::placed::PlacedCard;

/// Draw `count` cards at random from `deck`, skipping `excluded` ids.
///
/// Sampling is without replacement; if fewer than `count` cards remain
/// after exclusions, every remaining card is returned.
#[must_use]
pub fn draw_from_deck(deck: &Deck, count: usize, excluded: &[String], rng: &mut DrawRng) -> Vec<Card> {
    let mut pool: Vec<&Card> = deck
        .cards
        .iter()
        .filter(|c| !excluded.iter().any(|ex| ex == &c.id))
        .collect();
    rng.shuffle(&mut pool);
    pool.into_iter().take(count).cloned().collect()
}

/// State of one reading in progress.
pub struct TableState {
    cards: Vec<PlacedCard>,
    spread: Option<Spread>,
    allow_reversed: bool,
    rng: DrawRng,
    ledger: DrawLedger,
    reading: Option<String>,
}

impl TableState {
    /// Create an empty table. Reversed orientations are allowed by default.
    #[must_use]
    pub fn new(rng: DrawRng) -> Self {
        Self {
            cards: Vec::new(),
            spread: None,
            allow_reversed: true,
            rng,
            ledger: DrawLedger::new(),
            reading: None,
        }
    }

    /// Cards currently on the table, in placement order.
    #[must_use]
    pub fn cards(&self) -> &[PlacedCard] {
        &self.cards
    }

    /// The active spread, if one is selected.
    #[must_use]
    pub fn spread(&self) -> Option<&Spread> {
        self.spread.as_ref()
    }

    /// Select or clear the active spread. Cards already on the table
    /// keep their positions.
    pub fn set_spread(&mut self, spread: Option<Spread>) {
        self.spread = spread;
    }

    /// Gate the 50/50 reversed roll for subsequent placements.
    pub fn set_allow_reversed(&mut self, allow: bool) {
        self.allow_reversed = allow;
    }

    /// The generated reading text, if one is held.
    #[must_use]
    pub fn reading(&self) -> Option<&str> {
        self.reading.as_deref()
    }

    /// Store the generated reading text.
    pub fn set_reading(&mut self, text: impl Into<String>) {
        self.reading = Some(text.into());
    }

    /// Whether a reading can be generated: at least one revealed card.
    #[must_use]
    pub fn can_generate(&self) -> bool {
        crate::reading::can_generate(&self.cards)
    }

    /// Whether any placed card occupies the given spread position.
    /// UI feedback only; a position may host several cards.
    #[must_use]
    pub fn is_position_occupied(&self, position_id: &str) -> bool {
        self.cards
            .iter()
            .any(|c| c.position_id.as_deref() == Some(position_id))
    }

    /// Place a card face-down at `(x, y)`.
    ///
    /// If a spread is active and the drop lands within the snap radius of
    /// a position anchor, the coordinates are overridden to that anchor
    /// and the card takes the position's id; otherwise it keeps the raw
    /// drop point. Orientation is rolled once, here: always upright when
    /// reversed orientations are disallowed, even odds otherwise.
    ///
    /// The deal is recorded in the draw ledger so the same card is not
    /// dealt again from that deck until the table is cleared.
    pub fn add_card(&mut self, card: Card, deck_id: &str, x: f64, y: f64) -> &PlacedCard {
        let (x, y, position_id) = self.snap(x, y);
        let is_reversed = self.allow_reversed && self.rng.gen_bool(0.5);

        self.ledger.mark(deck_id, &card.id);
        self.cards.push(PlacedCard {
            card_id: card.id.clone(),
            deck_id: deck_id.to_string(),
            card: Some(card),
            position_id,
            x,
            y,
            is_revealed: false,
            is_reversed,
            image_url: None,
        });
        self.cards.last().expect("card was just pushed")
    }

    /// Move a placed card to `(x, y)`, re-running position snapping.
    pub fn move_card(&mut self, card_id: &str, x: f64, y: f64) -> Result<&PlacedCard> {
        let (x, y, position_id) = self.snap(x, y);
        let card = self.find_mut(card_id)?;
        card.x = x;
        card.y = y;
        card.position_id = position_id;
        Ok(&*card)
    }

    /// Turn a card face up. Idempotent; revealing a revealed card is a no-op.
    pub fn reveal(&mut self, card_id: &str) -> Result<()> {
        let card = self.find_mut(card_id)?;
        card.is_revealed = true;
        Ok(())
    }

    /// Toggle a card's orientation. Works face-up or face-down and does
    /// not reveal the card.
    pub fn flip(&mut self, card_id: &str) -> Result<bool> {
        let card = self.find_mut(card_id)?;
        card.is_reversed = !card.is_reversed;
        Ok(card.is_reversed)
    }

    /// Take a card off the table, returning it for an undo affordance.
    pub fn remove(&mut self, card_id: &str) -> Result<PlacedCard> {
        let index = self
            .cards
            .iter()
            .position(|c| c.card_id == card_id)
            .ok_or_else(|| Error::not_found(format!("placed card {card_id}")))?;
        Ok(self.cards.remove(index))
    }

    /// Empty the table.
    ///
    /// Also discards any held reading text (it describes cards that are
    /// no longer there) and resets the draw ledger.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.reading = None;
        self.ledger.reset();
    }

    /// Draw `count` cards from `deck` that have not been dealt this
    /// session, recording the deal in the ledger.
    pub fn draw(&mut self, deck: &Deck, count: usize) -> Vec<Card> {
        let excluded: Vec<String> = deck
            .cards
            .iter()
            .filter(|c| self.ledger.contains(&deck.id, &c.id))
            .map(|c| c.id.clone())
            .collect();

        let drawn = draw_from_deck(deck, count, &excluded, &mut self.rng);
        for card in &drawn {
            self.ledger.mark(&deck.id, &card.id);
        }
        drawn
    }

    fn snap(&self, x: f64, y: f64) -> (f64, f64, Option<String>) {
        match self.spread.as_ref().and_then(|s| s.snap(x, y)) {
            Some(position) => (position.x, position.y, Some(position.id.clone())),
            None => (x, y, None),
        }
    }

    fn find_mut(&mut self, card_id: &str) -> Result<&mut PlacedCard> {
        self.cards
            .iter_mut()
            .find(|c| c.card_id == card_id)
            .ok_or_else(|| Error::not_found(format!("placed card {card_id}")))
    }
}
