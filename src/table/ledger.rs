//! Draw-exclusion bookkeeping.
//!
//! Tracks, per deck, which card ids have already been dealt in the
//! current session so random draws do not repeat a card until the table
//! is cleared.

use rustc_hash::{FxHashMap, FxHashSet};

/// Per-deck record of card ids already drawn this session.
#[derive(Clone, Debug, Default)]
pub struct DrawLedger {
    drawn: FxHashMap<String, FxHashSet<String>>,
}

impl DrawLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a card was dealt from a deck.
    pub fn mark(&mut self, deck_id: &str, card_id: &str) {
        self.drawn
            .entry(deck_id.to_string())
            .or_default()
            .insert(card_id.to_string());
    }

    /// Check whether a card was already dealt from a deck.
    #[must_use]
    pub fn contains(&self, deck_id: &str, card_id: &str) -> bool {
        self.drawn
            .get(deck_id)
            .is_some_and(|ids| ids.contains(card_id))
    }

    /// Number of cards dealt from a deck so far.
    #[must_use]
    pub fn drawn_count(&self, deck_id: &str) -> usize {
        self.drawn.get(deck_id).map_or(0, FxHashSet::len)
    }

    /// Forget everything. Called when the table is cleared.
    pub fn reset(&mut self) {
        self.drawn.clear();
    }
}
