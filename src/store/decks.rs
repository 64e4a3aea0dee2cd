//! File-backed deck storage.
//!
//! One deck per JSON file, named `<deckId>.json` inside the data
//! directory. Every mutation is a whole-file rewrite: read the deck,
//! change it in memory, write it back. Deletion is never destructive-only;
//! the file is copied to `<deckId>.backup.json` before the live copy is
//! removed.
//!
//! A single unreadable deck file is skipped (with a warning) when listing,
//! so one corrupt file cannot take down the whole catalog.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::model::{is_valid_deck_id, Card, CardPatch, Deck, DeckPatch, DeckSummary};

/// Suffix of backup files left behind by deck deletion.
const BACKUP_SUFFIX: &str = ".backup.json";

/// File-backed repository of decks.
///
/// Construct once at process start with [`DeckStore::open`] and pass by
/// reference; there is no global instance.
#[derive(Clone, Debug)]
pub struct DeckStore {
    data_dir: PathBuf,
}

impl DeckStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed.
    ///
    /// Fails with [`Error::StorageUnavailable`] if the directory cannot be
    /// created or enumerated.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir).map_err(|e| {
            Error::StorageUnavailable(format!("cannot create {}: {e}", data_dir.display()))
        })?;
        fs::read_dir(&data_dir).map_err(|e| {
            Error::StorageUnavailable(format!("cannot read {}: {e}", data_dir.display()))
        })?;
        Ok(Self { data_dir })
    }

    fn deck_path(&self, deck_id: &str) -> PathBuf {
        self.data_dir.join(format!("{deck_id}.json"))
    }

    fn backup_path(&self, deck_id: &str) -> PathBuf {
        self.data_dir.join(format!("{deck_id}{BACKUP_SUFFIX}"))
    }

    fn read_deck(&self, path: &Path) -> Result<Deck> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            Error::StorageUnavailable(format!("deck file {} is corrupt: {e}", path.display()))
        })
    }

    fn write_deck(&self, deck: &Deck) -> Result<()> {
        let raw = serde_json::to_string_pretty(deck)
            .map_err(|e| Error::StorageUnavailable(format!("cannot serialize deck: {e}")))?;
        fs::write(self.deck_path(&deck.id), raw)?;
        Ok(())
    }

    /// List summaries of every deck in the data directory.
    ///
    /// Unreadable or corrupt deck files are skipped rather than failing
    /// the whole listing. Backup files are never listed.
    pub fn list_summaries(&self) -> Result<Vec<DeckSummary>> {
        let entries = fs::read_dir(&self.data_dir).map_err(|e| {
            Error::StorageUnavailable(format!("cannot read {}: {e}", self.data_dir.display()))
        })?;

        let mut file_names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| {
                name.starts_with("tarot-")
                    && name.ends_with(".json")
                    && !name.ends_with(BACKUP_SUFFIX)
            })
            .collect();
        file_names.sort();

        let mut summaries = Vec::with_capacity(file_names.len());
        for file_name in file_names {
            let path = self.data_dir.join(&file_name);
            match self.read_deck(&path) {
                Ok(deck) => summaries.push(DeckSummary {
                    id: deck.id,
                    name: deck.name,
                    description: deck.description,
                    card_count: deck.cards.len(),
                    file_name,
                }),
                Err(e) => {
                    warn!(file = %file_name, error = %e, "skipping unreadable deck file");
                }
            }
        }

        Ok(summaries)
    }

    /// Get a full deck by id.
    pub fn get(&self, deck_id: &str) -> Result<Deck> {
        let path = self.deck_path(deck_id);
        if !path.exists() {
            return Err(Error::not_found(format!("deck {deck_id}")));
        }
        self.read_deck(&path)
    }

    /// Get a single card from a deck.
    pub fn get_card(&self, deck_id: &str, card_id: &str) -> Result<Card> {
        let deck = self.get(deck_id)?;
        deck.card(card_id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("card {card_id}")))
    }

    /// Create a new empty deck.
    ///
    /// Fails with [`Error::InvalidInput`] unless `id` matches the
    /// `tarot-` pattern and `name` is non-empty, and with
    /// [`Error::Conflict`] if the id is taken.
    pub fn create(&self, id: &str, name: &str, description: &str) -> Result<Deck> {
        if name.is_empty() {
            return Err(Error::InvalidInput("deck name is required".to_string()));
        }
        if !is_valid_deck_id(id) {
            return Err(Error::InvalidInput(format!(
                "invalid deck id {id:?}: must start with \"tarot-\" and contain only \
                 lowercase letters, numbers and hyphens"
            )));
        }
        if self.deck_path(id).exists() {
            return Err(Error::Conflict(format!("deck {id} already exists")));
        }

        let deck = Deck::new(id, name, description);
        self.write_deck(&deck)?;
        info!(deck = %id, name = %name, "created deck");
        Ok(deck)
    }

    /// Merge `patch` over an existing deck.
    ///
    /// If the patch replaces the card list, the list is checked for
    /// duplicate card ids before anything is written.
    pub fn update(&self, deck_id: &str, patch: DeckPatch) -> Result<Deck> {
        let mut deck = self.get(deck_id)?;

        if let Some(cards) = &patch.cards {
            check_unique_card_ids(cards)?;
        }
        if let Some(name) = patch.name {
            deck.name = name;
        }
        if let Some(description) = patch.description {
            deck.description = description;
        }
        if let Some(cards) = patch.cards {
            deck.cards = cards;
        }

        self.write_deck(&deck)?;
        info!(deck = %deck_id, "updated deck");
        Ok(deck)
    }

    /// Delete a deck, keeping a backup.
    ///
    /// The backing file is copied to the backup location first and only
    /// then removed, so a crash in between leaves both copies rather than
    /// neither. Returns the backup path.
    pub fn delete(&self, deck_id: &str) -> Result<PathBuf> {
        let path = self.deck_path(deck_id);
        if !path.exists() {
            return Err(Error::not_found(format!("deck {deck_id}")));
        }

        let backup = self.backup_path(deck_id);
        fs::copy(&path, &backup)?;
        fs::remove_file(&path)?;
        info!(deck = %deck_id, backup = %backup.display(), "deleted deck");
        Ok(backup)
    }

    /// Deep-copy a deck under a new id and name.
    ///
    /// The copy's description gains a copy marker, and each card id has
    /// the source deck's id suffix substituted for the new one. The
    /// substitution is a first-occurrence string replacement: a card id
    /// that does not contain the old suffix is carried over unchanged,
    /// which can leave identical card ids across the two decks.
    pub fn duplicate(&self, source_id: &str, new_id: &str, new_name: &str) -> Result<Deck> {
        if new_name.is_empty() {
            return Err(Error::InvalidInput("new deck name is required".to_string()));
        }
        if !is_valid_deck_id(new_id) {
            return Err(Error::InvalidInput(format!(
                "invalid deck id {new_id:?}: must start with \"tarot-\" and contain only \
                 lowercase letters, numbers and hyphens"
            )));
        }

        let source_path = self.deck_path(source_id);
        if !source_path.exists() {
            return Err(Error::not_found(format!("deck {source_id}")));
        }
        if self.deck_path(new_id).exists() {
            return Err(Error::Conflict(format!("deck {new_id} already exists")));
        }

        let source = self.read_deck(&source_path)?;
        let old_suffix = source.id_suffix().to_string();
        let new_suffix = new_id.strip_prefix("tarot-").unwrap_or(new_id);

        let mut copy = source;
        copy.id = new_id.to_string();
        copy.name = new_name.to_string();
        copy.description = format!("{} (Copy)", copy.description);
        for card in &mut copy.cards {
            card.id = card.id.replacen(&old_suffix, new_suffix, 1);
        }

        self.write_deck(&copy)?;
        info!(source = %source_id, deck = %new_id, "duplicated deck");
        Ok(copy)
    }

    /// Append a card to a deck.
    ///
    /// The card arrives with defaults already applied for omitted fields.
    /// Fails with [`Error::InvalidInput`] on a blank id or name and with
    /// [`Error::Conflict`] if the deck already holds that card id.
    pub fn add_card(&self, deck_id: &str, card: Card) -> Result<Card> {
        if card.id.is_empty() || card.name.is_empty() {
            return Err(Error::InvalidInput(
                "card id and name are required".to_string(),
            ));
        }

        let mut deck = self.get(deck_id)?;
        if deck.contains_card(&card.id) {
            return Err(Error::Conflict(format!(
                "card {} already exists in deck {deck_id}",
                card.id
            )));
        }

        deck.cards.push(card.clone());
        self.write_deck(&deck)?;
        info!(deck = %deck_id, card = %card.id, "added card");
        Ok(card)
    }

    /// Merge `patch` over an existing card. The card id never changes,
    /// regardless of what the patch carries.
    pub fn update_card(&self, deck_id: &str, card_id: &str, patch: CardPatch) -> Result<Card> {
        let mut deck = self.get(deck_id)?;
        let card = deck
            .cards
            .iter_mut()
            .find(|c| c.id == card_id)
            .ok_or_else(|| Error::not_found(format!("card {card_id}")))?;

        patch.apply_to(card);
        let updated = card.clone();
        self.write_deck(&deck)?;
        info!(deck = %deck_id, card = %card_id, "updated card");
        Ok(updated)
    }

    /// Remove a card from a deck, returning it.
    pub fn delete_card(&self, deck_id: &str, card_id: &str) -> Result<Card> {
        let mut deck = self.get(deck_id)?;
        let index = deck
            .cards
            .iter()
            .position(|c| c.id == card_id)
            .ok_or_else(|| Error::not_found(format!("card {card_id}")))?;

        let removed = deck.cards.remove(index);
        self.write_deck(&deck)?;
        info!(deck = %deck_id, card = %card_id, "deleted card");
        Ok(removed)
    }
}

/// Reject a card list holding two entries with the same id.
fn check_unique_card_ids(cards: &[Card]) -> Result<()> {
    let mut seen = rustc_hash::FxHashSet::default();
    for card in cards {
        if !seen.insert(card.id.as_str()) {
            return Err(Error::InvalidInput(format!(
                "duplicate card id {} in card list",
                card.id
            )));
        }
    }
    Ok(())
}
