//! Deck and card CRUD handlers.
//!
//! Thin validation and delegation in front of the deck store: request
//! shapes are closed (unknown fields rejected by serde), the store does
//! the invariant checking.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Card, CardPatch, Deck, DeckPatch, DeckSummary};
use crate::table::draw_from_deck;

use super::super::state::AppState;

/// `POST /decks` payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateDeck {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// `POST /decks/{deckId}/duplicate` payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DuplicateDeck {
    pub new_id: String,
    pub new_name: String,
}

/// `POST /decks/{deckId}/shuffle` payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ShuffleRequest {
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub excluded_card_ids: Vec<String>,
}

fn default_count() -> usize {
    1
}

/// `DELETE /decks/{deckId}` response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckDeleted {
    pub message: String,
    pub backup_location: String,
}

/// `DELETE /decks/{deckId}/cards/{cardId}` response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDeleted {
    pub message: String,
    pub removed_card: Card,
}

/// `GET /decks`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<DeckSummary>>> {
    let store = state.decks.read().await;
    Ok(Json(store.list_summaries()?))
}

/// `GET /decks/{deckId}`
pub async fn get_deck(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
) -> Result<Json<Deck>> {
    let store = state.decks.read().await;
    Ok(Json(store.get(&deck_id)?))
}

/// `POST /decks`
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateDeck>,
) -> Result<(StatusCode, Json<Deck>)> {
    let store = state.decks.write().await;
    let deck = store.create(&payload.id, &payload.name, &payload.description)?;
    Ok((StatusCode::CREATED, Json(deck)))
}

/// `PUT /decks/{deckId}`
pub async fn update(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
    Json(patch): Json<DeckPatch>,
) -> Result<Json<Deck>> {
    let store = state.decks.write().await;
    Ok(Json(store.update(&deck_id, patch)?))
}

/// `DELETE /decks/{deckId}`
pub async fn delete_deck(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
) -> Result<Json<DeckDeleted>> {
    let store = state.decks.write().await;
    let backup = store.delete(&deck_id)?;
    Ok(Json(DeckDeleted {
        message: "Deck deleted successfully".to_string(),
        backup_location: backup.display().to_string(),
    }))
}

/// `POST /decks/{deckId}/duplicate`
pub async fn duplicate(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
    Json(payload): Json<DuplicateDeck>,
) -> Result<(StatusCode, Json<Deck>)> {
    let store = state.decks.write().await;
    let copy = store.duplicate(&deck_id, &payload.new_id, &payload.new_name)?;
    Ok((StatusCode::CREATED, Json(copy)))
}

/// `POST /decks/{deckId}/cards`
pub async fn add_card(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
    Json(card): Json<Card>,
) -> Result<(StatusCode, Json<Card>)> {
    let store = state.decks.write().await;
    let card = store.add_card(&deck_id, card)?;
    Ok((StatusCode::CREATED, Json(card)))
}

/// `GET /decks/{deckId}/cards/{cardId}`
pub async fn get_card(
    State(state): State<AppState>,
    Path((deck_id, card_id)): Path<(String, String)>,
) -> Result<Json<Card>> {
    let store = state.decks.read().await;
    Ok(Json(store.get_card(&deck_id, &card_id)?))
}

/// `PUT /decks/{deckId}/cards/{cardId}`
pub async fn update_card(
    State(state): State<AppState>,
    Path((deck_id, card_id)): Path<(String, String)>,
    Json(patch): Json<CardPatch>,
) -> Result<Json<Card>> {
    let store = state.decks.write().await;
    Ok(Json(store.update_card(&deck_id, &card_id, patch)?))
}

/// `DELETE /decks/{deckId}/cards/{cardId}`
pub async fn delete_card(
    State(state): State<AppState>,
    Path((deck_id, card_id)): Path<(String, String)>,
) -> Result<Json<CardDeleted>> {
    let store = state.decks.write().await;
    let removed = store.delete_card(&deck_id, &card_id)?;
    Ok(Json(CardDeleted {
        message: "Card deleted successfully".to_string(),
        removed_card: removed,
    }))
}

/// `POST /decks/{deckId}/shuffle`
///
/// Random sample without replacement from the deck minus the exclusion
/// list. Returns at most as many cards as remain.
pub async fn shuffle(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
    Json(payload): Json<ShuffleRequest>,
) -> Result<Json<Vec<Card>>> {
    let deck = {
        let store = state.decks.read().await;
        store.get(&deck_id)?
    };
    let mut rng = state.rng.lock().await;
    let drawn = draw_from_deck(&deck, payload.count, &payload.excluded_card_ids, &mut rng);
    Ok(Json(drawn))
}
