//! Route table.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{decks, reading, spreads};
use super::state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/decks", get(decks::list).post(decks::create))
        .route(
            "/decks/:deck_id",
            get(decks::get_deck)
                .put(decks::update)
                .delete(decks::delete_deck),
        )
        .route("/decks/:deck_id/duplicate", post(decks::duplicate))
        .route("/decks/:deck_id/cards", post(decks::add_card))
        .route(
            "/decks/:deck_id/cards/:card_id",
            get(decks::get_card)
                .put(decks::update_card)
                .delete(decks::delete_card),
        )
        .route("/decks/:deck_id/shuffle", post(decks::shuffle))
        .route("/spreads", get(spreads::list))
        .route("/spreads/:spread_id", get(spreads::get_spread))
        .route("/reading", post(reading::generate))
        .route(
            "/card-placeholder/:deck_id/:card_id",
            get(reading::placeholder),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
