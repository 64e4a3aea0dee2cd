//! HTTP surface tests: the axum router over a temp-dir store and a stub
//! interpretation collaborator.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tarot_table::{
    router, AppState, DeckStore, DrawRng, Interpreter, ReadingOrchestrator, Spread,
    SpreadCatalog, SpreadPosition,
};
use tempfile::TempDir;
use tower::ServiceExt;

struct StubInterpreter;

#[async_trait]
impl Interpreter for StubInterpreter {
    async fn interpret(&self, _prompt: &str) -> anyhow::Result<String> {
        Ok("The cards are kind.".to_string())
    }
}

fn three_card_spread() -> Spread {
    let position = |id: &str, x: f64| SpreadPosition {
        id: id.to_string(),
        name: id.to_string(),
        meaning: String::new(),
        x,
        y: 300.0,
    };
    Spread {
        id: "three-card".to_string(),
        name: "Three Card".to_string(),
        description: String::new(),
        positions: vec![
            position("past", 150.0),
            position("present", 400.0),
            position("future", 650.0),
        ],
    }
}

fn app() -> (TempDir, Router) {
    let dir = TempDir::new().unwrap();
    let decks = DeckStore::open(dir.path()).unwrap();
    let spreads = SpreadCatalog::from_spreads(vec![three_card_spread()]);
    let orchestrator = ReadingOrchestrator::new(Arc::new(StubInterpreter));
    let state = AppState::new(decks, spreads, orchestrator, DrawRng::new(42));
    (dir, router(state))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_deck_crud_flow() {
    let (_dir, app) = app();

    // create
    let (status, body) = send(
        &app,
        "POST",
        "/decks",
        Some(json!({"id": "tarot-test", "name": "Test"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "tarot-test");
    assert_eq!(body["cards"], json!([]));

    // list
    let (status, body) = send(&app, "GET", "/decks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["cardCount"], 0);
    assert_eq!(body[0]["fileName"], "tarot-test.json");

    // update
    let (status, body) = send(
        &app,
        "PUT",
        "/decks/tarot-test",
        Some(json!({"description": "updated"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "updated");
    assert_eq!(body["name"], "Test");

    // delete with backup
    let (status, body) = send(&app, "DELETE", "/decks/tarot-test", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["backupLocation"]
        .as_str()
        .unwrap()
        .ends_with("tarot-test.backup.json"));

    let (status, _) = send(&app, "GET", "/decks/tarot-test", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_deck_validation() {
    let (_dir, app) = app();

    let (status, body) = send(
        &app,
        "POST",
        "/decks",
        Some(json!({"id": "not-tarot", "name": "Bad"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");

    send(
        &app,
        "POST",
        "/decks",
        Some(json!({"id": "tarot-test", "name": "Test"})),
    )
    .await;
    let (status, body) = send(
        &app,
        "POST",
        "/decks",
        Some(json!({"id": "tarot-test", "name": "Again"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");
}

#[tokio::test]
async fn test_card_crud_flow() {
    let (_dir, app) = app();
    send(
        &app,
        "POST",
        "/decks",
        Some(json!({"id": "tarot-test", "name": "Test"})),
    )
    .await;

    // add with defaults
    let (status, body) = send(
        &app,
        "POST",
        "/decks/tarot-test/cards",
        Some(json!({"id": "c1", "name": "The Fool"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["arcana"], "major");
    assert_eq!(body["keywords"], json!([]));
    assert!(body["number"].is_null());

    // duplicate card id
    let (status, _) = send(
        &app,
        "POST",
        "/decks/tarot-test/cards",
        Some(json!({"id": "c1", "name": "Impostor"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // update keeps id even when the payload tries to change it
    let (status, body) = send(
        &app,
        "PUT",
        "/decks/tarot-test/cards/c1",
        Some(json!({"id": "c99", "name": "Renamed"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "c1");
    assert_eq!(body["name"], "Renamed");

    // fetch single card
    let (status, body) = send(&app, "GET", "/decks/tarot-test/cards/c1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Renamed");

    // delete returns the removed card
    let (status, body) = send(&app, "DELETE", "/decks/tarot-test/cards/c1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["removedCard"]["id"], "c1");

    let (status, _) = send(&app, "DELETE", "/decks/tarot-test/cards/c1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_deck_endpoint() {
    let (_dir, app) = app();
    send(
        &app,
        "POST",
        "/decks",
        Some(json!({"id": "tarot-test", "name": "Test", "description": "orig"})),
    )
    .await;
    send(
        &app,
        "POST",
        "/decks/tarot-test/cards",
        Some(json!({"id": "test-01", "name": "The Fool"})),
    )
    .await;

    let (status, body) = send(
        &app,
        "POST",
        "/decks/tarot-test/duplicate",
        Some(json!({"newId": "tarot-test2", "newName": "Test Copy"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["description"], "orig (Copy)");
    assert_eq!(body["cards"][0]["id"], "test2-01");
}

#[tokio::test]
async fn test_shuffle_endpoint_respects_exclusions() {
    let (_dir, app) = app();
    send(
        &app,
        "POST",
        "/decks",
        Some(json!({"id": "tarot-test", "name": "Test"})),
    )
    .await;
    for i in 0..5 {
        send(
            &app,
            "POST",
            "/decks/tarot-test/cards",
            Some(json!({"id": format!("c{i}"), "name": format!("Card {i}")})),
        )
        .await;
    }

    let (status, body) = send(
        &app,
        "POST",
        "/decks/tarot-test/shuffle",
        Some(json!({"count": 10, "excludedCardIds": ["c0", "c1"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let drawn = body.as_array().unwrap();
    assert_eq!(drawn.len(), 3);
    for card in drawn {
        let id = card["id"].as_str().unwrap();
        assert_ne!(id, "c0");
        assert_ne!(id, "c1");
    }
}

#[tokio::test]
async fn test_spread_endpoints() {
    let (_dir, app) = app();

    let (status, body) = send(&app, "GET", "/spreads", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, "GET", "/spreads/three-card", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["positions"].as_array().unwrap().len(), 3);

    let (status, _) = send(&app, "GET", "/spreads/celtic-cross", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reading_endpoint() {
    let (_dir, app) = app();

    let card = |id: &str, revealed: bool| {
        json!({
            "cardId": id,
            "deckId": "tarot-test",
            "card": {"id": id, "name": format!("Name {id}")},
            "x": 100.0,
            "y": 300.0,
            "isRevealed": revealed,
            "isReversed": false
        })
    };

    // success with a revealed card
    let (status, body) = send(
        &app,
        "POST",
        "/reading",
        Some(json!({
            "deckId": "tarot-test",
            "spreadId": "three-card",
            "cards": [card("c1", true), card("c2", false)]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["interpretation"], "The cards are kind.");
    assert!(body["timestamp"].is_string());

    // nothing revealed -> rejected before any collaborator call
    let (status, body) = send(
        &app,
        "POST",
        "/reading",
        Some(json!({
            "deckId": "tarot-test",
            "cards": [card("c1", false)]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");

    // unknown spread id
    let (status, _) = send(
        &app,
        "POST",
        "/reading",
        Some(json!({
            "deckId": "tarot-test",
            "spreadId": "celtic-cross",
            "cards": [card("c1", true)]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_placeholder_is_stable() {
    let (_dir, app) = app();

    let (status, first) = send(&app, "GET", "/card-placeholder/tarot-test/c1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = send(&app, "GET", "/card-placeholder/tarot-test/c1", None).await;
    let (_, other) = send(&app, "GET", "/card-placeholder/tarot-test/c2", None).await;

    let url = first["imageUrl"].as_str().unwrap();
    assert!(url.starts_with("data:image/svg+xml;base64,"));
    assert_eq!(first["imageUrl"], second["imageUrl"]);
    assert_ne!(first["imageUrl"], other["imageUrl"]);
}
