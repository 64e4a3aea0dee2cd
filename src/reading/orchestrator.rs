//! Reading orchestration.
//!
//! Turns the revealed cards on the table into an interpretation request:
//! orders them the way a reader scans the spread (left to right, top to
//! bottom), renders one description line per card, and delegates the
//! finished prompt to the external [`Interpreter`] collaborator.

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;

use crate::error::{Error, Result};
use crate::table::PlacedCard;

use super::interpreter::Interpreter;

/// Vertical size of one visual row when sorting cards into reading order.
/// Cards whose y coordinates fall in the same band count as one row.
const ROW_BAND: f64 = 120.0;

/// A generated reading.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// Narrative interpretation text.
    pub interpretation: String,
    /// When the reading was generated.
    pub timestamp: DateTime<Utc>,
}

/// Whether a reading can be generated: at least one revealed card.
#[must_use]
pub fn can_generate(cards: &[PlacedCard]) -> bool {
    cards.iter().any(|c| c.is_revealed)
}

/// Sort revealed cards into visual reading order.
///
/// Rows are y-coordinate bands scanned top to bottom; within a row,
/// cards go left to right. The sort is stable, so cards stacked on the
/// same point keep their placement order.
#[must_use]
pub fn reading_order(cards: &[PlacedCard]) -> Vec<&PlacedCard> {
    let mut ordered: Vec<&PlacedCard> = cards.iter().collect();
    ordered.sort_by(|a, b| {
        row_of(a.y)
            .cmp(&row_of(b.y))
            .then(a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
    });
    ordered
}

fn row_of(y: f64) -> i64 {
    (y / ROW_BAND).floor() as i64
}

/// Render the prompt sent to the interpretation collaborator.
///
/// Only revealed cards are described. When a spread with positions is
/// active the cards are sorted into reading order first; a free-form
/// table keeps placement order.
#[must_use]
pub fn build_prompt(
    deck_id: &str,
    spread_id: Option<&str>,
    cards: &[PlacedCard],
    spread_has_positions: bool,
) -> String {
    let revealed: Vec<PlacedCard> = cards.iter().filter(|c| c.is_revealed).cloned().collect();
    let ordered: Vec<&PlacedCard> = if spread_has_positions {
        reading_order(&revealed)
    } else {
        revealed.iter().collect()
    };
    render_prompt(deck_id, spread_id, &ordered)
}

fn render_prompt(deck_id: &str, spread_id: Option<&str>, ordered: &[&PlacedCard]) -> String {
    let mut lines = String::new();
    for (index, placed) in ordered.iter().enumerate() {
        let slot = if placed.position_id.is_some() {
            format!("Position {}", index + 1)
        } else {
            format!("Card {}", index + 1)
        };
        let orientation = if placed.is_reversed {
            "(Reversed)"
        } else {
            "(Upright)"
        };
        let detail = placed
            .card
            .as_ref()
            .map(|c| format!("{}: {}", c.name, c.description))
            .unwrap_or_else(|| placed.card_id.clone());
        lines.push_str(&format!("{slot}: {detail} {orientation}\n"));
    }

    format!(
        "You are a thoughtful tarot reader. Interpret the following spread for the querent.\n\
         \n\
         READING CONTEXT:\n\
         - Deck: {deck_id}\n\
         - Spread: {spread}\n\
         - Cards drawn: {count}\n\
         - Cards are listed in reading order: left to right, top to bottom.\n\
         \n\
         CARDS (in reading order):\n\
         {lines}\n\
         Describe the meaning of each card in its place, then weave them into one \
         coherent narrative for the present moment. Close with a short affirmation.",
        spread = spread_id.unwrap_or("free"),
        count = ordered.len(),
    )
}

/// Delegates assembled reading requests to the interpretation collaborator.
pub struct ReadingOrchestrator {
    interpreter: Arc<dyn Interpreter>,
}

impl ReadingOrchestrator {
    /// Create an orchestrator over the given collaborator.
    #[must_use]
    pub fn new(interpreter: Arc<dyn Interpreter>) -> Self {
        Self { interpreter }
    }

    /// Generate a reading for the given table state.
    ///
    /// Fails with [`Error::InvalidInput`] when no card is revealed and
    /// with [`Error::GenerationFailed`] (carrying the underlying message,
    /// no retry) when the collaborator errors.
    pub async fn generate(
        &self,
        deck_id: &str,
        spread_id: Option<&str>,
        spread_has_positions: bool,
        cards: &[PlacedCard],
    ) -> Result<Reading> {
        if !can_generate(cards) {
            return Err(Error::InvalidInput(
                "at least one revealed card is required for a reading".to_string(),
            ));
        }

        let prompt = build_prompt(deck_id, spread_id, cards, spread_has_positions);
        let interpretation = self.interpreter.interpret(&prompt).await.map_err(|e| {
            error!(error = %e, "interpretation collaborator failed");
            Error::GenerationFailed(e.to_string())
        })?;

        Ok(Reading {
            interpretation,
            timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Card;
    use async_trait::async_trait;

    fn placed(card_id: &str, x: f64, y: f64, revealed: bool) -> PlacedCard {
        PlacedCard {
            card_id: card_id.to_string(),
            deck_id: "tarot-test".to_string(),
            card: Some(Card::new(card_id, format!("Name {card_id}"))),
            position_id: None,
            x,
            y,
            is_revealed: revealed,
            is_reversed: false,
            image_url: None,
        }
    }

    struct EchoInterpreter;

    #[async_trait]
    impl Interpreter for EchoInterpreter {
        async fn interpret(&self, prompt: &str) -> anyhow::Result<String> {
            Ok(prompt.to_string())
        }
    }

    struct FailingInterpreter;

    #[async_trait]
    impl Interpreter for FailingInterpreter {
        async fn interpret(&self, _prompt: &str) -> anyhow::Result<String> {
            anyhow::bail!("upstream quota exceeded")
        }
    }

    #[test]
    fn test_can_generate_requires_a_revealed_card() {
        assert!(!can_generate(&[]));
        assert!(!can_generate(&[placed("c1", 0.0, 0.0, false)]));
        assert!(can_generate(&[
            placed("c1", 0.0, 0.0, false),
            placed("c2", 0.0, 0.0, true),
        ]));
    }

    #[test]
    fn test_reading_order_rows_then_columns() {
        let cards = vec![
            placed("bottom-right", 500.0, 400.0, true),
            placed("top-right", 500.0, 100.0, true),
            placed("top-left", 100.0, 100.0, true),
            placed("bottom-left", 100.0, 400.0, true),
        ];

        let ordered: Vec<&str> = reading_order(&cards)
            .iter()
            .map(|c| c.card_id.as_str())
            .collect();

        assert_eq!(
            ordered,
            vec!["top-left", "top-right", "bottom-left", "bottom-right"]
        );
    }

    #[test]
    fn test_reading_order_same_band_sorts_by_x() {
        // small y jitter within one band must not override left-to-right
        let cards = vec![
            placed("right", 500.0, 310.0, true),
            placed("left", 100.0, 330.0, true),
            placed("middle", 300.0, 305.0, true),
        ];

        let ordered: Vec<&str> = reading_order(&cards)
            .iter()
            .map(|c| c.card_id.as_str())
            .collect();

        assert_eq!(ordered, vec!["left", "middle", "right"]);
    }

    #[test]
    fn test_prompt_skips_hidden_cards() {
        let cards = vec![
            placed("shown", 0.0, 0.0, true),
            placed("hidden", 10.0, 0.0, false),
        ];

        let prompt = build_prompt("tarot-test", None, &cards, false);
        assert!(prompt.contains("Name shown"));
        assert!(!prompt.contains("Name hidden"));
        assert!(prompt.contains("Cards drawn: 1"));
    }

    #[test]
    fn test_prompt_marks_orientation() {
        let mut card = placed("c1", 0.0, 0.0, true);
        card.is_reversed = true;

        let prompt = build_prompt("tarot-test", Some("three-card"), &[card], true);
        assert!(prompt.contains("(Reversed)"));
        assert!(prompt.contains("Spread: three-card"));
    }

    #[test]
    fn test_prompt_free_spread_label() {
        let prompt = build_prompt("tarot-test", None, &[placed("c1", 0.0, 0.0, true)], false);
        assert!(prompt.contains("Spread: free"));
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_table() {
        let orchestrator = ReadingOrchestrator::new(Arc::new(EchoInterpreter));

        let err = orchestrator
            .generate("tarot-test", None, false, &[])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_generate_surfaces_collaborator_message() {
        let orchestrator = ReadingOrchestrator::new(Arc::new(FailingInterpreter));
        let cards = vec![placed("c1", 0.0, 0.0, true)];

        let err = orchestrator
            .generate("tarot-test", None, false, &cards)
            .await
            .unwrap_err();

        match err {
            Error::GenerationFailed(msg) => assert!(msg.contains("upstream quota exceeded")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_success() {
        let orchestrator = ReadingOrchestrator::new(Arc::new(EchoInterpreter));
        let cards = vec![placed("c1", 0.0, 0.0, true)];

        let reading = orchestrator
            .generate("tarot-test", Some("three-card"), true, &cards)
            .await
            .unwrap();

        assert!(reading.interpretation.contains("Deck: tarot-test"));
    }
}
