//! Spread layouts - named arrangements of card positions on the table.
//!
//! Spreads are authored out-of-band and read-only at runtime. Position
//! coordinates are anchors on an abstract table canvas; a card dropped
//! near an anchor snaps onto it.

use serde::{Deserialize, Serialize};

/// Distance within which a dropped card snaps to a position anchor.
pub const SNAP_RADIUS: f64 = 60.0;

/// One slot of a spread layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadPosition {
    pub id: String,
    pub name: String,
    /// What a card landing here speaks to (e.g. "the past").
    pub meaning: String,
    pub x: f64,
    pub y: f64,
}

/// A named card layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spread {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub positions: Vec<SpreadPosition>,
}

impl Spread {
    /// Find the position a drop at `(x, y)` snaps to, if any.
    ///
    /// Positions are scanned in declaration order and the first anchor
    /// within [`SNAP_RADIUS`] wins. There is no search for the globally
    /// nearest anchor; spreads are authored with anchors far enough apart
    /// that the distinction does not matter.
    #[must_use]
    pub fn snap(&self, x: f64, y: f64) -> Option<&SpreadPosition> {
        self.positions.iter().find(|p| {
            let dx = x - p.x;
            let dy = y - p.y;
            (dx * dx + dy * dy).sqrt() < SNAP_RADIUS
        })
    }

    /// Look up a position by id.
    #[must_use]
    pub fn position(&self, position_id: &str) -> Option<&SpreadPosition> {
        self.positions.iter().find(|p| p.id == position_id)
    }
}
