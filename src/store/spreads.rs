//! Read-only spread catalog.
//!
//! Spreads are authored out-of-band in a single `spreads.json` file and
//! loaded once at startup. There is no write path.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::model::Spread;

/// The fixed set of named spreads.
#[derive(Clone, Debug, Default)]
pub struct SpreadCatalog {
    spreads: Vec<Spread>,
}

impl SpreadCatalog {
    /// Load the catalog from a `spreads.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            Error::StorageUnavailable(format!("cannot read {}: {e}", path.display()))
        })?;
        let spreads: Vec<Spread> = serde_json::from_str(&raw).map_err(|e| {
            Error::StorageUnavailable(format!("spread file {} is corrupt: {e}", path.display()))
        })?;
        info!(count = spreads.len(), "loaded spreads");
        Ok(Self { spreads })
    }

    /// Build a catalog from spreads already in memory. Used by tests.
    #[must_use]
    pub fn from_spreads(spreads: Vec<Spread>) -> Self {
        Self { spreads }
    }

    /// All spreads, in file order.
    #[must_use]
    pub fn list_all(&self) -> &[Spread] {
        &self.spreads
    }

    /// Look up a spread by id.
    pub fn get_by_id(&self, spread_id: &str) -> Result<&Spread> {
        self.spreads
            .iter()
            .find(|s| s.id == spread_id)
            .ok_or_else(|| Error::not_found(format!("spread {spread_id}")))
    }
}
