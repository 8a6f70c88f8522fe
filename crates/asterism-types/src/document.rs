//! Data document loading and constellation selection.
//!
//! The document is JSON of the form `{ "items": [Constellation, ...] }`.
//! Exactly one constellation is processed per run; [`Selector`] picks it.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Constellation;

/// Errors from loading a data document or selecting a constellation.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid constellation document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but holds no constellations.
    #[error("document contains no constellations")]
    NoConstellations,

    #[error("no constellation matches {0}")]
    UnknownConstellation(Selector),
}

/// Which constellation of a document to process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selector {
    /// The first item (what the document author put on top).
    #[default]
    First,
    /// Zero-based position in `items`.
    Index(usize),
    /// Exact name match; first match wins.
    Name(String),
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::First => write!(f, "first item"),
            Selector::Index(i) => write!(f, "index {i}"),
            Selector::Name(name) => write!(f, "name {name:?}"),
        }
    }
}

impl FromStr for Selector {
    type Err = std::convert::Infallible;

    /// All-digit input selects by index, anything else by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<usize>() {
            Ok(i) => Selector::Index(i),
            Err(_) => Selector::Name(s.to_string()),
        })
    }
}

/// The parsed data document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstellationData {
    #[serde(default)]
    pub items: Vec<Constellation>,
}

impl ConstellationData {
    /// Parse a document from JSON text.
    ///
    /// Dangling pairs and duplicate star IDs are logged, not rejected.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let data: ConstellationData = serde_json::from_str(text)?;
        for c in &data.items {
            let dupes = c.duplicate_star_ids();
            if !dupes.is_empty() {
                tracing::warn!(constellation = %c.name, ?dupes, "duplicate star ids, later stars win");
            }
            let self_loops = c.pairs.iter().filter(|p| p.is_self_loop()).count();
            if self_loops > 0 {
                tracing::debug!(constellation = %c.name, self_loops, "self-loop pairs are never drawn");
            }
            let dangling = c.dangling_pairs().count();
            if dangling > 0 {
                tracing::warn!(
                    constellation = %c.name,
                    dangling,
                    "pairs reference unknown stars and will be skipped"
                );
            }
        }
        Ok(data)
    }

    /// Read and parse a document from disk.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let data = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), count = data.items.len(), "loaded constellation document");
        Ok(data)
    }

    /// Pick one constellation.
    pub fn select(&self, selector: &Selector) -> Result<&Constellation, LoadError> {
        if self.items.is_empty() {
            return Err(LoadError::NoConstellations);
        }
        let found = match selector {
            Selector::First => self.items.first(),
            Selector::Index(i) => self.items.get(*i),
            Selector::Name(name) => self.items.iter().find(|c| &c.name == name),
        };
        found.ok_or_else(|| LoadError::UnknownConstellation(selector.clone()))
    }
}
