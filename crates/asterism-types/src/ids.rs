//! Typed star identifier.
//!
//! Star IDs are plain integers on the wire. They are only unique within one
//! constellation, so a `StarId` never leaves the constellation that owns it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A star identifier, unique within its constellation.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarId(i32);

impl StarId {
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw integer as it appears in the data document.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for StarId {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for StarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for StarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StarId({})", self.0)
    }
}
