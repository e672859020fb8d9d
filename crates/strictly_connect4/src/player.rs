//! Player identity: display name plus the marker that claims cells.

use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Single-character symbol identifying a player's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Marker(char);

impl Marker {
    /// Creates a marker from a character.
    pub fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Returns the underlying character.
    pub fn symbol(self) -> char {
        self.0
    }
}

impl From<char> for Marker {
    fn from(symbol: char) -> Self {
        Self(symbol)
    }
}

/// A participant in a session.
///
/// Players are immutable once created. Two players are the same seat when
/// their markers match; names are for display only.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Marker written into claimed cells.
    marker: Marker,
}

impl Player {
    /// Creates a new player.
    pub fn new(name: impl Into<String>, marker: impl Into<Marker>) -> Self {
        Self {
            name: name.into(),
            marker: marker.into(),
        }
    }

    /// Returns true if both players claim cells with the same marker.
    pub fn same_as(&self, other: &Player) -> bool {
        self.marker == other.marker
    }
}
