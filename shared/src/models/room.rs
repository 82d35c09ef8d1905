//! Room category model

use serde::{Deserialize, Serialize};

/// Room category (tipologia camera) with a fixed capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomCategory {
    Singola,
    Doppia,
    Matrimoniale,
    Tripla,
    Quadrupla,
    /// Anything the agency could not classify; capacity 1 so nobody is
    /// ever packed into a room the hotel did not confirm.
    Altro,
}

impl RoomCategory {
    /// Fixed canonical ordering, used by the `Canonical` category-order
    /// policy and as the probe order for the legacy notes parser.
    pub const CANONICAL: [RoomCategory; 6] = [
        RoomCategory::Singola,
        RoomCategory::Doppia,
        RoomCategory::Matrimoniale,
        RoomCategory::Tripla,
        RoomCategory::Quadrupla,
        RoomCategory::Altro,
    ];

    /// Number of beds. Static lookup, never zero.
    pub const fn capacity(self) -> usize {
        match self {
            RoomCategory::Singola => 1,
            RoomCategory::Doppia => 2,
            RoomCategory::Matrimoniale => 2,
            RoomCategory::Tripla => 3,
            RoomCategory::Quadrupla => 4,
            RoomCategory::Altro => 1,
        }
    }

    /// Label for printed documents.
    pub const fn label(self) -> &'static str {
        match self {
            RoomCategory::Singola => "Singola",
            RoomCategory::Doppia => "Doppia",
            RoomCategory::Matrimoniale => "Matrimoniale",
            RoomCategory::Tripla => "Tripla",
            RoomCategory::Quadrupla => "Quadrupla",
            RoomCategory::Altro => "Altro",
        }
    }

    /// Position in [`RoomCategory::CANONICAL`].
    pub fn canonical_rank(self) -> usize {
        Self::CANONICAL
            .iter()
            .position(|c| *c == self)
            .unwrap_or(Self::CANONICAL.len())
    }

    /// Parse the structured room-category column (case-insensitive,
    /// surrounding whitespace ignored). `None` for anything unknown.
    pub fn parse(value: &str) -> Option<RoomCategory> {
        match value.trim().to_lowercase().as_str() {
            "singola" => Some(RoomCategory::Singola),
            "doppia" => Some(RoomCategory::Doppia),
            "matrimoniale" => Some(RoomCategory::Matrimoniale),
            "tripla" => Some(RoomCategory::Tripla),
            "quadrupla" => Some(RoomCategory::Quadrupla),
            "altro" => Some(RoomCategory::Altro),
            _ => None,
        }
    }

    /// Recover a category from legacy free-text notes.
    ///
    /// Older rosters carried the room type inside the notes field
    /// ("Camera: doppia, arrivo in ritardo"), so this scans for the first
    /// category keyword in canonical order. Migration aid only: the
    /// structured column wins whenever it parses.
    pub fn from_notes(notes: &str) -> Option<RoomCategory> {
        let folded = notes.to_lowercase();
        Self::CANONICAL
            .into_iter()
            .find(|cat| folded.contains(&cat.label().to_lowercase()))
    }
}

impl Default for RoomCategory {
    fn default() -> Self {
        RoomCategory::Altro
    }
}
