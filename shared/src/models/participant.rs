//! Participant model
//!
//! [`ParticipantRecord`] is the raw roster row as the query service
//! returns it (already filtered by trip); [`Participant`] is the
//! validated projection the allocator consumes. Conversion fails only on
//! structural violations: unknown categories degrade to `altro` and odd
//! group numbers pass through, per the upstream-validates contract.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::room::RoomCategory;
use crate::util;

// ── Text length limits ──────────────────────────────────────────────

/// Participant display names (same bound the data-entry dialogs enforce).
pub const MAX_NAME_LEN: usize = 200;

/// Legacy free-text notes.
pub const MAX_NOTE_LEN: usize = 500;

/// Raw roster row shape handed over by the query service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantRecord {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub full_name: String,
    /// Travel-group number; absent means the person travels alone.
    pub group_no: Option<i32>,
    /// Structured room-category column (richer data model).
    pub room_category: Option<String>,
    /// Legacy free-text notes; may still carry "Camera: <tipo>".
    pub notes: Option<String>,
}

/// Validated participant, ready for allocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: Uuid,
    pub full_name: String,
    /// Travel-group number, accepted as-is (non-positive values only
    /// affect ordering, never fail).
    pub group: Option<i32>,
    pub category: RoomCategory,
}

impl Participant {
    /// Surname used as the sort key on printed lists.
    pub fn surname(&self) -> &str {
        util::surname(&self.full_name)
    }
}

impl ParticipantRecord {
    /// Validate the raw row into a [`Participant`].
    ///
    /// Structural violations (empty or over-long name, oversized notes)
    /// are validation errors. An unknown or missing category is not: it
    /// resolves through the legacy notes parser and finally falls back to
    /// `altro` with a warning.
    pub fn into_participant(self) -> AppResult<Participant> {
        let name = self.full_name.trim();
        if name.is_empty() {
            return Err(AppError::validation(format!(
                "participant {} has an empty full_name",
                self.id
            )));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(AppError::validation(format!(
                "full_name is too long ({} chars, max {MAX_NAME_LEN})",
                name.len()
            )));
        }
        if let Some(notes) = &self.notes
            && notes.len() > MAX_NOTE_LEN
        {
            return Err(AppError::validation(format!(
                "notes is too long ({} chars, max {MAX_NOTE_LEN})",
                notes.len()
            )));
        }

        let category = resolve_category(
            self.room_category.as_deref(),
            self.notes.as_deref(),
            self.id,
        );

        Ok(Participant {
            id: self.id,
            full_name: name.to_string(),
            group: self.group_no,
            category,
        })
    }
}

/// Validate a whole fetched roster, preserving fetch order.
///
/// Fails on the first structurally invalid row; the caller surfaces the
/// message and fixes the row in the data-entry dialog.
pub fn validate_roster(records: Vec<ParticipantRecord>) -> AppResult<Vec<Participant>> {
    records
        .into_iter()
        .map(ParticipantRecord::into_participant)
        .collect()
}

/// Category resolution: structured column first, legacy notes second,
/// `altro` fallback last.
fn resolve_category(column: Option<&str>, notes: Option<&str>, id: Uuid) -> RoomCategory {
    if let Some(raw) = column
        && let Some(cat) = RoomCategory::parse(raw)
    {
        return cat;
    }
    if let Some(text) = notes
        && let Some(cat) = RoomCategory::from_notes(text)
    {
        return cat;
    }
    match column {
        Some(raw) => tracing::warn!(
            participant = %id,
            value = raw,
            "unknown room category, defaulting to altro"
        ),
        None => tracing::debug!(
            participant = %id,
            "no room category on record, defaulting to altro"
        ),
    }
    RoomCategory::Altro
}
