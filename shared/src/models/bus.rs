//! Bus model
//!
//! A [`BusType`] is pure geometry: row count, seats per regular row and
//! the (often wider) back row. Seat numbers are derived from geometry,
//! never stored, so the same assignments render correctly on any layout
//! revision.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Coach layout: `rows - 1` regular rows plus a back row of its own width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusType {
    pub name: String,
    pub rows: u32,
    pub seats_per_row: u32,
    /// Seat count of the back row; coaches often seat five across the
    /// back where the aisle ends.
    pub last_row_seats: u32,
}

impl BusType {
    /// Build a layout, rejecting degenerate geometry.
    pub fn new(
        name: impl Into<String>,
        rows: u32,
        seats_per_row: u32,
        last_row_seats: u32,
    ) -> AppResult<Self> {
        if rows == 0 {
            return Err(AppError::invalid_config("bus must have at least one row"));
        }
        if seats_per_row == 0 {
            return Err(AppError::invalid_config(
                "bus must have at least one seat per row",
            ));
        }
        if last_row_seats == 0 {
            return Err(AppError::invalid_config(
                "bus back row must have at least one seat",
            ));
        }
        Ok(Self {
            name: name.into(),
            rows,
            seats_per_row,
            last_row_seats,
        })
    }

    /// Layout where every row, back row included, has the same width.
    pub fn rectangular(name: impl Into<String>, rows: u32, seats_per_row: u32) -> AppResult<Self> {
        Self::new(name, rows, seats_per_row, seats_per_row)
    }

    /// The fleet's standard 53-seat Gran Turismo coach: twelve rows of
    /// four plus a five-seat back row.
    pub fn gran_turismo_53() -> Self {
        Self {
            name: "Gran Turismo 53".to_string(),
            rows: 13,
            seats_per_row: 4,
            last_row_seats: 5,
        }
    }

    /// Seat count of a given 1-based row; 0 for rows outside the layout.
    pub fn seats_in_row(&self, row: u32) -> u32 {
        if row == 0 || row > self.rows {
            0
        } else if row == self.rows {
            self.last_row_seats
        } else {
            self.seats_per_row
        }
    }

    /// Highest seat number on this layout.
    pub fn total_seats(&self) -> u32 {
        (self.rows - 1) * self.seats_per_row + self.last_row_seats
    }
}

/// One participant holding one seat on a trip's coach
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatAssignment {
    pub participant_id: Uuid,
    pub seat: u32,
}

/// Collect the occupied seat numbers out of stored assignments.
pub fn occupied_seats(assignments: &[SeatAssignment]) -> BTreeSet<u32> {
    assignments.iter().map(|a| a.seat).collect()
}
