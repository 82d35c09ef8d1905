//! Seat Geometry Mapper
//!
//! Converts a coach's (row, column) layout into the linear seat numbers
//! printed on the actual seats, and classifies each seat for the
//! clickable assignment grid.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use shared::models::BusType;
use tracing::debug;

/// Linear seat number for a 1-indexed (row, column) position.
///
/// No bounds checking: callers iterate only the valid positions of the
/// configured layout.
pub fn seat_number(row: u32, column: u32, seats_per_row: u32) -> u32 {
    (row - 1) * seats_per_row + column
}

/// Display state of one seat on the assignment grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatState {
    Free,
    Occupied,
    Selected,
}

/// Classify a seat.
///
/// Selection wins over occupancy: a user re-picking the seat they
/// already hold must see it as theirs, not as blocked.
pub fn seat_state(seat: u32, occupied: &BTreeSet<u32>, selected: Option<u32>) -> SeatState {
    if selected == Some(seat) {
        SeatState::Selected
    } else if occupied.contains(&seat) {
        SeatState::Occupied
    } else {
        SeatState::Free
    }
}

/// One cell of the rendered grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeatCell {
    pub number: u32,
    pub state: SeatState,
}

/// Row-by-row grid view, ready for the frontend to draw buttons from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatMapView {
    pub rows: Vec<Vec<SeatCell>>,
    pub total_seats: u32,
}

/// Build the full grid for a coach layout.
///
/// Callers without a loaded bus configuration render an "unavailable"
/// state instead of calling in; geometry here is assumed valid.
pub fn build_seat_map(
    bus: &BusType,
    occupied: &BTreeSet<u32>,
    selected: Option<u32>,
) -> SeatMapView {
    let mut rows = Vec::with_capacity(bus.rows as usize);
    for row in 1..=bus.rows {
        let width = bus.seats_in_row(row);
        let mut cells = Vec::with_capacity(width as usize);
        for column in 1..=width {
            let number = seat_number(row, column, bus.seats_per_row);
            cells.push(SeatCell {
                number,
                state: seat_state(number, occupied, selected),
            });
        }
        rows.push(cells);
    }

    debug!(
        bus = %bus.name,
        occupied = occupied.len(),
        "seat map built"
    );
    SeatMapView {
        rows,
        total_seats: bus.total_seats(),
    }
}
