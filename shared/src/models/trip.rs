//! Trip model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trip master data shown on printed document headers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Hotel name, when the trip has a fixed one.
    pub hotel: Option<String>,
}

impl Trip {
    /// Nights between departure and return; 0 when the dates are
    /// inverted or equal (day trips).
    pub fn nights(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days();
        days.max(0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(start: (i32, u32, u32), end: (i32, u32, u32)) -> Trip {
        Trip {
            id: Uuid::new_v4(),
            title: "Pellegrinaggio a Lourdes".to_string(),
            destination: "Lourdes".to_string(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            hotel: None,
        }
    }

    #[test]
    fn test_nights() {
        assert_eq!(trip((2026, 5, 4), (2026, 5, 8)).nights(), 4);
    }

    #[test]
    fn test_day_trip_has_zero_nights() {
        assert_eq!(trip((2026, 5, 4), (2026, 5, 4)).nights(), 0);
        // Inverted dates clamp instead of going negative.
        assert_eq!(trip((2026, 5, 8), (2026, 5, 4)).nights(), 0);
    }
}
