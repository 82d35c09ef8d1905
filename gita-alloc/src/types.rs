//! Allocation result types
//!
//! A [`Unit`] is one physical room instance with the people placed in
//! it; an [`Allocation`] is the full plan for a trip. Both serialize as
//! plain data so the renderer and the UI consume the same shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared::models::{Participant, RoomCategory};
use uuid::Uuid;

/// One person inside a unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occupant {
    pub id: Uuid,
    pub full_name: String,
}

impl From<&Participant> for Occupant {
    fn from(p: &Participant) -> Self {
        Self {
            id: p.id,
            full_name: p.full_name.clone(),
        }
    }
}

/// One allocated room instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Global 1-based position across the whole plan, in emission order.
    pub index: u32,
    /// Owning travel group; `None` for units of lone travelers.
    pub group: Option<i32>,
    pub category: RoomCategory,
    pub occupants: Vec<Occupant>,
}

impl Unit {
    /// Whether the unit reached its category capacity. The tail unit of
    /// a bucket may legitimately stay partial.
    pub fn is_full(&self) -> bool {
        self.occupants.len() >= self.category.capacity()
    }
}

/// Complete rooming plan for a trip
///
/// Groups are keyed by group number so iteration is already in emission
/// order; ungrouped units follow after every group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub groups: BTreeMap<i32, Vec<Unit>>,
    pub ungrouped: Vec<Unit>,
}

impl Allocation {
    /// All units in emission order: groups ascending, then ungrouped.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.groups
            .values()
            .flat_map(|units| units.iter())
            .chain(self.ungrouped.iter())
    }

    pub fn unit_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum::<usize>() + self.ungrouped.len()
    }

    pub fn occupant_count(&self) -> usize {
        self.units().map(|u| u.occupants.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.ungrouped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(index: u32, group: Option<i32>, category: RoomCategory, names: &[&str]) -> Unit {
        Unit {
            index,
            group,
            category,
            occupants: names
                .iter()
                .map(|n| Occupant {
                    id: Uuid::new_v4(),
                    full_name: n.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_units_emission_order() {
        let mut allocation = Allocation::default();
        allocation.groups.insert(
            2,
            vec![unit(2, Some(2), RoomCategory::Doppia, &["A", "B"])],
        );
        allocation.groups.insert(
            1,
            vec![unit(1, Some(1), RoomCategory::Singola, &["C"])],
        );
        allocation
            .ungrouped
            .push(unit(3, None, RoomCategory::Altro, &["D"]));

        let indices: Vec<u32> = allocation.units().map(|u| u.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(allocation.unit_count(), 3);
        assert_eq!(allocation.occupant_count(), 4);
    }

    #[test]
    fn test_is_full_respects_capacity() {
        let full = unit(1, Some(1), RoomCategory::Doppia, &["A", "B"]);
        let partial = unit(2, Some(1), RoomCategory::Tripla, &["C"]);
        assert!(full.is_full());
        assert!(!partial.is_full());
    }

    #[test]
    fn test_empty_allocation() {
        let allocation = Allocation::default();
        assert!(allocation.is_empty());
        assert_eq!(allocation.unit_count(), 0);
    }
}
