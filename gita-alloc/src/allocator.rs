//! Room Allocator
//!
//! Partitions a trip roster into rooms, keeping travel groups together
//! and honoring per-category capacity. Output is fully deterministic:
//! the same roster always produces the same plan, so reprinting a
//! rooming list never reshuffles rooms.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared::models::{Participant, RoomCategory};
use shared::util;
use tracing::{debug, instrument};

use crate::types::{Allocation, Occupant, Unit};

/// How categories are ordered inside one group's block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryOrder {
    /// Categories appear in the order the group's roster first mentions
    /// them. Matches what long-time staff are used to seeing.
    #[default]
    FirstEncountered,
    /// Fixed order: singola, doppia, matrimoniale, tripla, quadrupla,
    /// altro.
    Canonical,
}

/// Allocation tuning, injected by the caller
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AllocOptions {
    #[serde(default)]
    pub category_order: CategoryOrder,
}

/// Room Allocator - builds the rooming plan for a trip roster
#[derive(Debug, Clone)]
pub struct RoomAllocator {
    options: AllocOptions,
}

impl RoomAllocator {
    pub fn new(options: AllocOptions) -> Self {
        Self { options }
    }

    /// Allocate a roster into rooms.
    ///
    /// # Arguments
    /// * `people` - Validated roster in fetch order (ties in the surname
    ///   sort keep this order)
    ///
    /// # Returns
    /// The complete plan: grouped units keyed by group number plus the
    /// singleton units of lone travelers, indexed 1..N in emission order.
    #[instrument(skip_all, fields(people = people.len()))]
    pub fn allocate(&self, people: &[Participant]) -> Allocation {
        let mut grouped: BTreeMap<i32, Vec<&Participant>> = BTreeMap::new();
        let mut loners: Vec<&Participant> = Vec::new();
        for person in people {
            match person.group {
                Some(number) => grouped.entry(number).or_default().push(person),
                None => loners.push(person),
            }
        }

        let mut allocation = Allocation::default();
        let mut next_index: u32 = 1;

        for (group_number, members) in grouped {
            let mut units = Vec::new();
            for (category, mut bucket) in self.bucket_by_category(members) {
                // Stable sort: people with the same surname keep fetch order.
                bucket.sort_by_cached_key(|p| util::surname_key(&p.full_name));
                for chunk in bucket.chunks(category.capacity()) {
                    units.push(make_unit(next_index, Some(group_number), category, chunk));
                    next_index += 1;
                }
            }
            allocation.groups.insert(group_number, units);
        }

        // A person without a group never shares a room with strangers,
        // whatever their category's capacity says.
        loners.sort_by_cached_key(|p| util::surname_key(&p.full_name));
        for person in loners {
            allocation
                .ungrouped
                .push(make_unit(next_index, None, person.category, &[person]));
            next_index += 1;
        }

        debug!(
            groups = allocation.groups.len(),
            units = allocation.unit_count(),
            ungrouped = allocation.ungrouped.len(),
            "roster allocated"
        );
        allocation
    }

    /// Split one group's members into per-category buckets, ordered per
    /// the configured policy.
    fn bucket_by_category<'a>(
        &self,
        members: Vec<&'a Participant>,
    ) -> Vec<(RoomCategory, Vec<&'a Participant>)> {
        let mut buckets: Vec<(RoomCategory, Vec<&'a Participant>)> = Vec::new();
        for person in members {
            match buckets.iter_mut().find(|(c, _)| *c == person.category) {
                Some((_, bucket)) => bucket.push(person),
                None => buckets.push((person.category, vec![person])),
            }
        }
        if self.options.category_order == CategoryOrder::Canonical {
            buckets.sort_by_key(|(category, _)| category.canonical_rank());
        }
        buckets
    }
}

fn make_unit(
    index: u32,
    group: Option<i32>,
    category: RoomCategory,
    people: &[&Participant],
) -> Unit {
    Unit {
        index,
        group,
        category,
        occupants: people.iter().map(|p| Occupant::from(*p)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn participant(name: &str, group: Option<i32>, category: RoomCategory) -> Participant {
        Participant {
            id: Uuid::new_v4(),
            full_name: name.to_string(),
            group,
            category,
        }
    }

    fn allocate(people: &[Participant]) -> Allocation {
        RoomAllocator::new(AllocOptions::default()).allocate(people)
    }

    fn names(unit: &Unit) -> Vec<&str> {
        unit.occupants.iter().map(|o| o.full_name.as_str()).collect()
    }

    #[test]
    fn test_group_splits_into_capacity_chunks() {
        // Five people in one group wanting doubles: two full rooms plus
        // a partial third.
        let people = vec![
            participant("Anna Bianchi", Some(1), RoomCategory::Doppia),
            participant("Carlo Conti", Some(1), RoomCategory::Doppia),
            participant("Dario Durante", Some(1), RoomCategory::Doppia),
            participant("Elena Ferri", Some(1), RoomCategory::Doppia),
            participant("Giulia Gallo", Some(1), RoomCategory::Doppia),
        ];
        let allocation = allocate(&people);

        let units = &allocation.groups[&1];
        assert_eq!(units.len(), 3);
        assert_eq!(names(&units[0]), vec!["Anna Bianchi", "Carlo Conti"]);
        assert_eq!(names(&units[1]), vec!["Dario Durante", "Elena Ferri"]);
        assert_eq!(names(&units[2]), vec!["Giulia Gallo"]);
        assert!(!units[2].is_full());
        assert!(allocation.ungrouped.is_empty());
    }

    #[test]
    fn test_lone_travelers_never_share() {
        // Capacity 3 notwithstanding, no group means a room each.
        let people = vec![
            participant("Paolo Verdi", None, RoomCategory::Tripla),
            participant("Marco Neri", None, RoomCategory::Tripla),
        ];
        let allocation = allocate(&people);

        assert!(allocation.groups.is_empty());
        assert_eq!(allocation.ungrouped.len(), 2);
        for unit in &allocation.ungrouped {
            assert_eq!(unit.occupants.len(), 1);
            assert_eq!(unit.category, RoomCategory::Tripla);
        }
        // Loners sort by surname too: Neri before Verdi.
        assert_eq!(names(&allocation.ungrouped[0]), vec!["Marco Neri"]);
        assert_eq!(names(&allocation.ungrouped[1]), vec!["Paolo Verdi"]);
    }

    #[test]
    fn test_empty_roster() {
        let allocation = allocate(&[]);
        assert!(allocation.is_empty());
    }

    #[test]
    fn test_occupants_sorted_by_surname_with_accents() {
        // Italian collation: Pèrez sorts with Perez, between Neri and
        // Verdi, not after Z.
        let people = vec![
            participant("Paolo Verdi", Some(1), RoomCategory::Tripla),
            participant("José Pèrez", Some(1), RoomCategory::Tripla),
            participant("Marco Neri", Some(1), RoomCategory::Tripla),
        ];
        let allocation = allocate(&people);

        let units = &allocation.groups[&1];
        assert_eq!(units.len(), 1);
        assert_eq!(
            names(&units[0]),
            vec!["Marco Neri", "José Pèrez", "Paolo Verdi"]
        );
    }

    #[test]
    fn test_first_encountered_category_order() {
        // Group 1's roster mentions tripla before singola, so the
        // tripla block prints first.
        let people = vec![
            participant("Anna Bianchi", Some(1), RoomCategory::Tripla),
            participant("Carlo Conti", Some(1), RoomCategory::Singola),
            participant("Dario Durante", Some(1), RoomCategory::Tripla),
        ];
        let allocation = allocate(&people);

        let categories: Vec<RoomCategory> =
            allocation.groups[&1].iter().map(|u| u.category).collect();
        assert_eq!(categories, vec![RoomCategory::Tripla, RoomCategory::Singola]);
    }

    #[test]
    fn test_canonical_category_order() {
        let people = vec![
            participant("Anna Bianchi", Some(1), RoomCategory::Tripla),
            participant("Carlo Conti", Some(1), RoomCategory::Singola),
            participant("Dario Durante", Some(1), RoomCategory::Tripla),
        ];
        let allocator = RoomAllocator::new(AllocOptions {
            category_order: CategoryOrder::Canonical,
        });
        let allocation = allocator.allocate(&people);

        let categories: Vec<RoomCategory> =
            allocation.groups[&1].iter().map(|u| u.category).collect();
        assert_eq!(categories, vec![RoomCategory::Singola, RoomCategory::Tripla]);
    }

    #[test]
    fn test_groups_emit_in_ascending_order() {
        let people = vec![
            participant("Anna Bianchi", Some(7), RoomCategory::Singola),
            participant("Carlo Conti", Some(2), RoomCategory::Singola),
            participant("Paolo Verdi", None, RoomCategory::Singola),
            participant("Dario Durante", Some(5), RoomCategory::Singola),
        ];
        let allocation = allocate(&people);

        let order: Vec<Option<i32>> = allocation.units().map(|u| u.group).collect();
        assert_eq!(order, vec![Some(2), Some(5), Some(7), None]);

        let indices: Vec<u32> = allocation.units().map(|u| u.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_negative_group_number_accepted() {
        // Upstream validates; here a negative number only affects order.
        let people = vec![
            participant("Anna Bianchi", Some(1), RoomCategory::Singola),
            participant("Carlo Conti", Some(-3), RoomCategory::Singola),
        ];
        let allocation = allocate(&people);

        let order: Vec<Option<i32>> = allocation.units().map(|u| u.group).collect();
        assert_eq!(order, vec![Some(-3), Some(1)]);
    }

    #[test]
    fn test_same_surname_keeps_fetch_order() {
        let first = participant("Anna Rossi", Some(1), RoomCategory::Doppia);
        let second = participant("Bruno Rossi", Some(1), RoomCategory::Doppia);
        let (first_id, second_id) = (first.id, second.id);
        let allocation = allocate(&[first, second]);

        let unit = &allocation.groups[&1][0];
        assert_eq!(unit.occupants[0].id, first_id);
        assert_eq!(unit.occupants[1].id, second_id);
    }

    #[test]
    fn test_mixed_groups_and_categories() {
        let people = vec![
            participant("Anna Bianchi", Some(2), RoomCategory::Matrimoniale),
            participant("Bruno Bianchi", Some(2), RoomCategory::Matrimoniale),
            participant("Carlo Conti", Some(1), RoomCategory::Quadrupla),
            participant("Dario Durante", Some(1), RoomCategory::Quadrupla),
            participant("Elena Ferri", Some(1), RoomCategory::Quadrupla),
            participant("Fabio Fontana", Some(1), RoomCategory::Quadrupla),
            participant("Giulia Gallo", Some(1), RoomCategory::Quadrupla),
            participant("Paolo Verdi", None, RoomCategory::Altro),
        ];
        let allocation = allocate(&people);

        // Group 1: one full quadrupla plus a partial one.
        assert_eq!(allocation.groups[&1].len(), 2);
        assert_eq!(allocation.groups[&1][0].occupants.len(), 4);
        assert_eq!(allocation.groups[&1][1].occupants.len(), 1);
        // Group 2: one matrimoniale.
        assert_eq!(allocation.groups[&2].len(), 1);
        // One loner at the end.
        assert_eq!(allocation.ungrouped.len(), 1);
        assert_eq!(allocation.occupant_count(), people.len());
    }
}
