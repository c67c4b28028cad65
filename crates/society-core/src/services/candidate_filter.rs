// ============================================================================
// Society Core - Candidate Filtering
// File: crates/society-core/src/services/candidate_filter.rs
// Description: Narrow the member directory to a selectable pool for bulk
//              assignment, and track the selection across filter views
// ============================================================================

use std::collections::{BTreeSet, HashMap};

use society_shared::EntityId;

use crate::domain::{House, Member};

/// Conjunctive filter over the member directory. Eligibility by status
/// (live, or legacy records with no status) is always applied; the other
/// predicates are optional.
#[derive(Debug, Clone, Default)]
pub struct CandidateFilter {
    /// Case-insensitive substring on name, surname, or member id.
    pub search: Option<String>,
    pub area: Option<EntityId>,
    /// Tri-state: `None` for all, `Some(true)` guardians only,
    /// `Some(false)` non-guardians only.
    pub guardian: Option<bool>,
}

impl CandidateFilter {
    pub fn matches(&self, member: &Member, houses: &HashMap<EntityId, House>) -> bool {
        if !member.is_assignable() {
            return false;
        }

        if let Some(term) = &self.search {
            if !term.is_empty() && !member.matches_search(term) {
                return false;
            }
        }

        if let Some(area_id) = self.area {
            // A member without resolvable household/area data is excluded
            // while an area filter is active.
            let member_area = member
                .house
                .and_then(|home_id| houses.get(&home_id))
                .and_then(|house| house.area);
            if member_area != Some(area_id) {
                return false;
            }
        }

        if let Some(wanted) = self.guardian {
            if member.is_guardian != wanted {
                return false;
            }
        }

        true
    }

    pub fn apply<'a>(
        &self,
        members: &'a [Member],
        houses: &HashMap<EntityId, House>,
    ) -> Vec<&'a Member> {
        members.iter().filter(|m| self.matches(m, houses)).collect()
    }
}

/// Member selection for bulk assignment. The selection is a superset the
/// filter view adds to: changing filters never silently drops members that
/// were selected under a different view.
#[derive(Debug, Clone, Default)]
pub struct BulkSelection {
    selected: BTreeSet<EntityId>,
    select_all_engaged: bool,
}

impl BulkSelection {
    /// Toggle one member. Members already obligated for the target
    /// subcollection cannot be selected.
    pub fn toggle_member(&mut self, member_id: EntityId, existing: &BTreeSet<EntityId>) {
        if existing.contains(&member_id) {
            return;
        }
        if !self.selected.remove(&member_id) {
            self.selected.insert(member_id);
        }
    }

    /// Toggle "select all filtered": on engage, add every candidate in the
    /// current filter view except already-obligated members; on disengage,
    /// remove only the members of that view, leaving selections made
    /// outside it intact.
    pub fn toggle_all_filtered(&mut self, filtered: &[&Member], existing: &BTreeSet<EntityId>) {
        if self.select_all_engaged {
            for member in filtered {
                self.selected.remove(&member.member_id);
            }
        } else {
            for member in filtered {
                if !existing.contains(&member.member_id) {
                    self.selected.insert(member.member_id);
                }
            }
        }
        self.select_all_engaged = !self.select_all_engaged;
    }

    pub fn contains(&self, member_id: EntityId) -> bool {
        self.selected.contains(&member_id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn ids(&self) -> &BTreeSet<EntityId> {
        &self.selected
    }

    pub fn into_ids(self) -> BTreeSet<EntityId> {
        self.selected
    }
}
