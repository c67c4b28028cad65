//! Member directory views: list filtering, household lookups, area
//! summaries, and page slicing.

use std::collections::HashMap;

use society_shared::{EntityId, Pagination};

use crate::domain::{House, Member, MemberStatus};

/// Directory list filter. Unlike bulk-assignment eligibility, the status
/// predicate here is an explicit exact match chosen by the user.
#[derive(Debug, Clone, Default)]
pub struct MemberQuery {
    pub search: Option<String>,
    pub area: Option<EntityId>,
    pub status: Option<MemberStatus>,
    pub guardian: Option<bool>,
}

impl MemberQuery {
    pub fn matches(&self, member: &Member, houses: &HashMap<EntityId, House>) -> bool {
        if let Some(term) = &self.search {
            if !term.is_empty() && !member.matches_search(term) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if member.status != Some(status) {
                return false;
            }
        }
        if let Some(area_id) = self.area {
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

/// Derived per-area counters shown on the areas list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaSummary {
    pub area_id: EntityId,
    pub total_houses: usize,
    pub total_live_members: usize,
}

pub fn area_summary(area_id: EntityId, houses: &[House], members: &[Member]) -> AreaSummary {
    let area_house_ids: Vec<EntityId> = houses
        .iter()
        .filter(|h| h.area == Some(area_id))
        .map(|h| h.home_id)
        .collect();
    let total_live_members = members
        .iter()
        .filter(|m| m.is_live())
        .filter(|m| m.house.map_or(false, |h| area_house_ids.contains(&h)))
        .count();
    AreaSummary {
        area_id,
        total_houses: area_house_ids.len(),
        total_live_members,
    }
}

pub fn household_members<'a>(home_id: EntityId, members: &'a [Member]) -> Vec<&'a Member> {
    members
        .iter()
        .filter(|m| m.house == Some(home_id))
        .collect()
}

/// First guardian found for the house. Guardian uniqueness per household
/// is not enforced anywhere; this lookup is display-only.
pub fn guardian_of<'a>(home_id: EntityId, members: &'a [Member]) -> Option<&'a Member> {
    members
        .iter()
        .find(|m| m.house == Some(home_id) && m.is_guardian)
}

/// Slice one page out of an already-filtered list. Pages are 1-based; an
/// out-of-range page yields an empty slice.
pub fn paginate<T>(items: &[T], pagination: Pagination) -> &[T] {
    let per_page = pagination.per_page.max(1) as usize;
    let page = pagination.page.max(1) as usize;
    let start = (page - 1) * per_page;
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

pub fn total_pages(len: usize, per_page: u32) -> u32 {
    let per_page = per_page.max(1) as usize;
    (len.div_ceil(per_page)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(
        id: EntityId,
        name: &str,
        house: Option<EntityId>,
        status: Option<MemberStatus>,
        guardian: bool,
    ) -> Member {
        Member {
            member_id: id,
            name: name.to_string(),
            surname: String::new(),
            status,
            is_guardian: guardian,
            house,
            phone: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn house(home_id: EntityId, area: Option<EntityId>) -> House {
        House {
            home_id,
            house_name: format!("House {}", home_id),
            family_name: String::new(),
            area,
            location_name: None,
            address: None,
        }
    }

    #[test]
    fn test_status_filter_is_exact_in_directory_view() {
        let members = vec![
            member(1, "Anu", None, Some(MemberStatus::Live), false),
            member(2, "Biju", None, None, false),
            member(3, "Cleo", None, Some(MemberStatus::Dead), false),
        ];
        let query = MemberQuery {
            status: Some(MemberStatus::Live),
            ..Default::default()
        };
        let ids: Vec<_> = query
            .apply(&members, &HashMap::new())
            .iter()
            .map(|m| m.member_id)
            .collect();
        // The legacy no-status record does NOT match an explicit filter.
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_area_summary_counts_houses_and_live_members() {
        let houses = vec![house(1, Some(10)), house(2, Some(10)), house(3, Some(20))];
        let members = vec![
            member(1, "Anu", Some(1), Some(MemberStatus::Live), true),
            member(2, "Biju", Some(2), Some(MemberStatus::Live), false),
            member(3, "Cleo", Some(2), Some(MemberStatus::Dead), false),
            member(4, "Devan", Some(3), Some(MemberStatus::Live), false),
            member(5, "Esha", None, Some(MemberStatus::Live), false),
        ];

        let summary = area_summary(10, &houses, &members);
        assert_eq!(summary.total_houses, 2);
        assert_eq!(summary.total_live_members, 2);

        let empty = area_summary(99, &houses, &members);
        assert_eq!(empty.total_houses, 0);
        assert_eq!(empty.total_live_members, 0);
    }

    #[test]
    fn test_guardian_lookup_returns_first_found() {
        // Two guardians for one house: not rejected, first one wins.
        let members = vec![
            member(1, "Anu", Some(1), Some(MemberStatus::Live), true),
            member(2, "Biju", Some(1), Some(MemberStatus::Live), true),
            member(3, "Cleo", Some(2), Some(MemberStatus::Live), false),
        ];
        assert_eq!(guardian_of(1, &members).unwrap().member_id, 1);
        assert!(guardian_of(2, &members).is_none());
    }

    #[test]
    fn test_pagination_slicing() {
        let items: Vec<i32> = (1..=25).collect();

        let page1 = paginate(&items, Pagination { page: 1, per_page: 10 });
        assert_eq!(page1.len(), 10);
        assert_eq!(page1[0], 1);

        let page3 = paginate(&items, Pagination { page: 3, per_page: 10 });
        assert_eq!(page3.to_vec(), vec![21, 22, 23, 24, 25]);

        let beyond = paginate(&items, Pagination { page: 4, per_page: 10 });
        assert!(beyond.is_empty());

        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
    }
}
